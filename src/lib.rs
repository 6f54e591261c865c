//! # chunky_list
//!
//! `chunky_list` implements three linear lists behind one [`List`] contract, so that
//! their backing-storage strategies can be compared side by side:
//!
//! - [`SinglyLinkedList`]: one heap node per element, head pointer only.
//! - [`FixedChunk`]: a single array that never grows past its capacity.
//! - [`ChunkedList`]: a growable sequence of `FixedChunk`s, allocating a new chunk
//!   only when a boundary chunk is saturated.
//!
//! ## Chunked list structure
//! A `ChunkedList` never holds an empty chunk nor a chunk with more than
//! `chunk_capacity` elements, and reading its chunks in order yields the list.
//! Chunks in the middle may be partially filled after removals; they are not repacked.
//!
//! ## Example
//! ```rust
//! use chunky_list::{ChunkedList, List};
//!
//! let mut list = ChunkedList::with_chunk_capacity(6).unwrap();
//! list.push_back(2).unwrap();
//! list.push_front(0).unwrap();
//! list.insert(1, 1).unwrap();
//!
//! assert_eq!(list.front(), Ok(&0));
//! assert_eq!(list.get(1), Ok(&1));
//! assert_eq!(list.back(), Ok(&2));
//!
//! assert_eq!(list.remove(1), Ok(1));
//! assert_eq!(list.pop_back(), Ok(2));
//! assert_eq!(list.pop_front(), Ok(0));
//! ```

mod chunked;
mod error;
mod fixed;
mod into_iter;
mod iter;
mod sequence;
mod singly_linked;

pub use chunked::{ChunkedList, DEFAULT_CHUNK_CAPACITY};
pub use error::ListError;
pub use fixed::FixedChunk;
pub use into_iter::IntoIter;
pub use iter::{Iter, IterMut};
pub use singly_linked::{LinkedIter, SinglyLinkedList};

/// The linear list contract shared by every list in this crate.
///
/// Reads and removals report [`ListError::Empty`] on an empty list before checking
/// the index, and [`ListError::IndexOutOfRange`] when `index >= len`.
/// Insertions accept `index == len`. A failed call leaves the list untouched.
pub trait List<T> {
    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn front(&self) -> Result<&T, ListError>;

    fn back(&self) -> Result<&T, ListError>;

    fn get(&self, index: usize) -> Result<&T, ListError>;

    /// Replaces the element at `index`.
    fn set(&mut self, index: usize, value: T) -> Result<(), ListError>;

    fn push_front(&mut self, value: T) -> Result<(), ListError>;

    fn push_back(&mut self, value: T) -> Result<(), ListError>;

    /// Inserts `value` at `index`, shifting subsequent elements towards the back.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfRange`] if `index > len`, and
    /// [`ListError::CapacityExceeded`] if the list cannot grow.
    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError>;

    fn pop_front(&mut self) -> Result<T, ListError>;

    fn pop_back(&mut self) -> Result<T, ListError>;

    /// Removes and returns the element at `index`, shifting subsequent elements towards the front.
    fn remove(&mut self, index: usize) -> Result<T, ListError>;
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use crate::{ChunkedList, FixedChunk, List, ListError, SinglyLinkedList};

    fn exercise(sut: &mut dyn List<i32>) {
        assert_eq!(sut.pop_front(), Err(ListError::Empty));

        sut.push_back(2).unwrap();
        sut.push_front(0).unwrap();
        sut.insert(1, 1).unwrap();
        sut.insert(3, 3).unwrap();
        assert_eq!(sut.len(), 4);

        sut.set(3, 30).unwrap();
        assert_eq!(sut.get(3), Ok(&30));
        assert_eq!(sut.get(4), Err(ListError::out_of_range(4, 4)));

        assert_eq!(sut.remove(1), Ok(1));
        assert_eq!(sut.pop_back(), Ok(30));
        assert_eq!(sut.pop_front(), Ok(0));
        assert_eq!(sut.front(), Ok(&2));
        assert_eq!(sut.back(), Ok(&2));
        assert_eq!(sut.remove(0), Ok(2));
        assert!(sut.is_empty());
    }

    #[test]
    fn test_every_list_honours_the_contract() {
        exercise(&mut SinglyLinkedList::<i32>::new());
        exercise(&mut FixedChunk::<i32>::new(NonZeroUsize::new(4).unwrap()));
        exercise(&mut ChunkedList::<i32>::new(NonZeroUsize::new(1).unwrap()));
        exercise(&mut ChunkedList::<i32>::new(NonZeroUsize::new(3).unwrap()));
        exercise(&mut ChunkedList::<i32>::default());
    }
}
