use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use tracing::trace;

use crate::into_iter::IntoIter;
use crate::iter::{Iter, IterMut};
use crate::sequence::ChunkSequence;
use crate::{FixedChunk, List, ListError};

/// Chunk capacity used by [`ChunkedList::default`] and [`FromIterator`].
pub const DEFAULT_CHUNK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(16) {
    Some(capacity) => capacity,
    None => panic!("default chunk capacity must be non-zero"),
};

/// A list that stores its elements in a sequence of fixed-capacity chunks.
///
/// # Features
/// - **Chunked Storage**: each chunk holds up to `chunk_capacity` elements, so growing the
///   list allocates one chunk at a time instead of one node per element.
/// - **Bounded Rebalancing**: an insertion into a full chunk moves at most one element
///   into the following chunk, or spawns a new single-element chunk when that one is full too.
///   Chunks are never split in half nor repacked after removals.
///
/// Locating a logical index scans the chunk fill-counts from the front, so indexed
/// operations cost `O(chunks + chunk_capacity)`.
///
/// # Example
/// ```rust
/// use std::num::NonZeroUsize;
/// use chunky_list::{ChunkedList, List};
///
/// let mut list = ChunkedList::new(NonZeroUsize::new(2).unwrap());
/// list.push_back(1).unwrap();
/// list.push_back(2).unwrap();
/// list.push_back(3).unwrap();
/// assert_eq!(format!("{list:?}"), "[[1, 2], [3]]");
///
/// list.insert(1, 9).unwrap();
/// assert_eq!(format!("{list:?}"), "[[1, 9], [2, 3]]");
///
/// assert_eq!(list.remove(0), Ok(1));
/// assert_eq!(list, [9, 2, 3]);
/// ```
#[derive(Clone)]
pub struct ChunkedList<T> {
    chunks: ChunkSequence<T>,
    chunk_capacity: NonZeroUsize,
    len: usize,
}

impl<T> ChunkedList<T> {
    /// Creates an empty list whose chunks hold up to `chunk_capacity` elements.
    ///
    /// No chunk is allocated until the first element is added.
    pub const fn new(chunk_capacity: NonZeroUsize) -> Self {
        Self {
            chunks: ChunkSequence::new(),
            chunk_capacity,
            len: 0,
        }
    }

    /// Like [`ChunkedList::new`] but takes a plain `usize`.
    ///
    /// # Errors
    /// Returns [`ListError::ZeroCapacity`] if `chunk_capacity` is zero.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::{ChunkedList, ListError};
    ///
    /// assert!(ChunkedList::<i32>::with_chunk_capacity(4).is_ok());
    /// assert_eq!(
    ///     ChunkedList::<i32>::with_chunk_capacity(0).err(),
    ///     Some(ListError::ZeroCapacity)
    /// );
    /// ```
    pub fn with_chunk_capacity(chunk_capacity: usize) -> Result<Self, ListError> {
        NonZeroUsize::new(chunk_capacity)
            .map(Self::new)
            .ok_or(ListError::ZeroCapacity)
    }

    #[inline]
    pub const fn chunk_capacity(&self) -> usize {
        self.chunk_capacity.get()
    }

    /// Returns the number of chunks currently allocated.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Returns the contents of every chunk, in order.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::{ChunkedList, List};
    ///
    /// let mut list = ChunkedList::with_chunk_capacity(1).unwrap();
    /// list.extend([1, 2, 3]);
    /// list.remove(1).unwrap();
    ///
    /// assert_eq!(list.chunks().collect::<Vec<_>>(), [&[1][..], &[3][..]]);
    /// ```
    pub fn chunks(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.chunks.iter().map(FixedChunk::as_slice)
    }

    /// Returns the fill-count of every chunk, in order.
    pub fn chunk_lens(&self) -> impl Iterator<Item = usize> + '_ {
        self.chunks.iter().map(|chunk| chunk.len())
    }

    /// Removes all elements and releases every chunk.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.len = 0;
    }

    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        self.chunks
            .front_mut()
            .ok_or(ListError::Empty)
            .and_then(FixedChunk::front_mut)
    }

    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        self.chunks
            .back_mut()
            .ok_or(ListError::Empty)
            .and_then(FixedChunk::back_mut)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let SearchTarget {
            chunk_index,
            target_index,
        } = self.locate(index)?;

        self.chunks[chunk_index].get_mut(target_index)
    }

    /// Provides an iterator over list's elements.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::ChunkedList;
    ///
    /// let list: ChunkedList<_> = [0, 1, 2].into_iter().collect();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    /// Provides a mutable iterator over list's elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::from_list(self)
    }

    pub(crate) fn chunk_sequence(&self) -> &ChunkSequence<T> {
        &self.chunks
    }

    pub(crate) fn chunk_sequence_mut(&mut self) -> &mut ChunkSequence<T> {
        &mut self.chunks
    }

    pub(crate) fn into_chunk_sequence(self) -> ChunkSequence<T> {
        self.chunks
    }

    fn make_chunk(&self) -> FixedChunk<T> {
        FixedChunk::new(self.chunk_capacity)
    }

    /// Places `value` in a chunk of its own or in the free slot at the front of
    /// the chunk following `chunk_index`.
    fn spill(&mut self, chunk_index: usize, value: T) -> Result<(), ListError> {
        let next_index = chunk_index + 1;

        match self.chunks.get_mut(next_index) {
            Some(next) if !next.is_full() => {
                next.push_front(value)?;
                trace!(chunk = next_index, "migrated overflow into next chunk");
            }
            _ => {
                let mut chunk = self.make_chunk();
                chunk.push_back(value)?;
                self.chunks.insert(next_index, chunk);
                trace!(chunk = next_index, "spawned singleton chunk");
            }
        }

        Ok(())
    }

    fn raw_insert(
        &mut self,
        chunk_index: usize,
        target_index: usize,
        value: T,
    ) -> Result<(), ListError> {
        let chunk = &mut self.chunks[chunk_index];
        debug_assert!(target_index <= chunk.len());

        if !chunk.is_full() {
            chunk.insert(target_index, value)?;
        } else if target_index == chunk.len() {
            self.spill(chunk_index, value)?;
        } else {
            let spilled = chunk.pop_back()?;
            chunk.insert(target_index, value)?;
            self.spill(chunk_index, spilled)?;
        }

        self.len += 1;
        Ok(())
    }

    /// Chunk owning the element at `index`, where `index < len`.
    fn search_target(&self, mut index: usize) -> Option<SearchTarget> {
        if index >= self.len {
            return None;
        }

        self.chunks
            .iter()
            .position(|chunk| {
                if index < chunk.len() {
                    return true;
                }

                index -= chunk.len();
                false
            })
            .map(|chunk_index| SearchTarget {
                chunk_index,
                target_index: index,
            })
    }

    /// Chunk receiving an insertion at `index`, where `index < len`.
    ///
    /// An index sitting on a chunk boundary resolves to the tail of the earlier chunk.
    fn search_insert_target(&self, mut index: usize) -> Option<SearchTarget> {
        if index >= self.len {
            return None;
        }

        self.chunks
            .iter()
            .position(|chunk| {
                if index <= chunk.len() {
                    return true;
                }

                index -= chunk.len();
                false
            })
            .map(|chunk_index| SearchTarget {
                chunk_index,
                target_index: index,
            })
    }

    fn locate(&self, index: usize) -> Result<SearchTarget, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        self.search_target(index)
            .ok_or(ListError::out_of_range(index, self.len))
    }

    fn debug_assert_invariants(&self) {
        debug_assert!(self.chunks.iter().all(|chunk| !chunk.is_empty()));
        debug_assert!(
            self.chunks
                .iter()
                .all(|chunk| chunk.len() <= self.chunk_capacity())
        );
        debug_assert_eq!(self.chunk_lens().sum::<usize>(), self.len);
    }
}

#[derive(Debug, Default)]
struct SearchTarget {
    chunk_index: usize,
    target_index: usize,
}

impl<T> List<T> for ChunkedList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    fn front(&self) -> Result<&T, ListError> {
        self.chunks
            .front()
            .ok_or(ListError::Empty)
            .and_then(|chunk| chunk.front())
    }

    fn back(&self) -> Result<&T, ListError> {
        self.chunks
            .back()
            .ok_or(ListError::Empty)
            .and_then(|chunk| chunk.back())
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        let SearchTarget {
            chunk_index,
            target_index,
        } = self.locate(index)?;

        self.chunks
            .get(chunk_index)
            .ok_or(ListError::out_of_range(index, self.len))
            .and_then(|chunk| chunk.get(target_index))
    }

    fn set(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let SearchTarget {
            chunk_index,
            target_index,
        } = self.locate(index)?;

        self.chunks[chunk_index].set(target_index, value)
    }

    fn push_front(&mut self, value: T) -> Result<(), ListError> {
        match self.chunks.front_mut() {
            Some(chunk) if !chunk.is_full() => chunk.push_front(value)?,
            _ => {
                let mut chunk = self.make_chunk();
                chunk.push_front(value)?;
                self.chunks.push_front(chunk);
                trace!(chunks = self.chunks.len(), "allocated front chunk");
            }
        }

        self.len += 1;
        self.debug_assert_invariants();
        Ok(())
    }

    fn push_back(&mut self, value: T) -> Result<(), ListError> {
        match self.chunks.back_mut() {
            Some(chunk) if !chunk.is_full() => chunk.push_back(value)?,
            _ => {
                let mut chunk = self.make_chunk();
                chunk.push_back(value)?;
                self.chunks.push_back(chunk);
                trace!(chunks = self.chunks.len(), "allocated back chunk");
            }
        }

        self.len += 1;
        self.debug_assert_invariants();
        Ok(())
    }

    /// Inserts `value` at `index`, shifting subsequent elements to the right.
    ///
    /// `0` and `len` behave exactly like [`List::push_front`] and [`List::push_back`].
    /// Otherwise, when the chunk owning `index` is full, its overflow goes to the
    /// front of the next chunk if that one has a free slot, or into a new
    /// single-element chunk inserted right after it.
    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::out_of_range(index, self.len));
        }

        if index == 0 {
            return self.push_front(value);
        }

        if index == self.len {
            return self.push_back(value);
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self
            .search_insert_target(index)
            .ok_or(ListError::out_of_range(index, self.len))?;

        self.raw_insert(chunk_index, target_index, value)?;
        self.debug_assert_invariants();
        Ok(())
    }

    fn pop_front(&mut self) -> Result<T, ListError> {
        let chunk = self.chunks.front_mut().ok_or(ListError::Empty)?;

        let value = chunk.pop_front()?;
        if chunk.is_empty() {
            self.chunks.pop_front();
            trace!(chunks = self.chunks.len(), "released front chunk");
        }

        self.len -= 1;
        self.debug_assert_invariants();
        Ok(value)
    }

    fn pop_back(&mut self) -> Result<T, ListError> {
        let chunk = self.chunks.back_mut().ok_or(ListError::Empty)?;

        let value = chunk.pop_back()?;
        if chunk.is_empty() {
            self.chunks.pop_back();
            trace!(chunks = self.chunks.len(), "released back chunk");
        }

        self.len -= 1;
        self.debug_assert_invariants();
        Ok(value)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let SearchTarget {
            chunk_index,
            target_index,
        } = self.locate(index)?;

        if index == 0 {
            return self.pop_front();
        }

        if index == self.len - 1 {
            return self.pop_back();
        }

        let chunk = &mut self.chunks[chunk_index];
        let value = chunk.remove(target_index)?;
        if chunk.is_empty() {
            self.chunks.remove(chunk_index);
            trace!(chunk = chunk_index, "released emptied chunk");
        }

        self.len -= 1;
        self.debug_assert_invariants();
        Ok(value)
    }
}

impl<T> Default for ChunkedList<T> {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_CAPACITY)
    }
}

impl<T, const M: usize> From<[T; M]> for ChunkedList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for ChunkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::default();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for ChunkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = &mut iter.into_iter().peekable();

        if let Some(chunk) = self.chunks.back_mut() {
            let before = chunk.len();
            chunk.extend_to_capacity(iter);
            self.len += chunk.len() - before;
        }

        while iter.peek().is_some() {
            let mut chunk = self.make_chunk();
            chunk.extend_to_capacity(iter);

            self.len += chunk.len();
            self.chunks.push_back(chunk);
        }

        self.debug_assert_invariants();
    }
}

impl<'a, T> Extend<&'a T> for ChunkedList<T>
where
    T: Clone,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for ChunkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> PartialEq<&[T]> for ChunkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> PartialEq<[T]> for ChunkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

/// Compares logical contents only: two lists with differently shaped chunks are equal
/// as long as they hold the same elements in the same order.
impl<T> PartialEq for ChunkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T> Eq for ChunkedList<T> where T: Eq {}

impl<T> PartialOrd for ChunkedList<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T> Ord for ChunkedList<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T> Hash for ChunkedList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T> std::fmt::Debug for ChunkedList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chunks.fmt(f)
    }
}

impl<T> IntoIterator for ChunkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a ChunkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a mut ChunkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut::from_list(self)
    }
}
