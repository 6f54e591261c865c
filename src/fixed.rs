use std::num::NonZeroUsize;

use crate::{List, ListError};

/// A list backed by a single array that never grows past the capacity it was created with.
///
/// Insertions and removals shift the elements that follow the affected position,
/// so every operation is `O(capacity)` in the worst case and `O(1)` at the back.
///
/// `FixedChunk` is also the building block of [`ChunkedList`](crate::ChunkedList):
/// each chunk of a chunked list is one `FixedChunk`.
///
/// # Example
/// ```rust
/// use std::num::NonZeroUsize;
/// use chunky_list::{FixedChunk, List, ListError};
///
/// let mut chunk = FixedChunk::new(NonZeroUsize::new(2).unwrap());
/// chunk.push_back(1).unwrap();
/// chunk.push_front(0).unwrap();
///
/// assert!(chunk.is_full());
/// assert_eq!(chunk.push_back(2), Err(ListError::CapacityExceeded { capacity: 2 }));
/// assert_eq!(chunk.as_slice(), &[0, 1]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FixedChunk<T> {
    capacity: usize,
    data: Vec<T>,
}

impl<T> FixedChunk<T> {
    /// Creates an empty chunk able to hold up to `capacity` elements.
    pub fn new(capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();

        Self {
            capacity,
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.len();
        self.data
            .get_mut(index)
            .ok_or(ListError::out_of_range(index, len))
    }

    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        self.data.first_mut().ok_or(ListError::Empty)
    }

    pub fn back_mut(&mut self) -> Result<&mut T, ListError> {
        self.data.last_mut().ok_or(ListError::Empty)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Moves elements from `iter` into the back of the chunk until it is full.
    pub(crate) fn extend_to_capacity<I: Iterator<Item = T>>(&mut self, iter: &mut I) {
        let room = self.capacity - self.data.len();
        self.data.extend(iter.take(room));
    }

    fn check_exclusive(&self, index: usize) -> Result<(), ListError> {
        if self.data.is_empty() {
            return Err(ListError::Empty);
        }

        if index >= self.data.len() {
            return Err(ListError::out_of_range(index, self.data.len()));
        }

        Ok(())
    }
}

impl<T> List<T> for FixedChunk<T> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    fn front(&self) -> Result<&T, ListError> {
        self.data.first().ok_or(ListError::Empty)
    }

    fn back(&self) -> Result<&T, ListError> {
        self.data.last().ok_or(ListError::Empty)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_exclusive(index)?;
        Ok(&self.data[index])
    }

    fn set(&mut self, index: usize, value: T) -> Result<(), ListError> {
        self.check_exclusive(index)?;
        self.data[index] = value;
        Ok(())
    }

    #[inline]
    fn push_front(&mut self, value: T) -> Result<(), ListError> {
        self.insert(0, value)
    }

    #[inline]
    fn push_back(&mut self, value: T) -> Result<(), ListError> {
        self.insert(self.len(), value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        if index > self.len() {
            return Err(ListError::out_of_range(index, self.len()));
        }

        if self.is_full() {
            return Err(ListError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        // Shifts `[index, len)` one slot to the right.
        self.data.insert(index, value);
        debug_assert!(self.data.len() <= self.capacity);
        Ok(())
    }

    fn pop_front(&mut self) -> Result<T, ListError> {
        self.remove(0)
    }

    fn pop_back(&mut self) -> Result<T, ListError> {
        self.data.pop().ok_or(ListError::Empty)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        self.check_exclusive(index)?;
        Ok(self.data.remove(index))
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FixedChunk<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T> IntoIterator for FixedChunk<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FixedChunk<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut FixedChunk<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use crate::{FixedChunk, List, ListError};

    fn chunk(capacity: usize) -> FixedChunk<i64> {
        FixedChunk::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn fixed_insert_puts_elements_in_the_correct_positions() {
        let mut sut = chunk(6);
        assert_eq!(sut.len(), 0);
        assert!(sut.is_empty());

        sut.insert(0, 10).unwrap();
        assert_eq!(sut.as_slice(), &[10]);

        sut.insert(1, 15).unwrap();
        assert_eq!(sut.as_slice(), &[10, 15]);

        sut.insert(0, 5).unwrap();
        assert_eq!(sut.as_slice(), &[5, 10, 15]);

        sut.insert(3, 20).unwrap();
        assert_eq!(sut.as_slice(), &[5, 10, 15, 20]);

        sut.insert(2, 13).unwrap();
        assert_eq!(sut.as_slice(), &[5, 10, 13, 15, 20]);

        sut.insert(4, 17).unwrap();
        assert_eq!(sut.as_slice(), &[5, 10, 13, 15, 17, 20]);
        assert!(sut.is_full());

        assert_eq!(
            sut.insert(6, 100),
            Err(ListError::CapacityExceeded { capacity: 6 })
        );
        assert_eq!(sut.as_slice(), &[5, 10, 13, 15, 17, 20]);
    }

    #[test]
    fn fixed_insert_rejects_index_out_of_bounds() {
        let mut sut = chunk(6);
        assert_eq!(
            sut.insert(usize::MAX, 100),
            Err(ListError::out_of_range(usize::MAX, 0))
        );

        sut.push_back(1).unwrap();
        assert_eq!(sut.insert(2, 100), Err(ListError::out_of_range(2, 1)));
        assert_eq!(sut.as_slice(), &[1]);
    }

    #[test]
    fn fixed_index_check_comes_before_capacity_check() {
        let mut sut = chunk(1);
        sut.push_back(1).unwrap();
        assert_eq!(sut.insert(5, 2), Err(ListError::out_of_range(5, 1)));
    }

    #[test]
    fn fixed_remove_removes_correct_elements() {
        let mut sut = chunk(6);
        for i in 0..6 {
            sut.insert(i, i as i64).unwrap();
        }

        assert_eq!(sut.remove(2), Ok(2));
        assert_eq!(sut.as_slice(), &[0, 1, 3, 4, 5]);

        assert_eq!(sut.remove(3), Ok(4));
        assert_eq!(sut.as_slice(), &[0, 1, 3, 5]);

        assert_eq!(sut.remove(1), Ok(1));
        assert_eq!(sut.as_slice(), &[0, 3, 5]);

        assert_eq!(sut.remove(0), Ok(0));
        assert_eq!(sut.as_slice(), &[3, 5]);

        assert_eq!(sut.remove(2), Err(ListError::out_of_range(2, 2)));

        assert_eq!(sut.remove(1), Ok(5));
        assert_eq!(sut.remove(0), Ok(3));
        assert_eq!(sut.len(), 0);

        assert_eq!(sut.remove(0), Err(ListError::Empty));
    }

    #[test]
    fn fixed_front_and_back_operations() {
        let mut sut = chunk(3);
        sut.push_back(2).unwrap();
        sut.push_front(1).unwrap();
        sut.push_back(3).unwrap();

        assert_eq!(sut.front(), Ok(&1));
        assert_eq!(sut.back(), Ok(&3));

        *sut.front_mut().unwrap() = 10;
        *sut.back_mut().unwrap() = 30;

        assert_eq!(sut.pop_front(), Ok(10));
        assert_eq!(sut.pop_back(), Ok(30));
        assert_eq!(sut.pop_back(), Ok(2));
        assert!(sut.is_empty());
    }

    #[test]
    fn fixed_empty_operations_fail_with_empty() {
        let mut sut = chunk(6);
        assert_eq!(sut.pop_front(), Err(ListError::Empty));
        assert_eq!(sut.pop_back(), Err(ListError::Empty));
        assert_eq!(sut.front(), Err(ListError::Empty));
        assert_eq!(sut.back(), Err(ListError::Empty));
        assert_eq!(sut.get(0), Err(ListError::Empty));
        assert_eq!(sut.set(0, 1), Err(ListError::Empty));
        assert!(sut.is_empty());
    }

    #[test]
    fn fixed_get_and_set_check_bounds() {
        let mut sut = chunk(4);
        sut.push_back(1).unwrap();
        sut.push_back(2).unwrap();

        assert_eq!(sut.get(1), Ok(&2));
        assert_eq!(sut.get(2), Err(ListError::out_of_range(2, 2)));

        sut.set(0, 42).unwrap();
        assert_eq!(sut.set(2, 0), Err(ListError::out_of_range(2, 2)));
        assert_eq!(sut.as_slice(), &[42, 2]);

        *sut.get_mut(1).unwrap() += 1;
        assert_eq!(sut.iter().copied().collect::<Vec<_>>(), vec![42, 3]);
        assert!(sut.get_mut(2).is_err());
    }
}
