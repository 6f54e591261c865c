use std::collections::{VecDeque, vec_deque};
use std::ops::{Index, IndexMut};

use crate::FixedChunk;

/// The ordered, growable container of chunks owned by a [`ChunkedList`](crate::ChunkedList).
///
/// It knows nothing about the elements inside the chunks: indices here address
/// chunks, never list elements.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct ChunkSequence<T> {
    chunks: VecDeque<FixedChunk<T>>,
}

impl<T> ChunkSequence<T> {
    pub const fn new() -> Self {
        Self {
            chunks: VecDeque::new(),
        }
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&FixedChunk<T>> {
        self.chunks.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut FixedChunk<T>> {
        self.chunks.get_mut(index)
    }

    /// Panics if `index > len`.
    #[inline]
    pub fn insert(&mut self, index: usize, chunk: FixedChunk<T>) {
        self.chunks.insert(index, chunk);
    }

    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<FixedChunk<T>> {
        self.chunks.remove(index)
    }

    #[inline]
    pub fn push_front(&mut self, chunk: FixedChunk<T>) {
        self.chunks.push_front(chunk);
    }

    #[inline]
    pub fn push_back(&mut self, chunk: FixedChunk<T>) {
        self.chunks.push_back(chunk);
    }

    #[inline]
    pub fn pop_front(&mut self) -> Option<FixedChunk<T>> {
        self.chunks.pop_front()
    }

    #[inline]
    pub fn pop_back(&mut self) -> Option<FixedChunk<T>> {
        self.chunks.pop_back()
    }

    #[inline]
    pub fn front(&self) -> Option<&FixedChunk<T>> {
        self.chunks.front()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut FixedChunk<T>> {
        self.chunks.front_mut()
    }

    #[inline]
    pub fn back(&self) -> Option<&FixedChunk<T>> {
        self.chunks.back()
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut FixedChunk<T>> {
        self.chunks.back_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.chunks.clear();
    }

    #[inline]
    pub fn iter(&self) -> vec_deque::Iter<'_, FixedChunk<T>> {
        self.chunks.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> vec_deque::IterMut<'_, FixedChunk<T>> {
        self.chunks.iter_mut()
    }
}

impl<T> IntoIterator for ChunkSequence<T> {
    type Item = FixedChunk<T>;
    type IntoIter = vec_deque::IntoIter<FixedChunk<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}

impl<T> Index<usize> for ChunkSequence<T> {
    type Output = FixedChunk<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.chunks[index]
    }
}

impl<T> IndexMut<usize> for ChunkSequence<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.chunks[index]
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ChunkSequence<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.chunks.iter()).finish()
    }
}
