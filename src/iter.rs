use core::iter::{Flatten, FusedIterator};
use std::collections::vec_deque;

use crate::{ChunkedList, FixedChunk, List};

/// An iterator over the elements of a ChunkedList.
///
/// This struct is created by ChunkedList::iter().
pub struct Iter<'a, T> {
    delegate: Flatten<vec_deque::Iter<'a, FixedChunk<T>>>,
    len: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
            len: self.len,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a ChunkedList<T>) -> Self {
        Self {
            delegate: list.chunk_sequence().iter().flatten(),
            len: list.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.delegate.next()?;
        self.len -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn count(self) -> usize {
        self.len
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.delegate.next_back()?;
        self.len -= 1;
        Some(value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a ChunkedList.
///
/// This struct is created by ChunkedList::iter_mut().
pub struct IterMut<'a, T> {
    delegate: Flatten<vec_deque::IterMut<'a, FixedChunk<T>>>,
    len: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn from_list(list: &'a mut ChunkedList<T>) -> Self {
        let len = list.len();

        Self {
            delegate: list.chunk_sequence_mut().iter_mut().flatten(),
            len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.delegate.next()?;
        self.len -= 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn count(self) -> usize {
        self.len
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.delegate.next_back()?;
        self.len -= 1;
        Some(value)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
