use core::iter::FusedIterator;
use std::collections::{VecDeque, vec_deque};
use std::iter::Flatten;

use crate::{ChunkedList, FixedChunk};

/// An owning iterator over the elements of a ChunkedList.
///
/// This struct is created by ChunkedList::into_iter().
pub struct IntoIter<T> {
    delegate: Flatten<vec_deque::IntoIter<FixedChunk<T>>>,
}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        Self {
            delegate: self.delegate.clone(),
        }
    }
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            delegate: VecDeque::new().into_iter().flatten(),
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: ChunkedList<T>) -> Self {
        Self {
            delegate: list.into_chunk_sequence().into_iter().flatten(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.delegate.size_hint()
    }

    fn last(self) -> Option<Self::Item> {
        self.delegate.last()
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.delegate.count()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth(n)
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.fold(init, f)
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth_back(n)
    }

    fn rfold<B, F>(self, init: B, f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        self.delegate.rfold(init, f)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> core::fmt::Debug for IntoIter<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.delegate)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use crate::{ChunkedList, List};

    use super::IntoIter;

    fn list_of(values: &[usize], chunk_capacity: usize) -> ChunkedList<usize> {
        let mut list = ChunkedList::with_chunk_capacity(chunk_capacity).unwrap();
        list.extend(values);
        list
    }

    #[test]
    fn test_default_iterator_yields_nothing() {
        let mut sut: IntoIter<i32> = Default::default();
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[test]
    fn test_into_iter_forward_and_backward() {
        let seed = [0, 1, 2, 3, 4];

        let list = list_of(&seed, 2);
        assert!(seed.into_iter().eq(list.into_iter()));

        let list = list_of(&seed, 2);
        assert!(seed.into_iter().rev().eq(list.into_iter().rev()));

        let list = list_of(&[], 2);
        assert_eq!(list.into_iter().next(), None);
    }

    #[test]
    fn test_into_iter_after_structural_edits() {
        let mut list = list_of(&[0, 1, 2, 3], 2);
        list.insert(1, 9).unwrap();
        list.remove(3).unwrap();
        list.push_front(7).unwrap();

        let mut sut = list.into_iter();
        assert_eq!(sut.next(), Some(7));
        assert_eq!(sut.next_back(), Some(3));
        assert_eq!(sut.nth(1), Some(9));
        assert_eq!(sut.clone().count(), 1);
        assert_eq!(sut.next(), Some(1));
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
    }

    #[quickcheck]
    fn into_iter_agrees_with_vec(seed: Vec<usize>) {
        for chunk_capacity in [1, 2, 3, 4, 8, 16] {
            let list = list_of(&seed, chunk_capacity);

            assert_eq!(list.clone().into_iter().count(), seed.len());
            assert_eq!(
                list.clone().into_iter().fold(Vec::new(), |mut acc, v| {
                    acc.push(v);
                    acc
                }),
                seed
            );
            assert!(list.clone().into_iter().rev().eq(seed.iter().copied().rev()));
            assert_eq!(list.into_iter().collect::<ChunkedList<_>>(), seed.as_slice());
        }
    }
}
