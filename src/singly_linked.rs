use crate::{List, ListError};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list holding only a pointer to its head.
///
/// Front operations are `O(1)`, everything else walks the chain.
///
/// # Example
/// ```rust
/// use chunky_list::{List, SinglyLinkedList};
///
/// let mut list = SinglyLinkedList::new();
/// list.push_back(2).unwrap();
/// list.push_front(0).unwrap();
/// list.insert(1, 1).unwrap();
///
/// assert_eq!(list.get(1), Ok(&1));
/// assert_eq!(list.pop_back(), Ok(2));
/// assert_eq!(list.pop_front(), Ok(0));
/// ```
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn front_mut(&mut self) -> Result<&mut T, ListError> {
        self.head
            .as_mut()
            .map(|node| &mut node.value)
            .ok_or(ListError::Empty)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        self.check_exclusive(index)?;

        let len = self.len;
        self.slot_mut(index)
            .and_then(Option::as_mut)
            .map(|node| &mut node.value)
            .ok_or(ListError::out_of_range(index, len))
    }

    pub fn iter(&self) -> LinkedIter<'_, T> {
        LinkedIter {
            next: self.head.as_deref(),
            len: self.len,
        }
    }

    /// The link that points to the node at `index`, where `index <= len`.
    fn slot_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut()?.next;
        }

        Some(cursor)
    }

    fn check_exclusive(&self, index: usize) -> Result<(), ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        if index >= self.len {
            return Err(ListError::out_of_range(index, self.len));
        }

        Ok(())
    }
}

fn tail_mut<T>(mut cursor: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = cursor {
        cursor = &mut node.next;
    }

    cursor
}

impl<T> List<T> for SinglyLinkedList<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn front(&self) -> Result<&T, ListError> {
        self.head
            .as_ref()
            .map(|node| &node.value)
            .ok_or(ListError::Empty)
    }

    fn back(&self) -> Result<&T, ListError> {
        self.iter().last().ok_or(ListError::Empty)
    }

    fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_exclusive(index)?;

        self.iter()
            .nth(index)
            .ok_or(ListError::out_of_range(index, self.len))
    }

    fn set(&mut self, index: usize, value: T) -> Result<(), ListError> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    fn push_front(&mut self, value: T) -> Result<(), ListError> {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    fn push_back(&mut self, value: T) -> Result<(), ListError> {
        *tail_mut(&mut self.head) = Some(Box::new(Node { value, next: None }));
        self.len += 1;
        Ok(())
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let len = self.len;
        if index > len {
            return Err(ListError::out_of_range(index, len));
        }

        let slot = self
            .slot_mut(index)
            .ok_or(ListError::out_of_range(index, len))?;

        let next = slot.take();
        *slot = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    fn pop_front(&mut self) -> Result<T, ListError> {
        let node = self.head.take().ok_or(ListError::Empty)?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    fn pop_back(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }

        self.remove(self.len - 1)
    }

    fn remove(&mut self, index: usize) -> Result<T, ListError> {
        self.check_exclusive(index)?;

        let len = self.len;
        let slot = self
            .slot_mut(index)
            .ok_or(ListError::out_of_range(index, len))?;

        let node = slot.take().ok_or(ListError::out_of_range(index, len))?;
        let Node { value, next } = *node;
        *slot = next;

        self.len -= 1;
        Ok(value)
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        // Unlinks nodes one at a time so long chains do not recurse.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut added = 0;
        let mut tail = tail_mut(&mut self.head);

        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
            added += 1;
        }

        self.len += added;
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: PartialEq> PartialEq<[T]> for SinglyLinkedList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other)
    }
}

impl<T: PartialEq, const M: usize> PartialEq<[T; M]> for SinglyLinkedList<T> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.len == M && self.iter().eq(other)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the elements of a SinglyLinkedList.
pub struct LinkedIter<'a, T> {
    next: Option<&'a Node<T>>,
    len: usize,
}

impl<'a, T> Iterator for LinkedIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.len -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for LinkedIter<'_, T> {}

impl<T> core::iter::FusedIterator for LinkedIter<'_, T> {}
