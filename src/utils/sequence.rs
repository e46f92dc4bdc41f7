//! Ordered container with constant-time insertion and removal at both ends.
//!
//! [`Sequence`] backs statement blocks, version tables and the worklists of the dominance
//! frontier walk. Plain methods operate on a sequence the caller already holds. The checked
//! associated functions ([`Sequence::add_last`], [`Sequence::add_first`],
//! [`Sequence::remove_first`], [`Sequence::remove_last`]) accept an optional container and an
//! optional element, for callers that looked either one up and may not have found it. They
//! validate the container first, then the element, then emptiness, and never mutate before
//! validation succeeds.

use std::collections::{vec_deque, VecDeque};

use crate::{Error, Result};

/// An ordered collection of owned elements.
///
/// # Examples
///
/// ```rust
/// use domssa::utils::Sequence;
///
/// let mut worklist = Sequence::new();
/// worklist.push_back(2);
/// worklist.push_back(3);
/// worklist.push_front(1);
///
/// assert_eq!(worklist.len(), 3);
/// assert_eq!(worklist.pop_front()?, 1);
/// assert_eq!(worklist.pop_back()?, 3);
/// # Ok::<(), domssa::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    items: VecDeque<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Sequence {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty sequence with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Sequence {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends an element after the current last element.
    pub fn push_back(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Inserts an element before the current first element.
    pub fn push_front(&mut self, item: T) {
        self.items.push_front(item);
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the sequence has no elements.
    pub fn pop_front(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(Error::EmptyContainer)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if the sequence has no elements.
    pub fn pop_back(&mut self) -> Result<T> {
        self.items.pop_back().ok_or(Error::EmptyContainer)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the first element, if any.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the last element, if any.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Returns the element at `index`, counting from the front.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterates the elements front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterates the elements front to back, mutably.
    pub fn iter_mut(&mut self) -> vec_deque::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Appends `item` to `container`.
    ///
    /// # Errors
    ///
    /// - [`Error::NullContainer`] if `container` is `None`
    /// - [`Error::NullElement`] if `item` is `None`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domssa::{utils::Sequence, Error};
    ///
    /// let mut block = Sequence::new();
    /// Sequence::add_last(Some(&mut block), Some('x'))?;
    /// assert_eq!(block.back(), Some(&'x'));
    ///
    /// assert_eq!(Sequence::add_last(Some(&mut block), None), Err(Error::NullElement));
    /// assert_eq!(Sequence::<char>::add_last(None, Some('y')), Err(Error::NullContainer));
    /// # Ok::<(), domssa::Error>(())
    /// ```
    pub fn add_last(container: Option<&mut Self>, item: Option<T>) -> Result<()> {
        let container = container.ok_or(Error::NullContainer)?;
        let item = item.ok_or(Error::NullElement)?;
        container.push_back(item);
        Ok(())
    }

    /// Prepends `item` to `container`.
    ///
    /// # Errors
    ///
    /// - [`Error::NullContainer`] if `container` is `None`
    /// - [`Error::NullElement`] if `item` is `None`
    pub fn add_first(container: Option<&mut Self>, item: Option<T>) -> Result<()> {
        let container = container.ok_or(Error::NullContainer)?;
        let item = item.ok_or(Error::NullElement)?;
        container.push_front(item);
        Ok(())
    }

    /// Removes and returns the first element of `container`.
    ///
    /// # Errors
    ///
    /// - [`Error::NullContainer`] if `container` is `None`
    /// - [`Error::EmptyContainer`] if it holds no elements
    pub fn remove_first(container: Option<&mut Self>) -> Result<T> {
        container.ok_or(Error::NullContainer)?.pop_front()
    }

    /// Removes and returns the last element of `container`.
    ///
    /// # Errors
    ///
    /// - [`Error::NullContainer`] if `container` is `None`
    /// - [`Error::EmptyContainer`] if it holds no elements
    pub fn remove_last(container: Option<&mut Self>) -> Result<T> {
        container.ok_or(Error::NullContainer)?.pop_back()
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns `true` if an element equal to `item` is present.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Sequence<T> {
    type Item = &'a mut T;
    type IntoIter = vec_deque::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence {
            items: VecDeque::from(items),
        }
    }
}
