use crate::list::{List, Node};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// An iterator over the elements of a `List`.
///
/// It uses a pair of nodes `start..end` to represent a half-open subrange
/// of the list, where `start` is inclusive and `end` (the ghost node) is
/// not. The iterator is fused: once `start` meets `end` it yields `None`
/// forever.
///
/// Though the `Iter` does not hold a reference to the list, it *borrows*
/// (immutably) from it through a phantom marker of `&'a List<T>`, so the
/// list cannot be mutated while the iterator is live.
///
/// # Examples
///
/// ```compile_fail
/// use ordlist::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because the list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
#[derive(Clone)]
pub struct Iter<'a, T: 'a> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    #[cfg(feature = "length")]
    len: usize,
    _marker: PhantomData<&'a List<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        let start = list.front_node();
        let end = list.ghost_node();
        let _marker = PhantomData;
        #[cfg(feature = "length")]
        let len = list.len();
        Self {
            start,
            end,
            #[cfg(feature = "length")]
            len,
            _marker,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        // SAFETY: `start..end` is always a valid range of the list.
        let mut ptr = self.start;
        while ptr != self.end {
            let current = unsafe { ptr.as_ref() };
            f.field(&current.element);
            ptr = current.next;
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start..end` is a valid, non-empty range of the list here.
        let current = unsafe { self.start.as_ref() };
        self.start = current.next;
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&current.element)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start..end` is a valid, non-empty range of the list here.
        self.end = unsafe { self.end.as_ref().prev };
        let current = unsafe { self.end.as_ref() };
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&current.element)
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of a `List`.
///
/// `start..end` denotes a subrange of the list, exactly as in [`Iter`].
///
/// Though the `IterMut` does not hold a reference to the list, it *borrows*
/// (mutably) from it through a phantom marker of `&'a mut List<T>`, so the
/// list cannot even be read while the iterator is live.
///
/// # Examples
///
/// ```compile_fail
/// use ordlist::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    start: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    #[cfg(feature = "length")]
    len: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let start = list.front_node();
        let end = list.ghost_node();
        let _marker = PhantomData;
        #[cfg(feature = "length")]
        let len = list.len();
        Self {
            start,
            end,
            #[cfg(feature = "length")]
            len,
            _marker,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        // SAFETY: `start..end` is always a valid range of the list.
        let mut ptr = self.start;
        while ptr != self.end {
            let current = unsafe { ptr.as_ref() };
            f.field(&current.element);
            ptr = current.next;
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    /// Return `*start` and reset the iterating range to `(start.next)..end`,
    /// or return `None` if `start..end` is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start..end` is a valid, non-empty range of the list here.
        let current = unsafe { self.start.as_mut() };
        self.start = current.next;
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&mut current.element)
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    /// Reset the iterating range to `start..(end.prev)` and return `*end`,
    /// or return `None` if `start..end` is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        // SAFETY: `start..end` is a valid, non-empty range of the list here.
        self.end = unsafe { self.end.as_ref().prev };
        let current = unsafe { self.end.as_mut() };
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        Some(&mut current.element)
    }
}

#[cfg(feature = "length")]
impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait).
///
/// Every yielded element moves out of the list, so ownership returns to
/// the caller one element at a time; whatever is left unyielded is dropped
/// with the inner list.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[cfg(feature = "length")]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len;
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

#[cfg(feature = "length")]
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push_back(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}

unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::iter::FromIterator;

    #[test]
    fn iter_yields_n_items_then_stays_exhausted() {
        let list = List::from_iter(0..3);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_on_empty_list() {
        let list = List::<i32>::new();
        let mut iter = list.iter();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        #[cfg(feature = "length")]
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn iter_double_ended() {
        let list = List::from_iter(0..5);
        let mut iter = list.iter();
        assert_eq!(iter.next(), Some(&0));
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[cfg(feature = "length")]
    #[test]
    fn iter_len_counts_down() {
        let list = List::from_iter(0..4);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.len(), 3);
        iter.next_back();
        assert_eq!(iter.len(), 2);
        iter.by_ref().for_each(drop);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn iter_mut_updates_elements() {
        let mut list = List::from_iter(0..3);
        for element in list.iter_mut() {
            *element += 10;
        }
        assert_eq!(Vec::from_iter(&list), vec![&10, &11, &12]);
    }

    #[test]
    fn into_iter_moves_elements_out() {
        let list = List::from_iter(vec![String::from("a"), String::from("b")]);
        let mut iter = list.into_iter();
        assert_eq!(iter.next(), Some(String::from("a")));
        assert_eq!(iter.next_back(), Some(String::from("b")));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn from_iter_and_extend() {
        let mut list = List::from_iter(0..3);
        list.extend(3..5);
        assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3, 4]);

        let mut list: List<i32> = List::new();
        list.extend(&[1, 2, 3]);
        assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    }
}
