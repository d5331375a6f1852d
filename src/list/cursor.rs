use crate::list::{List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;
use thiserror::Error;

/// Error returned when a checked cursor move would cross the ghost-node
/// boundary.
///
/// The `_cyclic` move variants wrap through the boundary instead of
/// returning this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cursor move would cross the ghost-node boundary")]
pub struct BoundaryError;

/// Error returned when a multi-step seek runs out of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("seek stopped at the ghost-node boundary after {moved} of {requested} steps")]
pub struct SeekError {
    /// Steps actually taken before the boundary was hit.
    pub moved: usize,
    /// Steps originally requested.
    pub requested: usize,
}

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek
/// back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the
/// cursor, indexed by 0, 1, ..., *n*, where *n* is the ghost node of the
/// list.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node
/// of the list is denoted by `#`.)
/// ```
/// use ordlist::List;
/// use std::iter::FromIterator;
///
/// // Create a list: [ A B C D #]
/// let list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor at the end: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
///
/// // Move cursor backward: [ A B C|D #] (index = 3)
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
///
/// // A checked move cannot cross the ghost node...
/// let mut cursor = list.cursor_end();
/// assert!(cursor.move_next().is_err());
/// // ...but a cyclic move wraps: [|A B C D #] (index = 0)
/// cursor.move_next_cyclic();
/// assert_eq!(cursor.current(), Some(&'A'));
/// ```
#[derive(Clone)]
pub struct Cursor<'a, T: 'a> {
    #[cfg(feature = "length")]
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a List<T>,
}

/// Compare cursors by position.
///
/// Only cursors that belong to the same list and have the same position
/// are considered equal.
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.current == other.current
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek
/// back-and-forth, and can safely mutate the list during iteration. This is
/// because the lifetime of its yielded references is tied to its own
/// lifetime, instead of just the underlying list.
///
/// For convenience, [`CursorMut::view`] temporarily borrows the list and
/// returns an immutable reference whose lifetime is shorter than the
/// cursor's.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the
/// cursor, indexed by 0, 1, ..., *n*, where *n* is the ghost node of the
/// list.
///
/// # Examples
///
/// The underlying list cannot be touched while the cursor is live:
///
/// ```compile_fail
/// use ordlist::List;
/// use std::iter::FromIterator;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    #[cfg(feature = "length")]
    index: usize,
    pub(crate) current: NonNull<Node<T>>,
    pub(crate) list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            pub(crate) fn is_ghost_node(&self) -> bool {
                self.current == self.list.ghost_node()
            }
            pub(crate) fn is_front_node(&self) -> bool {
                self.prev_node() == self.list.ghost_node()
            }
            pub(crate) fn next_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.next` is always valid in a cyclic chain.
                unsafe { self.current.as_ref().next }
            }
            pub(crate) fn prev_node(&self) -> NonNull<Node<T>> {
                // SAFETY: `current.prev` is always valid in a cyclic chain.
                unsafe { self.current.as_ref().prev }
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            #[cfg(feature = "length")]
            /// Return the index of the cursor.
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position, where passing through
            /// the ghost node is allowed.
            ///
            /// This operation should compute in *O*(1) time.
            pub fn move_next_cyclic(&mut self) {
                if self.is_empty() {
                    return;
                }
                #[cfg(feature = "length")]
                if self.is_ghost_node() {
                    self.index = 0;
                } else {
                    self.index += 1;
                }
                self.current = self.next_node();
            }

            /// Move the cursor to the previous position, where passing
            /// through the ghost node is allowed.
            ///
            /// This operation should compute in *O*(1) time.
            pub fn move_prev_cyclic(&mut self) {
                if self.is_empty() {
                    return;
                }
                #[cfg(feature = "length")]
                if self.is_front_node() {
                    self.index = self.list.len();
                } else {
                    self.index -= 1;
                }
                self.current = self.prev_node();
            }

            /// Move the cursor to the next position, or return a
            /// [`BoundaryError`] when the move would pass through the ghost
            /// node. On error the cursor stays put.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordlist::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// assert!(cursor.move_next().is_err());
            /// assert_eq!(cursor.previous(), Some(&3)); // still at the ghost node
            /// ```
            pub fn move_next(&mut self) -> Result<(), BoundaryError> {
                if !self.is_empty() && !self.is_ghost_node() {
                    self.move_next_cyclic();
                    return Ok(());
                }
                Err(BoundaryError)
            }

            /// Move the cursor to the previous position, or return a
            /// [`BoundaryError`] when the move would pass through the ghost
            /// node. On error the cursor stays put.
            ///
            /// This operation should compute in *O*(1) time.
            pub fn move_prev(&mut self) -> Result<(), BoundaryError> {
                if !self.is_empty() && !self.is_front_node() {
                    self.move_prev_cyclic();
                    return Ok(());
                }
                Err(BoundaryError)
            }

            /// Move the cursor forward by the given number of steps, or
            /// return a [`SeekError`] when the seek would pass through the
            /// ghost node.
            ///
            /// If an error occurs, the cursor stops at the ghost node.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordlist::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.seek_forward(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// let err = cursor.seek_forward(5).unwrap_err();
            /// assert_eq!(err.moved, 1);
            /// assert_eq!(err.requested, 5);
            /// assert_eq!(cursor.current(), None); // stopped at the ghost node
            /// ```
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), SeekError> {
                for moved in 0..steps {
                    self.move_next().map_err(|_| SeekError {
                        moved,
                        requested: steps,
                    })?;
                }
                Ok(())
            }

            /// Move the cursor backward by the given number of steps, or
            /// return a [`SeekError`] when the seek would pass through the
            /// ghost node.
            ///
            /// If an error occurs, the cursor stops at the first node.
            ///
            /// This operation should compute in *O*(*n*) time.
            pub fn seek_backward(&mut self, steps: usize) -> Result<(), SeekError> {
                for moved in 0..steps {
                    self.move_prev().map_err(|_| SeekError {
                        moved,
                        requested: steps,
                    })?;
                }
                Ok(())
            }

            /// Move the cursor to the given position, or return a
            /// [`SeekError`] when `target > len`.
            ///
            /// If an error occurs, the cursor stays put.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordlist::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Out of bounds: the cursor does not move.
            /// assert!(cursor.seek_to(5).is_err());
            /// assert_eq!(cursor.current(), Some(&3));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), SeekError> {
                let current = self.current;
                #[cfg(feature = "length")]
                let index = self.index;
                self.move_to_start();
                if let Err(err) = self.seek_forward(target) {
                    self.current = current;
                    #[cfg(feature = "length")]
                    {
                        self.index = index;
                    }
                    return Err(err);
                }
                Ok(())
            }

            /// Set the cursor to the start of the list (i.e. the first node).
            ///
            /// This operation should compute in *O*(1) time.
            #[inline]
            pub fn move_to_start(&mut self) {
                #[cfg(feature = "length")]
                {
                    self.index = 0;
                }
                self.current = self.list.front_node();
            }

            /// Set the cursor to the end of the list (i.e. the ghost node).
            ///
            /// This operation should compute in *O*(1) time.
            #[inline]
            pub fn move_to_end(&mut self) {
                #[cfg(feature = "length")]
                {
                    self.index = self.list.len();
                }
                self.current = self.list.ghost_node();
            }

            /// Return an immutable reference to the element at the cursor,
            /// or `None` if it is located at the ghost node.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordlist::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// assert_eq!(list.cursor(0).current(), Some(&1));
            /// assert_eq!(list.cursor(2).current(), Some(&3));
            /// assert_eq!(list.cursor(3).current(), None);
            /// ```
            pub fn current(&self) -> Option<&'a T> {
                if self.is_ghost_node() {
                    return None;
                }
                // SAFETY: non-ghost nodes always hold a valid element.
                unsafe { Some(&self.current.as_ref().element) }
            }

            /// Return an immutable reference to the element before the
            /// cursor, or `None` if it is located at the first node.
            ///
            /// # Examples
            ///
            /// ```
            /// use ordlist::List;
            /// use std::iter::FromIterator;
            ///
            /// let list = List::from_iter([1, 2, 3]);
            /// assert_eq!(list.cursor(0).previous(), None);
            /// assert_eq!(list.cursor(1).previous(), Some(&1));
            /// assert_eq!(list.cursor(3).previous(), Some(&3));
            /// ```
            pub fn previous(&self) -> Option<&'a T> {
                if self.is_front_node() {
                    return None;
                }
                // SAFETY: the previous node of a non-first node is never the
                // ghost node, and non-ghost nodes always hold a valid element.
                Some(unsafe { &self.prev_node().as_ref().element })
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                let mut f = f.debug_struct(stringify!($CURSOR));
                f.field("list", &self.list)
                    .field("current", &self.current());
                #[cfg(feature = "length")]
                f.field("index", &self.index);
                f.finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(
        list: &'a List<T>,
        current: NonNull<Node<T>>,
        #[cfg(feature = "length")] index: usize,
    ) -> Self {
        Self {
            #[cfg(feature = "length")]
            index,
            current,
            list,
        }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        self.list as *const _ == other.list as *const _
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut List<T>,
        current: NonNull<Node<T>>,
        #[cfg(feature = "length")] index: usize,
    ) -> Self {
        Self {
            #[cfg(feature = "length")]
            index,
            current,
            list,
        }
    }

    /// Insert a new item before the given node `next`.
    ///
    /// It is unsafe because it does not check whether `next` belongs to the
    /// list the cursor points into.
    unsafe fn insert_before(&mut self, next: NonNull<Node<T>>, item: T) -> NonNull<Node<T>> {
        let node = Node::new_detached(item);
        self.list.attach_node(next.as_ref().prev, next, node);
        node
    }
}

// Methods that do not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return a mutable reference to the element at the cursor, or `None`
    /// if it is located at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_mut(0);
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate the ghost node.
    /// assert!(list.cursor_mut(3).current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&'a mut T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: non-ghost nodes always hold a valid element.
        unsafe { Some(&mut self.current.as_mut().element) }
    }

    /// Return a mutable reference to the element before the cursor, or
    /// `None` if it is located at the first node.
    pub fn previous_mut(&mut self) -> Option<&'a mut T> {
        if self.is_front_node() {
            return None;
        }
        // SAFETY: the previous node of a non-first node is never the ghost
        // node, and non-ghost nodes always hold a valid element.
        Some(unsafe { &mut self.prev_node().as_mut().element })
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(
            self.list,
            self.current,
            #[cfg(feature = "length")]
            self.index,
        )
    }

    /// Convert the mutable cursor into an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(
            self.list,
            self.current,
            #[cfg(feature = "length")]
            self.index,
        )
    }

    /// Temporarily view the list through an immutable reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// assert_eq!(cursor.view().back(), Some(&3));
    ///
    /// cursor.insert(4);
    /// assert_eq!(Vec::from_iter(list), vec![4, 1, 2, 3]);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Insert an element before the cursor position, taking ownership
    /// of it.
    ///
    /// After insertion, the cursor stays at the same node but its `index`
    /// becomes `index + 1`. Inserting at the ghost node appends at the
    /// back of the list.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// #[cfg(feature = "length")]
    /// assert_eq!(cursor.index(), 2);
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.previous(), Some(&5));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 4, 2, 3, 5]);
    /// ```
    pub fn insert(&mut self, item: T) {
        // SAFETY: `self.current` is a valid node in the list.
        unsafe { self.insert_before(self.current, item) };
        #[cfg(feature = "length")]
        {
            self.index += 1;
        }
    }

    /// Remove the element at the cursor and return it by value, or return
    /// `None` if the cursor is at the ghost node. After removal, the cursor
    /// is moved to the next node.
    ///
    /// Ownership of the element moves back to the caller; the list will
    /// not drop it.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..5);
    /// let mut cursor = list.cursor_mut(2);
    ///
    /// assert_eq!(cursor.remove(), Some(2)); // becomes [0, 1, 3, 4]
    /// assert_eq!(cursor.current(), Some(&3));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 3, 4]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: `self.current` is a valid non-ghost node in the list.
        let node = unsafe { self.list.detach_node(self.current) };
        self.current = node.next;
        Some(Node::into_element(node))
    }

    /// Remove the element before the cursor and return it by value, or
    /// return `None` if the cursor is at the first node. After removal the
    /// cursor stays at the same node, but its `index` becomes `index - 1`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(0..5);
    /// let mut cursor = list.cursor_mut(2);
    ///
    /// assert_eq!(cursor.backspace(), Some(1)); // becomes [0, 2, 3, 4]
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// cursor.move_to_start();
    /// assert_eq!(cursor.backspace(), None);
    /// ```
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok().and_then(|_| self.remove())
    }
}

impl<'a, T: 'a> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        cursor.into_cursor()
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::iter::FromIterator;

    #[test]
    fn cursor_moves_and_boundaries() {
        let list = List::from_iter([1, 2, 3]);

        let mut cursor = list.cursor_start();
        assert_eq!(cursor.current(), Some(&1));
        assert!(cursor.move_prev().is_err());
        assert_eq!(cursor.current(), Some(&1));

        assert!(cursor.move_next().is_ok());
        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.current(), Some(&3));

        assert!(cursor.move_next().is_ok());
        assert_eq!(cursor.current(), None); // at the ghost node
        assert!(cursor.move_next().is_err());

        cursor.move_next_cyclic();
        assert_eq!(cursor.current(), Some(&1));
        cursor.move_prev_cyclic();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn cursor_moves_on_empty_list() {
        let list = List::<i32>::new();
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), None);
        assert!(cursor.move_next().is_err());
        assert!(cursor.move_prev().is_err());
        cursor.move_next_cyclic();
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn seek_reports_progress() {
        let list = List::from_iter(0..4);
        let mut cursor = list.cursor_start();

        assert!(cursor.seek_forward(4).is_ok());
        assert_eq!(cursor.current(), None);

        cursor.move_to_start();
        let err = cursor.seek_forward(6).unwrap_err();
        assert_eq!(err.moved, 4);
        assert_eq!(err.requested, 6);
        assert_eq!(cursor.current(), None); // stopped at the ghost node

        assert!(cursor.seek_backward(4).is_ok());
        assert_eq!(cursor.current(), Some(&0));
        let err = cursor.seek_backward(1).unwrap_err();
        assert_eq!(err.moved, 0);
    }

    #[test]
    fn seek_to_stays_put_on_error() {
        let list = List::from_iter(0..3);
        let mut cursor = list.cursor_start();

        assert!(cursor.seek_to(2).is_ok());
        assert_eq!(cursor.current(), Some(&2));
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 2);

        assert!(cursor.seek_to(4).is_err());
        assert_eq!(cursor.current(), Some(&2));
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn cursor_mut_edits() {
        let mut list = List::from_iter([1, 2, 3, 4]);
        let mut cursor = list.cursor_start_mut();

        cursor.insert(0); // [0, 1, 2, 3, 4], points to 1
        assert_eq!(cursor.current(), Some(&1));
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 1);

        assert!(cursor.seek_forward(2).is_ok());
        assert_eq!(cursor.remove(), Some(3)); // [0, 1, 2, 4], points to 4
        assert_eq!(cursor.current(), Some(&4));

        assert_eq!(cursor.backspace(), Some(2)); // [0, 1, 4], points to 4
        assert_eq!(cursor.current(), Some(&4));
        #[cfg(feature = "length")]
        assert_eq!(cursor.index(), 2);

        assert_eq!(Vec::from_iter(list), vec![0, 1, 4]);
    }

    #[test]
    fn remove_at_back_moves_to_ghost() {
        let mut list = List::from_iter([1, 2]);
        let mut cursor = list.cursor_mut(1);
        assert_eq!(cursor.remove(), Some(2));
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.previous(), Some(&1));
    }

    #[test]
    fn cursor_equality_is_positional() {
        let list = List::from_iter([1, 2, 3]);
        let cursor1 = list.cursor_start();
        let mut cursor2 = cursor1.clone();
        assert_eq!(cursor1, cursor2);

        cursor2.move_next_cyclic();
        assert_ne!(cursor1, cursor2);

        let another = List::from_iter([1, 2, 3]);
        let cursor3 = another.cursor_start();
        assert_ne!(cursor1, cursor3); // different lists never compare equal
    }
}
