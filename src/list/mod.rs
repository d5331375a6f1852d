use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;

use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// A doubly-linked list with owned nodes, laid out as a cyclic chain
/// through a payload-free ghost node.
///
/// Inserting and removing at either end computes in *O*(1) time; sorted
/// insertion, lookup and removal by value compute in *O*(*n*) time.
///
/// The `List` contains:
/// - a pointer `ghost` to the ghost node, whose `next` is the first element
///   and whose `prev` is the last;
/// - a length field `len`, kept equal to the number of non-ghost nodes. It
///   can be disabled by disabling the `length` feature in your `Cargo.toml`:
/// ```text
/// [dependencies]
/// ordlist = { default-features = false }
/// ```
///
/// Elements are owned by the list once inserted: dropping or clearing the
/// list drops them in front-to-back order. Operations returning elements by
/// value (`pop_front`, `remove_first`, ...) move ownership back out.
pub struct List<T> {
    ghost: Box<Node<Erased>>,
    #[cfg(feature = "length")]
    /// the length of the list
    pub(crate) len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

#[derive(Default)]
struct Erased;

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        NonNull::from(self.ghost.as_ref()).cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or
        // the first element of the cyclic chain).
        NonNull::from(unsafe { self.ghost_node().as_ref().next.as_ref() }).cast()
    }
    /// Attach a single detached node between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next`
    /// belong to the list, nor whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`). Violating either makes the list
    /// ill-formed.
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
        #[cfg(feature = "length")]
        {
            self.len += 1;
        }
        #[cfg(debug_assertions)]
        {
            assert_adjacent(prev, node);
            assert_adjacent(node, next);
        }
    }

    /// Detach a single node from the list and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the
    /// list, nor whether it is the ghost node. Violating either makes the
    /// list ill-formed.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        #[cfg(feature = "length")]
        {
            self.len -= 1;
        }
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }
}

impl<T> List<T> {
    /// Create an empty `List`.
    ///
    /// # Examples
    /// ```
    /// use ordlist::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        let ghost = new_ghost();
        #[cfg(feature = "length")]
        let len = 0;
        let _marker = PhantomData;
        Self {
            ghost,
            #[cfg(feature = "length")]
            len,
            _marker,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns the length of the `List`. Enabled by `feature = "length"`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// #![cfg(feature = "length")]
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[cfg(feature = "length")]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes and drops all elements from the `List`. The list itself
    /// stays usable afterwards.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// #[cfg(feature = "length")]
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// #[cfg(feature = "length")]
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    ///
    /// // Still usable.
    /// list.push_back(3);
    /// assert_eq!(list.front(), Some(&3));
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty. Never transfers ownership.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(1);
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.cursor_start_mut().current_mut()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty. Never transfers ownership.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(1);
    /// if let Some(x) = list.back_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.back(), Some(&5));
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.cursor_end_mut().previous_mut()
    }

    /// Adds an element first in the list, taking ownership of it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        self.cursor_start_mut().insert(elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty. Ownership of the element moves back to the caller.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_start_mut().remove()
    }

    /// Appends an element to the back of the list, taking ownership of it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.cursor_end_mut().insert(elt);
    }

    /// Removes the last element from the list and returns it, or `None` if
    /// it is empty. Ownership of the element moves back to the caller.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_back(), None);
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.cursor_end_mut().backspace()
    }

    /// Provides a cursor at the node with the given index.
    ///
    /// By convention, the cursor is pointing to the ghost node if
    /// `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_, T> {
        let mut cursor = self.cursor_start();
        cursor
            .seek_to(at)
            .expect("Cannot create cursor at a nonexistent index");
        cursor
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is pointing to the ghost node if the list is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            self.front_node(),
            #[cfg(feature = "length")]
            0,
        )
    }

    /// Provides a cursor at the ghost node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(
            self,
            self.ghost_node(),
            #[cfg(feature = "length")]
            self.len,
        )
    }

    /// Provides a cursor with editing operations at the node with the given
    /// index.
    ///
    /// By convention, the cursor is pointing to the ghost node if
    /// `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`.
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
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&10));
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        let mut cursor = self.cursor_start_mut();
        cursor
            .seek_to(at)
            .expect("Cannot create cursor at a nonexistent index");
        cursor
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is pointing to the ghost node if the list is empty.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(
            self,
            self.front_node(),
            #[cfg(feature = "length")]
            0,
        )
    }

    /// Provides a cursor with editing operations at the ghost node.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(
            self,
            self.ghost_node(),
            #[cfg(feature = "length")]
            self.len,
        )
    }

    /// Provides a forward iterator.
    ///
    /// The iterator is fused: a list of *N* elements yields exactly *N*
    /// items and then `None` on every subsequent call.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&10));
    /// assert_eq!(iter.next(), Some(&11));
    /// assert_eq!(iter.next(), Some(&12));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the list as `[e0, e1, ...]`, walking front to back.
///
/// An empty list renders as `[]` — a representation of emptiness, never an
/// absent string.
///
/// # Examples
///
/// ```
/// use ordlist::List;
/// use std::iter::FromIterator;
///
/// let list = List::from_iter([1, 2, 3]);
/// assert_eq!(list.to_string(), "[1, 2, 3]");
///
/// let empty: List<i32> = List::new();
/// assert_eq!(empty.to_string(), "[]");
/// ```
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for element in iter {
                write!(f, ", {}", element)?;
            }
        }
        f.write_str("]")
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with the given element, leaving the links
    /// uninitialized. The caller must attach the node before any link is
    /// read.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let node: NonNull<MaybeUninit<Node<T>>> =
            NonNull::from(Box::leak(Box::new(MaybeUninit::uninit())));
        let node: NonNull<Node<T>> = node.cast();
        // SAFETY: `element` is the only field that must be valid before the
        // node is attached, and it is initialized here by `ptr::write`.
        unsafe {
            std::ptr::addr_of_mut!((*node.as_ptr()).element).write(element);
        }
        node
    }

    /// Consume a detached node, moving its element out.
    pub(crate) fn into_element(node: Box<Node<T>>) -> T {
        node.element
    }
}

fn new_ghost() -> Box<Node<Erased>> {
    let ghost_ptr = Node::new_detached(Erased::default());
    // SAFETY: `ghost.next` and `ghost.prev` are initialized immediately
    // after creation, pointing to the ghost itself (the empty cycle).
    let mut ghost = unsafe { Box::from_raw(ghost_ptr.as_ptr()) };
    ghost.next = ghost_ptr;
    ghost.prev = ghost_ptr;
    ghost
}

/// Link `prev` and `next` as adjacent nodes.
pub(crate) unsafe fn connect<T>(mut prev: NonNull<Node<T>>, mut next: NonNull<Node<T>>) {
    prev.as_mut().next = next;
    next.as_mut().prev = prev;
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(prev.as_ref().next, next);
        assert_eq!(next.as_ref().prev, prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;
    use std::iter::FromIterator;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.push_back(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 0);
    }

    /// Dropping a list of N elements must drop each element exactly once,
    /// front to back.
    #[test]
    fn list_drop_releases_every_element_in_order() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }

        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);

        // Clearing releases the elements but keeps the list alive.
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(4, &dropped));
        list.push_back(DropChecker::new(5, &dropped));
        list.clear();
        assert_eq!(dropped.borrow().as_slice(), &[4, 5]);
        assert!(list.is_empty());
        list.push_back(DropChecker::new(6, &dropped));
        assert_eq!(dropped.borrow().as_slice(), &[4, 5]);
    }

    /// An element removed by value must not be dropped by the list.
    #[test]
    fn removal_hands_ownership_back() {
        #[derive(Debug, PartialEq)]
        struct Token<'a>(i32, &'a RefCell<u32>);
        impl<'a> Drop for Token<'a> {
            fn drop(&mut self) {
                *self.1.borrow_mut() += 1;
            }
        }

        let drops = RefCell::new(0);
        let mut list = List::new();
        list.push_back(Token(1, &drops));
        list.push_back(Token(2, &drops));

        let removed = list.pop_front().unwrap();
        assert_eq!(removed.0, 1);
        assert_eq!(*drops.borrow(), 0); // still alive in the caller's hands
        drop(removed);
        assert_eq!(*drops.borrow(), 1);

        drop(list);
        assert_eq!(*drops.borrow(), 2);
    }

    #[test]
    fn display_renders_front_to_back() {
        let mut list = List::new();
        assert_eq!(list.to_string(), "[]");

        list.push_back(1);
        assert_eq!(list.to_string(), "[1]");

        list.push_back(2);
        list.push_back(3);
        assert_eq!(list.to_string(), "[1, 2, 3]");

        list.push_front(0);
        assert_eq!(list.to_string(), "[0, 1, 2, 3]");
    }

    #[test]
    fn forward_and_backward_walks_agree() {
        let list = List::from_iter(0..10);
        let forward: Vec<i32> = list.iter().copied().collect();
        let mut backward: Vec<i32> = list.iter().rev().copied().collect();
        backward.reverse();
        assert_eq!(forward, backward);
        #[cfg(feature = "length")]
        assert_eq!(forward.len(), list.len());
    }
}

// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use crate::list::List;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// A mutation applied to both the list and a `VecDeque` model.
    #[derive(Clone, Debug)]
    enum Op {
        PushFront(i32),
        PushBack(i32),
        PopFront,
        PopBack,
        RemoveFirst(i32),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        // Values are drawn from a small domain so removal actually hits.
        prop_oneof![
            2 => (0..8i32).prop_map(Op::PushFront),
            2 => (0..8i32).prop_map(Op::PushBack),
            1 => Just(Op::PopFront),
            1 => Just(Op::PopBack),
            1 => (0..8i32).prop_map(Op::RemoveFirst),
        ]
    }

    proptest! {
        /// After any sequence of mutations, the list agrees with the model
        /// in length, in front-to-back order and in back-to-front order.
        #[test]
        fn mutation_sequences_mirror_vecdeque(
            ops in proptest::collection::vec(op_strategy(), 0..200)
        ) {
            let mut list = List::new();
            let mut model = VecDeque::new();

            for op in ops {
                match op {
                    Op::PushFront(value) => {
                        list.push_front(value);
                        model.push_front(value);
                    }
                    Op::PushBack(value) => {
                        list.push_back(value);
                        model.push_back(value);
                    }
                    Op::PopFront => {
                        prop_assert_eq!(list.pop_front(), model.pop_front());
                    }
                    Op::PopBack => {
                        prop_assert_eq!(list.pop_back(), model.pop_back());
                    }
                    Op::RemoveFirst(needle) => {
                        let expected = model
                            .iter()
                            .position(|&e| e == needle)
                            .and_then(|at| model.remove(at));
                        prop_assert_eq!(list.remove_first(&needle), expected);
                    }
                }

                #[cfg(feature = "length")]
                prop_assert_eq!(list.len(), model.len());
                prop_assert_eq!(list.is_empty(), model.is_empty());
                prop_assert_eq!(list.front(), model.front());
                prop_assert_eq!(list.back(), model.back());
            }

            let forward: Vec<i32> = list.iter().copied().collect();
            let expected: Vec<i32> = model.iter().copied().collect();
            prop_assert_eq!(&forward, &expected);

            let mut backward: Vec<i32> = list.iter().rev().copied().collect();
            backward.reverse();
            prop_assert_eq!(&backward, &expected);
        }

        /// Sorted insertion yields a non-decreasing sequence containing
        /// exactly the inserted items.
        #[test]
        fn insert_sorted_keeps_ascending_order(
            items in proptest::collection::vec(any::<i32>(), 0..100)
        ) {
            let mut list = List::new();
            for item in items.iter().copied() {
                list.insert_sorted(item);
            }

            #[cfg(feature = "length")]
            prop_assert_eq!(list.len(), items.len());

            let collected: Vec<i32> = list.iter().copied().collect();
            let mut expected = items;
            expected.sort();
            prop_assert_eq!(collected, expected);
        }

        /// A list of N elements yields exactly N items and then stays
        /// exhausted.
        #[test]
        fn iterator_is_fused(items in proptest::collection::vec(any::<i32>(), 0..50)) {
            let mut list = List::new();
            for item in items.iter().copied() {
                list.push_back(item);
            }

            let mut iter = list.iter();
            for item in &items {
                prop_assert_eq!(iter.next(), Some(item));
            }
            for _ in 0..3 {
                prop_assert_eq!(iter.next(), None);
            }
        }
    }
}
