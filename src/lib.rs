//! This crate provides a doubly-linked list with owned nodes, supporting
//! ordered and sorted insertion, bidirectional traversal, lookup, removal
//! and string rendering.
//!
//! The [`List`] allows inserting and removing elements at both ends in
//! constant time, and keeps itself ordered under [`insert_sorted`] in
//! *O*(*n*) time per insertion.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ordlist::List;
//!
//! let mut list = List::new();
//!
//! list.insert_sorted(5);
//! list.insert_sorted(3);
//! list.insert_sorted(8);
//!
//! #[cfg(feature = "length")]
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.front(), Some(&3));
//! assert_eq!(list.back(), Some(&8));
//! assert_eq!(list.to_string(), "[3, 5, 8]");
//!
//! // The removed element is handed back by value.
//! assert_eq!(list.remove_first(&5), Some(5));
//! assert_eq!(list.to_string(), "[3, 8]");
//! ```
//!
//! # Memory Layout
//!
//! The list is a cyclic chain of heap nodes threaded through a payload-free
//! ghost node:
//! ```text
//!          ┌─────────────────────────────────────────────────┐
//!          ↓                                  (Ghost) Node N  │
//!    ╔═══════════╗         ╔═══════════╗       ┌───────────┐  │
//!    ║   next    ║ ──────→ ║   next    ║ ┄┄ ─→ │   next    │ ─┘
//!    ╟───────────╢         ╟───────────╢       ├───────────┤
//! ┌─ ║   prev    ║ ←────── ║   prev    ║ ┄┄ ←─ │   prev    │
//! │  ╟───────────╢         ╟───────────╢       ├───────────┤
//! │  ║ payload T ║         ║ payload T ║       ┊No payload ┊
//! │  ╚═══════════╝         ╚═══════════╝       └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0               Node 1                ↑   ↑
//! └─────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                         │
//! ║   ghost   ║ ────────────────────────────────────────┘
//! ╟───────────╢
//! ║   (len)   ║
//! ╚═══════════╝
//!     List
//! ```
//! In an empty list the ghost node links to itself. Otherwise `ghost.next`
//! is the first element and `ghost.prev` is the last, so both ends are
//! reachable in *O*(1) and no link is ever null. The length counter can be
//! disabled by disabling the `length` feature in your `Cargo.toml`:
//! ```text
//! [dependencies]
//! ordlist = { default-features = false }
//! ```
//!
//! # Ownership
//!
//! Once inserted, an element is owned by the list: dropping or clearing the
//! list drops every element, front to back. The only operations that hand
//! ownership back to the caller are the ones returning elements by value —
//! [`pop_front`], [`pop_back`], [`remove_first`], [`remove_first_by`],
//! [`CursorMut::remove`] and consuming iteration. Borrowing accessors like
//! [`front`], [`back`] and [`find_by`] never transfer ownership.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are fused, double-ended iterators: a list of *N* elements yields exactly
//! *N* items and then `None` on every subsequent call.
//!
//! Because an iterator borrows the list, mutating the list while an iterator
//! is alive is rejected at compile time — there is no way to observe a stale
//! iterator position.
//!
//! ```
//! use ordlist::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), Some(&3));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // fused: stays exhausted
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! Beside iteration, the cursors [`Cursor`] and [`CursorMut`] provide
//! seekable positional views of a list. In a list with length *n*, there
//! are *n* + 1 valid cursor locations, indexed by 0, 1, ..., *n*, where
//! *n* is the ghost node.
//!
//! [`CursorMut`] edits the list at its position:
//!
//! ```
//! use ordlist::List;
//! use std::iter::FromIterator;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(5); // becomes [5, 1, 2, 3, 4], points to 1
//! assert_eq!(cursor.current(), Some(&1));
//!
//! assert!(cursor.seek_forward(2).is_ok());
//! assert_eq!(cursor.remove(), Some(3)); // becomes [5, 1, 2, 4], points to 4
//!
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [5, 1, 4], points to 4
//!
//! assert_eq!(Vec::from_iter(list), vec![5, 1, 4]);
//! ```
//!
//! Moves that would cross the ghost-node boundary return a typed error
//! ([`BoundaryError`], [`SeekError`]) and leave the cursor in a documented
//! position instead of wrapping silently; the `_cyclic` move variants wrap
//! on purpose.
//!
//! [`insert_sorted`]: crate::List::insert_sorted
//! [`pop_front`]: crate::List::pop_front
//! [`pop_back`]: crate::List::pop_back
//! [`remove_first`]: crate::List::remove_first
//! [`remove_first_by`]: crate::List::remove_first_by
//! [`front`]: crate::List::front
//! [`back`]: crate::List::back
//! [`find_by`]: crate::List::find_by
//! [`CursorMut::remove`]: crate::list::cursor::CursorMut::remove

#[doc(inline)]
pub use list::cursor::{BoundaryError, Cursor, CursorMut, SeekError};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod list;
