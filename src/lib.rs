//! This crate provides a sequential list that stores several elements per
//! linked node (a "stout" list).
//!
//! The [`StoutList`] keeps elements in a doubly-linked chain of
//! fixed-capacity nodes, trading the per-element pointer overhead of a
//! classic linked list for array-like locality, while keeping cheap
//! insertion and removal at known positions relative to a cursor. Rules for
//! inserting and removing keep every node except possibly the last one at
//! least half full.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use stout_list::StoutList;
//!
//! let mut list = StoutList::with_node_size(4).unwrap();
//! for value in [5, 1, 4, 2, 3].iter().copied() {
//!     list.push_back(value);
//! }
//! assert_eq!(list.structure(), "[(5, 1, 4, 2), (3, -, -, -)]");
//!
//! list.sort(); // repacks the chain: all nodes but the last are full
//! assert_eq!(list.structure(), "[(1, 2, 3, 4), (5, -, -, -)]");
//!
//! let mut cursor = list.cursor_mut(2).unwrap();
//! assert_eq!(cursor.move_next().unwrap(), &3);
//! assert_eq!(cursor.remove().unwrap(), 3);
//! cursor.insert(6);
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 6, 4, 5]);
//! ```
//!
//! # Memory Layout
//!
//! All nodes live in an arena owned by the list, and refer to their
//! neighbours by arena index instead of by pointer; two permanent sentinel
//! slots bound the chain. Splitting, merging and unlinking nodes are plain
//! index rewrites, and the whole crate is free of `unsafe`.
//!
//! ```text
//!  arena:  ┌─────────────┬─────────────┬──────────────┬──────────────┐
//!          │ 0: head     │ 1: tail     │ 2            │ 3            │
//!          │ next ──→ 2  │ next ──→ 1  │ next ──→ 3   │ next ──→ 1   │
//!          │ prev ──→ 0  │ prev ──→ 3  │ prev ──→ 0   │ prev ──→ 2   │
//!          │ (no elems)  │ (no elems)  │ [a, b, c, d] │ [e, f, -, -] │
//!          └─────────────┴─────────────┴──────────────┴──────────────┘
//! ```
//!
//! Unlinked slots are recycled through a free list, and the chain is always
//! traversed through the `next`/`prev` indices, never by arena order.
//!
//! # Iteration
//!
//! [`Iter`] walks the chain front to back (or back to front — it is a
//! double-ended, exact-size iterator), yielding shared references:
//!
//! ```
//! use stout_list::StoutList;
//!
//! let list: StoutList<i32> = (0..3).collect();
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&0));
//! assert_eq!(iter.next_back(), Some(&2));
//! ```
//!
//! There is deliberately no `IterMut`: mutating the list while observing
//! positional state goes through [`CursorMut`], which owns the rebalancing
//! rules.
//!
//! # Cursors
//!
//! A cursor sits conceptually *between* elements. [`CursorMut`] moves in
//! both directions, and can overwrite ([`set`]), delete ([`remove`]) or
//! insert ([`insert`]) at its position, re-using the same split and merge
//! rules as the positional operations. Because the cursor holds the mutable
//! borrow of the list, stale-cursor bugs are compile errors, not runtime
//! surprises.
//!
//! ```
//! use stout_list::StoutList;
//!
//! let mut list: StoutList<char> = ['a', 'c'].iter().copied().collect();
//! let mut cursor = list.cursor_mut(1).unwrap();
//!
//! cursor.insert('b');
//! assert_eq!(cursor.move_next().unwrap(), &'c');
//!
//! assert_eq!(list.iter().collect::<String>(), "abc");
//! ```
//!
//! # Errors
//!
//! Fallible operations return [`StoutListError`]: invalid node capacity at
//! construction, positional indexes out of range, exhausted cursor moves,
//! and cursor edits with no element to target. All failures are raised
//! before any state is mutated.
//!
//! # Serialization
//!
//! With the `serde` feature enabled, [`StoutList`] derives `Serialize` and
//! `Deserialize`, preserving the exact chain shape. Intended for
//! diagnostics and test fixtures rather than as a wire format.
//!
//! [`StoutList`]: crate::StoutList
//! [`Iter`]: crate::Iter
//! [`CursorMut`]: crate::CursorMut
//! [`StoutListError`]: crate::StoutListError
//! [`set`]: crate::CursorMut::set
//! [`remove`]: crate::CursorMut::remove
//! [`insert`]: crate::CursorMut::insert

#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::{StoutList, DEFAULT_NODE_SIZE};

pub use error::StoutListError;

pub mod error;
pub mod list;
