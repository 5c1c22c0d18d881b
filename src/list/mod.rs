use std::fmt::{self, Debug, Display, Formatter, Write};

use crate::error::StoutListError;
use crate::list::cursor::{Cursor, CursorMut};
use crate::Iter;

pub mod cursor;
pub mod iterator;

mod algorithms;

/// Number of elements a node may store when no capacity is given at
/// construction.
pub const DEFAULT_NODE_SIZE: usize = 4;

/// Arena slot of the head sentinel.
pub(crate) const HEAD: usize = 0;
/// Arena slot of the tail sentinel.
pub(crate) const TAIL: usize = 1;

/// The `StoutList` is a sequential list that stores up to `node_size`
/// elements per linked node, trading pointer overhead for array-like
/// locality while keeping O(1) insertion at known positions relative to a
/// cursor.
///
/// Rules for inserting and removing elements keep every node except possibly
/// the last one at least half full; the two bulk sorts ([`sort`],
/// [`sort_reverse`]) additionally leave every node but the last completely
/// packed.
///
/// Nodes live in an arena owned by the list and link to their neighbours by
/// arena index rather than by pointer, so splits, merges and unlinks are
/// plain index rewrites. The head and tail sentinels occupy two fixed arena
/// slots and never hold data.
///
/// # Examples
///
/// ```
/// use stout_list::StoutList;
///
/// let mut list: StoutList<i32> = StoutList::new();
/// list.push_back(2);
/// list.push_back(3);
/// list.insert(0, 1).unwrap();
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(0), Some(&1));
/// assert_eq!(list.remove(1).unwrap(), 2);
/// ```
///
/// [`sort`]: StoutList::sort
/// [`sort_reverse`]: StoutList::sort_reverse
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoutList<T> {
    arena: Vec<Node<T>>,
    free: Vec<usize>,
    node_size: usize,
    len: usize,
}

/// Node type for this list. Each node holds at most `node_size` elements in
/// `elems`; the occupied slots are always the leading ones, so the element
/// count is `elems.len()`. Sentinels keep `elems` empty forever.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct Node<T> {
    pub(crate) next: usize,
    pub(crate) prev: usize,
    pub(crate) elems: Vec<T>,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Node {
            next: TAIL,
            prev: HEAD,
            elems: Vec::new(),
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.elems.len()
    }

    /// Adds an item at the first free slot.
    fn push(&mut self, item: T) {
        self.elems.push(item);
    }

    /// Adds an item at `offset`, shifting later elements right.
    fn insert(&mut self, offset: usize, item: T) {
        self.elems.insert(offset, item);
    }

    /// Deletes the element at `offset`, shifting later elements left.
    fn remove(&mut self, offset: usize) -> T {
        self.elems.remove(offset)
    }
}

// Arena plumbing.
impl<T> StoutList<T> {
    pub(crate) fn node(&self, at: usize) -> &Node<T> {
        &self.arena[at]
    }

    pub(crate) fn node_mut(&mut self, at: usize) -> &mut Node<T> {
        &mut self.arena[at]
    }

    /// First real node, or [`TAIL`] if the list is empty.
    pub(crate) fn first(&self) -> usize {
        self.arena[HEAD].next
    }

    /// Last real node, or [`HEAD`] if the list is empty.
    pub(crate) fn last(&self) -> usize {
        self.arena[TAIL].prev
    }

    /// Takes a slot off the free list, or grows the arena by one.
    fn alloc(&mut self) -> usize {
        match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.arena.push(Node {
                    next: TAIL,
                    prev: HEAD,
                    elems: Vec::with_capacity(self.node_size),
                });
                self.arena.len() - 1
            }
        }
    }

    /// Links `node` into the chain right after `prev`.
    fn link_after(&mut self, prev: usize, node: usize) {
        let next = self.arena[prev].next;
        self.arena[node].prev = prev;
        self.arena[node].next = next;
        self.arena[prev].next = node;
        self.arena[next].prev = node;
    }

    /// Relinks `node`'s neighbours to skip it and recycles its slot.
    fn unlink(&mut self, node: usize) {
        let prev = self.arena[node].prev;
        let next = self.arena[node].next;
        self.arena[prev].next = next;
        self.arena[next].prev = prev;
        self.arena[node].elems.clear();
        self.free.push(node);
    }

    /// Ctor shared by the validating constructors and `Clone`; callers
    /// guarantee `node_size` has already been validated.
    pub(crate) fn with_validated_size(node_size: usize) -> Self {
        StoutList {
            arena: vec![Node::sentinel(), Node::sentinel()],
            free: Vec::new(),
            node_size,
            len: 0,
        }
    }
}

// Positional lookup.
impl<T> StoutList<T> {
    /// Resolves position `pos` (`pos < len`) to the node holding it and the
    /// offset within that node. O(number of nodes), not O(len), because each
    /// node absorbs up to `node_size` positions per step.
    pub(crate) fn locate(&self, pos: usize) -> (usize, usize) {
        debug_assert!(pos < self.len);
        let mut node = self.first();
        let mut before = 0;
        loop {
            let count = self.arena[node].count();
            if pos < before + count {
                return (node, pos - before);
            }
            before += count;
            node = self.arena[node].next;
        }
    }

    /// Like [`locate`], but also accepts `pos == len`, which resolves to the
    /// position just past the last element (the last real node at
    /// `offset == count`, or the tail sentinel when the list is empty).
    ///
    /// [`locate`]: StoutList::locate
    fn locate_for_insert(&self, pos: usize) -> (usize, usize) {
        if pos == self.len {
            let last = self.last();
            if last == HEAD {
                return (TAIL, 0);
            }
            return (last, self.arena[last].count());
        }
        self.locate(pos)
    }

    /// Resolves a cursor gap position in `[0, len]`: the gap sits before the
    /// element at `at`, or at the tail sentinel when `at == len`.
    pub(crate) fn gap_position(&self, at: usize) -> (usize, usize) {
        if at == self.len {
            (TAIL, 0)
        } else {
            self.locate(at)
        }
    }
}

impl<T> StoutList<T> {
    /// Creates an empty list with the default node size.
    ///
    /// # Examples
    /// ```
    /// use stout_list::{StoutList, DEFAULT_NODE_SIZE};
    ///
    /// let list: StoutList<u32> = StoutList::new();
    /// assert!(list.is_empty());
    /// assert_eq!(list.node_size(), DEFAULT_NODE_SIZE);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_validated_size(DEFAULT_NODE_SIZE)
    }

    /// Creates an empty list whose nodes store up to `node_size` elements.
    ///
    /// `node_size` must be positive and even.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::{StoutList, StoutListError};
    ///
    /// let list = StoutList::<i32>::with_node_size(8).unwrap();
    /// assert_eq!(list.node_size(), 8);
    ///
    /// assert_eq!(
    ///     StoutList::<i32>::with_node_size(3).unwrap_err(),
    ///     StoutListError::InvalidNodeSize(3),
    /// );
    /// ```
    pub fn with_node_size(node_size: usize) -> Result<Self, StoutListError> {
        if node_size == 0 || node_size % 2 != 0 {
            return Err(StoutListError::InvalidNodeSize(node_size));
        }
        Ok(Self::with_validated_size(node_size))
    }

    /// Returns the number of elements in the list.
    ///
    /// Maintained incrementally; always equal to the sum of the per-node
    /// element counts.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed per-node capacity chosen at construction.
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Discards all nodes, leaving the sentinels adjacent and the list
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    ///
    /// let mut list: StoutList<i32> = (0..10).collect();
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.arena.truncate(2);
        self.arena[HEAD].next = TAIL;
        self.arena[TAIL].prev = HEAD;
        self.free.clear();
        self.len = 0;
    }

    /// Provides a reference to the element at position `at`, or `None` if
    /// `at` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    ///
    /// let list: StoutList<i32> = (0..6).collect();
    /// assert_eq!(list.get(4), Some(&4));
    /// assert_eq!(list.get(6), None);
    /// ```
    pub fn get(&self, at: usize) -> Option<&T> {
        if at >= self.len {
            return None;
        }
        let (node, offset) = self.locate(at);
        Some(&self.arena[node].elems[offset])
    }

    /// Provides a mutable reference to the element at position `at`, or
    /// `None` if `at` is out of range.
    pub fn get_mut(&mut self, at: usize) -> Option<&mut T> {
        if at >= self.len {
            return None;
        }
        let (node, offset) = self.locate(at);
        Some(&mut self.arena[node].elems[offset])
    }

    /// Appends `item` at the end of the list, creating a fresh node when the
    /// list is empty or the tail-adjacent node is full.
    ///
    /// Returns whether the appended value is new *to the destination node*:
    /// if that node already holds an element comparing equal, the element is
    /// still appended but `false` is reported. The check never looks at
    /// other nodes, so the return value is not a list-wide membership test.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    ///
    /// let mut list = StoutList::with_node_size(2).unwrap();
    /// assert!(list.push_back(1));
    /// assert!(!list.push_back(1)); // duplicate within the same node
    /// assert!(list.push_back(1)); // lands in a fresh node: reported new
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn push_back(&mut self, item: T) -> bool
    where
        T: Ord,
    {
        let target = self.last();
        let starts_fresh_node = target == HEAD || self.arena[target].count() == self.node_size;
        let is_new = starts_fresh_node
            || !self.arena[target]
                .elems
                .iter()
                .any(|e| e.cmp(&item) == std::cmp::Ordering::Equal);
        self.append_raw(item);
        is_new
    }

    /// The mutation half of [`push_back`]: identical placement, no duplicate
    /// report and no `Ord` bound. Backs `Extend`, `FromIterator`, `Clone`
    /// and the sorts, all of which leave every node but the last packed.
    ///
    /// [`push_back`]: StoutList::push_back
    pub(crate) fn append_raw(&mut self, item: T) {
        let mut target = self.last();
        if target == HEAD || self.arena[target].count() == self.node_size {
            let fresh = self.alloc();
            self.link_after(target, fresh);
            target = fresh;
        }
        self.arena[target].push(item);
        self.len += 1;
    }

    /// Inserts `item` at position `at`, shifting later elements right.
    ///
    /// `at` may be anywhere in `[0, len]`; `at == len` appends. Inserting at
    /// the front of a node prefers the previous node's free space; inserting
    /// into a full node splits its upper half into a new successor node and
    /// places the item in whichever half its offset falls into.
    ///
    /// # Errors
    ///
    /// Returns [`StoutListError::OutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    ///
    /// let mut list: StoutList<i32> = [1, 2, 3].iter().copied().collect();
    /// list.insert(2, 9).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 9, 3]);
    ///
    /// assert!(list.insert(9, 9).is_err());
    /// ```
    pub fn insert(&mut self, at: usize, item: T) -> Result<(), StoutListError> {
        if at > self.len {
            return Err(StoutListError::OutOfRange {
                pos: at,
                len: self.len,
            });
        }
        self.insert_at(at, item);
        Ok(())
    }

    /// Insertion body shared with the cursor; `at <= len` must already hold.
    pub(crate) fn insert_at(&mut self, at: usize, item: T) {
        if self.is_empty() {
            let fresh = self.alloc();
            self.link_after(HEAD, fresh);
            self.arena[fresh].push(item);
            self.len += 1;
            return;
        }
        let (node, offset) = self.locate_for_insert(at);
        let node_size = self.node_size;
        if offset == 0 {
            let prev = self.arena[node].prev;
            if prev != HEAD && self.arena[prev].count() < node_size {
                // The previous node has room: its end is the same logical
                // position, and the target node needs no shifting.
                self.arena[prev].push(item);
            } else if self.arena[node].count() == node_size {
                let fresh = self.alloc();
                self.link_after(node, fresh);
                self.arena[fresh].push(item);
            } else {
                self.arena[node].insert(0, item);
            }
        } else if self.arena[node].count() < node_size {
            self.arena[node].insert(offset, item);
        } else {
            let successor = self.split(node);
            let half = node_size / 2;
            if offset <= half {
                self.arena[node].insert(offset, item);
            } else {
                self.arena[successor].insert(offset - half, item);
            }
        }
        self.len += 1;
    }

    /// Moves the upper half of the full node `node` into a fresh successor
    /// linked right after it, and returns the successor.
    fn split(&mut self, node: usize) -> usize {
        debug_assert_eq!(self.arena[node].count(), self.node_size);
        let half = self.node_size / 2;
        let upper = self.arena[node].elems.split_off(half);
        let fresh = self.alloc();
        self.arena[fresh].elems = upper;
        self.link_after(node, fresh);
        fresh
    }

    /// Removes and returns the element at position `at`, shifting later
    /// elements left.
    ///
    /// A removal from a non-last node at half capacity refills it from its
    /// successor: one borrowed element when the successor is above half
    /// capacity (mini-merge), otherwise the whole successor is absorbed and
    /// its node dropped (full merge). A node whose count reaches zero is
    /// unlinked before returning.
    ///
    /// # Errors
    ///
    /// Returns [`StoutListError::OutOfRange`] if `at >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    ///
    /// let mut list: StoutList<i32> = (0..5).collect();
    /// assert_eq!(list.remove(2).unwrap(), 2);
    /// assert_eq!(list.len(), 4);
    /// assert!(list.remove(4).is_err());
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T, StoutListError> {
        if at >= self.len {
            return Err(StoutListError::OutOfRange {
                pos: at,
                len: self.len,
            });
        }
        Ok(self.remove_at(at))
    }

    /// Removal body shared with the cursor; `at < len` must already hold.
    pub(crate) fn remove_at(&mut self, at: usize) -> T {
        let (node, offset) = self.locate(at);
        let half = self.node_size / 2;
        let next = self.arena[node].next;
        let removed;
        if next == TAIL || self.arena[node].count() > half {
            removed = self.arena[node].remove(offset);
            if self.arena[node].count() == 0 {
                self.unlink(node);
            }
        } else if self.arena[next].count() > half {
            // Mini-merge: refill with a single element borrowed from the
            // front of the successor.
            removed = self.arena[node].remove(offset);
            let borrowed = self.arena[next].remove(0);
            self.arena[node].push(borrowed);
        } else {
            // Full merge: absorb the successor and drop its node.
            removed = self.arena[node].remove(offset);
            let mut spill = std::mem::take(&mut self.arena[next].elems);
            self.arena[node].elems.append(&mut spill);
            self.unlink(next);
        }
        self.len -= 1;
        removed
    }

    /// Copies every element into a `Vec` in list order without touching the
    /// chain.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Walks the chain once, moving every element into a flat `Vec` in list
    /// order, and resets the chain. Backs the sorts and `IntoIter`.
    pub(crate) fn drain_all(&mut self) -> Vec<T> {
        let mut flat = Vec::with_capacity(self.len);
        let mut node = self.first();
        while node != TAIL {
            flat.append(&mut self.arena[node].elems);
            node = self.arena[node].next;
        }
        self.clear();
        flat
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    ///
    /// let list: StoutList<i32> = (0..3).collect();
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a read-only cursor whose gap sits before the element at
    /// `at`; `at == len` seeds it past the last element.
    ///
    /// # Errors
    ///
    /// Returns [`StoutListError::OutOfRange`] if `at > len`.
    pub fn cursor(&self, at: usize) -> Result<Cursor<'_, T>, StoutListError> {
        if at > self.len {
            return Err(StoutListError::OutOfRange {
                pos: at,
                len: self.len,
            });
        }
        Ok(Cursor::new(self, at))
    }

    /// Provides a read-only cursor before the first element.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Provides a cursor with editing operations whose gap sits before the
    /// element at `at`; `at == len` seeds it past the last element.
    ///
    /// # Errors
    ///
    /// Returns [`StoutListError::OutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    ///
    /// let mut list: StoutList<i32> = (0..5).collect();
    /// let mut cursor = list.cursor_mut(2).unwrap();
    /// assert_eq!(cursor.move_next().unwrap(), &2);
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> Result<CursorMut<'_, T>, StoutListError> {
        if at > self.len {
            return Err(StoutListError::OutOfRange {
                pos: at,
                len: self.len,
            });
        }
        Ok(CursorMut::new(self, at))
    }

    /// Provides a cursor with editing operations before the first element.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }
}

impl<T: Display> StoutList<T> {
    /// Renders the internal node structure, one parenthesized group per
    /// node, `-` for an empty slot.
    ///
    /// Intended for tests and debugging; the flat, structure-free rendering
    /// is the `Debug` impl.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    ///
    /// let list: StoutList<i32> = (1..=5).collect();
    /// assert_eq!(list.structure(), "[(1, 2, 3, 4), (5, -, -, -)]");
    /// ```
    pub fn structure(&self) -> String {
        self.render(None)
    }

    /// Shared rendering for [`structure`] and the cursor variants: `cursor`
    /// is a gap position marked with `|` before the element it precedes, or
    /// with a trailing `|` when it sits past the last element.
    ///
    /// [`structure`]: StoutList::structure
    pub(crate) fn render(&self, cursor: Option<usize>) -> String {
        let mut out = String::from("[");
        let mut index = 0;
        let mut node = self.first();
        while node != TAIL {
            if node != self.first() {
                out.push_str(", ");
            }
            out.push('(');
            for slot in 0..self.node_size {
                if slot > 0 {
                    out.push_str(", ");
                }
                match self.arena[node].elems.get(slot) {
                    Some(item) => {
                        if cursor == Some(index) {
                            out.push_str("| ");
                        }
                        let _ = write!(out, "{}", item);
                        index += 1;
                        if cursor == Some(self.len) && index == self.len {
                            out.push_str(" |");
                        }
                    }
                    None => out.push('-'),
                }
            }
            out.push(')');
            node = self.arena[node].next;
        }
        out.push(']');
        out
    }
}

impl<T: Debug> Debug for StoutList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for StoutList<T> {
    fn default() -> Self {
        Self::new()
    }
}
