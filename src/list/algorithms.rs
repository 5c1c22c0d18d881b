use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::list::StoutList;

impl<T: PartialEq> PartialEq for StoutList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for StoutList<T> {}

impl<T: PartialOrd> PartialOrd for StoutList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for StoutList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for StoutList<T> {
    fn clone(&self) -> Self {
        // `collect` would fall back to the default node size; the clone
        // keeps the original's.
        let mut list = Self::with_validated_size(self.node_size());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: Hash> Hash for StoutList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elt in self {
            elt.hash(state);
        }
        self.len().hash(state);
    }
}

impl<T> StoutList<T> {
    /// Returns `true` if the list contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    ///
    /// let list: StoutList<i32> = (0..3).collect();
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Sorts the list in non-decreasing natural order.
    ///
    /// The elements are extracted into a flat buffer, the chain is reset,
    /// the buffer is sorted with a stable insertion sort, and everything is
    /// re-appended. Because appending only opens a new node when the current
    /// one is full, this leaves every node but the last completely packed.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    ///
    /// let mut list = StoutList::from([5, 1, 4, 2, 3]);
    /// list.sort();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    /// assert_eq!(list.structure(), "[(1, 2, 3, 4), (5, -, -, -)]");
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        let mut flat = self.drain_all();
        insertion_sort(&mut flat, |a, b| a.cmp(b));
        self.extend(flat);
    }

    /// Sorts the list in non-increasing natural order.
    ///
    /// Same extraction/reset/re-append shape as [`sort`], with the flat
    /// buffer ordered by a bubble sort comparing elements directly. Leaves
    /// every node but the last completely packed.
    ///
    /// # Examples
    ///
    /// ```
    /// use stout_list::StoutList;
    ///
    /// let mut list = StoutList::from([5, 1, 4, 2, 3]);
    /// list.sort_reverse();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    /// ```
    ///
    /// [`sort`]: StoutList::sort
    pub fn sort_reverse(&mut self)
    where
        T: Ord,
    {
        let mut flat = self.drain_all();
        bubble_sort(&mut flat);
        self.extend(flat);
    }
}

/// Sorts `items` in non-decreasing order under `compare` with an insertion
/// sort. Stable: equal elements are never reordered.
fn insertion_sort<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sorts `items` in non-increasing natural order with a bubble sort.
/// Stable: only strictly out-of-order neighbours are swapped.
fn bubble_sort<T: Ord>(items: &mut [T]) {
    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in 1..items.len() {
            if items[i - 1].cmp(&items[i]) == Ordering::Less {
                items.swap(i - 1, i);
                swapped = true;
            }
        }
    }
}
