use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given
    /// value.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Insert an element into its sorted position, taking ownership of it.
    ///
    /// Walks from the front and splices the new node immediately before the
    /// first element that is not less than `item`; if no such element
    /// exists, appends at the back. An item equal to existing elements is
    /// therefore inserted before them.
    ///
    /// Interleaving sorted insertion with positional insertion is allowed
    /// but the ordering guarantee only holds for a list built entirely by
    /// sorted insertion under one consistent ordering.
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
    /// list.insert_sorted(5);
    /// list.insert_sorted(3);
    /// list.insert_sorted(8);
    ///
    /// #[cfg(feature = "length")]
    /// assert_eq!(list.len(), 3);
    /// assert_eq!(list.front(), Some(&3));
    /// assert_eq!(list.back(), Some(&8));
    /// assert_eq!(list.to_string(), "[3, 5, 8]");
    /// ```
    pub fn insert_sorted(&mut self, item: T)
    where
        T: Ord,
    {
        self.insert_sorted_by(item, T::cmp)
    }

    /// Insert an element into its sorted position under a caller-supplied
    /// comparator.
    ///
    /// The comparator is called as `compare(element, &item)` with `element`
    /// already in the list, and insertion happens before the first element
    /// for which it does not return [`Ordering::Less`]. The direction
    /// convention (ascending, descending, or anything else) is entirely the
    /// comparator's; the list imposes none of its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// // A reversed comparator yields a descending list.
    /// list.insert_sorted_by(5, |a, b| b.cmp(a));
    /// list.insert_sorted_by(3, |a, b| b.cmp(a));
    /// list.insert_sorted_by(8, |a, b| b.cmp(a));
    ///
    /// assert_eq!(list.to_string(), "[8, 5, 3]");
    /// ```
    pub fn insert_sorted_by<F>(&mut self, item: T, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut cursor = self.cursor_start_mut();
        while let Some(element) = cursor.current() {
            if compare(element, &item) != Ordering::Less {
                break;
            }
            cursor.move_next_cyclic();
        }
        // Inserting at the ghost node appends at the back.
        cursor.insert(item);
    }

    /// Insert an element into its sorted position under a key extraction
    /// function.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.insert_sorted_by_key(-5i32, |k| k.abs());
    /// list.insert_sorted_by_key(3, |k| k.abs());
    /// list.insert_sorted_by_key(-8, |k| k.abs());
    ///
    /// assert_eq!(list.to_string(), "[3, -5, -8]");
    /// ```
    pub fn insert_sorted_by_key<K, F>(&mut self, item: T, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        let key = f(&item);
        self.insert_sorted_by(item, |element, _| f(element).cmp(&key))
    }

    /// Remove the first element equal to `needle` and return it by value,
    /// or return `None` if no element matches or the list is empty.
    ///
    /// The neighbors of the removed node are relinked and ownership of the
    /// element moves back to the caller — the list does not drop it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 2]);
    ///
    /// assert_eq!(list.remove_first(&2), Some(2)); // only the first match
    /// assert_eq!(Vec::from_iter(&list), vec![&1, &3, &2]);
    ///
    /// assert_eq!(list.remove_first(&7), None);
    /// ```
    pub fn remove_first(&mut self, needle: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.remove_first_by(|element| element == needle)
    }

    /// Remove the first element matching the predicate and return it by
    /// value, or return `None` if no element matches or the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter(1..6);
    ///
    /// assert_eq!(list.remove_first_by(|e| e % 2 == 0), Some(2));
    /// assert_eq!(Vec::from_iter(list), vec![1, 3, 4, 5]);
    /// ```
    pub fn remove_first_by<F>(&mut self, mut matches: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor_start_mut();
        while let Some(element) = cursor.current() {
            if matches(element) {
                return cursor.remove();
            }
            cursor.move_next_cyclic();
        }
        None
    }

    /// Return a reference to the first element matching the predicate, or
    /// `None` if no element matches or the list is empty. Never transfers
    /// ownership.
    ///
    /// The predicate is independent of the element type's own comparison,
    /// allowing ad hoc search criteria.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordlist::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter(["ant", "bee", "cow"]);
    ///
    /// assert_eq!(list.find_by(|e| e.starts_with('b')), Some(&"bee"));
    /// assert_eq!(list.find_by(|e| e.len() > 3), None);
    /// ```
    pub fn find_by<F>(&self, mut matches: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|&element| matches(element))
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::iter::FromIterator;

    #[test]
    fn insert_sorted_ascending() {
        let mut list = List::new();
        list.insert_sorted(5);
        list.insert_sorted(3);
        list.insert_sorted(8);

        #[cfg(feature = "length")]
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&3));
        assert_eq!(list.back(), Some(&8));
        assert_eq!(Vec::from_iter(&list), vec![&3, &5, &8]);
    }

    #[test]
    fn insert_sorted_boundaries() {
        let mut list = List::new();
        list.insert_sorted(4); // into an empty list
        assert_eq!(list.to_string(), "[4]");

        list.insert_sorted(9); // append at the back
        list.insert_sorted(1); // splice at the front
        list.insert_sorted(4); // equal: goes before the existing 4
        assert_eq!(list.to_string(), "[1, 4, 4, 9]");
    }

    #[test]
    fn insert_sorted_stays_sorted_under_interleaving() {
        let mut list = List::new();
        for item in [7, 2, 9, 2, 0, 5, 5, 1].iter().copied() {
            list.insert_sorted(item);
            let collected: Vec<i32> = list.iter().copied().collect();
            let mut expected = collected.clone();
            expected.sort();
            assert_eq!(collected, expected);
        }
    }

    #[test]
    fn insert_sorted_by_descending() {
        let mut list = List::new();
        for item in [3, 1, 4, 1, 5].iter().copied() {
            list.insert_sorted_by(item, |a, b| b.cmp(a));
        }
        assert_eq!(Vec::from_iter(list), vec![5, 4, 3, 1, 1]);
    }

    #[test]
    fn insert_sorted_by_key_orders_by_key() {
        let mut list = List::new();
        for word in ["hello", "hi", "hey"].iter().copied() {
            list.insert_sorted_by_key(word, |w| w.len());
        }
        assert_eq!(Vec::from_iter(list), vec!["hi", "hey", "hello"]);
    }

    #[test]
    fn remove_first_on_empty_list() {
        let mut list = List::<i32>::new();
        assert_eq!(list.remove_first(&1), None);
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn remove_first_without_match_leaves_list_unchanged() {
        let mut list = List::from_iter([1, 2, 3]);
        assert_eq!(list.remove_first(&7), None);
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 3);
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3]);
    }

    #[test]
    fn remove_first_relinks_neighbors() {
        let mut list = List::from_iter([1, 2, 3]);
        assert_eq!(list.remove_first(&2), Some(2));

        // Both walking directions must still agree after the splice.
        assert_eq!(Vec::from_iter(&list), vec![&1, &3]);
        assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![&3, &1]);
        #[cfg(feature = "length")]
        assert_eq!(list.len(), 2);

        assert_eq!(list.remove_first(&1), Some(1));
        assert_eq!(list.remove_first(&3), Some(3));
        assert!(list.is_empty());
    }

    #[test]
    fn remove_first_takes_only_the_first_match() {
        let mut list = List::from_iter([2, 1, 2, 2]);
        assert_eq!(list.remove_first(&2), Some(2));
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &2]);
    }

    #[test]
    fn remove_first_by_predicate() {
        let mut list = List::from_iter(1..6);
        assert_eq!(list.remove_first_by(|e| e % 2 == 0), Some(2));
        assert_eq!(list.remove_first_by(|e| e % 2 == 0), Some(4));
        assert_eq!(list.remove_first_by(|e| e % 2 == 0), None);
        assert_eq!(Vec::from_iter(list), vec![1, 3, 5]);
    }

    #[test]
    fn find_by_is_independent_of_equality() {
        let list = List::from_iter([10, 21, 32, 43]);
        assert_eq!(list.find_by(|e| e % 10 == 1), Some(&21));
        assert_eq!(list.find_by(|e| *e > 100), None);
        assert_eq!(List::<i32>::new().find_by(|_| true), None);
    }

    #[test]
    fn contains_uses_equality() {
        let list = List::from_iter(0..3);
        assert!(list.contains(&0));
        assert!(list.contains(&2));
        assert!(!list.contains(&3));
    }

    #[test]
    fn clone_and_compare() {
        let list = List::from_iter([1, 2, 3]);
        let cloned = list.clone();
        assert_eq!(list, cloned);

        let smaller = List::from_iter([1, 2]);
        assert!(smaller < list);
        assert_ne!(smaller, list);
    }
}
