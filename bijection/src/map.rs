//! Operations shared by associative containers
use indexmap::IndexMap;
use std::{collections::HashMap, hash::Hash};

use crate::Bimap;

/// The operation set shared by [`Bimap`] and ordinary maps
///
/// This lets a function accept either a `Bimap` or a plain map, as long as it
/// only needs the forward direction:
///
/// ```
/// use bijection::{Bimap, Map};
/// use std::collections::HashMap;
///
/// fn register<M: Map<&'static str, u32>>(m: &mut M) {
///     m.set("root", 0);
///     m.set("daemon", 1);
/// }
///
/// let mut a = Bimap::new();
/// let mut b = HashMap::new();
/// register(&mut a);
/// register(&mut b);
/// assert_eq!(Map::len(&a), Map::len(&b));
/// assert_eq!(a.get_by_value(&1), Some(&"daemon"));
/// ```
pub trait Map<K, V> {
    /// Checks whether the given key is present
    fn contains_key(&self, key: &K) -> bool;

    /// Looks up the value associated with the given key
    fn get(&self, key: &K) -> Option<&V>;

    /// Associates `value` with `key`, replacing any previous association
    fn set(&mut self, key: K, value: V);

    /// Removes the entry with the given key, returning `true` if it existed
    fn delete(&mut self, key: &K) -> bool;

    /// Returns the number of entries
    fn len(&self) -> usize;

    /// Checks whether there are no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry
    fn clear(&mut self);

    /// Calls `f(key, value)` for every entry
    ///
    /// Entries are visited in the container's own iteration order.
    fn for_each_entry<F: FnMut(&K, &V)>(&self, f: F);
}

impl<K, V> Map<K, V> for Bimap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    fn contains_key(&self, key: &K) -> bool {
        Bimap::contains_key(self, key)
    }
    fn get(&self, key: &K) -> Option<&V> {
        Bimap::get(self, key)
    }
    fn set(&mut self, key: K, value: V) {
        Bimap::set(self, key, value);
    }
    fn delete(&mut self, key: &K) -> bool {
        Bimap::delete(self, key)
    }
    fn len(&self) -> usize {
        Bimap::len(self)
    }
    fn clear(&mut self) {
        Bimap::clear(self)
    }
    fn for_each_entry<F: FnMut(&K, &V)>(&self, mut f: F) {
        for (k, v) in self {
            f(k, v);
        }
    }
}

impl<K: Hash + Eq, V> Map<K, V> for IndexMap<K, V> {
    fn contains_key(&self, key: &K) -> bool {
        IndexMap::contains_key(self, key)
    }
    fn get(&self, key: &K) -> Option<&V> {
        IndexMap::get(self, key)
    }
    fn set(&mut self, key: K, value: V) {
        IndexMap::insert(self, key, value);
    }
    fn delete(&mut self, key: &K) -> bool {
        // Preserve the order of the remaining entries
        IndexMap::shift_remove(self, key).is_some()
    }
    fn len(&self) -> usize {
        IndexMap::len(self)
    }
    fn clear(&mut self) {
        IndexMap::clear(self)
    }
    fn for_each_entry<F: FnMut(&K, &V)>(&self, mut f: F) {
        for (k, v) in self {
            f(k, v);
        }
    }
}

impl<K: Hash + Eq, V> Map<K, V> for HashMap<K, V> {
    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }
    fn set(&mut self, key: K, value: V) {
        HashMap::insert(self, key, value);
    }
    fn delete(&mut self, key: &K) -> bool {
        HashMap::remove(self, key).is_some()
    }
    fn len(&self) -> usize {
        HashMap::len(self)
    }
    fn clear(&mut self) {
        HashMap::clear(self)
    }
    fn for_each_entry<F: FnMut(&K, &V)>(&self, mut f: F) {
        for (k, v) in self {
            f(k, v);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn exercise<M: Map<&'static str, i32> + Default>() -> M {
        let mut m = M::default();
        assert!(m.is_empty());
        m.set("A", 1);
        m.set("B", 2);
        m.set("C", 3);
        assert!(m.contains_key(&"A"));
        assert_eq!(m.get(&"B"), Some(&2));
        assert!(m.delete(&"B"));
        assert!(!m.delete(&"B"));
        assert_eq!(m.len(), 2);
        m
    }

    fn entries<M: Map<&'static str, i32>>(m: &M) -> Vec<(&'static str, i32)> {
        let mut out = vec![];
        m.for_each_entry(|k, v| out.push((*k, *v)));
        out
    }

    #[test]
    fn bimap() {
        let mut m: Bimap<_, _> = exercise();
        assert_eq!(entries(&m), [("A", 1), ("C", 3)]);

        // Unlike a plain map, setting a duplicate value evicts its old key
        Map::set(&mut m, "D", 1);
        assert_eq!(entries(&m), [("C", 3), ("D", 1)]);

        Map::clear(&mut m);
        assert!(Map::is_empty(&m));
    }

    #[test]
    fn index_map() {
        let mut m: IndexMap<_, _> = exercise();
        assert_eq!(entries(&m), [("A", 1), ("C", 3)]);

        Map::set(&mut m, "D", 1);
        assert_eq!(entries(&m), [("A", 1), ("C", 3), ("D", 1)]);

        Map::clear(&mut m);
        assert!(Map::is_empty(&m));
    }

    #[test]
    fn hash_map() {
        let mut m: HashMap<_, _> = exercise();
        let mut e = entries(&m);
        e.sort();
        assert_eq!(e, [("A", 1), ("C", 3)]);

        Map::clear(&mut m);
        assert_eq!(Map::len(&m), 0);
    }
}
