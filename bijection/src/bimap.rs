use indexmap::{Equivalent, IndexMap};
use log::trace;
use std::hash::Hash;

use crate::iter::{IntoIter, Iter, Keys, Values};

/// A one-to-one map between keys and values, searchable in both directions
///
/// Internally, this stores a forward map (`K → V`) and a backward map
/// (`V → K`).  Every key and value is stored twice, which is why mutation
/// requires `K: Clone` and `V: Clone`.
///
/// Both maps preserve insertion order.  Removal shifts later entries down to
/// keep that order, so it is `O(n)` in the worst case; lookups are `O(1)`.
#[derive(Clone)]
pub struct Bimap<K, V> {
    forward: IndexMap<K, V>,
    backward: IndexMap<V, K>,
}

/// Pairs evicted by [`Bimap::insert`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Overwritten<K, V> {
    /// Neither the key nor the value was present
    Neither,

    /// The identical pair was already present
    Pair(K, V),

    /// The key was present with a different value, which was evicted
    Key(K, V),

    /// The value was present with a different key, which was evicted
    Value(K, V),

    /// Both the key and the value were present, in two different pairs
    ///
    /// The first pair matched on key; the second matched on value.
    Both((K, V), (K, V)),
}

impl<K, V> Overwritten<K, V> {
    /// Checks whether any pair was evicted
    pub fn did_overwrite(&self) -> bool {
        !matches!(self, Overwritten::Neither)
    }
}

impl<K, V> Default for Bimap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Bimap<K, V> {
    /// Name reported when formatting a `Bimap`
    pub const TYPE_TAG: &'static str = "Bimap";

    /// Builds a new empty map
    pub fn new() -> Self {
        Self {
            forward: IndexMap::new(),
            backward: IndexMap::new(),
        }
    }

    /// Builds a new empty map with room for at least `n` pairs
    pub fn with_capacity(n: usize) -> Self {
        Self {
            forward: IndexMap::with_capacity(n),
            backward: IndexMap::with_capacity(n),
        }
    }

    /// Returns the number of pairs in the map
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.forward.len(), self.backward.len());
        self.forward.len()
    }

    /// Checks whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Removes every pair from the map
    pub fn clear(&mut self) {
        self.forward.clear();
        self.backward.clear();
    }

    /// Iterates over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.forward.iter())
    }

    /// Iterates over keys in insertion order
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.forward.keys())
    }

    /// Iterates over values in insertion order
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.forward.values())
    }

    /// Calls `f(value, key, map)` for each pair, in insertion order
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &K, &Self),
    {
        for (k, v) in self {
            f(v, k, self);
        }
    }

    /// Calls `f(context, value, key, map)` for each pair, in insertion order
    ///
    /// This is equivalent to [`for_each`](Self::for_each) with a closure that
    /// captures `context`, but lets the caller hand a receiver to a plain
    /// function.
    pub fn for_each_with<C, F>(&self, context: &mut C, mut f: F)
    where
        F: FnMut(&mut C, &V, &K, &Self),
    {
        for (k, v) in self {
            f(context, v, k, self);
        }
    }
}

impl<K, V> Bimap<K, V>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
    /// Looks up the value associated with the given key
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.forward.get(key)
    }

    /// Looks up the key associated with the given value
    pub fn get_by_value<Q>(&self, value: &Q) -> Option<&K>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.backward.get(value)
    }

    /// Checks whether the given key is present
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.forward.contains_key(key)
    }

    /// Checks whether the given value is present
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.backward.contains_key(value)
    }

    /// Removes the pair with the given key, returning it
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let (k, v) = self.forward.shift_remove_entry(key)?;
        let prev = self.backward.shift_remove(&v);
        debug_assert!(prev.is_some(), "value is missing from backward map");
        Some((k, v))
    }

    /// Removes the pair with the given value, returning it
    pub fn remove_by_value<Q>(&mut self, value: &Q) -> Option<(K, V)>
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        let (v, k) = self.backward.shift_remove_entry(value)?;
        let prev = self.forward.shift_remove(&k);
        debug_assert!(prev.is_some(), "key is missing from forward map");
        Some((k, v))
    }

    /// Removes the pair with the given key
    ///
    /// Returns `true` if a pair was removed, or `false` if the key was not
    /// present (in which case the map is unchanged).
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.remove(key).is_some()
    }

    /// Removes the pair with the given value
    ///
    /// Returns `true` if a pair was removed, or `false` if the value was not
    /// present (in which case the map is unchanged).
    pub fn delete_by_value<Q>(&mut self, value: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<V>,
    {
        self.remove_by_value(value).is_some()
    }

    /// Keeps only the pairs for which `f(key, value)` returns `true`
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.forward.retain(|k, v| f(k, &*v));
        let forward = &self.forward;
        self.backward.retain(|_, k| forward.contains_key(&*k));
    }
}

impl<K, V> Bimap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    /// Builds a map from an optional sequence of pairs
    ///
    /// `None` produces an empty map.  Pairs are inserted in order with
    /// [`set`](Self::set), so later pairs evict earlier ones that share a key
    /// or value.
    ///
    /// ```
    /// # use bijection::Bimap;
    /// let m = Bimap::from_entries(Some(vec![("A", 1), ("B", 1)]));
    /// assert_eq!(m.get_by_value(&1), Some(&"B"));
    ///
    /// let empty = Bimap::<&str, i32>::from_entries(None::<Vec<_>>);
    /// assert!(empty.is_empty());
    /// ```
    pub fn from_entries<I>(entries: Option<I>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        entries.into_iter().flatten().collect()
    }

    /// Inserts a pair, evicting any pairs which share its key or value
    ///
    /// The new pair is placed at the end of the iteration order.  Returns the
    /// evicted pairs; see [`Overwritten`] for details.
    pub fn insert(&mut self, key: K, value: V) -> Overwritten<K, V> {
        let out = match (self.remove(&key), self.remove_by_value(&value)) {
            (None, None) => Overwritten::Neither,
            (Some((k, v)), None) if v == value => Overwritten::Pair(k, v),
            (Some((k, v)), None) => Overwritten::Key(k, v),
            (None, Some((k, v))) => Overwritten::Value(k, v),
            (Some(a), Some(b)) => {
                trace!("insert evicted two pairs (one by key, one by value)");
                Overwritten::Both(a, b)
            }
        };
        self.forward.insert(key.clone(), value.clone());
        self.backward.insert(value, key);
        out
    }

    /// Inserts a pair, evicting any pairs which share its key or value
    ///
    /// Returns the map itself, so that calls can be chained.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        self.insert(key, value);
        self
    }

    /// Inserts a pair only if neither its key nor its value is present
    ///
    /// Otherwise, the map is unchanged and the pair is handed back.
    pub fn insert_no_overwrite(
        &mut self,
        key: K,
        value: V,
    ) -> Result<(), (K, V)> {
        if self.contains_key(&key) || self.contains_value(&value) {
            return Err((key, value));
        }
        self.forward.insert(key.clone(), value.clone());
        self.backward.insert(value, key);
        Ok(())
    }
}

impl<K, V> PartialEq for Bimap<K, V>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
    /// Two maps are equal if they contain the same pairs, in any order
    fn eq(&self, other: &Self) -> bool {
        self.forward == other.forward
    }
}

impl<K, V> Eq for Bimap<K, V>
where
    K: Hash + Eq,
    V: Hash + Eq,
{
}

impl<K, V> std::fmt::Debug for Bimap<K, V>
where
    K: std::fmt::Debug,
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", Self::TYPE_TAG)?;
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Bimap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<'a, K, V> FromIterator<(&'a K, &'a V)> for Bimap<K, V>
where
    K: Hash + Eq + Clone + 'a,
    V: Hash + Eq + Clone + 'a,
{
    fn from_iter<I: IntoIterator<Item = (&'a K, &'a V)>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<K, V> Extend<(K, V)> for Bimap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<'a, K, V> Extend<(&'a K, &'a V)> for Bimap<K, V>
where
    K: Hash + Eq + Clone + 'a,
    V: Hash + Eq + Clone + 'a,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k.clone(), v.clone());
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Bimap<K, V>
where
    K: Hash + Eq + Clone,
    V: Hash + Eq + Clone,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self::from_iter(pairs)
    }
}

impl<'a, K, V> IntoIterator for &'a Bimap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for Bimap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.forward.into_iter())
    }
}

static_assertions::assert_impl_all!(Bimap<String, u64>: Send, Sync);
static_assertions::assert_not_impl_any!(
    Bimap<std::rc::Rc<str>, u64>: Send, Sync
);
