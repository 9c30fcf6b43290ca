//! `bijection` provides [`Bimap`], a map which keeps a one-to-one association
//! between keys and values and can be searched in either direction.
//!
//! A `Bimap` is built from two insertion-ordered hash maps
//! ([`IndexMap`](indexmap::IndexMap)s), a **forward** map from key to value
//! and a **backward** map from value to key.  Every mutating operation updates
//! both of them, so the following always holds: if `get(k)` returns `v`, then
//! `get_by_value(v)` returns `k`, and vice versa.
//!
//! ```
//! use bijection::Bimap;
//!
//! let mut ids = Bimap::from([(1, "alice"), (2, "bob")]);
//! assert_eq!(ids.get(&1), Some(&"alice"));
//! assert_eq!(ids.get_by_value("bob"), Some(&2));
//!
//! // Deleting by value removes the pair from both directions
//! assert!(ids.delete_by_value("alice"));
//! assert!(!ids.contains_key(&1));
//! ```
//!
//! # Collisions
//! Inserting a pair evicts any existing pair that shares its key **or** its
//! value.  In the worst case, a single call evicts two different pairs:
//!
//! ```
//! use bijection::{Bimap, Overwritten};
//!
//! let mut m = Bimap::from([("A", 10), ("B", 20)]);
//! let out = m.insert("A", 20);
//! assert_eq!(out, Overwritten::Both(("A", 10), ("B", 20)));
//! assert_eq!(m.len(), 1);
//! ```
//!
//! [`Bimap::set`] performs the same operation, discarding the evicted pairs
//! and returning the map itself so that calls can be chained.
//!
//! # Iteration order
//! Pairs are iterated in insertion order.  Re-inserting a key (or value) moves
//! the new pair to the end, since the old pair is removed first:
//!
//! ```
//! use bijection::Bimap;
//!
//! let mut m = Bimap::new();
//! m.set("A", 1).set("B", 2).set("A", 3);
//! let keys: Vec<_> = m.keys().copied().collect();
//! assert_eq!(keys, ["B", "A"]);
//! ```
//!
//! # Generic maps
//! The [`Map`] trait describes the operation set shared with other
//! associative containers, so code can be written once for a `Bimap`, an
//! [`IndexMap`](indexmap::IndexMap), or a
//! [`HashMap`](std::collections::HashMap).
//!
//! # Text format
//! [`Bimap::from_text`] and [`Bimap::to_text`] read and write a simple
//! line-based format:
//! ```text
//! # comments and blank lines are skipped
//! alice = 1
//! bob = 2
//! ```
//!
//! # Feature flags
#![doc = document_features::document_features!()]
#![warn(missing_docs)]

mod bimap;
mod error;
mod iter;
mod map;
mod text;

#[cfg(feature = "serde")]
mod serialize;

pub use bimap::{Bimap, Overwritten};
pub use error::Error;
pub use iter::{IntoIter, Iter, Keys, Values};
pub use map::Map;
