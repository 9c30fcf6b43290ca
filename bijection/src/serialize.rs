//! `serde` support, serializing a map as a sequence of `(key, value)` pairs
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};
use std::{fmt, hash::Hash, marker::PhantomData};

use crate::Bimap;

impl<K: Serialize, V: Serialize> Serialize for Bimap<K, V> {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

struct BimapVisitor<K, V>(PhantomData<fn() -> (K, V)>);

impl<'de, K, V> Visitor<'de> for BimapVisitor<K, V>
where
    K: Deserialize<'de> + Hash + Eq + Clone,
    V: Deserialize<'de> + Hash + Eq + Clone,
{
    type Value = Bimap<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of key-value pairs, or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Bimap::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Bimap::new())
    }

    fn visit_some<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(
        self,
        mut seq: A,
    ) -> Result<Self::Value, A::Error> {
        // Don't trust the size hint with a huge allocation
        let n = seq.size_hint().unwrap_or(0).min(4096);
        let mut out = Bimap::with_capacity(n);
        while let Some((k, v)) = seq.next_element::<(K, V)>()? {
            out.set(k, v);
        }
        Ok(out)
    }
}

/// Reads a sequence of pairs, inserting each one with [`Bimap::set`]
///
/// A unit or `null` produces an empty map.  Any other shape of input (a
/// number, string, or map) is rejected with a type error.  This requires a
/// self-describing format such as JSON.
impl<'de, K, V> Deserialize<'de> for Bimap<K, V>
where
    K: Deserialize<'de> + Hash + Eq + Clone,
    V: Deserialize<'de> + Hash + Eq + Clone,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BimapVisitor(PhantomData))
    }
}
