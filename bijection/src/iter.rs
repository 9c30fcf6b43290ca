//! Iterators over a [`Bimap`](crate::Bimap)
//!
//! All of them walk the forward map in insertion order.
use std::iter::FusedIterator;

macro_rules! define_iter {
    ($name:ident, $inner:ident, $item:ty, $doc:literal $(, $lt:lifetime)?) => {
        #[doc = $doc]
        #[derive(Debug)]
        pub struct $name<$($lt,)? K, V>(indexmap::map::$inner<$($lt,)? K, V>);

        impl<$($lt,)? K, V> $name<$($lt,)? K, V> {
            pub(crate) fn new(
                inner: indexmap::map::$inner<$($lt,)? K, V>,
            ) -> Self {
                Self(inner)
            }
        }

        impl<$($lt,)? K, V> Iterator for $name<$($lt,)? K, V> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.0.next()
            }
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.0.size_hint()
            }
            fn count(self) -> usize {
                self.0.len()
            }
        }

        impl<$($lt,)? K, V> DoubleEndedIterator for $name<$($lt,)? K, V> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.0.next_back()
            }
        }

        impl<$($lt,)? K, V> ExactSizeIterator for $name<$($lt,)? K, V> {
            fn len(&self) -> usize {
                self.0.len()
            }
        }

        impl<$($lt,)? K, V> FusedIterator for $name<$($lt,)? K, V> {}
    };
}

define_iter!(
    Iter,
    Iter,
    (&'a K, &'a V),
    "Iterator over `(&K, &V)` pairs, returned by [`Bimap::iter`](crate::Bimap::iter)",
    'a
);
define_iter!(
    Keys,
    Keys,
    &'a K,
    "Iterator over keys, returned by [`Bimap::keys`](crate::Bimap::keys)",
    'a
);
define_iter!(
    Values,
    Values,
    &'a V,
    "Iterator over values, returned by [`Bimap::values`](crate::Bimap::values)",
    'a
);
define_iter!(
    IntoIter,
    IntoIter,
    (K, V),
    "Owning iterator over `(K, V)` pairs, returned by `Bimap::into_iter`"
);

// Borrowing iterators can be restarted from a copy
impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
