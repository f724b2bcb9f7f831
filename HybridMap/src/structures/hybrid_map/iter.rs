use std::iter::{FusedIterator, Zip};
use std::slice;

use hashbrown::hash_map;
use smallvec::SmallVec;

enum KeysInner<'a, K, V> {
    Array(slice::Iter<'a, K>),
    Hashed(hash_map::Keys<'a, K, V>),
}

enum ValuesInner<'a, K, V> {
    Array(slice::Iter<'a, V>),
    Hashed(hash_map::Values<'a, K, V>),
}

enum IterInner<'a, K, V> {
    Array(Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>),
    Hashed(hash_map::Iter<'a, K, V>),
}

enum IntoIterInner<K, V, const N: usize> {
    Array(Zip<smallvec::IntoIter<[K; N]>, smallvec::IntoIter<[V; N]>>),
    Hashed(hash_map::IntoIter<K, V>),
}

/// Keys of a [`HybridMap`](crate::HybridMap), from [`HybridMap::keys`](crate::HybridMap::keys).
pub struct Keys<'a, K, V> {
    inner: KeysInner<'a, K, V>,
}

/// Values of a [`HybridMap`](crate::HybridMap), in the same order as its keys.
pub struct Values<'a, K, V> {
    inner: ValuesInner<'a, K, V>,
}

/// Borrowed `(key, value)` pairs of a [`HybridMap`](crate::HybridMap).
pub struct Iter<'a, K, V> {
    inner: IterInner<'a, K, V>,
}

/// Owned `(key, value)` pairs, from consuming a [`HybridMap`](crate::HybridMap).
pub struct IntoIter<K, V, const N: usize> {
    inner: IntoIterInner<K, V, N>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn array(keys: &'a [K]) -> Self {
        Self { inner: KeysInner::Array(keys.iter()) }
    }

    pub(crate) fn hashed(keys: hash_map::Keys<'a, K, V>) -> Self {
        Self { inner: KeysInner::Hashed(keys) }
    }
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn array(values: &'a [V]) -> Self {
        Self { inner: ValuesInner::Array(values.iter()) }
    }

    pub(crate) fn hashed(values: hash_map::Values<'a, K, V>) -> Self {
        Self { inner: ValuesInner::Hashed(values) }
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn array(keys: &'a [K], values: &'a [V]) -> Self {
        Self { inner: IterInner::Array(keys.iter().zip(values.iter())) }
    }

    pub(crate) fn hashed(iter: hash_map::Iter<'a, K, V>) -> Self {
        Self { inner: IterInner::Hashed(iter) }
    }
}

impl<K, V, const N: usize> IntoIter<K, V, N> {
    pub(crate) fn array(keys: SmallVec<[K; N]>, values: SmallVec<[V; N]>) -> Self {
        Self { inner: IntoIterInner::Array(keys.into_iter().zip(values)) }
    }

    pub(crate) fn hashed(iter: hash_map::IntoIter<K, V>) -> Self {
        Self { inner: IntoIterInner::Hashed(iter) }
    }
}

macro_rules! delegate {
    ($self:expr, $inner:ident, $method:ident $(, $args:expr )* ) => {
        match $self {
            $inner::Array(it) => it.$method($($args),*),
            $inner::Hashed(it) => it.$method($($args),*),
        }
    };
}

// Every inner iterator is exact-size and fused, so the wrappers forward
// `next`/`size_hint` and inherit both properties.
macro_rules! forward_iterator {
    ([$($generics:tt)*] $outer:ty, $inner:ident, $item:ty) => {
        impl<$($generics)*> Iterator for $outer {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                delegate!(&mut self.inner, $inner, next)
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                delegate!(&self.inner, $inner, size_hint)
            }
        }

        impl<$($generics)*> ExactSizeIterator for $outer {
            #[inline]
            fn len(&self) -> usize {
                delegate!(&self.inner, $inner, len)
            }
        }

        impl<$($generics)*> FusedIterator for $outer {}
    };
}

forward_iterator!(['a, K, V] Keys<'a, K, V>, KeysInner, &'a K);
forward_iterator!(['a, K, V] Values<'a, K, V>, ValuesInner, &'a V);
forward_iterator!(['a, K, V] Iter<'a, K, V>, IterInner, (&'a K, &'a V));
forward_iterator!([K, V, const N: usize] IntoIter<K, V, N>, IntoIterInner, (K, V));

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            KeysInner::Array(it) => KeysInner::Array(it.clone()),
            KeysInner::Hashed(it) => KeysInner::Hashed(it.clone()),
        };
        Self { inner }
    }
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            ValuesInner::Array(it) => ValuesInner::Array(it.clone()),
            ValuesInner::Hashed(it) => ValuesInner::Hashed(it.clone()),
        };
        Self { inner }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            IterInner::Array(it) => IterInner::Array(it.clone()),
            IterInner::Hashed(it) => IterInner::Hashed(it.clone()),
        };
        Self { inner }
    }
}
