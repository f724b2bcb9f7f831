use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::Index;

use hashbrown::HashMap;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;

use crate::error::HybridMapError;
use crate::structures::hybrid_map::builder::Builder;
use crate::structures::hybrid_map::iter::{IntoIter, Iter, Keys, Values};

/// Entries the array representation holds before construction switches to
/// a hash map.
pub const THRESHOLD: usize = 6;

/// Which representation a [`HybridMap`] settled on during construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Index-aligned inline key and value buffers, searched linearly.
    Array,
    /// A hash map; entered once more than `N` pairs were supplied.
    Hashed,
}

#[derive(Clone)]
pub(crate) enum Repr<K, V, const N: usize, S> {
    Array {
        keys: SmallVec<[K; N]>,
        values: SmallVec<[V; N]>,
    },
    Hashed(HashMap<K, V, S>),
}

/// A build-once, read-only map that scans an inline array while it holds at
/// most `N` entries and delegates to a hash map beyond that.
///
/// The representation is chosen while the input is consumed and never
/// changes afterwards. In array mode `keys`, `values` and `iter` follow the
/// input order; in hashed mode their order is unspecified.
///
/// ```
/// use hybridmap::{HybridMap, Mode};
///
/// let headers = HybridMap::new([("host", "example.com"), ("accept", "*/*")]).unwrap();
/// assert_eq!(headers.mode(), Mode::Array);
/// assert_eq!(headers.get("host"), Ok(&"example.com"));
/// assert!(headers.get("cookie").is_err());
/// assert_eq!(headers.keys().copied().collect::<Vec<_>>(), ["host", "accept"]);
/// ```
#[derive(Clone)]
pub struct HybridMap<K, V, const N: usize = THRESHOLD, S = FxBuildHasher> {
    repr: Repr<K, V, N, S>,
}

impl<K, V> HybridMap<K, V, THRESHOLD, FxBuildHasher>
where
    K: Eq + Hash,
{
    /// Builds a map from `pairs`, keeping their order while in array mode.
    ///
    /// Fails with [`HybridMapError::KeyConflict`] if a key repeats.
    pub fn new<I>(pairs: I) -> Result<Self, HybridMapError<K>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::with_hasher(pairs, FxBuildHasher::default())
    }
}

impl<K, V, const N: usize, S> HybridMap<K, V, N, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Like [`HybridMap::new`], for any threshold and hasher. The hasher is
    /// only kept if the map migrates.
    pub fn with_hasher<I>(pairs: I, hasher: S) -> Result<Self, HybridMapError<K>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let pairs = pairs.into_iter();
        let mut builder = Builder::new(hasher, pairs.size_hint().0);
        for (key, value) in pairs {
            builder.push(key, value)?;
        }
        Ok(builder.finish())
    }

    /// Looks up `key`, failing with [`HybridMapError::KeyNotFound`] when it
    /// is absent.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, HybridMapError<Q::Owned>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned + ?Sized,
    {
        self.try_get(key)
            .ok_or_else(|| HybridMapError::KeyNotFound(key.to_owned()))
    }

    /// Non-failing lookup; `None` when `key` is absent.
    #[inline]
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match &self.repr {
            Repr::Array { keys, values } => position(keys, key).map(|i| &values[i]),
            Repr::Hashed(map) => map.get(key),
        }
    }

    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match &self.repr {
            Repr::Array { keys, values } => position(keys, key).map(|i| (&keys[i], &values[i])),
            Repr::Hashed(map) => map.get_key_value(key),
        }
    }

    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match &self.repr {
            Repr::Array { keys, .. } => position(keys, key).is_some(),
            Repr::Hashed(map) => map.contains_key(key),
        }
    }
}

impl<K, V, const N: usize, S> HybridMap<K, V, N, S> {
    pub(crate) fn from_repr(repr: Repr<K, V, N, S>) -> Self {
        Self { repr }
    }

    pub fn len(&self) -> usize {
        match &self.repr {
            Repr::Array { keys, .. } => keys.len(),
            Repr::Hashed(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn mode(&self) -> Mode {
        match self.repr {
            Repr::Array { .. } => Mode::Array,
            Repr::Hashed(_) => Mode::Hashed,
        }
    }

    pub fn is_array(&self) -> bool {
        self.mode() == Mode::Array
    }

    pub fn is_hashed(&self) -> bool {
        self.mode() == Mode::Hashed
    }

    /// The hasher of the backing hash map. Array mode never hashes, so this
    /// is `None` there.
    pub fn hasher(&self) -> Option<&S> {
        match &self.repr {
            Repr::Array { .. } => None,
            Repr::Hashed(map) => Some(map.hasher()),
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        match &self.repr {
            Repr::Array { keys, .. } => Keys::array(keys),
            Repr::Hashed(map) => Keys::hashed(map.keys()),
        }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        match &self.repr {
            Repr::Array { values, .. } => Values::array(values),
            Repr::Hashed(map) => Values::hashed(map.values()),
        }
    }

    /// Entries as `(key, value)` pairs, in the same order as `keys()` and
    /// `values()`.
    pub fn iter(&self) -> Iter<'_, K, V> {
        match &self.repr {
            Repr::Array { keys, values } => Iter::array(keys, values),
            Repr::Hashed(map) => Iter::hashed(map.iter()),
        }
    }
}

#[inline(always)]
fn position<K, Q>(keys: &[K], key: &Q) -> Option<usize>
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    keys.iter().position(|k| k.borrow() == key)
}

impl<K, V, const N: usize, S> Default for HybridMap<K, V, N, S> {
    fn default() -> Self {
        Self::from_repr(Repr::Array {
            keys: SmallVec::new(),
            values: SmallVec::new(),
        })
    }
}

impl<K, V, const N: usize, S> fmt::Debug for HybridMap<K, V, N, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, Q, V, const N: usize, S> Index<&Q> for HybridMap<K, V, N, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present, like the std map indexers.
    fn index(&self, key: &Q) -> &V {
        self.try_get(key).expect("key not found in HybridMap")
    }
}

impl<'a, K, V, const N: usize, S> IntoIterator for &'a HybridMap<K, V, N, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, const N: usize, S> IntoIterator for HybridMap<K, V, N, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, N>;

    fn into_iter(self) -> Self::IntoIter {
        match self.repr {
            Repr::Array { keys, values } => IntoIter::array(keys, values),
            Repr::Hashed(map) => IntoIter::hashed(map.into_iter()),
        }
    }
}

impl<K, V, const N: usize, S> TryFrom<Vec<(K, V)>> for HybridMap<K, V, N, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Error = HybridMapError<K>;

    fn try_from(pairs: Vec<(K, V)>) -> Result<Self, Self::Error> {
        Self::with_hasher(pairs, S::default())
    }
}

impl<K, V, const N: usize, const M: usize, S> TryFrom<[(K, V); M]> for HybridMap<K, V, N, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Error = HybridMapError<K>;

    fn try_from(pairs: [(K, V); M]) -> Result<Self, Self::Error> {
        Self::with_hasher(pairs, S::default())
    }
}
