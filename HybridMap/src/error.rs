use thiserror::Error;

/// Failures surfaced by [`HybridMap`](crate::HybridMap).
///
/// Both variants carry the offending key so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HybridMapError<K> {
    /// Returned by `get` when no entry matches the key.
    #[error("key not found: {0:?}")]
    KeyNotFound(K),

    /// The input sequence contained the same key twice. `index` is the
    /// position of the second occurrence.
    #[error("duplicate key {key:?} at position {index}")]
    KeyConflict { key: K, index: usize },
}

impl<K> HybridMapError<K> {
    pub fn key(&self) -> &K {
        match self {
            HybridMapError::KeyNotFound(key) => key,
            HybridMapError::KeyConflict { key, .. } => key,
        }
    }

    pub fn into_key(self) -> K {
        match self {
            HybridMapError::KeyNotFound(key) => key,
            HybridMapError::KeyConflict { key, .. } => key,
        }
    }
}
