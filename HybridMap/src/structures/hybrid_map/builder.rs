use std::hash::{BuildHasher, Hash};
use std::mem;

use hashbrown::HashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::error::HybridMapError;
use crate::structures::hybrid_map::hybrid_map::{HybridMap, Repr};

enum Stage<K, V, const N: usize, S> {
    Array {
        keys: SmallVec<[K; N]>,
        values: SmallVec<[V; N]>,
        hasher: S,
    },
    Hashed(HashMap<K, V, S>),
    // only observable while `migrate` runs
    Migrating,
}

/// Mutable construction state. Nothing outside this module ever sees it; the
/// finished value comes out of [`Builder::finish`].
pub(crate) struct Builder<K, V, const N: usize, S> {
    stage: Stage<K, V, N, S>,
    count: usize,
    capacity_hint: usize,
}

impl<K, V, const N: usize, S> Builder<K, V, N, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub(crate) fn new(hasher: S, capacity_hint: usize) -> Self {
        Self {
            stage: Stage::Array {
                keys: SmallVec::new(),
                values: SmallVec::new(),
                hasher,
            },
            count: 0,
            capacity_hint,
        }
    }

    pub(crate) fn push(&mut self, key: K, value: V) -> Result<(), HybridMapError<K>> {
        let index = self.count;

        if let Stage::Array { keys, values, .. } = &mut self.stage {
            if keys.contains(&key) {
                return Err(HybridMapError::KeyConflict { key, index });
            }
            if keys.len() < N {
                keys.push(key);
                values.push(value);
                self.count += 1;
                return Ok(());
            }
            self.migrate();
        }

        match &mut self.stage {
            Stage::Hashed(map) => {
                if map.contains_key(&key) {
                    return Err(HybridMapError::KeyConflict { key, index });
                }
                map.insert(key, value);
            }
            Stage::Array { .. } | Stage::Migrating => {
                unreachable!("builder still buffering after migration")
            }
        }

        self.count += 1;
        Ok(())
    }

    /// Moves the buffered entries into a hash map. Runs once, when the
    /// `N + 1`th pair arrives.
    fn migrate(&mut self) {
        let stage = mem::replace(&mut self.stage, Stage::Migrating);

        self.stage = match stage {
            Stage::Array { keys, values, hasher } => {
                let capacity = self.capacity_hint.max(N * 2);
                debug!(threshold = N, capacity, "migrating buffered entries into hash map");

                let mut map = HashMap::with_capacity_and_hasher(capacity, hasher);
                map.extend(keys.into_iter().zip(values));
                Stage::Hashed(map)
            }
            other => other,
        };
    }

    pub(crate) fn finish(self) -> HybridMap<K, V, N, S> {
        let repr = match self.stage {
            Stage::Array { keys, values, .. } => Repr::Array { keys, values },
            Stage::Hashed(map) => Repr::Hashed(map),
            Stage::Migrating => unreachable!("builder finished mid-migration"),
        };

        trace!(len = self.count, hashed = matches!(repr, Repr::Hashed(_)), "hybrid map sealed");
        HybridMap::from_repr(repr)
    }
}
