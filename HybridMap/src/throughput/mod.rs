//! Lookup throughput measurement: builds maps of a given size keyed by
//! `"1"..="n"` and times full descending + ascending `get` sweeps against an
//! `FxHashMap` baseline.

use std::borrow::Cow;
use std::hash::BuildHasher;
use std::hint::black_box;
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::error::HybridMapError;
use crate::structures::hybrid_map::HybridMap;

/// Sizes measured when none are given.
pub const DEFAULT_SIZES: [usize; 3] = [3, 6, 512];

const CACHED_KEYS: usize = 1000;

static KEYS: Lazy<Vec<SmolStr>> = Lazy::new(|| key_range(CACHED_KEYS));

fn key_range(n: usize) -> Vec<SmolStr> {
    (1..=n).map(|i| SmolStr::new(i.to_string())).collect()
}

/// `"1"..="n"`. Sizes up to 1000 are served from a process-wide cache.
pub fn keys(n: usize) -> Cow<'static, [SmolStr]> {
    if n <= CACHED_KEYS {
        Cow::Borrowed(&KEYS[..n])
    } else {
        Cow::Owned(key_range(n))
    }
}

/// The read contract a sweep needs.
pub trait Lookup: Sync {
    fn lookup(&self, key: &str) -> Result<&SmolStr, HybridMapError<String>>;
    fn entries(&self) -> usize;
}

impl<const N: usize, S> Lookup for HybridMap<SmolStr, SmolStr, N, S>
where
    S: BuildHasher + Sync,
{
    #[inline]
    fn lookup(&self, key: &str) -> Result<&SmolStr, HybridMapError<String>> {
        self.get(key)
    }

    fn entries(&self) -> usize {
        self.len()
    }
}

impl Lookup for FxHashMap<SmolStr, SmolStr> {
    #[inline]
    fn lookup(&self, key: &str) -> Result<&SmolStr, HybridMapError<String>> {
        self.get(key)
            .ok_or_else(|| HybridMapError::KeyNotFound(key.to_owned()))
    }

    fn entries(&self) -> usize {
        self.len()
    }
}

pub fn build_hybrid(keys: &[SmolStr]) -> Result<HybridMap<SmolStr, SmolStr>, HybridMapError<SmolStr>> {
    HybridMap::new(keys.iter().map(|k| (k.clone(), k.clone())))
}

pub fn build_baseline(keys: &[SmolStr]) -> FxHashMap<SmolStr, SmolStr> {
    keys.iter().map(|k| (k.clone(), k.clone())).collect()
}

/// One descending then one ascending pass over `keys`. Returns the number
/// of lookups performed.
pub fn sweep<L: Lookup + ?Sized>(map: &L, keys: &[SmolStr]) -> Result<usize, HybridMapError<String>> {
    for key in keys.iter().rev() {
        black_box(map.lookup(black_box(key))?);
    }
    for key in keys {
        black_box(map.lookup(black_box(key))?);
    }
    Ok(keys.len() * 2)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SweepConfig {
    pub iterations: usize,
    /// Visit keys in a random order instead of `"1"..="n"`.
    pub shuffled: bool,
    /// Spread iterations over the rayon pool.
    pub parallel: bool,
}

#[derive(Clone, Debug)]
pub struct Measurement {
    pub container: &'static str,
    pub size: usize,
    pub lookups: usize,
    pub elapsed: Duration,
}

impl Measurement {
    pub fn nanos_per_lookup(&self) -> f64 {
        if self.lookups == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.lookups as f64
    }
}

pub fn measure<L: Lookup + ?Sized>(
    container: &'static str,
    map: &L,
    keys: &[SmolStr],
    config: SweepConfig,
) -> Result<Measurement, HybridMapError<String>> {
    let order: Cow<'_, [SmolStr]> = if config.shuffled {
        let mut shuffled = keys.to_vec();
        shuffled.shuffle(&mut rand::rng());
        Cow::Owned(shuffled)
    } else {
        Cow::Borrowed(keys)
    };

    let start = Instant::now();
    let lookups = if config.parallel {
        (0..config.iterations)
            .into_par_iter()
            .map(|_| sweep(map, &order))
            .try_reduce(|| 0, |a, b| Ok(a + b))?
    } else {
        let mut total = 0;
        for _ in 0..config.iterations {
            total += sweep(map, &order)?;
        }
        total
    };
    let elapsed = start.elapsed();

    debug!(container, size = map.entries(), lookups, ?elapsed, "sweep finished");

    Ok(Measurement {
        container,
        size: map.entries(),
        lookups,
        elapsed,
    })
}

/// Measures the hybrid map and the baseline at one size.
pub fn compare(size: usize, config: SweepConfig) -> anyhow::Result<[Measurement; 2]> {
    let keys = keys(size);
    let hybrid = build_hybrid(&keys)?;
    let baseline = build_baseline(&keys);

    Ok([
        measure("hybrid", &hybrid, &keys, config)?,
        measure("fx_hashmap", &baseline, &keys, config)?,
    ])
}
