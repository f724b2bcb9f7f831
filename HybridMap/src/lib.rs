//! # hybridmap
//!
//! A build-once, read-only map for the common case of a handful of entries.
//!
//! [`HybridMap`] stores up to [`THRESHOLD`] entries in inline, index-aligned
//! key and value arrays and answers lookups with a linear scan. When the
//! construction input holds more entries than that, the buffered entries are
//! moved into a `hashbrown` map once and every later lookup hashes. The switch
//! happens only during construction and is never undone.
//!
//! ```rust
//! use hybridmap::{HybridMap, HybridMapError};
//!
//! let small = HybridMap::new((0..3).map(|i| (i, i * 10))).unwrap();
//! assert!(small.is_array());
//! assert_eq!(small.get(&2), Ok(&20));
//! assert_eq!(small.get(&9), Err(HybridMapError::KeyNotFound(9)));
//!
//! let large = HybridMap::new((0..100).map(|i| (i, i))).unwrap();
//! assert!(large.is_hashed());
//! assert_eq!(large.try_get(&42), Some(&42));
//! ```

pub mod error;
pub mod structures;
pub mod throughput;

pub use error::HybridMapError;
pub use structures::hybrid_map::{HybridMap, IntoIter, Iter, Keys, Mode, Values, THRESHOLD};
