#[allow(clippy::module_inception)]
mod hybrid_map;
mod builder;
mod iter;

#[cfg(test)]
mod verification;
#[cfg(test)]
mod proptests;

pub use hybrid_map::{HybridMap, Mode, THRESHOLD};
pub use iter::{IntoIter, Iter, Keys, Values};
