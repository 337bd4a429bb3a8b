//! Fast hashing with FxHash (non-cryptographic).
//!
//! Use these aliases instead of the std defaults when a keyed container is
//! genuinely needed; most per-vertex bookkeeping in the toolkit is
//! index-addressed and uses plain `Vec` scratch instead.

use rustc_hash::FxBuildHasher;

pub use rustc_hash::{FxHashMap, FxHashSet, FxHasher};

/// Create a new [`FxHashMap`] with the specified capacity.
#[inline]
#[must_use]
pub fn fx_map_with_capacity<K, V>(capacity: usize) -> FxHashMap<K, V> {
    FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher)
}

/// Create a new [`FxHashSet`] with the specified capacity.
#[inline]
#[must_use]
pub fn fx_set_with_capacity<T>(capacity: usize) -> FxHashSet<T> {
    FxHashSet::with_capacity_and_hasher(capacity, FxBuildHasher)
}
