//! Memoization of recent pipeline results.

use std::collections::VecDeque;

use orthosole_mesh::TriangleMesh;

use crate::{generate, InsoleParams, Result};

/// Cache key: exact bit patterns of the parameters, so lookups carry
/// no epsilon policy of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ParamsKey {
    width: u64,
    length: u64,
    thickness: u64,
    detailed_relief: bool,
}

impl ParamsKey {
    fn of(params: &InsoleParams) -> Self {
        Self {
            width: params.dimensions.width.to_bits(),
            length: params.dimensions.length.to_bits(),
            thickness: params.dimensions.thickness.to_bits(),
            detailed_relief: params.detailed_relief,
        }
    }
}

/// A small bounded memoizer over [`generate`].
///
/// Intended for callers driving the pipeline from a continuous slider:
/// repeated recomputes for recently seen parameter tuples are served
/// from the cache instead of rebuilding the mesh every frame. Lookups
/// hand out a clone, so a cached mesh is never mutated behind a
/// renderer's back.
#[derive(Debug)]
pub struct MeshCache {
    entries: VecDeque<(ParamsKey, TriangleMesh)>,
    capacity: usize,
}

impl MeshCache {
    /// Default number of retained results.
    pub const DEFAULT_CAPACITY: usize = 8;

    /// Cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Cache retaining the last `capacity` results (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Fetch the mesh for `params`, generating and retaining it on a
    /// miss. Invalid parameters are never cached.
    pub fn get_or_generate(&mut self, params: &InsoleParams) -> Result<TriangleMesh> {
        let key = ParamsKey::of(params);

        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            // Refresh recency so slider endpoints survive sweeps.
            let entry = self.entries.remove(pos).expect("position came from iter");
            let mesh = entry.1.clone();
            self.entries.push_back(entry);
            return Ok(mesh);
        }

        let mesh = generate(params)?;
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back((key, mesh.clone()));
        Ok(mesh)
    }

    /// Number of retained results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all retained results.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for MeshCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(width: f64) -> InsoleParams {
        InsoleParams::new(width, 260.0, 6.0, false)
    }

    #[test]
    fn test_hit_returns_identical_mesh() {
        let mut cache = MeshCache::new();
        let p = params(80.0);
        let first = cache.get_or_generate(&p).unwrap();
        let second = cache.get_or_generate(&p).unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut cache = MeshCache::with_capacity(2);
        cache.get_or_generate(&params(70.0)).unwrap();
        cache.get_or_generate(&params(80.0)).unwrap();
        cache.get_or_generate(&params(90.0)).unwrap();
        assert_eq!(cache.len(), 2);

        // 70 was evicted; touching it again must not grow the cache.
        cache.get_or_generate(&params(70.0)).unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_relief_flag_is_part_of_key() {
        let mut cache = MeshCache::new();
        let flat = InsoleParams::new(80.0, 260.0, 6.0, false);
        let relief = InsoleParams::new(80.0, 260.0, 6.0, true);
        let a = cache.get_or_generate(&flat).unwrap();
        let b = cache.get_or_generate(&relief).unwrap();
        assert_eq!(cache.len(), 2);
        assert_ne!(a.positions, b.positions);
    }

    #[test]
    fn test_invalid_params_not_cached() {
        let mut cache = MeshCache::new();
        let bad = InsoleParams::new(0.0, 260.0, 6.0, false);
        assert!(cache.get_or_generate(&bad).is_err());
        assert!(cache.is_empty());
    }
}
