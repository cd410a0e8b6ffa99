//! Arena configuration parameters.

/// Where the capacity guard trips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// The guard runs after the slot count is bumped and requires it to stay
    /// strictly below capacity, so the last slot is never handed out:
    /// `capacity - 1` allocations succeed.
    #[default]
    Legacy,
    /// Every slot is usable: `capacity` allocations succeed.
    Exact,
}

/// Configuration for an [`Arena`](crate::Arena).
///
/// Immutable after the arena is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of slots in the backing buffer.
    ///
    /// Default: 1000.
    pub capacity: usize,

    /// Capacity guard behaviour. Default: [`BoundaryPolicy::Legacy`].
    pub boundary: BoundaryPolicy,
}

impl ArenaConfig {
    /// Default slot count.
    pub const DEFAULT_CAPACITY: usize = 1000;

    /// Create a config with the given capacity and the default boundary policy.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            boundary: BoundaryPolicy::default(),
        }
    }

    /// Replace the boundary policy.
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Number of allocations that succeed before the arena reports exhaustion.
    pub fn usable_capacity(&self) -> usize {
        match self.boundary {
            BoundaryPolicy::Legacy => self.capacity.saturating_sub(1),
            BoundaryPolicy::Exact => self.capacity,
        }
    }

    /// Size of the backing buffer in bytes for elements of type `T`, or
    /// `None` on overflow.
    pub fn memory_bytes<T>(&self) -> Option<usize> {
        self.capacity.checked_mul(std::mem::size_of::<T>())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_program() {
        let config = ArenaConfig::default();
        assert_eq!(config.capacity, 1000);
        assert_eq!(config.boundary, BoundaryPolicy::Legacy);
    }

    #[test]
    fn legacy_loses_one_slot() {
        assert_eq!(ArenaConfig::new(10).usable_capacity(), 9);
        assert_eq!(ArenaConfig::new(0).usable_capacity(), 0);
    }

    #[test]
    fn exact_uses_every_slot() {
        let config = ArenaConfig::new(10).with_boundary(BoundaryPolicy::Exact);
        assert_eq!(config.usable_capacity(), 10);
    }

    #[test]
    fn memory_bytes_scales_with_element_size() {
        let config = ArenaConfig::new(100);
        assert_eq!(config.memory_bytes::<[f32; 4]>(), Some(1600));
        assert_eq!(config.memory_bytes::<[f32; 3]>(), Some(1200));
    }

    #[test]
    fn memory_bytes_detects_overflow() {
        let config = ArenaConfig::new(usize::MAX);
        assert_eq!(config.memory_bytes::<[f32; 4]>(), None);
        assert_eq!(config.memory_bytes::<()>(), Some(0));
    }
}
