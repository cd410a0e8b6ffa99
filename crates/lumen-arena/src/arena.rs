//! The fixed-capacity bump arena.
//!
//! An [`Arena`] is a pre-allocated `Vec<T>` with a cursor that advances on
//! each allocation. Slots are never freed, reset or compacted; the arena is
//! dropped as a whole.

use std::ops::Index;

use lumen_core::{Color, Tuple};

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::{ArenaId, Handle};

/// A fixed-capacity, append-only allocator.
///
/// The backing buffer is sized to `config.capacity` at construction and
/// filled with `T::default()`; only slots below the cursor are ever observed.
/// [`Arena::alloc`] fails with [`ArenaError::Exhausted`] once the
/// [`BoundaryPolicy`](crate::BoundaryPolicy) limit is reached, leaving the
/// arena untouched.
#[derive(Debug)]
pub struct Arena<T> {
    /// Backing storage. Allocated to full capacity at creation.
    data: Vec<T>,
    /// Bump pointer: next free slot, equal to the number of live elements.
    cursor: usize,
    id: ArenaId,
    config: ArenaConfig,
}

/// Arena of points and vectors.
pub type TupleArena = Arena<Tuple>;

/// Arena of colors.
pub type ColorArena = Arena<Color>;

impl<T: Copy + Default> Arena<T> {
    /// Create an arena from a config.
    pub fn new(config: ArenaConfig) -> Self {
        let id = ArenaId::next();
        log::debug!(
            "arena {id}: {} slots of {} bytes, {:?} boundary ({} usable)",
            config.capacity,
            std::mem::size_of::<T>(),
            config.boundary,
            config.usable_capacity(),
        );
        Self {
            data: vec![T::default(); config.capacity],
            cursor: 0,
            id,
            config,
        }
    }

    /// Create an arena with `capacity` slots and the default boundary policy.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(ArenaConfig::new(capacity))
    }

    /// Copy `value` into the next free slot.
    ///
    /// Returns a handle valid for the arena's lifetime, or
    /// `Err(ArenaError::Exhausted)` if the boundary policy forbids another
    /// allocation.
    pub fn alloc(&mut self, value: T) -> Result<Handle<T>, ArenaError> {
        if self.cursor >= self.config.usable_capacity() {
            log::warn!(
                "arena {}: refusing allocation, {} of {} slots used",
                self.id,
                self.cursor,
                self.config.capacity,
            );
            return Err(ArenaError::Exhausted {
                capacity: self.config.capacity,
                allocated: self.cursor,
            });
        }
        let index = self.cursor;
        self.data[index] = value;
        self.cursor += 1;
        Ok(Handle::new(self.id, index))
    }
}

impl<T> Arena<T> {
    /// Resolve a handle to the stored element.
    ///
    /// Returns `Err(ArenaError::ForeignHandle)` if the handle was issued by
    /// another arena.
    pub fn get(&self, handle: Handle<T>) -> Result<&T, ArenaError> {
        if handle.arena != self.id {
            return Err(ArenaError::ForeignHandle {
                handle_arena: handle.arena,
                arena: self.id,
            });
        }
        // Handles from this arena always point below the cursor.
        Ok(&self.data[handle.index])
    }

    /// Number of elements allocated so far.
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Whether nothing has been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Size of the backing buffer in slots.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of allocations the boundary policy permits in total.
    pub fn usable_capacity(&self) -> usize {
        self.config.usable_capacity()
    }

    /// Allocations left before exhaustion.
    pub fn remaining(&self) -> usize {
        self.usable_capacity().saturating_sub(self.cursor)
    }

    /// Whether the next allocation would fail.
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// This arena's identity.
    pub fn id(&self) -> ArenaId {
        self.id
    }

    /// The configuration the arena was built with.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// All allocated elements in allocation order.
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.cursor]
    }

    /// Iterate over `(handle, element)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> + '_ {
        let id = self.id;
        self.as_slice()
            .iter()
            .enumerate()
            .map(move |(i, v)| (Handle::new(id, i), v))
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        // Size of a live allocation, so it cannot overflow.
        std::mem::size_of_val(self.data.as_slice())
    }
}

impl<T: Copy + Default> Default for Arena<T> {
    fn default() -> Self {
        Self::new(ArenaConfig::default())
    }
}

/// # Panics
///
/// Panics if the handle was issued by another arena.
impl<T> Index<Handle<T>> for Arena<T> {
    type Output = T;

    fn index(&self, handle: Handle<T>) -> &T {
        match self.get(handle) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryPolicy;

    #[test]
    fn alloc_returns_sequential_handles() {
        let mut arena: Arena<f32> = Arena::with_capacity(16);
        let a = arena.alloc(1.0).unwrap();
        let b = arena.alloc(2.0).unwrap();
        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn later_allocs_do_not_clobber_earlier_ones() {
        let mut arena = TupleArena::with_capacity(16);
        let p1 = arena.alloc(Tuple::point(1.0, 2.0, 3.0)).unwrap();
        let p2 = arena.alloc(Tuple::point(4.0, 5.0, 6.0)).unwrap();
        assert_eq!(arena[p1].x, 1.0);
        assert_eq!(arena[p2].x, 4.0);
    }

    #[test]
    fn legacy_boundary_allows_capacity_minus_one() {
        let mut arena: Arena<f32> = Arena::with_capacity(4);
        for i in 0..3 {
            arena.alloc(i as f32).unwrap();
        }
        assert!(arena.is_full());
        assert_eq!(
            arena.alloc(3.0),
            Err(ArenaError::Exhausted {
                capacity: 4,
                allocated: 3
            })
        );
    }

    #[test]
    fn exact_boundary_allows_full_capacity() {
        let mut arena: Arena<f32> =
            Arena::new(ArenaConfig::new(4).with_boundary(BoundaryPolicy::Exact));
        for i in 0..4 {
            arena.alloc(i as f32).unwrap();
        }
        assert!(matches!(arena.alloc(4.0), Err(ArenaError::Exhausted { .. })));
    }

    #[test]
    fn failed_alloc_leaves_arena_unchanged() {
        let mut arena: Arena<f32> = Arena::with_capacity(2);
        let h = arena.alloc(7.0).unwrap();
        assert!(arena.alloc(8.0).is_err());
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[h], 7.0);
        assert_eq!(arena.as_slice(), &[7.0]);
    }

    #[test]
    fn zero_and_one_capacity_arenas_refuse_everything() {
        let mut empty: Arena<f32> = Arena::with_capacity(0);
        assert!(empty.alloc(1.0).is_err());
        let mut one: Arena<f32> = Arena::with_capacity(1);
        assert!(one.alloc(1.0).is_err());
    }

    #[test]
    fn foreign_handle_is_rejected() {
        let mut a: Arena<f32> = Arena::with_capacity(4);
        let b: Arena<f32> = Arena::with_capacity(4);
        let h = a.alloc(1.0).unwrap();
        assert!(matches!(b.get(h), Err(ArenaError::ForeignHandle { .. })));
    }

    #[test]
    #[should_panic(expected = "resolved against arena")]
    fn indexing_with_foreign_handle_panics() {
        let mut a: Arena<f32> = Arena::with_capacity(4);
        let b: Arena<f32> = Arena::with_capacity(4);
        let h = a.alloc(1.0).unwrap();
        let _value: f32 = b[h];
    }

    #[test]
    fn iter_yields_allocation_order() {
        let mut arena = ColorArena::with_capacity(8);
        let handles: Vec<_> = (0..3)
            .map(|i| arena.alloc(Color::new(i as f32, 0.0, 0.0)).unwrap())
            .collect();
        let seen: Vec<_> = arena.iter().map(|(h, c)| (h, c.r)).collect();
        assert_eq!(
            seen,
            vec![(handles[0], 0.0), (handles[1], 1.0), (handles[2], 2.0)]
        );
    }

    #[test]
    fn accounting() {
        let mut arena = TupleArena::default();
        assert!(arena.is_empty());
        assert_eq!(arena.capacity(), 1000);
        assert_eq!(arena.usable_capacity(), 999);
        arena.alloc(Tuple::vector(0.0, 0.0, 0.0)).unwrap();
        assert_eq!(arena.remaining(), 998);
        assert_eq!(arena.memory_bytes(), 1000 * 16);
        assert_eq!(
            Some(arena.memory_bytes()),
            arena.config().memory_bytes::<Tuple>()
        );
    }

    #[test]
    fn zero_sized_arena_uses_no_memory() {
        let arena: Arena<Color> = Arena::with_capacity(0);
        assert_eq!(arena.memory_bytes(), 0);
    }
}
