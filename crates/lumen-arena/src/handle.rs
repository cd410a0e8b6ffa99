//! Typed handles into an arena.
//!
//! A [`Handle`] is a slot index plus the [`ArenaId`] of the arena that
//! issued it. The id makes a handle from one arena detectably invalid in
//! another, which a bare index could not do.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`ArenaId`] allocation.
static ARENA_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an arena instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArenaId(u64);

impl ArenaId {
    /// Allocate a fresh id that has never been returned before in this process.
    pub(crate) fn next() -> Self {
        Self(ARENA_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ArenaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to an element stored in an [`Arena<T>`](crate::Arena).
///
/// Handles are `Copy` and never dangle: the arena never frees or moves a
/// slot, so a handle resolves for as long as its arena is alive.
pub struct Handle<T> {
    pub(crate) arena: ArenaId,
    pub(crate) index: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    pub(crate) fn new(arena: ArenaId, index: usize) -> Self {
        Self {
            arena,
            index,
            _marker: PhantomData,
        }
    }

    /// Slot index within the issuing arena, in allocation order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Id of the arena that issued this handle.
    pub fn arena_id(&self) -> ArenaId {
        self.arena
    }
}

// Manual impls: the derives would demand `T: Clone` etc.
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.arena == other.arena && self.index == other.index
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.arena.hash(state);
        self.index.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("arena", &self.arena)
            .field("index", &self.index)
            .finish()
    }
}

impl<T> fmt::Display for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle(arena={}, idx={})", self.arena, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_ids_are_unique() {
        let a = ArenaId::next();
        let b = ArenaId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn handle_round_trip() {
        let id = ArenaId::next();
        let h: Handle<f32> = Handle::new(id, 42);
        assert_eq!(h.index(), 42);
        assert_eq!(h.arena_id(), id);
        let copy = h;
        assert_eq!(copy, h);
    }

    #[test]
    fn handles_from_different_arenas_differ() {
        let h1: Handle<f32> = Handle::new(ArenaId::next(), 0);
        let h2: Handle<f32> = Handle::new(ArenaId::next(), 0);
        assert_ne!(h1, h2);
    }
}
