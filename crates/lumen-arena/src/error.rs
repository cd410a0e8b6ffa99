//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use lumen_core::OperandError;

use crate::handle::ArenaId;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena has handed out every slot its boundary policy permits.
    Exhausted {
        /// Size of the backing buffer.
        capacity: usize,
        /// Number of elements allocated when the request was refused.
        allocated: usize,
    },
    /// A handle issued by a different arena was resolved against this one.
    ForeignHandle {
        /// The arena that issued the handle.
        handle_arena: ArenaId,
        /// The arena it was resolved against.
        arena: ArenaId,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted {
                capacity,
                allocated,
            } => {
                write!(
                    f,
                    "arena exhausted: {allocated} elements allocated, capacity {capacity}"
                )
            }
            Self::ForeignHandle {
                handle_arena,
                arena,
            } => {
                write!(
                    f,
                    "handle from arena {handle_arena} resolved against arena {arena}"
                )
            }
        }
    }
}

impl Error for ArenaError {}

/// Errors from arena-backed operations that also validate their operands.
#[derive(Clone, Debug, PartialEq)]
pub enum OpError {
    /// Allocating the result failed.
    Arena(ArenaError),
    /// An operand was rejected before anything was allocated.
    Operand(OperandError),
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arena(e) => write!(f, "allocation failed: {e}"),
            Self::Operand(e) => write!(f, "{e}"),
        }
    }
}

impl Error for OpError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Arena(e) => Some(e),
            Self::Operand(e) => Some(e),
        }
    }
}

impl From<ArenaError> for OpError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

impl From<OperandError> for OpError {
    fn from(e: OperandError) -> Self {
        Self::Operand(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_display() {
        let err = ArenaError::Exhausted {
            capacity: 1000,
            allocated: 999,
        };
        assert_eq!(
            err.to_string(),
            "arena exhausted: 999 elements allocated, capacity 1000"
        );
    }

    #[test]
    fn op_error_exposes_source() {
        let err: OpError = OperandError::NotAVector { op: "cross", w: 1.0 }.into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("cross"));
    }
}
