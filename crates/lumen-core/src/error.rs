//! Error raised when an operation receives an operand it is not defined for.

use std::error::Error;
use std::fmt;

/// A vector-only operation was handed a tuple that is not a vector.
///
/// Magnitude, normalization, dot and cross products are only defined for
/// tuples whose `w` component is approximately zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OperandError {
    /// The operand's `w` component marks it as something other than a vector.
    NotAVector {
        /// Name of the rejected operation.
        op: &'static str,
        /// The offending `w` component.
        w: f32,
    },
}

impl fmt::Display for OperandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAVector { op, w } => {
                write!(f, "invalid operand for {op}: expected a vector (w = 0), got w = {w}")
            }
        }
    }
}

impl Error for OperandError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_operation_and_w() {
        let err = OperandError::NotAVector { op: "dot", w: 1.0 };
        let msg = err.to_string();
        assert!(msg.contains("dot"));
        assert!(msg.contains("w = 1"));
    }
}
