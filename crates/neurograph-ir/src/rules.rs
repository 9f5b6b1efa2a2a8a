//! Reusable per-role validation checks.
//!
//! Each check is a pure predicate over one operand, returning the
//! corresponding [`ValidationError`] with the role name threaded through so
//! per-operation validators stay declarative.

use crate::broadcast::unidirectionally_broadcastable;
use crate::dtype::DataType;
use crate::error::ValidationError;
use crate::operand::{BuilderId, Operand};

/// Reject an operand created by a different builder session.
///
/// Validators run this for every operand argument, including operands
/// nested inside option records, before any type or shape check.
pub fn require_same_builder(
    role: &'static str,
    operand: &Operand,
    builder: BuilderId,
) -> Result<(), ValidationError> {
    if operand.created_by(builder) {
        Ok(())
    } else {
        Err(ValidationError::ForeignOperand { role })
    }
}

/// Require the operand's data type to be in an explicit allowed set.
pub fn require_data_type(
    role: &'static str,
    operand: &Operand,
    allowed: &[DataType],
) -> Result<(), ValidationError> {
    if allowed.contains(&operand.data_type()) {
        Ok(())
    } else {
        let expected = allowed
            .iter()
            .map(|dt| dt.as_str())
            .collect::<Vec<_>>()
            .join(" or ");
        Err(ValidationError::UnsupportedDataType {
            role,
            found: operand.data_type(),
            expected,
        })
    }
}

/// Require the operand to share a data type with a reference role.
pub fn require_same_data_type(
    role: &'static str,
    operand: &Operand,
    expected: DataType,
) -> Result<(), ValidationError> {
    if operand.data_type() == expected {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedDataType {
            role,
            found: operand.data_type(),
            expected: expected.as_str().to_string(),
        })
    }
}

pub fn require_rank(
    role: &'static str,
    operand: &Operand,
    rank: usize,
) -> Result<(), ValidationError> {
    if operand.rank() == rank {
        Ok(())
    } else {
        Err(ValidationError::RankMismatch {
            role,
            expected: rank.to_string(),
            actual: operand.rank(),
        })
    }
}

pub fn require_rank_at_most(
    role: &'static str,
    operand: &Operand,
    max: usize,
) -> Result<(), ValidationError> {
    if operand.rank() <= max {
        Ok(())
    } else {
        Err(ValidationError::RankMismatch {
            role,
            expected: format!("at most {max}"),
            actual: operand.rank(),
        })
    }
}

/// Require an exact dimension sequence.
pub fn require_shape(
    role: &'static str,
    operand: &Operand,
    dimensions: &[u32],
) -> Result<(), ValidationError> {
    if operand.shape() == dimensions {
        Ok(())
    } else {
        Err(ValidationError::ShapeMismatch {
            role,
            expected: format!("{dimensions:?}"),
            actual: operand.shape().to_vec(),
        })
    }
}

/// Require the operand to be unidirectionally broadcastable to `target`.
pub fn require_broadcastable_to(
    role: &'static str,
    operand: &Operand,
    target: &[u32],
) -> Result<(), ValidationError> {
    if unidirectionally_broadcastable(operand.shape(), target) {
        Ok(())
    } else {
        Err(ValidationError::ShapeMismatch {
            role,
            expected: format!("broadcastable to {target:?}"),
            actual: operand.shape().to_vec(),
        })
    }
}
