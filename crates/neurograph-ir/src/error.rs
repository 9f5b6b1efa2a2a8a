//! Error types for graph validation.

use thiserror::Error;

use crate::dtype::DataType;

/// A rejected graph-builder call.
///
/// Every validation failure is surfaced through this one type; the variants
/// exist for diagnosis and logging, and callers are not expected to branch
/// on them. There is no partial success: an operation either returns
/// complete output descriptors or fails with one of these.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ValidationError {
    #[error("{role} operand was created by a different builder")]
    ForeignOperand { role: &'static str },

    #[error("{role} has data type {found}, expected {expected}")]
    UnsupportedDataType {
        role: &'static str,
        found: DataType,
        expected: String,
    },

    #[error("{role} has rank {actual}, expected {expected}")]
    RankMismatch {
        role: &'static str,
        expected: String,
        actual: usize,
    },

    #[error("{role} has shape {actual:?}, expected {expected}")]
    ShapeMismatch {
        role: &'static str,
        expected: String,
        actual: Vec<u32>,
    },

    #[error("{what}: {reason}")]
    InvalidArgument {
        what: &'static str,
        reason: String,
    },

    #[error("{option} has {actual} entries, expected {expected}")]
    OptionCountMismatch {
        option: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{what} value {value} is outside the range of {data_type}")]
    ValueOutOfRange {
        what: &'static str,
        value: f64,
        data_type: DataType,
    },

    #[error("shape {dimensions:?} of {data_type} exceeds the 2^32-1 element/byte limit")]
    SizeOverflow {
        data_type: DataType,
        dimensions: Vec<u32>,
    },
}
