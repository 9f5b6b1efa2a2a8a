//! Operand element types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest finite value of an IEEE-754 binary16 number.
///
/// Used as the representable bound for [`DataType::Float16`] when checking
/// generated constant values.
pub const FLOAT16_MAX: f64 = 65504.0;

/// Element type of an operand.
///
/// Serialized names match the wire-level strings of the graph-building API
/// (`"float32"`, `"uint8"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Float32,
    Float16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Int8,
    Uint8,
}

impl DataType {
    /// Every element type, in declaration order.
    pub const ALL: [DataType; 8] = [
        DataType::Float32,
        DataType::Float16,
        DataType::Int32,
        DataType::Uint32,
        DataType::Int64,
        DataType::Uint64,
        DataType::Int8,
        DataType::Uint8,
    ];

    /// The floating-point element types.
    pub const FLOATING_POINT: [DataType; 2] = [DataType::Float32, DataType::Float16];

    /// Size of one element in bytes.
    pub fn byte_size(self) -> u64 {
        match self {
            DataType::Float32 | DataType::Int32 | DataType::Uint32 => 4,
            DataType::Float16 => 2,
            DataType::Int64 | DataType::Uint64 => 8,
            DataType::Int8 | DataType::Uint8 => 1,
        }
    }

    pub fn is_floating_point(self) -> bool {
        matches!(self, DataType::Float32 | DataType::Float16)
    }

    pub fn is_signed_integer(self) -> bool {
        matches!(self, DataType::Int32 | DataType::Int64 | DataType::Int8)
    }

    pub fn is_unsigned_integer(self) -> bool {
        matches!(self, DataType::Uint32 | DataType::Uint64 | DataType::Uint8)
    }

    /// Smallest and largest finite values an element of this type can hold.
    ///
    /// The 64-bit integer bounds are the nearest representable `f64` values;
    /// the float16 bound is the exact binary16 finite range.
    pub fn finite_range(self) -> (f64, f64) {
        match self {
            DataType::Float32 => (f64::from(f32::MIN), f64::from(f32::MAX)),
            DataType::Float16 => (-FLOAT16_MAX, FLOAT16_MAX),
            DataType::Int32 => (f64::from(i32::MIN), f64::from(i32::MAX)),
            DataType::Uint32 => (0.0, f64::from(u32::MAX)),
            DataType::Int64 => (i64::MIN as f64, i64::MAX as f64),
            DataType::Uint64 => (0.0, u64::MAX as f64),
            DataType::Int8 => (f64::from(i8::MIN), f64::from(i8::MAX)),
            DataType::Uint8 => (0.0, f64::from(u8::MAX)),
        }
    }

    /// Whether `value` lies within this type's representable range.
    ///
    /// Non-finite values (including NaN) are never representable.
    pub fn can_represent(self, value: f64) -> bool {
        let (lo, hi) = self.finite_range();
        value >= lo && value <= hi
    }

    /// The wire-level name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Float32 => "float32",
            DataType::Float16 => "float16",
            DataType::Int32 => "int32",
            DataType::Uint32 => "uint32",
            DataType::Int64 => "int64",
            DataType::Uint64 => "uint64",
            DataType::Int8 => "int8",
            DataType::Uint8 => "uint8",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
