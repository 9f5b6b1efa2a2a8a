//! Element-wise unary operations.

use serde::{Deserialize, Serialize};

use neurograph_ir::{rules, BuilderId, DataType, Operand, OperandDescriptor, ValidationError};

const FLOAT_AND_SIGNED: &[DataType] = &[
    DataType::Float32,
    DataType::Float16,
    DataType::Int32,
    DataType::Int64,
    DataType::Int8,
];

/// Element-wise unary operation kinds.
///
/// Serialized names match the wire-level operation names (`"logicalNot"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnaryKind {
    Abs,
    Ceil,
    Erf,
    Exp,
    Floor,
    Identity,
    Log,
    LogicalNot,
    Neg,
    Reciprocal,
    Relu,
    Sigmoid,
    Sin,
    Sqrt,
    Tan,
    Tanh,
}

impl UnaryKind {
    /// Every unary operation kind, in declaration order.
    pub const ALL: [UnaryKind; 16] = [
        UnaryKind::Abs,
        UnaryKind::Ceil,
        UnaryKind::Erf,
        UnaryKind::Exp,
        UnaryKind::Floor,
        UnaryKind::Identity,
        UnaryKind::Log,
        UnaryKind::LogicalNot,
        UnaryKind::Neg,
        UnaryKind::Reciprocal,
        UnaryKind::Relu,
        UnaryKind::Sigmoid,
        UnaryKind::Sin,
        UnaryKind::Sqrt,
        UnaryKind::Tan,
        UnaryKind::Tanh,
    ];

    /// Data types this operation accepts.
    pub fn supported_data_types(self) -> &'static [DataType] {
        match self {
            UnaryKind::Abs | UnaryKind::Neg => FLOAT_AND_SIGNED,
            UnaryKind::Identity => &DataType::ALL,
            UnaryKind::LogicalNot => &[DataType::Uint8],
            _ => &DataType::FLOATING_POINT,
        }
    }
}

/// The output descriptor is the input descriptor, unchanged; the only rule
/// is membership of the input type in the operation's allowed set.
pub(crate) fn validate(
    kind: UnaryKind,
    input: &Operand,
    builder: BuilderId,
) -> Result<OperandDescriptor, ValidationError> {
    rules::require_same_builder("input", input, builder)?;
    rules::require_data_type("input", input, kind.supported_data_types())?;
    Ok(input.descriptor().clone())
}
