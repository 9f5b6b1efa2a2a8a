//! Per-operation validators and the closed operation union.
//!
//! Each operation kind is a variant of [`Operation`] carrying its operands
//! and options; adding a kind is a compile-time-checked case addition, not
//! a dynamic lookup. Every validator runs the same pass order: session
//! membership (including operands nested in options), data types, ranks,
//! shapes, option schema, output overflow, shape inference.

pub mod conv_transpose2d;
pub mod fill;
pub mod gemm;
pub mod recurrent;
pub mod resample2d;
pub mod unary;

pub use conv_transpose2d::{ConvTranspose2dOptions, FilterLayout, InputLayout};
pub use gemm::GemmOptions;
pub use recurrent::{GruCellOptions, GruWeightLayout, LstmCellOptions, LstmWeightLayout};
pub use resample2d::{InterpolationMode, Resample2dOptions};
pub use unary::UnaryKind;

use neurograph_ir::{BuilderId, Operand, OperandDescriptor, ValidationError};

/// A declared graph operation, ready for validation.
#[derive(Clone, Debug)]
pub enum Operation {
    Unary {
        kind: UnaryKind,
        input: Operand,
    },
    Gemm {
        a: Operand,
        b: Operand,
        options: GemmOptions,
    },
    ConvTranspose2d {
        input: Operand,
        filter: Operand,
        options: ConvTranspose2dOptions,
    },
    Resample2d {
        input: Operand,
        options: Resample2dOptions,
    },
    GruCell {
        input: Operand,
        weight: Operand,
        recurrent_weight: Operand,
        hidden_state: Operand,
        hidden_size: u32,
        options: GruCellOptions,
    },
    LstmCell {
        input: Operand,
        weight: Operand,
        recurrent_weight: Operand,
        hidden_state: Operand,
        cell_state: Operand,
        hidden_size: u32,
        options: LstmCellOptions,
    },
    FillSequence {
        descriptor: OperandDescriptor,
        start: f64,
        step: f64,
    },
}

impl Operation {
    /// Run this operation's validator on behalf of the given session and
    /// return the inferred output descriptor(s). Stateless and pure: the
    /// same operation validated twice yields the same result.
    pub fn validate(&self, builder: BuilderId) -> Result<Vec<OperandDescriptor>, ValidationError> {
        match self {
            Operation::Unary { kind, input } => {
                Ok(vec![unary::validate(*kind, input, builder)?])
            }
            Operation::Gemm { a, b, options } => {
                Ok(vec![gemm::validate(a, b, options, builder)?])
            }
            Operation::ConvTranspose2d {
                input,
                filter,
                options,
            } => Ok(vec![conv_transpose2d::validate(
                input, filter, options, builder,
            )?]),
            Operation::Resample2d { input, options } => {
                Ok(vec![resample2d::validate(input, options, builder)?])
            }
            Operation::GruCell {
                input,
                weight,
                recurrent_weight,
                hidden_state,
                hidden_size,
                options,
            } => Ok(vec![recurrent::validate_gru_cell(
                input,
                weight,
                recurrent_weight,
                hidden_state,
                *hidden_size,
                options,
                builder,
            )?]),
            Operation::LstmCell {
                input,
                weight,
                recurrent_weight,
                hidden_state,
                cell_state,
                hidden_size,
                options,
            } => {
                let (hidden, cell) = recurrent::validate_lstm_cell(
                    input,
                    weight,
                    recurrent_weight,
                    hidden_state,
                    cell_state,
                    *hidden_size,
                    options,
                    builder,
                )?;
                Ok(vec![hidden, cell])
            }
            Operation::FillSequence {
                descriptor,
                start,
                step,
            } => Ok(vec![fill::validate(descriptor, *start, *step)?]),
        }
    }
}
