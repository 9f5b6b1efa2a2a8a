//! Single-step recurrent cells (GRU and LSTM).
//!
//! Both cells share one rule skeleton, parameterized by the gate
//! multiplier: 3 gates for GRU, 4 for LSTM. All weight and state operands
//! must agree on one floating-point data type, and every gate-bearing
//! dimension is `gates * hidden_size`.

use serde::{Deserialize, Serialize};

use neurograph_ir::{
    rules, ActivationKind, BuilderId, DataType, Operand, OperandDescriptor, ValidationError,
};

const GRU_GATES: u32 = 3;
const LSTM_GATES: u32 = 4;

/// Ordering of the z/r/n gate blocks inside GRU weight tensors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GruWeightLayout {
    #[default]
    Zrn,
    Rzn,
}

/// Ordering of the i/o/f/g gate blocks inside LSTM weight tensors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LstmWeightLayout {
    #[default]
    Iofg,
    Ifgo,
}

/// Options for [`gru_cell`](crate::GraphBuilder::gru_cell).
///
/// `reset_after` and `layout` select kernel behavior and are carried
/// through without shape consequences. An `activations` list, when
/// present, must hold exactly two entries (update and candidate gates).
#[derive(Clone, Debug)]
pub struct GruCellOptions {
    pub bias: Option<Operand>,
    pub recurrent_bias: Option<Operand>,
    pub reset_after: bool,
    pub layout: GruWeightLayout,
    pub activations: Option<Vec<ActivationKind>>,
}

impl Default for GruCellOptions {
    fn default() -> Self {
        GruCellOptions {
            bias: None,
            recurrent_bias: None,
            reset_after: true,
            layout: GruWeightLayout::default(),
            activations: None,
        }
    }
}

/// Options for [`lstm_cell`](crate::GraphBuilder::lstm_cell).
///
/// An `activations` list, when present, must hold exactly three entries
/// (input/forget, cell, and output gates). The peephole weight spans the
/// i/o/f gates only, hence its `3 * hidden_size` length even though LSTM
/// weights carry four gate blocks.
#[derive(Clone, Debug, Default)]
pub struct LstmCellOptions {
    pub bias: Option<Operand>,
    pub recurrent_bias: Option<Operand>,
    pub peephole_weight: Option<Operand>,
    pub layout: LstmWeightLayout,
    pub activations: Option<Vec<ActivationKind>>,
}

pub(crate) fn validate_gru_cell(
    input: &Operand,
    weight: &Operand,
    recurrent_weight: &Operand,
    hidden_state: &Operand,
    hidden_size: u32,
    options: &GruCellOptions,
    builder: BuilderId,
) -> Result<OperandDescriptor, ValidationError> {
    rules::require_same_builder("input", input, builder)?;
    rules::require_same_builder("weight", weight, builder)?;
    rules::require_same_builder("recurrent_weight", recurrent_weight, builder)?;
    rules::require_same_builder("hidden_state", hidden_state, builder)?;
    if let Some(bias) = &options.bias {
        rules::require_same_builder("bias", bias, builder)?;
    }
    if let Some(recurrent_bias) = &options.recurrent_bias {
        rules::require_same_builder("recurrent_bias", recurrent_bias, builder)?;
    }

    let gate_dim = gate_dimension(GRU_GATES, hidden_size)?;

    rules::require_data_type("input", input, &DataType::FLOATING_POINT)?;
    let data_type = input.data_type();
    rules::require_same_data_type("weight", weight, data_type)?;
    rules::require_same_data_type("recurrent_weight", recurrent_weight, data_type)?;
    rules::require_same_data_type("hidden_state", hidden_state, data_type)?;

    rules::require_rank("input", input, 2)?;
    let batch_size = input.shape()[0];
    let input_size = input.shape()[1];
    rules::require_rank("weight", weight, 2)?;
    rules::require_shape("weight", weight, &[gate_dim, input_size])?;
    rules::require_rank("recurrent_weight", recurrent_weight, 2)?;
    rules::require_shape("recurrent_weight", recurrent_weight, &[gate_dim, hidden_size])?;
    rules::require_rank("hidden_state", hidden_state, 2)?;
    rules::require_shape("hidden_state", hidden_state, &[batch_size, hidden_size])?;

    if let Some(bias) = &options.bias {
        rules::require_same_data_type("bias", bias, data_type)?;
        rules::require_rank("bias", bias, 1)?;
        rules::require_shape("bias", bias, &[gate_dim])?;
    }
    if let Some(recurrent_bias) = &options.recurrent_bias {
        rules::require_same_data_type("recurrent_bias", recurrent_bias, data_type)?;
        rules::require_rank("recurrent_bias", recurrent_bias, 1)?;
        rules::require_shape("recurrent_bias", recurrent_bias, &[gate_dim])?;
    }
    require_activation_count("activations", options.activations.as_deref(), 2)?;

    let output = OperandDescriptor::new(data_type, vec![batch_size, hidden_size]);
    output.byte_length()?;
    Ok(output)
}

/// Returns the cell's two outputs: the new hidden state and the new cell
/// state, both `[batch_size, hidden_size]`.
pub(crate) fn validate_lstm_cell(
    input: &Operand,
    weight: &Operand,
    recurrent_weight: &Operand,
    hidden_state: &Operand,
    cell_state: &Operand,
    hidden_size: u32,
    options: &LstmCellOptions,
    builder: BuilderId,
) -> Result<(OperandDescriptor, OperandDescriptor), ValidationError> {
    rules::require_same_builder("input", input, builder)?;
    rules::require_same_builder("weight", weight, builder)?;
    rules::require_same_builder("recurrent_weight", recurrent_weight, builder)?;
    rules::require_same_builder("hidden_state", hidden_state, builder)?;
    rules::require_same_builder("cell_state", cell_state, builder)?;
    if let Some(bias) = &options.bias {
        rules::require_same_builder("bias", bias, builder)?;
    }
    if let Some(recurrent_bias) = &options.recurrent_bias {
        rules::require_same_builder("recurrent_bias", recurrent_bias, builder)?;
    }
    if let Some(peephole_weight) = &options.peephole_weight {
        rules::require_same_builder("peephole_weight", peephole_weight, builder)?;
    }

    let gate_dim = gate_dimension(LSTM_GATES, hidden_size)?;
    let peephole_dim = gate_dimension(3, hidden_size)?;

    rules::require_data_type("input", input, &DataType::FLOATING_POINT)?;
    let data_type = input.data_type();
    rules::require_same_data_type("weight", weight, data_type)?;
    rules::require_same_data_type("recurrent_weight", recurrent_weight, data_type)?;
    rules::require_same_data_type("hidden_state", hidden_state, data_type)?;
    rules::require_same_data_type("cell_state", cell_state, data_type)?;

    rules::require_rank("input", input, 2)?;
    let batch_size = input.shape()[0];
    let input_size = input.shape()[1];
    rules::require_rank("weight", weight, 2)?;
    rules::require_shape("weight", weight, &[gate_dim, input_size])?;
    rules::require_rank("recurrent_weight", recurrent_weight, 2)?;
    rules::require_shape("recurrent_weight", recurrent_weight, &[gate_dim, hidden_size])?;
    rules::require_rank("hidden_state", hidden_state, 2)?;
    rules::require_shape("hidden_state", hidden_state, &[batch_size, hidden_size])?;
    rules::require_rank("cell_state", cell_state, 2)?;
    rules::require_shape("cell_state", cell_state, &[batch_size, hidden_size])?;

    if let Some(bias) = &options.bias {
        rules::require_same_data_type("bias", bias, data_type)?;
        rules::require_rank("bias", bias, 1)?;
        rules::require_shape("bias", bias, &[gate_dim])?;
    }
    if let Some(recurrent_bias) = &options.recurrent_bias {
        rules::require_same_data_type("recurrent_bias", recurrent_bias, data_type)?;
        rules::require_rank("recurrent_bias", recurrent_bias, 1)?;
        rules::require_shape("recurrent_bias", recurrent_bias, &[gate_dim])?;
    }
    if let Some(peephole_weight) = &options.peephole_weight {
        rules::require_same_data_type("peephole_weight", peephole_weight, data_type)?;
        rules::require_rank("peephole_weight", peephole_weight, 1)?;
        rules::require_shape("peephole_weight", peephole_weight, &[peephole_dim])?;
    }
    require_activation_count("activations", options.activations.as_deref(), 3)?;

    let output = OperandDescriptor::new(data_type, vec![batch_size, hidden_size]);
    output.byte_length()?;
    Ok((output.clone(), output))
}

/// `hidden_size` must be positive and `gates * hidden_size` must itself be
/// a valid dimension, so 0 and 2^32-1 both fail here regardless of the
/// operand shapes.
fn gate_dimension(gates: u32, hidden_size: u32) -> Result<u32, ValidationError> {
    if hidden_size == 0 {
        return Err(ValidationError::InvalidArgument {
            what: "hidden_size",
            reason: "must be greater than 0".to_string(),
        });
    }
    gates
        .checked_mul(hidden_size)
        .ok_or(ValidationError::InvalidArgument {
            what: "hidden_size",
            reason: format!("{gates} * {hidden_size} exceeds the 2^32-1 dimension limit"),
        })
}

fn require_activation_count(
    option: &'static str,
    activations: Option<&[ActivationKind]>,
    expected: usize,
) -> Result<(), ValidationError> {
    match activations {
        Some(list) if list.len() != expected => Err(ValidationError::OptionCountMismatch {
            option,
            expected,
            actual: list.len(),
        }),
        _ => Ok(()),
    }
}
