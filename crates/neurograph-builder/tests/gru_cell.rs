//! Validation tests for the gruCell operation.

use neurograph_builder::{GraphBuilder, GruCellOptions, GruWeightLayout};
use neurograph_ir::{ActivationKind, DataType, Operand, OperandDescriptor, ValidationError};

const BATCH_SIZE: u32 = 3;
const INPUT_SIZE: u32 = 4;
const HIDDEN_SIZE: u32 = 5;
const GATE_DIM: u32 = 3 * HIDDEN_SIZE;

struct Fixture {
    builder: GraphBuilder,
    input: Operand,
    weight: Operand,
    recurrent_weight: Operand,
    hidden_state: Operand,
}

impl Fixture {
    fn new(data_type: DataType) -> Self {
        let builder = GraphBuilder::new();
        let input = builder.input(
            "input",
            OperandDescriptor::new(data_type, vec![BATCH_SIZE, INPUT_SIZE]),
        );
        let weight = builder.input(
            "weight",
            OperandDescriptor::new(data_type, vec![GATE_DIM, INPUT_SIZE]),
        );
        let recurrent_weight = builder.input(
            "recurrentWeight",
            OperandDescriptor::new(data_type, vec![GATE_DIM, HIDDEN_SIZE]),
        );
        let hidden_state = builder.input(
            "hiddenState",
            OperandDescriptor::new(data_type, vec![BATCH_SIZE, HIDDEN_SIZE]),
        );
        Fixture {
            builder,
            input,
            weight,
            recurrent_weight,
            hidden_state,
        }
    }

    fn run(&self, options: GruCellOptions) -> Result<Operand, ValidationError> {
        self.builder.gru_cell(
            &self.input,
            &self.weight,
            &self.recurrent_weight,
            &self.hidden_state,
            HIDDEN_SIZE,
            options,
        )
    }
}

#[test]
fn test_default_options() {
    let fx = Fixture::new(DataType::Float32);
    let output = fx.run(GruCellOptions::default()).unwrap();
    assert_eq!(output.data_type(), DataType::Float32);
    assert_eq!(output.shape(), &[BATCH_SIZE, HIDDEN_SIZE]);
}

#[test]
fn test_full_options() {
    let fx = Fixture::new(DataType::Float32);
    let options = GruCellOptions {
        bias: Some(fx.builder.input(
            "bias",
            OperandDescriptor::new(DataType::Float32, vec![GATE_DIM]),
        )),
        recurrent_bias: Some(fx.builder.input(
            "recurrentBias",
            OperandDescriptor::new(DataType::Float32, vec![GATE_DIM]),
        )),
        reset_after: true,
        layout: GruWeightLayout::Rzn,
        activations: Some(vec![ActivationKind::Sigmoid, ActivationKind::Relu]),
    };
    let output = fx.run(options).unwrap();
    assert_eq!(output.shape(), &[BATCH_SIZE, HIDDEN_SIZE]);
}

#[test]
fn test_zero_hidden_size() {
    let fx = Fixture::new(DataType::Float32);
    let result = fx.builder.gru_cell(
        &fx.input,
        &fx.weight,
        &fx.recurrent_weight,
        &fx.hidden_state,
        0,
        GruCellOptions::default(),
    );
    assert!(matches!(
        result,
        Err(ValidationError::InvalidArgument { what: "hidden_size", .. })
    ));
}

#[test]
fn test_huge_hidden_size() {
    let fx = Fixture::new(DataType::Float32);
    let result = fx.builder.gru_cell(
        &fx.input,
        &fx.weight,
        &fx.recurrent_weight,
        &fx.hidden_state,
        u32::MAX,
        GruCellOptions::default(),
    );
    assert!(matches!(
        result,
        Err(ValidationError::InvalidArgument { what: "hidden_size", .. })
    ));
}

#[test]
fn test_non_float_inputs_are_rejected() {
    let fx = Fixture::new(DataType::Uint32);
    assert!(matches!(
        fx.run(GruCellOptions::default()),
        Err(ValidationError::UnsupportedDataType { role: "input", .. })
    ));
}

#[test]
fn test_input_rank_must_be_2() {
    let fx = Fixture::new(DataType::Float32);
    let input = fx.builder.input(
        "input",
        OperandDescriptor::new(DataType::Float32, vec![BATCH_SIZE]),
    );
    let result = fx.builder.gru_cell(
        &input,
        &fx.weight,
        &fx.recurrent_weight,
        &fx.hidden_state,
        HIDDEN_SIZE,
        GruCellOptions::default(),
    );
    assert!(matches!(
        result,
        Err(ValidationError::RankMismatch { role: "input", .. })
    ));
}

#[test]
fn test_mismatched_batch_dimension() {
    // The batch size flows from input to hidden_state; disagreeing there
    // must fail even though every operand is individually well-formed.
    let fx = Fixture::new(DataType::Float32);
    let input = fx.builder.input(
        "input",
        OperandDescriptor::new(DataType::Float32, vec![INPUT_SIZE, INPUT_SIZE]),
    );
    let result = fx.builder.gru_cell(
        &input,
        &fx.weight,
        &fx.recurrent_weight,
        &fx.hidden_state,
        HIDDEN_SIZE,
        GruCellOptions::default(),
    );
    assert!(matches!(result, Err(ValidationError::ShapeMismatch { .. })));
}

#[test]
fn test_weight_data_type_must_match() {
    let fx = Fixture::new(DataType::Float32);
    let weight = fx.builder.input(
        "weight",
        OperandDescriptor::new(DataType::Int8, vec![GATE_DIM, INPUT_SIZE]),
    );
    let result = fx.builder.gru_cell(
        &fx.input,
        &weight,
        &fx.recurrent_weight,
        &fx.hidden_state,
        HIDDEN_SIZE,
        GruCellOptions::default(),
    );
    assert!(matches!(
        result,
        Err(ValidationError::UnsupportedDataType { role: "weight", .. })
    ));
}

#[test]
fn test_weight_rank_must_be_2() {
    let fx = Fixture::new(DataType::Float32);
    let weight = fx.builder.input(
        "weight",
        OperandDescriptor::new(DataType::Float32, vec![GATE_DIM]),
    );
    let result = fx.builder.gru_cell(
        &fx.input,
        &weight,
        &fx.recurrent_weight,
        &fx.hidden_state,
        HIDDEN_SIZE,
        GruCellOptions::default(),
    );
    assert!(matches!(
        result,
        Err(ValidationError::RankMismatch { role: "weight", .. })
    ));
}

#[test]
fn test_weight_gate_dimension_must_be_3_hidden() {
    let fx = Fixture::new(DataType::Float32);
    let weight = fx.builder.input(
        "weight",
        OperandDescriptor::new(DataType::Float32, vec![4 * HIDDEN_SIZE, INPUT_SIZE]),
    );
    let result = fx.builder.gru_cell(
        &fx.input,
        &weight,
        &fx.recurrent_weight,
        &fx.hidden_state,
        HIDDEN_SIZE,
        GruCellOptions::default(),
    );
    assert!(matches!(
        result,
        Err(ValidationError::ShapeMismatch { role: "weight", .. })
    ));
}

#[test]
fn test_recurrent_weight_data_type_must_match() {
    let fx = Fixture::new(DataType::Float32);
    let recurrent_weight = fx.builder.input(
        "recurrentWeight",
        OperandDescriptor::new(DataType::Int32, vec![GATE_DIM, HIDDEN_SIZE]),
    );
    let result = fx.builder.gru_cell(
        &fx.input,
        &fx.weight,
        &recurrent_weight,
        &fx.hidden_state,
        HIDDEN_SIZE,
        GruCellOptions::default(),
    );
    assert!(matches!(
        result,
        Err(ValidationError::UnsupportedDataType { role: "recurrent_weight", .. })
    ));
}

#[test]
fn test_recurrent_weight_shape() {
    let fx = Fixture::new(DataType::Float32);
    let recurrent_weight = fx.builder.input(
        "recurrentWeight",
        OperandDescriptor::new(DataType::Float32, vec![4 * HIDDEN_SIZE, INPUT_SIZE]),
    );
    let result = fx.builder.gru_cell(
        &fx.input,
        &fx.weight,
        &recurrent_weight,
        &fx.hidden_state,
        HIDDEN_SIZE,
        GruCellOptions::default(),
    );
    assert!(matches!(
        result,
        Err(ValidationError::ShapeMismatch { role: "recurrent_weight", .. })
    ));
}

#[test]
fn test_hidden_state_data_type_must_match() {
    let fx = Fixture::new(DataType::Float32);
    let hidden_state = fx.builder.input(
        "hiddenState",
        OperandDescriptor::new(DataType::Uint32, vec![BATCH_SIZE, HIDDEN_SIZE]),
    );
    let result = fx.builder.gru_cell(
        &fx.input,
        &fx.weight,
        &fx.recurrent_weight,
        &hidden_state,
        HIDDEN_SIZE,
        GruCellOptions::default(),
    );
    assert!(matches!(
        result,
        Err(ValidationError::UnsupportedDataType { role: "hidden_state", .. })
    ));
}

#[test]
fn test_hidden_state_rank_must_be_2() {
    let fx = Fixture::new(DataType::Float32);
    let hidden_state = fx.builder.input(
        "hiddenState",
        OperandDescriptor::new(DataType::Float32, vec![HIDDEN_SIZE]),
    );
    let result = fx.builder.gru_cell(
        &fx.input,
        &fx.weight,
        &fx.recurrent_weight,
        &hidden_state,
        HIDDEN_SIZE,
        GruCellOptions::default(),
    );
    assert!(matches!(
        result,
        Err(ValidationError::RankMismatch { role: "hidden_state", .. })
    ));
}

#[test]
fn test_hidden_state_shape() {
    let fx = Fixture::new(DataType::Float32);
    let hidden_state = fx.builder.input(
        "hiddenState",
        OperandDescriptor::new(DataType::Float32, vec![BATCH_SIZE, GATE_DIM]),
    );
    let result = fx.builder.gru_cell(
        &fx.input,
        &fx.weight,
        &fx.recurrent_weight,
        &hidden_state,
        HIDDEN_SIZE,
        GruCellOptions::default(),
    );
    assert!(matches!(
        result,
        Err(ValidationError::ShapeMismatch { role: "hidden_state", .. })
    ));
}

#[test]
fn test_activation_count_must_be_2() {
    let fx = Fixture::new(DataType::Float32);
    let options = GruCellOptions {
        activations: Some(vec![
            ActivationKind::Sigmoid,
            ActivationKind::Tanh,
            ActivationKind::Relu,
        ]),
        ..GruCellOptions::default()
    };
    assert!(matches!(
        fx.run(options),
        Err(ValidationError::OptionCountMismatch { option: "activations", expected: 2, actual: 3 })
    ));
}

#[test]
fn test_bias_data_type_must_match() {
    let fx = Fixture::new(DataType::Float32);
    let options = GruCellOptions {
        bias: Some(fx.builder.input(
            "bias",
            OperandDescriptor::new(DataType::Uint8, vec![GATE_DIM]),
        )),
        ..GruCellOptions::default()
    };
    assert!(matches!(
        fx.run(options),
        Err(ValidationError::UnsupportedDataType { role: "bias", .. })
    ));
}

#[test]
fn test_bias_rank_must_be_1() {
    let fx = Fixture::new(DataType::Float32);
    let options = GruCellOptions {
        bias: Some(fx.builder.input(
            "bias",
            OperandDescriptor::new(DataType::Float32, vec![BATCH_SIZE, GATE_DIM]),
        )),
        ..GruCellOptions::default()
    };
    assert!(matches!(
        fx.run(options),
        Err(ValidationError::RankMismatch { role: "bias", .. })
    ));
}

#[test]
fn test_bias_length_must_be_3_hidden() {
    let fx = Fixture::new(DataType::Float32);
    let options = GruCellOptions {
        bias: Some(fx.builder.input(
            "bias",
            OperandDescriptor::new(DataType::Float32, vec![4 * HIDDEN_SIZE]),
        )),
        ..GruCellOptions::default()
    };
    assert!(matches!(
        fx.run(options),
        Err(ValidationError::ShapeMismatch { role: "bias", .. })
    ));
}

#[test]
fn test_recurrent_bias_data_type_must_match() {
    let fx = Fixture::new(DataType::Float32);
    let options = GruCellOptions {
        recurrent_bias: Some(fx.builder.input(
            "recurrentBias",
            OperandDescriptor::new(DataType::Int8, vec![GATE_DIM]),
        )),
        ..GruCellOptions::default()
    };
    assert!(matches!(
        fx.run(options),
        Err(ValidationError::UnsupportedDataType { role: "recurrent_bias", .. })
    ));
}

#[test]
fn test_recurrent_bias_rank_must_be_1() {
    let fx = Fixture::new(DataType::Float32);
    let options = GruCellOptions {
        recurrent_bias: Some(fx.builder.input(
            "recurrentBias",
            OperandDescriptor::new(DataType::Float32, vec![BATCH_SIZE, GATE_DIM]),
        )),
        ..GruCellOptions::default()
    };
    assert!(matches!(
        fx.run(options),
        Err(ValidationError::RankMismatch { role: "recurrent_bias", .. })
    ));
}

#[test]
fn test_recurrent_bias_length_must_be_3_hidden() {
    let fx = Fixture::new(DataType::Float16);
    let options = GruCellOptions {
        recurrent_bias: Some(fx.builder.input(
            "recurrentBias",
            OperandDescriptor::new(DataType::Float16, vec![4 * HIDDEN_SIZE]),
        )),
        ..GruCellOptions::default()
    };
    assert!(matches!(
        fx.run(options),
        Err(ValidationError::ShapeMismatch { role: "recurrent_bias", .. })
    ));
}

#[test]
fn test_float16_succeeds() {
    let fx = Fixture::new(DataType::Float16);
    let output = fx.run(GruCellOptions::default()).unwrap();
    assert_eq!(output.data_type(), DataType::Float16);
    assert_eq!(output.shape(), &[BATCH_SIZE, HIDDEN_SIZE]);
}
