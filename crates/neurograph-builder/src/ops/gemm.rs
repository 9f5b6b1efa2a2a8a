//! General matrix multiplication.

use neurograph_ir::{rules, BuilderId, DataType, Operand, OperandDescriptor, ValidationError};

/// Options for [`gemm`](crate::GraphBuilder::gemm).
///
/// `alpha` and `beta` scale values, not shapes, and are carried through
/// without validation. The optional `c` operand is added to the product
/// and must broadcast to the output shape.
#[derive(Clone, Debug)]
pub struct GemmOptions {
    pub c: Option<Operand>,
    pub alpha: f32,
    pub beta: f32,
    pub a_transpose: bool,
    pub b_transpose: bool,
}

impl Default for GemmOptions {
    fn default() -> Self {
        GemmOptions {
            c: None,
            alpha: 1.0,
            beta: 1.0,
            a_transpose: false,
            b_transpose: false,
        }
    }
}

/// Validates `alpha * op(a) x op(b) + beta * c` over rank-2 operands and
/// infers the `[rows(a), cols(b)]` output descriptor.
pub(crate) fn validate(
    a: &Operand,
    b: &Operand,
    options: &GemmOptions,
    builder: BuilderId,
) -> Result<OperandDescriptor, ValidationError> {
    rules::require_same_builder("a", a, builder)?;
    rules::require_same_builder("b", b, builder)?;
    if let Some(c) = &options.c {
        rules::require_same_builder("c", c, builder)?;
    }

    rules::require_data_type("a", a, &DataType::FLOATING_POINT)?;
    rules::require_same_data_type("b", b, a.data_type())?;
    rules::require_rank("a", a, 2)?;
    rules::require_rank("b", b, 2)?;

    // The transpose options flip which dimension of each operand is
    // contracted.
    let (rows, contracted_a) = if options.a_transpose {
        (a.shape()[1], a.shape()[0])
    } else {
        (a.shape()[0], a.shape()[1])
    };
    let (contracted_b, cols) = if options.b_transpose {
        (b.shape()[1], b.shape()[0])
    } else {
        (b.shape()[0], b.shape()[1])
    };
    if contracted_a != contracted_b {
        return Err(ValidationError::ShapeMismatch {
            role: "b",
            expected: format!("contracted dimension equal to {contracted_a}"),
            actual: b.shape().to_vec(),
        });
    }

    let output = OperandDescriptor::new(a.data_type(), vec![rows, cols]);
    if let Some(c) = &options.c {
        rules::require_same_data_type("c", c, a.data_type())?;
        rules::require_rank_at_most("c", c, 2)?;
        rules::require_broadcastable_to("c", c, &output.dimensions)?;
    }

    output.byte_length()?;
    Ok(output)
}
