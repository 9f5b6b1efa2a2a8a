//! Spatial resampling over two consecutive axes.

use serde::{Deserialize, Serialize};

use neurograph_ir::{rules, BuilderId, DataType, Operand, OperandDescriptor, ValidationError};

/// Interpolation algorithm; carried through without validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterpolationMode {
    #[default]
    NearestNeighbor,
    Linear,
}

/// Options for [`resample2d`](crate::GraphBuilder::resample2d).
///
/// `sizes`, when present, overrides `scales` entirely. `axes` defaults to
/// the last two spatial dimensions `[2, 3]`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Resample2dOptions {
    pub mode: InterpolationMode,
    pub scales: Option<Vec<f32>>,
    pub sizes: Option<Vec<u32>>,
    pub axes: Option<Vec<u32>>,
}

pub(crate) fn validate(
    input: &Operand,
    options: &Resample2dOptions,
    builder: BuilderId,
) -> Result<OperandDescriptor, ValidationError> {
    rules::require_same_builder("input", input, builder)?;
    rules::require_data_type("input", input, &DataType::FLOATING_POINT)?;
    rules::require_rank("input", input, 4)?;

    let axes = resolved_axes(options, input.rank() as u32)?;

    let mut dimensions = input.shape().to_vec();
    if let Some(sizes) = &options.sizes {
        if sizes.len() != 2 {
            return Err(ValidationError::OptionCountMismatch {
                option: "sizes",
                expected: 2,
                actual: sizes.len(),
            });
        }
        for (&axis, &size) in axes.iter().zip(sizes) {
            if size == 0 {
                return Err(ValidationError::InvalidArgument {
                    what: "sizes",
                    reason: "each size must be at least 1".to_string(),
                });
            }
            dimensions[axis as usize] = size;
        }
    } else if let Some(scales) = &options.scales {
        if scales.len() != 2 {
            return Err(ValidationError::OptionCountMismatch {
                option: "scales",
                expected: 2,
                actual: scales.len(),
            });
        }
        for &scale in scales {
            if !(scale > 0.0) {
                return Err(ValidationError::InvalidArgument {
                    what: "scales",
                    reason: format!("scale {scale} is not greater than 0"),
                });
            }
        }
        for (&axis, &scale) in axes.iter().zip(scales) {
            dimensions[axis as usize] = scaled_dimension(dimensions[axis as usize], scale)?;
        }
    }

    let output = OperandDescriptor::new(input.data_type(), dimensions);
    output.byte_length()?;
    Ok(output)
}

/// Check and default the `axes` option. The two axes must be in bounds,
/// distinct, and consecutive; for a rank-4 input the valid pairs are
/// exactly `[0, 1]`, `[1, 2]`, and `[2, 3]`.
fn resolved_axes(options: &Resample2dOptions, rank: u32) -> Result<[u32; 2], ValidationError> {
    let axes = match &options.axes {
        Some(axes) => axes,
        None => return Ok([rank - 2, rank - 1]),
    };
    if axes.len() != 2 {
        return Err(ValidationError::OptionCountMismatch {
            option: "axes",
            expected: 2,
            actual: axes.len(),
        });
    }
    for &axis in axes {
        if axis >= rank {
            return Err(ValidationError::InvalidArgument {
                what: "axes",
                reason: format!("axis {axis} is out of bounds for rank {rank}"),
            });
        }
    }
    if axes[1] != axes[0] + 1 {
        return Err(ValidationError::InvalidArgument {
            what: "axes",
            reason: format!("axes [{}, {}] must be consecutive", axes[0], axes[1]),
        });
    }
    Ok([axes[0], axes[1]])
}

/// Scale one dimension, flooring to an integer size; the result must stay
/// within `[1, 2^32-1]`.
fn scaled_dimension(size: u32, scale: f32) -> Result<u32, ValidationError> {
    let scaled = (f64::from(size) * f64::from(scale)).floor();
    if scaled >= 1.0 && scaled <= f64::from(u32::MAX) {
        Ok(scaled as u32)
    } else {
        Err(ValidationError::InvalidArgument {
            what: "scales",
            reason: format!("scaled dimension {scaled} is outside [1, 2^32-1]"),
        })
    }
}
