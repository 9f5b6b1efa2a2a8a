//! Transposed 2-D convolution.

use serde::{Deserialize, Serialize};

use neurograph_ir::{rules, BuilderId, DataType, Operand, OperandDescriptor, ValidationError};

/// Position of the channel dimension in the input and output operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputLayout {
    #[default]
    Nchw,
    Nhwc,
}

/// Dimension ordering of the filter operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterLayout {
    #[default]
    Iohw,
    Hwoi,
    Ohwi,
}

/// Options for [`conv_transpose2d`](crate::GraphBuilder::conv_transpose2d).
///
/// `padding` is `[begin_h, end_h, begin_w, end_w]`; the remaining
/// per-axis pairs are `[h, w]`. `output_sizes`, when present, replaces
/// `output_padding` as the way to disambiguate the output size.
#[derive(Clone, Debug)]
pub struct ConvTranspose2dOptions {
    pub padding: [u32; 4],
    pub strides: [u32; 2],
    pub dilations: [u32; 2],
    pub output_padding: [u32; 2],
    pub output_sizes: Option<[u32; 2]>,
    pub groups: u32,
    pub input_layout: InputLayout,
    pub filter_layout: FilterLayout,
    pub bias: Option<Operand>,
}

impl Default for ConvTranspose2dOptions {
    fn default() -> Self {
        ConvTranspose2dOptions {
            padding: [0; 4],
            strides: [1, 1],
            dilations: [1, 1],
            output_padding: [0, 0],
            output_sizes: None,
            groups: 1,
            input_layout: InputLayout::default(),
            filter_layout: FilterLayout::default(),
            bias: None,
        }
    }
}

pub(crate) fn validate(
    input: &Operand,
    filter: &Operand,
    options: &ConvTranspose2dOptions,
    builder: BuilderId,
) -> Result<OperandDescriptor, ValidationError> {
    // Session membership for input, filter, and the nested bias option is
    // established before any shape work.
    rules::require_same_builder("input", input, builder)?;
    rules::require_same_builder("filter", filter, builder)?;
    if let Some(bias) = &options.bias {
        rules::require_same_builder("bias", bias, builder)?;
    }

    rules::require_data_type("input", input, &DataType::FLOATING_POINT)?;
    rules::require_same_data_type("filter", filter, input.data_type())?;
    rules::require_rank("input", input, 4)?;
    rules::require_rank("filter", filter, 4)?;

    if options.groups == 0 {
        return Err(ValidationError::InvalidArgument {
            what: "groups",
            reason: "must be at least 1".to_string(),
        });
    }
    for &stride in &options.strides {
        if stride == 0 {
            return Err(ValidationError::InvalidArgument {
                what: "strides",
                reason: "each stride must be at least 1".to_string(),
            });
        }
    }
    for &dilation in &options.dilations {
        if dilation == 0 {
            return Err(ValidationError::InvalidArgument {
                what: "dilations",
                reason: "each dilation must be at least 1".to_string(),
            });
        }
    }

    let s = input.shape();
    let (batch_size, input_channels, input_spatial) = match options.input_layout {
        InputLayout::Nchw => (s[0], s[1], [s[2], s[3]]),
        InputLayout::Nhwc => (s[0], s[3], [s[1], s[2]]),
    };
    let f = filter.shape();
    let (filter_input_channels, channels_per_group, filter_spatial) = match options.filter_layout {
        FilterLayout::Iohw => (f[0], f[1], [f[2], f[3]]),
        FilterLayout::Hwoi => (f[3], f[2], [f[0], f[1]]),
        FilterLayout::Ohwi => (f[3], f[0], [f[1], f[2]]),
    };

    if filter_input_channels != input_channels {
        return Err(ValidationError::ShapeMismatch {
            role: "filter",
            expected: format!("input channel dimension equal to {input_channels}"),
            actual: f.to_vec(),
        });
    }
    if input_channels % options.groups != 0 {
        return Err(ValidationError::InvalidArgument {
            what: "groups",
            reason: format!(
                "{} input channels are not divisible into {} groups",
                input_channels, options.groups
            ),
        });
    }
    let output_channels = channels_per_group
        .checked_mul(options.groups)
        .ok_or(ValidationError::InvalidArgument {
            what: "groups",
            reason: "output channel count exceeds the 2^32-1 dimension limit".to_string(),
        })?;

    let mut output_spatial = [0u32; 2];
    for axis in 0..2 {
        output_spatial[axis] = output_dimension(
            input_spatial[axis],
            filter_spatial[axis],
            options.strides[axis],
            options.dilations[axis],
            [options.padding[axis * 2], options.padding[axis * 2 + 1]],
            options.output_padding[axis],
            options.output_sizes.map(|sizes| sizes[axis]),
        )?;
    }

    let output = OperandDescriptor::new(
        input.data_type(),
        match options.input_layout {
            InputLayout::Nchw => vec![
                batch_size,
                output_channels,
                output_spatial[0],
                output_spatial[1],
            ],
            InputLayout::Nhwc => vec![
                batch_size,
                output_spatial[0],
                output_spatial[1],
                output_channels,
            ],
        },
    );

    if let Some(bias) = &options.bias {
        rules::require_same_data_type("bias", bias, input.data_type())?;
        rules::require_rank("bias", bias, 1)?;
        rules::require_shape("bias", bias, &[output_channels])?;
    }

    output.byte_length()?;
    Ok(output)
}

/// Output size along one spatial axis.
///
/// The default is `(in - 1) * stride + (filter - 1) * dilation + 1 -
/// pad_begin - pad_end + output_padding`. An explicit size replaces
/// `output_padding` and must fall inside `[default, default + stride)`
/// where `default` is computed with zero output padding.
fn output_dimension(
    input_size: u32,
    filter_size: u32,
    stride: u32,
    dilation: u32,
    padding: [u32; 2],
    output_padding: u32,
    explicit_size: Option<u32>,
) -> Result<u32, ValidationError> {
    if input_size == 0 || filter_size == 0 {
        return Err(ValidationError::InvalidArgument {
            what: "input",
            reason: "spatial dimensions must be at least 1".to_string(),
        });
    }

    let span = u128::from(input_size - 1) * u128::from(stride)
        + u128::from(filter_size - 1) * u128::from(dilation)
        + 1;
    let padded = span
        .checked_sub(u128::from(padding[0]) + u128::from(padding[1]))
        .ok_or(ValidationError::InvalidArgument {
            what: "padding",
            reason: "padding consumes the whole output".to_string(),
        })?;

    let size = match explicit_size {
        Some(size) => {
            let lower = padded;
            let upper = padded + u128::from(stride);
            if !(u128::from(size) >= lower && u128::from(size) < upper) {
                return Err(ValidationError::InvalidArgument {
                    what: "output_sizes",
                    reason: format!("size {size} is outside [{lower}, {upper})"),
                });
            }
            u128::from(size)
        }
        None => padded + u128::from(output_padding),
    };

    if size >= 1 && size <= u128::from(u32::MAX) {
        Ok(size as u32)
    } else {
        Err(ValidationError::InvalidArgument {
            what: "output",
            reason: format!("dimension {size} is outside [1, 2^32-1]"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_dimension() {
        // (5-1)*1 + (3-1)*1 + 1 = 7
        assert_eq!(output_dimension(5, 3, 1, 1, [0, 0], 0, None).unwrap(), 7);
        // (5-1)*2 + (3-1)*1 + 1 = 11
        assert_eq!(output_dimension(5, 3, 2, 1, [0, 0], 0, None).unwrap(), 11);
    }

    #[test]
    fn test_output_padding_extends() {
        assert_eq!(output_dimension(5, 3, 2, 1, [0, 0], 1, None).unwrap(), 12);
    }

    #[test]
    fn test_explicit_size_window() {
        // Default is 11 with stride 2, so 11 and 12 are valid, 10 and 13
        // are not.
        assert_eq!(
            output_dimension(5, 3, 2, 1, [0, 0], 0, Some(12)).unwrap(),
            12
        );
        assert!(output_dimension(5, 3, 2, 1, [0, 0], 0, Some(10)).is_err());
        assert!(output_dimension(5, 3, 2, 1, [0, 0], 0, Some(13)).is_err());
    }

    #[test]
    fn test_padding_cannot_consume_output() {
        assert!(output_dimension(2, 2, 1, 1, [2, 2], 0, None).is_err());
    }
}
