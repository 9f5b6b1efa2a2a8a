//! Constants filled with an arithmetic sequence.

use neurograph_ir::{OperandDescriptor, ValidationError};

/// Validates a constant operand whose elements are `start + k * step` in
/// row-major order.
///
/// The sequence is affine in `k`, so its extrema sit at the endpoints:
/// checking `start` and the final element against the element type's
/// representable range covers every generated value. A rank-0 descriptor
/// produces a single-element fill, not an error.
pub(crate) fn validate(
    descriptor: &OperandDescriptor,
    start: f64,
    step: f64,
) -> Result<OperandDescriptor, ValidationError> {
    let count = descriptor.element_count()?;
    let data_type = descriptor.data_type;

    if !data_type.can_represent(start) {
        return Err(ValidationError::ValueOutOfRange {
            what: "start",
            value: start,
            data_type,
        });
    }
    if count > 1 {
        let last = start + (count - 1) as f64 * step;
        if !data_type.can_represent(last) {
            return Err(ValidationError::ValueOutOfRange {
                what: "final sequence element",
                value: last,
                data_type,
            });
        }
    }

    Ok(descriptor.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurograph_ir::DataType;

    fn fill(descriptor: OperandDescriptor, start: f64, step: f64) -> Result<OperandDescriptor, ValidationError> {
        validate(&descriptor, start, step)
    }

    #[test]
    fn test_in_range_sequence() {
        let desc = OperandDescriptor::new(DataType::Int8, vec![3]);
        assert_eq!(fill(desc.clone(), 3.0, -2.0).unwrap(), desc);
    }

    #[test]
    fn test_scalar_checks_start_only() {
        let desc = OperandDescriptor::scalar(DataType::Float32);
        assert!(fill(desc, 0.1, f64::NAN).is_ok());
    }

    #[test]
    fn test_start_out_of_range() {
        let desc = OperandDescriptor::new(DataType::Int8, vec![5]);
        let err = fill(desc, 200.0, 2.0).unwrap_err();
        assert!(matches!(err, ValidationError::ValueOutOfRange { what: "start", .. }));
    }

    #[test]
    fn test_endpoint_out_of_range() {
        // 126 + 4 * 2 = 134, past the int8 maximum of 127.
        let desc = OperandDescriptor::new(DataType::Int8, vec![5]);
        let err = fill(desc, 126.0, 2.0).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::ValueOutOfRange {
                what: "final sequence element",
                ..
            }
        ));
    }

    #[test]
    fn test_float16_endpoint_uses_exact_bound() {
        // 65500 + 4 * 2.8 = 65511.2, past the binary16 maximum of 65504.
        let desc = OperandDescriptor::new(DataType::Float16, vec![5]);
        assert!(fill(desc.clone(), 65500.0, 2.8).is_err());
        assert!(fill(desc, 65490.0, 2.8).is_ok());
    }
}
