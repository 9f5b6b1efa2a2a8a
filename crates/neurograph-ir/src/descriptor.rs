//! Operand descriptors: element type plus shape.

use serde::{Deserialize, Serialize};

use crate::dtype::DataType;
use crate::error::ValidationError;

/// Largest element count, and largest byte length, of any operand buffer.
pub const MAX_BUFFER_SIZE: u64 = u32::MAX as u64;

/// Declared type and shape of an operand.
///
/// The shape is an ordered sequence of dimension sizes; its length is the
/// rank, and an empty sequence describes a scalar. Storing dimensions as
/// `u32` enforces the per-dimension 2^32-1 bound by construction; the
/// whole-buffer bound is checked by [`element_count`](Self::element_count)
/// and [`byte_length`](Self::byte_length).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperandDescriptor {
    pub data_type: DataType,
    pub dimensions: Vec<u32>,
}

impl OperandDescriptor {
    pub fn new(data_type: DataType, dimensions: Vec<u32>) -> Self {
        OperandDescriptor {
            data_type,
            dimensions,
        }
    }

    /// A rank-0 descriptor.
    pub fn scalar(data_type: DataType) -> Self {
        OperandDescriptor {
            data_type,
            dimensions: Vec::new(),
        }
    }

    pub fn rank(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_scalar(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Total number of elements, checked against [`MAX_BUFFER_SIZE`].
    ///
    /// A scalar holds one element; any zero dimension makes the count zero.
    pub fn element_count(&self) -> Result<u64, ValidationError> {
        let mut count: u64 = 1;
        for &dim in &self.dimensions {
            count = count
                .checked_mul(u64::from(dim))
                .filter(|&c| c <= MAX_BUFFER_SIZE)
                .ok_or_else(|| self.overflow())?;
        }
        Ok(count)
    }

    /// Total buffer size in bytes, checked against [`MAX_BUFFER_SIZE`].
    pub fn byte_length(&self) -> Result<u64, ValidationError> {
        self.element_count()?
            .checked_mul(self.data_type.byte_size())
            .filter(|&len| len <= MAX_BUFFER_SIZE)
            .ok_or_else(|| self.overflow())
    }

    fn overflow(&self) -> ValidationError {
        ValidationError::SizeOverflow {
            data_type: self.data_type,
            dimensions: self.dimensions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_and_scalar() {
        let desc = OperandDescriptor::new(DataType::Float32, vec![2, 3, 4]);
        assert_eq!(desc.rank(), 3);
        assert!(!desc.is_scalar());

        let scalar = OperandDescriptor::scalar(DataType::Int8);
        assert_eq!(scalar.rank(), 0);
        assert!(scalar.is_scalar());
    }

    #[test]
    fn test_element_count() {
        let desc = OperandDescriptor::new(DataType::Float32, vec![2, 3, 4]);
        assert_eq!(desc.element_count().unwrap(), 24);
        assert_eq!(OperandDescriptor::scalar(DataType::Float32).element_count().unwrap(), 1);
        assert_eq!(
            OperandDescriptor::new(DataType::Float32, vec![0, 5]).element_count().unwrap(),
            0
        );
    }

    #[test]
    fn test_byte_length() {
        let desc = OperandDescriptor::new(DataType::Float16, vec![10, 10]);
        assert_eq!(desc.byte_length().unwrap(), 200);
    }

    #[test]
    fn test_element_count_overflow() {
        let desc = OperandDescriptor::new(DataType::Uint8, vec![u32::MAX, 2]);
        assert!(matches!(
            desc.element_count(),
            Err(ValidationError::SizeOverflow { .. })
        ));
    }

    #[test]
    fn test_byte_length_overflow_from_element_size() {
        // The element count itself fits, but count * 4 bytes does not.
        let desc = OperandDescriptor::new(DataType::Float32, vec![u32::MAX]);
        assert_eq!(desc.element_count().unwrap(), u64::from(u32::MAX));
        assert!(matches!(
            desc.byte_length(),
            Err(ValidationError::SizeOverflow { .. })
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let desc = OperandDescriptor::new(DataType::Int32, vec![1, 2, 3]);
        let json = serde_json::to_string(&desc).unwrap();
        assert_eq!(json, r#"{"data_type":"int32","dimensions":[1,2,3]}"#);
        let back: OperandDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, desc);
    }
}
