//! Operands and builder-session identity.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::descriptor::OperandDescriptor;
use crate::dtype::DataType;

static NEXT_BUILDER_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of one graph-builder session.
///
/// Every call to [`fresh`](Self::fresh) yields a distinct id, so two
/// sessions are never equal even when the graphs they build are
/// structurally identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BuilderId(u64);

impl BuilderId {
    /// Mint a new, process-wide unique id.
    pub fn fresh() -> Self {
        BuilderId(NEXT_BUILDER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A typed, shaped value handle produced by a builder session.
///
/// Operands are immutable after creation and owned by the session that
/// created them; validators reject operands stamped with a different
/// session before looking at types or shapes.
#[derive(Clone, Debug)]
pub struct Operand {
    descriptor: OperandDescriptor,
    builder: BuilderId,
    name: Option<String>,
}

impl Operand {
    /// Stamp a descriptor with its owning session. Graph inputs carry the
    /// caller-supplied name; operation outputs are unnamed.
    pub fn new(descriptor: OperandDescriptor, builder: BuilderId, name: Option<String>) -> Self {
        Operand {
            descriptor,
            builder,
            name,
        }
    }

    pub fn descriptor(&self) -> &OperandDescriptor {
        &self.descriptor
    }

    pub fn data_type(&self) -> DataType {
        self.descriptor.data_type
    }

    pub fn shape(&self) -> &[u32] {
        &self.descriptor.dimensions
    }

    pub fn rank(&self) -> usize {
        self.descriptor.rank()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether this operand was created by the given session.
    pub fn created_by(&self, builder: BuilderId) -> bool {
        self.builder == builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_ids_are_unique() {
        let a = BuilderId::fresh();
        let b = BuilderId::fresh();
        assert_ne!(a, b);
        assert_eq!(a, a);
    }

    #[test]
    fn test_operand_accessors() {
        let id = BuilderId::fresh();
        let desc = OperandDescriptor::new(DataType::Float32, vec![2, 4]);
        let operand = Operand::new(desc.clone(), id, Some("input".to_string()));
        assert_eq!(operand.data_type(), DataType::Float32);
        assert_eq!(operand.shape(), &[2, 4]);
        assert_eq!(operand.rank(), 2);
        assert_eq!(operand.name(), Some("input"));
        assert_eq!(operand.descriptor(), &desc);
    }

    #[test]
    fn test_ownership_is_by_identity_not_structure() {
        let a = BuilderId::fresh();
        let b = BuilderId::fresh();
        let desc = OperandDescriptor::new(DataType::Float32, vec![2]);
        let operand = Operand::new(desc, a, None);
        assert!(operand.created_by(a));
        assert!(!operand.created_by(b));
    }
}
