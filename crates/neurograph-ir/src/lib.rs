//! # neurograph IR
//!
//! Operand model and validation rules for the neurograph graph-building
//! engine: the data structures a builder session hands to per-operation
//! validators, and the reusable type/shape predicates those validators are
//! written in terms of.
//!
//! ## Core components
//!
//! - [`DataType`] — operand element types with class predicates
//!   (floating-point, signed/unsigned integer) and representable ranges.
//! - [`OperandDescriptor`] — element type plus shape, with checked
//!   element-count and byte-length arithmetic against the 2^32-1 buffer
//!   bound.
//! - [`Operand`] / [`BuilderId`] — a descriptor stamped with the identity
//!   of the session that created it. Identity is compared by id, never
//!   structurally; operands from different sessions are never
//!   interchangeable.
//! - [`ActivationKind`] — opaque activation tags carried by recurrent-cell
//!   options.
//! - [`rules`] — per-role checks (data-type membership, rank, exact shape,
//!   unidirectional broadcast) returning [`ValidationError`].
//!
//! ## Quick start
//!
//! ```rust
//! use neurograph_ir::{BuilderId, DataType, Operand, OperandDescriptor};
//!
//! let session = BuilderId::fresh();
//! let desc = OperandDescriptor::new(DataType::Float32, vec![2, 3]);
//! let operand = Operand::new(desc, session, Some("a".to_string()));
//!
//! assert_eq!(operand.rank(), 2);
//! assert_eq!(operand.shape(), &[2, 3]);
//! assert!(operand.created_by(session));
//! assert!(!operand.created_by(BuilderId::fresh()));
//! ```

mod activation;
mod broadcast;
mod descriptor;
mod dtype;
mod error;
mod operand;
pub mod rules;

pub use activation::ActivationKind;
pub use broadcast::unidirectionally_broadcastable;
pub use descriptor::{OperandDescriptor, MAX_BUFFER_SIZE};
pub use dtype::{DataType, FLOAT16_MAX};
pub use error::ValidationError;
pub use operand::{BuilderId, Operand};
