//! # neurograph builder
//!
//! Builder sessions and per-operation validators for the neurograph
//! graph-building engine. A [`GraphBuilder`] mints operands (inputs and
//! constants) stamped with its session identity; each operation method
//! validates its operands and options in one stateless pass and either
//! returns operands carrying the inferred output descriptors or fails with
//! a [`ValidationError`]. Nothing is executed: this crate decides
//! well-formedness and computes shapes, never values.
//!
//! ## Quick start
//!
//! ```rust
//! use neurograph_builder::{GemmOptions, GraphBuilder};
//! use neurograph_ir::{DataType, OperandDescriptor};
//!
//! let builder = GraphBuilder::new();
//! let a = builder.input("a", OperandDescriptor::new(DataType::Float32, vec![2, 3]));
//! let b = builder.input("b", OperandDescriptor::new(DataType::Float32, vec![3, 4]));
//!
//! let output = builder.gemm(&a, &b, GemmOptions::default()).unwrap();
//! assert_eq!(output.data_type(), DataType::Float32);
//! assert_eq!(output.shape(), &[2, 4]);
//!
//! // A contracted-dimension mismatch is rejected, not executed.
//! let bad = builder.input("bad", OperandDescriptor::new(DataType::Float32, vec![2, 4]));
//! assert!(builder.gemm(&a, &bad, GemmOptions::default()).is_err());
//! ```
//!
//! ## Session isolation
//!
//! Operands belong to the builder that created them. Passing an operand to
//! another builder's operation — directly or nested inside an options
//! record — fails before any type or shape check:
//!
//! ```rust
//! use neurograph_builder::GraphBuilder;
//! use neurograph_ir::{DataType, OperandDescriptor, ValidationError};
//!
//! let builder = GraphBuilder::new();
//! let other = GraphBuilder::new();
//! let foreign = other.input("x", OperandDescriptor::new(DataType::Float32, vec![2]));
//!
//! let err = builder.abs(&foreign).unwrap_err();
//! assert!(matches!(err, ValidationError::ForeignOperand { .. }));
//! ```

mod builder;
mod ops;

pub use builder::GraphBuilder;
pub use ops::{
    ConvTranspose2dOptions, FilterLayout, GemmOptions, GruCellOptions, GruWeightLayout,
    InputLayout, InterpolationMode, LstmCellOptions, LstmWeightLayout, Operation,
    Resample2dOptions, UnaryKind,
};

pub use neurograph_ir::{
    ActivationKind, BuilderId, DataType, Operand, OperandDescriptor, ValidationError,
};
