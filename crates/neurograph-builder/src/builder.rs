//! Graph-builder sessions.

use neurograph_ir::{BuilderId, Operand, OperandDescriptor, ValidationError};

use crate::ops::{
    conv_transpose2d, fill, gemm, recurrent, resample2d, unary, ConvTranspose2dOptions,
    GemmOptions, GruCellOptions, LstmCellOptions, Operation, Resample2dOptions, UnaryKind,
};

/// One graph-building session.
///
/// Every operand the session creates is stamped with its [`BuilderId`];
/// validators reject operands from any other session before running type
/// or shape checks, so operands are never interchangeable across builders.
/// The session itself holds no other state, and every operation call is
/// independent and synchronous.
#[derive(Debug)]
pub struct GraphBuilder {
    id: BuilderId,
}

impl GraphBuilder {
    pub fn new() -> Self {
        GraphBuilder {
            id: BuilderId::fresh(),
        }
    }

    /// This session's identity.
    pub fn id(&self) -> BuilderId {
        self.id
    }

    /// Declare a named graph input.
    ///
    /// The `u32` dimension type already enforces the per-dimension bound,
    /// so input creation itself cannot fail; whole-buffer limits are
    /// checked where descriptors are inferred.
    pub fn input(&self, name: impl Into<String>, descriptor: OperandDescriptor) -> Operand {
        Operand::new(descriptor, self.id, Some(name.into()))
    }

    /// Declare a constant operand filled with the arithmetic sequence
    /// `start, start + step, ...` in row-major order. Fails when any
    /// generated element falls outside the element type's representable
    /// range.
    pub fn constant_sequence(
        &self,
        descriptor: OperandDescriptor,
        start: f64,
        step: f64,
    ) -> Result<Operand, ValidationError> {
        let descriptor = fill::validate(&descriptor, start, step)?;
        Ok(self.output(descriptor))
    }

    /// Validate an operation and wrap its inferred descriptors as operands
    /// owned by this session.
    pub fn build(&self, operation: &Operation) -> Result<Vec<Operand>, ValidationError> {
        let descriptors = operation.validate(self.id)?;
        Ok(descriptors.into_iter().map(|d| self.output(d)).collect())
    }

    /// Apply an element-wise unary operation.
    pub fn unary(&self, kind: UnaryKind, input: &Operand) -> Result<Operand, ValidationError> {
        let descriptor = unary::validate(kind, input, self.id)?;
        Ok(self.output(descriptor))
    }

    pub fn abs(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Abs, input)
    }

    pub fn ceil(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Ceil, input)
    }

    pub fn erf(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Erf, input)
    }

    pub fn exp(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Exp, input)
    }

    pub fn floor(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Floor, input)
    }

    pub fn identity(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Identity, input)
    }

    pub fn log(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Log, input)
    }

    pub fn logical_not(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::LogicalNot, input)
    }

    pub fn neg(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Neg, input)
    }

    pub fn reciprocal(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Reciprocal, input)
    }

    pub fn relu(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Relu, input)
    }

    pub fn sigmoid(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Sigmoid, input)
    }

    pub fn sin(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Sin, input)
    }

    pub fn sqrt(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Sqrt, input)
    }

    pub fn tan(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Tan, input)
    }

    pub fn tanh(&self, input: &Operand) -> Result<Operand, ValidationError> {
        self.unary(UnaryKind::Tanh, input)
    }

    /// General matrix multiplication `alpha * op(a) x op(b) + beta * c`.
    pub fn gemm(
        &self,
        a: &Operand,
        b: &Operand,
        options: GemmOptions,
    ) -> Result<Operand, ValidationError> {
        let descriptor = gemm::validate(a, b, &options, self.id)?;
        Ok(self.output(descriptor))
    }

    /// Transposed 2-D convolution.
    pub fn conv_transpose2d(
        &self,
        input: &Operand,
        filter: &Operand,
        options: ConvTranspose2dOptions,
    ) -> Result<Operand, ValidationError> {
        let descriptor = conv_transpose2d::validate(input, filter, &options, self.id)?;
        Ok(self.output(descriptor))
    }

    /// Resample two consecutive spatial axes of a rank-4 operand.
    pub fn resample2d(
        &self,
        input: &Operand,
        options: Resample2dOptions,
    ) -> Result<Operand, ValidationError> {
        let descriptor = resample2d::validate(input, &options, self.id)?;
        Ok(self.output(descriptor))
    }

    /// One GRU step; returns the new hidden state.
    #[allow(clippy::too_many_arguments)]
    pub fn gru_cell(
        &self,
        input: &Operand,
        weight: &Operand,
        recurrent_weight: &Operand,
        hidden_state: &Operand,
        hidden_size: u32,
        options: GruCellOptions,
    ) -> Result<Operand, ValidationError> {
        let descriptor = recurrent::validate_gru_cell(
            input,
            weight,
            recurrent_weight,
            hidden_state,
            hidden_size,
            &options,
            self.id,
        )?;
        Ok(self.output(descriptor))
    }

    /// One LSTM step; returns the new hidden state and cell state.
    #[allow(clippy::too_many_arguments)]
    pub fn lstm_cell(
        &self,
        input: &Operand,
        weight: &Operand,
        recurrent_weight: &Operand,
        hidden_state: &Operand,
        cell_state: &Operand,
        hidden_size: u32,
        options: LstmCellOptions,
    ) -> Result<(Operand, Operand), ValidationError> {
        let (hidden, cell) = recurrent::validate_lstm_cell(
            input,
            weight,
            recurrent_weight,
            hidden_state,
            cell_state,
            hidden_size,
            &options,
            self.id,
        )?;
        Ok((self.output(hidden), self.output(cell)))
    }

    fn output(&self, descriptor: OperandDescriptor) -> Operand {
        Operand::new(descriptor, self.id, None)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
