mod display;
mod dtype;
mod element;
mod layout;
mod options;
mod shape;


use thiserror::Error;

use crate::ReprResult;

pub use display::{render, render_with_options};
pub use dtype::DType;
pub use element::{format_scalar, Element};
pub use options::{PrintOptions, DEFAULT_EDGE_ITEMS, DEFAULT_PRECISION, DEFAULT_THRESHOLD};
pub use shape::compute_strides;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TensorError {
    #[error("Invalid shape {shape:?}: {reason}")]
    InvalidShape { shape: Vec<usize>, reason: String },
    #[error("Invalid data length: expected {expected}, got {got}")]
    InvalidDataLength { expected: usize, got: usize },
    #[error("Unknown dtype '{name}'")]
    UnknownDType { name: String },
}

/// Borrowed view over a flat row-major buffer.
///
/// The buffer is validated against the shape and dtype once, at construction,
/// so rendering a view cannot fail on length.
#[derive(Debug, Clone, Copy)]
pub struct TensorView<'a> {
    data: &'a [f64],
    shape: &'a [usize],
    dtype: DType,
}

impl<'a> TensorView<'a> {
    pub fn new(data: &'a [f64], shape: &'a [usize], dtype: DType) -> ReprResult<Self> {
        shape::validate_buffer(data.len(), shape, dtype)?;
        Ok(Self { data, shape, dtype })
    }

    pub fn data(&self) -> &'a [f64] {
        self.data
    }

    pub fn shape(&self) -> &'a [usize] {
        self.shape
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Number of logical elements (complex pairs count once).
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Row-major strides in logical elements.
    pub fn strides(&self) -> Vec<usize> {
        compute_strides(self.shape)
    }

    pub fn render(&self, verbose: bool) -> ReprResult<String> {
        render(self.data, self.shape, self.dtype, verbose)
    }

    pub fn render_with_options(&self, verbose: bool, options: &PrintOptions) -> ReprResult<String> {
        render_with_options(self.data, self.shape, self.dtype, verbose, options)
    }
}
