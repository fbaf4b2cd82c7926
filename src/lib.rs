//! Nested-bracket text rendering for flat row-major tensor buffers.
//!
//! ```
//! use tensor_repr::{render, DType};
//!
//! let out = render(&[1.0, 2.0, 3.0, 4.0], &[2, 2], DType::Float32, false).unwrap();
//! assert_eq!(out, "Tensor\n    [[1, 2],\n     [3, 4]]");
//! ```

pub mod log;
pub mod prelude;
pub mod tensor;

use thiserror::Error;

use tensor::TensorError;

pub use tensor::{
    compute_strides, format_scalar, render, render_with_options, DType, Element, PrintOptions,
    TensorView,
};

#[derive(Debug, Error)]
pub enum ReprError {
    #[error("Tensor error: {0}")]
    TensorError(#[from] TensorError),
    #[error("Logger error: {0}")]
    LoggerError(#[from] ::log::SetLoggerError),
}

pub type ReprResult<T> = Result<T, ReprError>;
