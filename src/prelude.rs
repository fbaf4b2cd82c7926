pub use crate::tensor::{render, render_with_options, DType, Element, PrintOptions, TensorView};
pub use crate::{ReprError, ReprResult};
