use super::{DType, TensorError};

/// Row-major strides in logical elements.
///
/// The last stride is 1 and each preceding one is the product of every size
/// to its right. A rank-0 shape yields no strides.
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let rank = shape.len();
    let mut strides = vec![1usize; rank];

    if rank > 1 {
        for i in (0..rank - 1).rev() {
            strides[i] = strides[i + 1] * shape[i + 1];
        }
    }

    strides
}

/// Strides in buffer slots, i.e. element strides scaled by the dtype's
/// slot multiplier.
pub(crate) fn buffer_strides(shape: &[usize], dtype: DType) -> Vec<usize> {
    let per_element = dtype.values_per_element();
    compute_strides(shape)
        .into_iter()
        .map(|stride| stride * per_element)
        .collect()
}

/// Number of logical elements described by `shape`.
pub(crate) fn element_count(shape: &[usize]) -> Result<usize, TensorError> {
    shape
        .iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .ok_or_else(|| TensorError::InvalidShape {
            shape: shape.to_vec(),
            reason: "element count overflows usize".to_string(),
        })
}

/// Checks that `len` buffer slots exactly cover `shape` for the given dtype.
pub(crate) fn validate_buffer(len: usize, shape: &[usize], dtype: DType) -> Result<(), TensorError> {
    let expected = element_count(shape)?
        .checked_mul(dtype.values_per_element())
        .ok_or_else(|| TensorError::InvalidShape {
            shape: shape.to_vec(),
            reason: "buffer length overflows usize".to_string(),
        })?;

    if len != expected {
        return Err(TensorError::InvalidDataLength { expected, got: len });
    }

    Ok(())
}
