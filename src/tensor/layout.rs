use super::element::Element;
use super::DType;

/// Widest rendered value per innermost column, across every row.
///
/// Alignment is column-global, so the whole buffer is scanned once before any
/// row is rendered. Vectors and scalars are never aligned and get zeros.
/// `strides` are buffer strides (already scaled for complex dtypes).
pub(crate) fn column_widths(
    data: &[f64],
    shape: &[usize],
    strides: &[usize],
    dtype: DType,
    precision: usize,
) -> Vec<usize> {
    let rank = shape.len();
    let columns = shape.last().copied().unwrap_or(0);
    let mut widths = vec![0usize; columns];

    if rank <= 1 || columns == 0 {
        return widths;
    }

    let rows: usize = shape[..rank - 1].iter().product();
    let row_stride = strides[rank - 2];
    let col_stride = strides[rank - 1];

    for row in 0..rows {
        let base = row * row_stride;
        for (col, width) in widths.iter_mut().enumerate() {
            let rendered = Element::read(data, base + col * col_stride, dtype).render(precision);
            *width = (*width).max(rendered.chars().count());
        }
    }

    widths
}
