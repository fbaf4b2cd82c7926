use std::fmt::Display;

use log::{debug, trace, warn};

use super::element::Element;
use super::layout::column_widths;
use super::options::PrintOptions;
use super::shape::{buffer_strides, validate_buffer};
use super::{DType, TensorView};
use crate::ReprResult;

const ELLIPSIS: &str = "...";
const HEADER: &str = "Tensor";
const META_INDENT: &str = "  ";
const BODY_INDENT: &str = "    ";

/// Renders `data` with the default print options.
///
/// The buffer is checked against `shape` and `dtype` before anything is
/// read; a length mismatch is returned as an error instead of panicking.
pub fn render(data: &[f64], shape: &[usize], dtype: DType, verbose: bool) -> ReprResult<String> {
    render_with_options(data, shape, dtype, verbose, &PrintOptions::default())
}

pub fn render_with_options(
    data: &[f64],
    shape: &[usize],
    dtype: DType,
    verbose: bool,
    options: &PrintOptions,
) -> ReprResult<String> {
    if let Err(e) = validate_buffer(data.len(), shape, dtype) {
        warn!("refusing to render {dtype} tensor with shape {shape:?}: {e}");
        return Err(e.into());
    }

    trace!("rendering {dtype} tensor with shape {shape:?} (verbose: {verbose})");
    if let Some(dim) = shape.iter().position(|&size| options.summarizes(size)) {
        debug!(
            "dimension {dim} of size {} exceeds threshold {}, summarizing",
            shape[dim], options.threshold
        );
    }

    let strides = buffer_strides(shape, dtype);
    let precision = options.significant_digits();
    let widths = column_widths(data, shape, &strides, dtype, precision);

    let renderer = Renderer {
        data,
        dtype,
        widths: &widths,
        options,
    };
    let body = renderer.lines(0, shape, &strides, true);

    let mut out = Vec::with_capacity(body.len() + 4);
    out.push(HEADER.to_string());
    if verbose {
        out.push(format!("{META_INDENT}dtype: {dtype}"));
        out.push(format!("{META_INDENT}rank: {}", shape.len()));
        out.push(format!("{META_INDENT}shape: {shape:?}"));
    }
    out.extend(body.into_iter().map(|line| format!("{BODY_INDENT}{line}")));

    Ok(out.join("\n"))
}

/// Read-only state shared by every level of the recursion.
struct Renderer<'a> {
    data: &'a [f64],
    dtype: DType,
    widths: &'a [usize],
    options: &'a PrintOptions,
}

impl Renderer<'_> {
    /// Lines for the subtensor starting at buffer slot `offset`.
    ///
    /// `shape` and `strides` describe only the remaining dimensions. `is_last`
    /// marks the final sibling at this nesting level, which is closed without
    /// a trailing separator.
    fn lines(&self, offset: usize, shape: &[usize], strides: &[usize], is_last: bool) -> Vec<String> {
        match shape.len() {
            0 => vec![self.element(offset).render(self.options.significant_digits())],
            1 => vec![self.row(offset, shape[0], strides[0])],
            rank => self.block(offset, shape, strides, rank, is_last),
        }
    }

    fn element(&self, offset: usize) -> Element {
        Element::read(self.data, offset, self.dtype)
    }

    fn row(&self, offset: usize, len: usize, stride: usize) -> String {
        let precision = self.options.significant_digits();
        let cell = |col: usize| {
            let width = self.widths.get(col).copied().unwrap_or(0);
            self.element(offset + col * stride)
                .render_padded(precision, width)
        };

        let cells: Vec<String> = if self.options.summarizes(len) {
            let edge = self.options.edge_items;
            (0..edge)
                .map(cell)
                .chain(std::iter::once(ELLIPSIS.to_string()))
                .chain((len - edge..len).map(cell))
                .collect()
        } else {
            (0..len).map(cell).collect()
        };

        format!("[{}]", cells.join(", "))
    }

    fn block(
        &self,
        offset: usize,
        shape: &[usize],
        strides: &[usize],
        rank: usize,
        is_last: bool,
    ) -> Vec<String> {
        let len = shape[0];
        let (inner_shape, inner_strides) = (&shape[1..], &strides[1..]);

        // A child block never closes its parent, so only its position among
        // siblings decides whether it carries a separator.
        let mut children = Vec::new();
        let visit = |index: usize, children: &mut Vec<String>| {
            children.extend(self.lines(
                offset + index * strides[0],
                inner_shape,
                inner_strides,
                index + 1 == len,
            ));
        };

        if self.options.summarizes(len) {
            let edge = self.options.edge_items;
            (0..edge).for_each(|i| visit(i, &mut children));
            children.push(ELLIPSIS.to_string());
            (len - edge..len).for_each(|i| visit(i, &mut children));
        } else {
            (0..len).for_each(|i| visit(i, &mut children));
        }

        if children.is_empty() {
            let mut empty = "[]".to_string();
            self.close(&mut empty, rank, is_last);
            return vec![empty];
        }

        let count = children.len();
        children
            .into_iter()
            .enumerate()
            .map(|(i, child)| {
                let mut line = if i == 0 {
                    format!("[{child}")
                } else {
                    format!(" {child}")
                };
                if i + 1 < count {
                    if rank == 2 {
                        line.push(',');
                    }
                } else {
                    line.push(']');
                    self.close(&mut line, rank, is_last);
                }
                line
            })
            .collect()
    }

    /// Sibling blocks of rank `r` are separated by a comma and `r - 1`
    /// newlines, so deeper blocks get more blank lines between them.
    fn close(&self, line: &mut String, rank: usize, is_last: bool) {
        if !is_last {
            line.push(',');
            line.push_str(&"\n".repeat(rank - 1));
        }
    }
}

impl Display for TensorView<'_> {
    /// `{}` renders the values only; `{:#}` adds the dtype/rank/shape header.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered = self.render(f.alternate()).map_err(|_| std::fmt::Error)?;
        f.write_str(&rendered)
    }
}
