/// Dimensions longer than this are summarized with an ellipsis.
pub const DEFAULT_THRESHOLD: usize = 20;
/// Items kept from each end of a summarized dimension.
pub const DEFAULT_EDGE_ITEMS: usize = 3;
/// Significant digits kept when rendering a value.
pub const DEFAULT_PRECISION: usize = 7;

/// Layout constants for a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    pub threshold: usize,
    pub edge_items: usize,
    pub precision: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            edge_items: DEFAULT_EDGE_ITEMS,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_edge_items(mut self, edge_items: usize) -> Self {
        self.edge_items = edge_items;
        self
    }

    /// Precision is clamped to at least one significant digit.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision.max(1);
        self
    }

    /// Whether a dimension of `len` entries is shown as `first ... last`.
    pub(crate) fn summarizes(&self, len: usize) -> bool {
        len > self.threshold && len > self.edge_items.saturating_mul(2)
    }

    pub(crate) fn significant_digits(&self) -> usize {
        self.precision.max(1)
    }
}
