//! Row virtualization over a fixed row height.
//!
//! Only rows intersecting the viewport, widened by `overscan` on each side, are
//! rendered. Nothing here knows about fetching; the only link to the data is `total`.

/// Inclusive range of row indices to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    pub start: usize,
    /// Inclusive.
    pub end: usize,
}

impl VisibleRange {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

/// Position of one rendered row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualItem {
    pub index: usize,
    pub start: f64,
    pub size: f64,
}

/// Computes which rows to render.
///
/// Returns `None` when there are no rows, or when the geometry is unusable
/// (non-positive row height, negative viewport, or NaN anywhere). A negative
/// scroll offset is treated as zero.
pub fn visible_range(
    scroll_offset: f64,
    viewport_height: f64,
    row_height: f64,
    overscan: usize,
    total: usize,
) -> Option<VisibleRange> {
    let usable = row_height > 0.0 && viewport_height >= 0.0 && !scroll_offset.is_nan();
    if total == 0 || !usable {
        return None;
    }
    let last_index = total - 1;
    let top = scroll_offset.max(0.0);
    let bottom = top + viewport_height;

    // `as usize` saturates, so huge offsets land on the last row
    let first = ((top / row_height).floor() as usize).min(last_index);
    let last = ((bottom / row_height).ceil() as usize)
        .saturating_sub(1)
        .clamp(first, last_index);

    Some(VisibleRange {
        start: first.saturating_sub(overscan),
        end: last.saturating_add(overscan).min(last_index),
    })
}

/// Row positions for `range`, one item per index.
pub fn virtual_items(range: VisibleRange, row_height: f64) -> Vec<VirtualItem> {
    (range.start..=range.end)
        .map(|index| VirtualItem {
            index,
            start: index as f64 * row_height,
            size: row_height,
        })
        .collect()
}

/// Height of the full scrollable body.
pub fn total_size(total: usize, row_height: f64) -> f64 {
    total as f64 * row_height
}
