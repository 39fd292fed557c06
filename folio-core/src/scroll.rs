//! Header styling driven by scroll offset.

/// Whether the header should carry the scrolled marker at `offset`.
///
/// Strictly greater than the threshold; an offset equal to it stays unmarked.
#[must_use]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}
