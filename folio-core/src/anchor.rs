//! In-page anchor resolution for smooth scrolling.

/// Element id an in-page `href` points at.
///
/// Only same-page fragments qualify; the bare `#` has no target.
#[must_use]
pub fn target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target clears a fixed header.
///
/// `rect_top` is the target's top relative to the viewport and `scroll_y` the
/// current page offset; together they give the target's document position.
#[must_use]
pub fn scroll_destination(rect_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    rect_top + scroll_y - header_height
}
