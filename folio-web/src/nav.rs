//! Header "scrolled" marker.

use folio_core::config::FolioConfig;
use folio_core::constants::CLASS_SCROLLED;
use folio_core::scroll::is_scrolled;
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Document, Element, Window};

use crate::dom;

/// Sync the marker on `header` with the current offset.
pub fn sync_header(header: &Element, offset: f64, threshold: f64) {
    dom::set_class(header, CLASS_SCROLLED, is_scrolled(offset, threshold));
}

/// Track scroll offset on the header with a passive listener.
///
/// Returns `false` when there is no header.
pub fn install(win: &Window, doc: &Document, cfg: &FolioConfig) -> bool {
    let Some(header) = dom::query_one(doc, &cfg.selectors.header) else {
        log::debug!("nav: header missing, skipping scroll styling");
        return false;
    };
    let threshold = cfg.scrolled_threshold;
    let scroll_source = win.clone();
    EventListener::new_with_options(
        win,
        "scroll",
        EventListenerOptions::default(),
        move |_event| sync_header(&header, dom::scroll_y(&scroll_source), threshold),
    )
    .forget();
    true
}
