//! Smooth scrolling for in-page anchors.

use folio_core::anchor::{scroll_destination, target_id};
use folio_core::config::FolioConfig;
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{Document, Event, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;

/// Scroll smoothly to the element `href` points at, clearing the fixed header.
///
/// Returns the destination offset, or `None` when the target does not exist.
pub fn scroll_to_anchor(win: &Window, doc: &Document, cfg: &FolioConfig, href: &str) -> Option<f64> {
    let target = target_id(href).and_then(|id| doc.get_element_by_id(id))?;
    let header_height = dom::query_one(doc, &cfg.selectors.header)
        .map_or(0.0, |header| f64::from(header.offset_height()));
    let top = scroll_destination(
        target.get_bounding_client_rect().top(),
        dom::scroll_y(win),
        header_height,
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
    Some(top)
}

/// Intercept clicks on every in-page anchor. Returns how many were wired.
///
/// The listeners are not passive: default navigation is always cancelled,
/// even when the fragment has no matching element.
pub fn install(win: &Window, doc: &Document, cfg: &FolioConfig) -> usize {
    let anchors = dom::query_all(doc, &cfg.selectors.anchor);
    for anchor in &anchors {
        let win = win.clone();
        let doc = doc.clone();
        let cfg = cfg.clone();
        let link = anchor.clone();
        EventListener::new_with_options(
            anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                if scroll_to_anchor(&win, &doc, &cfg, &href).is_none() {
                    log::debug!("anchors: no target for `{href}`");
                }
            },
        )
        .forget();
    }
    log::debug!("anchors: {} links intercepted", anchors.len());
    anchors.len()
}
