//! Active-section highlighting in the navigation bar.

use folio_core::config::FolioConfig;
use folio_core::constants::CLASS_ACTIVE;
use folio_core::sections::{SectionEntry, SectionTracker, link_matches};
use web_sys::{Document, HtmlElement, IntersectionObserver};

use crate::dom;
use crate::observer;

/// Mark the link pointing at `section_id` and clear every other link.
pub fn highlight(links: &[HtmlElement], section_id: &str) {
    for link in links {
        let href = link.get_attribute("href");
        dom::set_class(link, CLASS_ACTIVE, link_matches(href.as_deref(), section_id));
    }
}

/// Observe every section against the middle band of the viewport.
#[must_use]
pub fn install(doc: &Document, cfg: &FolioConfig) -> Option<IntersectionObserver> {
    let sections = dom::query_all(doc, &cfg.selectors.section);
    if sections.is_empty() {
        log::debug!("sections: nothing to observe");
        return None;
    }
    let links = dom::query_all(doc, &cfg.selectors.nav_link);
    let mut tracker = SectionTracker::new();

    let callback: observer::ObserverCallback = Box::new(move |entries, _observer| {
        let ids: Vec<(String, bool)> = entries
            .iter()
            .map(|entry| (entry.target().id(), entry.is_intersecting()))
            .collect();
        let active = tracker.observe_batch(
            ids.iter()
                .map(|(id, intersecting)| SectionEntry::new(id, *intersecting)),
        );
        if let Some(id) = active {
            highlight(&links, id);
        }
    });

    let observer = match observer::create(&cfg.section_observer, callback) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("sections: observer unavailable: {err}");
            return None;
        }
    };
    for section in &sections {
        observer.observe(section);
    }
    log::debug!("sections: observing {}", sections.len());
    Some(observer)
}
