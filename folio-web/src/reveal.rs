//! Reveal-on-scroll animation.

use folio_core::config::FolioConfig;
use folio_core::constants::CLASS_VISIBLE;
use folio_core::reveal::{RevealAction, RevealGroup, RevealLatch, format_delay, stagger_delay_with};
use web_sys::{Document, Element, HtmlElement, IntersectionObserver, Node};

use crate::dom;
use crate::observer;

/// Apply a group's stagger delays in document order.
///
/// Elements already latched visible keep whatever delay they carry.
pub fn apply_stagger(elements: &[HtmlElement], step_secs: f64) {
    for (idx, el) in elements.iter().enumerate() {
        if dom::has_class(el, CLASS_VISIBLE) {
            continue;
        }
        let delay = format_delay(stagger_delay_with(step_secs, idx));
        dom::set_style(el, "transition-delay", Some(delay.as_str()));
    }
}

/// Stagger every group and observe its elements until each one is revealed.
#[must_use]
pub fn install(doc: &Document, cfg: &FolioConfig) -> Option<IntersectionObserver> {
    let mut targets = Vec::new();
    for group in RevealGroup::ALL {
        let elements = dom::query_all(doc, cfg.selectors.for_group(group));
        apply_stagger(&elements, cfg.stagger.step_for(group));
        log::debug!("reveal: {} {} elements", elements.len(), group.label());
        for el in elements {
            // An element matching several group selectors is observed once.
            if !targets.contains(&el) {
                targets.push(el);
            }
        }
    }
    if targets.is_empty() {
        return None;
    }

    let mut latch = RevealLatch::new(targets.len());
    let observed = targets.clone();
    let callback: observer::ObserverCallback = Box::new(move |entries, observer| {
        for entry in entries {
            let target = entry.target();
            let Some(index) = position_of(&observed, &target) else {
                continue;
            };
            let action = latch.on_intersection(
                index,
                dom::has_class(&target, CLASS_VISIBLE),
                entry.is_intersecting(),
            );
            if action == RevealAction::Reveal {
                dom::set_class(&target, CLASS_VISIBLE, true);
            }
            if action.unobserve() {
                observer.unobserve(&target);
            }
        }
        if latch.is_exhausted() {
            log::debug!("reveal: all {} elements shown", latch.revealed());
            observer.disconnect();
        }
    });

    let observer = match observer::create(&cfg.reveal_observer, callback) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("reveal: observer unavailable, showing everything: {err}");
            for el in &targets {
                dom::set_class(el, CLASS_VISIBLE, true);
            }
            return None;
        }
    };
    for el in &targets {
        observer.observe(el);
    }
    Some(observer)
}

fn position_of(targets: &[HtmlElement], target: &Element) -> Option<usize> {
    let node: &Node = target;
    targets.iter().position(|el| el.is_same_node(Some(node)))
}
