// Accessibility helpers

use folio_core::config::FolioConfig;
use folio_core::constants::CLASS_VISIBLE;
use folio_core::motion::{MotionPreference, REDUCED_MOTION_QUERY};
use web_sys::Document;

use crate::dom;

/// Check whether the visitor asked the platform for reduced motion
///
/// Returns false when `matchMedia` is unavailable or the query is rejected.
#[must_use]
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|list| list.matches())
}

/// Reveal every animatable element up front when reduced motion is requested
///
/// Runs before the reveal observer is attached, so those elements are already
/// latched visible with no transition delay.
pub fn apply_reduced_motion(doc: &Document, cfg: &FolioConfig) -> MotionPreference {
    let pref = MotionPreference::from_media_match(prefers_reduced_motion());
    force_visible(doc, cfg, pref);
    pref
}

/// Apply `pref` to the animatable elements. Returns how many were forced visible.
pub fn force_visible(doc: &Document, cfg: &FolioConfig, pref: MotionPreference) -> usize {
    let Some(delay) = pref.forced_delay() else {
        return 0;
    };
    let elements = dom::query_all(doc, &cfg.selectors.animatable());
    for el in &elements {
        dom::set_class(el, CLASS_VISIBLE, true);
        dom::set_style(el, "transition-delay", Some(delay));
    }
    log::debug!("reduced motion: {} elements shown immediately", elements.len());
    elements.len()
}
