//! Page configuration loading.
//!
//! A page may embed `<script type="application/json" id="folio-config">` to
//! override selectors or tuning. Without it, or when it fails to parse or
//! validate, the bundled `static/folio.json` is used.

use folio_core::config::FolioConfig;
use folio_core::constants::CONFIG_ELEMENT_ID;
use web_sys::Document;

const BUNDLED_CONFIG: &str = include_str!("../static/folio.json");

/// Configuration bundled with the crate.
#[must_use]
pub fn bundled() -> FolioConfig {
    FolioConfig::from_json(BUNDLED_CONFIG).unwrap_or_default()
}

/// Resolve the configuration for `doc`.
#[must_use]
pub fn load(doc: &Document) -> FolioConfig {
    let Some(raw) = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|node| node.text_content())
    else {
        return bundled();
    };
    from_page_text(&raw)
}

/// Parse embedded config text, falling back to the bundled config on failure.
#[must_use]
pub fn from_page_text(raw: &str) -> FolioConfig {
    if raw.trim().is_empty() {
        return bundled();
    }
    match FolioConfig::from_json(raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            bundled()
        }
    }
}
