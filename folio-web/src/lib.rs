#![forbid(unsafe_code)]
//! Folio Web
//!
//! Binds the behaviours from `folio-core` to a rendered portfolio page.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::FolioConfig;
use folio_core::menu::MenuController;
use folio_core::motion::MotionPreference;
use gloo::events::EventListener;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys::{Document, IntersectionObserver, Window};

pub mod a11y;
pub mod anchors;
pub mod config;
pub mod dom;
pub mod logging;
pub mod menu;
pub mod nav;
pub mod observer;
pub mod parallax;
pub mod reveal;
pub mod sections;

/// Handles for everything [`init_with`] wired, for callers that need to
/// inspect or drive the page afterwards.
#[derive(Default)]
pub struct Installed {
    pub motion: MotionPreference,
    pub menu: Option<Rc<RefCell<MenuController>>>,
    pub header_styling: bool,
    pub sections: Option<IntersectionObserver>,
    pub reveal: Option<IntersectionObserver>,
    pub anchors: usize,
    pub parallax: Option<Rc<parallax::ParallaxDriver>>,
}

/// Wire every behaviour against an already-rendered document.
///
/// Reduced motion is applied first so the reveal animator sees those
/// elements already latched visible.
pub fn init_with(win: &Window, doc: &Document, cfg: &FolioConfig) -> Installed {
    let motion = a11y::apply_reduced_motion(doc, cfg);
    let installed = Installed {
        motion,
        menu: menu::install(doc, cfg),
        header_styling: nav::install(win, doc, cfg),
        sections: sections::install(doc, cfg),
        reveal: reveal::install(doc, cfg),
        anchors: anchors::install(win, doc, cfg),
        parallax: parallax::install(win, doc, cfg),
    };
    log::info!(
        "folio ready (menu: {}, reduced motion: {})",
        installed.menu.is_some(),
        installed.motion.is_reduced()
    );
    installed
}

/// Load the page config, install logging and wire the page.
///
/// # Errors
/// Returns an error outside a browser context.
pub fn init() -> Result<Installed, dom::DomError> {
    let win = dom::window()?;
    let doc = dom::document()?;
    logging::init(false);
    let cfg = config::load(&doc);
    logging::init(cfg.debug_logs);
    Ok(init_with(&win, &doc, &cfg))
}

fn run_init() {
    if let Err(err) = init() {
        dom::console_error(&format!("folio init failed: {err}"));
    }
}

/// Run [`init`] now if the document is parsed, otherwise on `DOMContentLoaded`.
///
/// # Errors
/// Returns an error outside a browser context.
pub fn init_when_ready() -> Result<(), dom::DomError> {
    let doc = dom::document()?;
    if doc.ready_state() != "loading" {
        run_init();
        return Ok(());
    }
    EventListener::once(&doc, "DOMContentLoaded", |_event| run_init()).forget();
    Ok(())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = init_when_ready() {
        dom::console_error(&format!("folio could not start: {err}"));
    }
}
