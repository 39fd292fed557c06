//! Parallax drift for decorative hero shapes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use folio_core::config::{FolioConfig, ParallaxCfg};
use folio_core::parallax::{plan_with, transform_css};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{AnimationFrame, request_animation_frame};
use web_sys::{Document, HtmlElement, Window};

use crate::dom;

/// Write one frame of translations. Returns `false` once past the hero.
pub fn apply_frame(blobs: &[HtmlElement], cfg: &ParallaxCfg, offset: f64, hero_height: f64) -> bool {
    let Some(shifts) = plan_with(cfg, offset, hero_height, blobs.len()) else {
        return false;
    };
    for (blob, shift) in blobs.iter().zip(shifts) {
        dom::set_style(blob, "transform", Some(transform_css(shift).as_str()));
    }
    true
}

/// Coalesces scroll events into at most one pending animation frame.
///
/// The frame handle is held until the frame runs; while it is held further
/// scroll events are dropped.
pub struct ParallaxDriver {
    win: Window,
    blobs: Vec<HtmlElement>,
    hero: Option<HtmlElement>,
    speeds: ParallaxCfg,
    frame: RefCell<Option<AnimationFrame>>,
    frames_run: Cell<usize>,
}

impl ParallaxDriver {
    #[must_use]
    pub fn new(win: &Window, blobs: Vec<HtmlElement>, hero: Option<HtmlElement>, speeds: ParallaxCfg) -> Self {
        Self {
            win: win.clone(),
            blobs,
            hero,
            speeds,
            frame: RefCell::new(None),
            frames_run: Cell::new(0),
        }
    }

    /// Schedule a frame unless one is already pending.
    pub fn on_scroll(self: &Rc<Self>) {
        if self.frame.borrow().is_some() {
            return;
        }
        let driver = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            driver.frame.borrow_mut().take();
            driver.render();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn render(&self) {
        let hero_height = self
            .hero
            .as_ref()
            .map_or(0.0, |hero| f64::from(hero.offset_height()));
        apply_frame(&self.blobs, &self.speeds, dom::scroll_y(&self.win), hero_height);
        self.frames_run.set(self.frames_run.get() + 1);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.frame.borrow().is_some()
    }

    /// Frames rendered since the driver was created.
    #[must_use]
    pub fn frames_run(&self) -> usize {
        self.frames_run.get()
    }
}

/// Drive the blobs from a passive scroll listener, at most once per frame.
///
/// Returns `None` when the page has no decorations.
#[must_use]
pub fn install(win: &Window, doc: &Document, cfg: &FolioConfig) -> Option<Rc<ParallaxDriver>> {
    let blobs = dom::query_all(doc, &cfg.selectors.blob);
    if blobs.is_empty() {
        log::debug!("parallax: no decorations, skipping");
        return None;
    }
    let hero = dom::query_one(doc, &cfg.selectors.hero);
    if hero.is_none() {
        log::debug!("parallax: hero missing, shapes stay put");
    }
    let driver = Rc::new(ParallaxDriver::new(win, blobs, hero, cfg.parallax));

    let scroll_driver = Rc::clone(&driver);
    EventListener::new_with_options(win, "scroll", EventListenerOptions::default(), move |_event| {
        scroll_driver.on_scroll();
    })
    .forget();
    Some(driver)
}
