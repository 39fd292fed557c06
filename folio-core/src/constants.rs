//! Centralized tuning constants for the Folio page behaviours.
//!
//! These values are the defaults behind [`crate::config::FolioConfig`]. Pages
//! can override them through the embedded JSON config, but the numbers here
//! are what the stylesheet was designed against.

// Selectors ----------------------------------------------------------------
pub const SEL_HEADER: &str = ".nav-header";
pub const SEL_NAV_TOGGLE: &str = ".nav-toggle";
pub const SEL_NAV_MENU: &str = ".nav-menu";
pub const SEL_NAV_LINK: &str = ".nav-link";
pub const SEL_SECTION: &str = "section[id]";
pub const SEL_TIMELINE_ITEM: &str = ".timeline-item";
pub const SEL_PROJECT_CARD: &str = ".project-card";
pub const SEL_SKILL_CATEGORY: &str = ".skill-category";
pub const SEL_BLOB: &str = ".blob";
pub const SEL_HERO: &str = ".hero";
pub const SEL_ANCHOR: &str = "a[href^=\"#\"]";
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

// Classes and attributes ---------------------------------------------------
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_VISIBLE: &str = "visible";
pub const ATTR_ARIA_EXPANDED: &str = "aria-expanded";
pub const OVERFLOW_LOCKED: &str = "hidden";
pub const KEY_ESCAPE: &str = "Escape";

// Scroll styling -----------------------------------------------------------
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

// Active-section band: 20% trimmed from the top, 30% from the bottom.
pub const SECTION_ROOT_MARGIN: &str = "-20% 0px -30% 0px";
pub const SECTION_THRESHOLD: f64 = 0.0;

// Reveal -------------------------------------------------------------------
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const STAGGER_TIMELINE_SECS: f64 = 0.1;
pub const STAGGER_PROJECT_SECS: f64 = 0.15;
pub const STAGGER_SKILL_SECS: f64 = 0.1;
/// Smallest stagger step a config may set; below this the cascade is invisible.
pub const STAGGER_MIN_SECS: f64 = 0.01;

// Parallax -----------------------------------------------------------------
pub const PARALLAX_BASE_SPEED: f64 = 0.1;
pub const PARALLAX_SPEED_STEP: f64 = 0.05;

// Accessibility ------------------------------------------------------------
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
