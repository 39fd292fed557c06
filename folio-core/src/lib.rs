//! Folio Core
//!
//! Platform-agnostic behaviour for the Folio portfolio page. Every decision
//! that does not need a DOM lives here so it can be tested on the host; the
//! `folio-web` crate only queries elements and applies these results.

pub mod anchor;
pub mod config;
pub mod constants;
pub mod error;
pub mod menu;
pub mod motion;
pub mod parallax;
pub mod reveal;
pub mod scroll;
pub mod sections;

// Re-export commonly used types
pub use config::{FolioConfig, ObserverCfg, ParallaxCfg, Selectors, StaggerCfg};
pub use error::ConfigError;
pub use menu::{MenuController, MenuEvent, MenuState, MenuView};
pub use motion::MotionPreference;
pub use reveal::{RevealAction, RevealGroup, RevealLatch, format_delay, stagger_delay};
pub use scroll::is_scrolled;
pub use sections::{SectionEntry, SectionTracker, link_matches};
