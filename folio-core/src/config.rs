//! Page configuration: which elements each behaviour binds to and how it is tuned.

use serde::{Deserialize, Serialize};

use crate::constants::{
    PARALLAX_BASE_SPEED, PARALLAX_SPEED_STEP, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
    SCROLLED_THRESHOLD_PX, SECTION_ROOT_MARGIN, SECTION_THRESHOLD, SEL_ANCHOR, SEL_BLOB,
    SEL_HEADER, SEL_HERO, SEL_NAV_LINK, SEL_NAV_MENU, SEL_NAV_TOGGLE, SEL_PROJECT_CARD,
    SEL_SECTION, SEL_SKILL_CATEGORY, SEL_TIMELINE_ITEM, STAGGER_MIN_SECS, STAGGER_PROJECT_SECS,
    STAGGER_SKILL_SECS, STAGGER_TIMELINE_SECS,
};
use crate::error::ConfigError;
use crate::reveal::RevealGroup;

/// Top-level configuration consumed by every page behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub selectors: Selectors,
    #[serde(default = "FolioConfig::default_scrolled_threshold")]
    pub scrolled_threshold: f64,
    #[serde(default = "ObserverCfg::section_default")]
    pub section_observer: ObserverCfg,
    #[serde(default = "ObserverCfg::reveal_default")]
    pub reveal_observer: ObserverCfg,
    #[serde(default)]
    pub stagger: StaggerCfg,
    #[serde(default)]
    pub parallax: ParallaxCfg,
    #[serde(default)]
    pub debug_logs: bool,
}

impl FolioConfig {
    const fn default_scrolled_threshold() -> f64 {
        SCROLLED_THRESHOLD_PX
    }

    /// Parse a config document and check its invariants.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] for malformed JSON and any validation error
    /// raised by [`FolioConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every value the behaviours rely on.
    ///
    /// # Errors
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.selectors.validate()?;
        if !self.scrolled_threshold.is_finite() || self.scrolled_threshold < 0.0 {
            return Err(ConfigError::MinViolation {
                field: "scrolled_threshold",
                min: 0.0,
                value: self.scrolled_threshold,
            });
        }
        self.section_observer.validate("section_observer")?;
        self.reveal_observer.validate("reveal_observer")?;
        self.stagger.validate()?;
        self.parallax.validate()?;
        Ok(())
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            scrolled_threshold: Self::default_scrolled_threshold(),
            section_observer: ObserverCfg::section_default(),
            reveal_observer: ObserverCfg::reveal_default(),
            stagger: StaggerCfg::default(),
            parallax: ParallaxCfg::default(),
            debug_logs: false,
        }
    }
}

/// CSS selectors for the elements each behaviour binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub header: String,
    pub nav_toggle: String,
    pub nav_menu: String,
    pub nav_link: String,
    pub section: String,
    pub timeline_item: String,
    pub project_card: String,
    pub skill_category: String,
    pub blob: String,
    pub hero: String,
    pub anchor: String,
}

impl Selectors {
    /// Selector for one stagger group.
    #[must_use]
    pub fn for_group(&self, group: RevealGroup) -> &str {
        match group {
            RevealGroup::Timeline => &self.timeline_item,
            RevealGroup::ProjectCard => &self.project_card,
            RevealGroup::SkillCategory => &self.skill_category,
        }
    }

    /// Comma-joined selector covering every animatable element.
    #[must_use]
    pub fn animatable(&self) -> String {
        RevealGroup::ALL
            .iter()
            .map(|group| self.for_group(*group))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields: [(&'static str, &str); 11] = [
            ("selectors.header", &self.header),
            ("selectors.nav_toggle", &self.nav_toggle),
            ("selectors.nav_menu", &self.nav_menu),
            ("selectors.nav_link", &self.nav_link),
            ("selectors.section", &self.section),
            ("selectors.timeline_item", &self.timeline_item),
            ("selectors.project_card", &self.project_card),
            ("selectors.skill_category", &self.skill_category),
            ("selectors.blob", &self.blob),
            ("selectors.hero", &self.hero),
            ("selectors.anchor", &self.anchor),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ConfigError::EmptySelector { field: *field }),
            None => Ok(()),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: SEL_HEADER.to_string(),
            nav_toggle: SEL_NAV_TOGGLE.to_string(),
            nav_menu: SEL_NAV_MENU.to_string(),
            nav_link: SEL_NAV_LINK.to_string(),
            section: SEL_SECTION.to_string(),
            timeline_item: SEL_TIMELINE_ITEM.to_string(),
            project_card: SEL_PROJECT_CARD.to_string(),
            skill_category: SEL_SKILL_CATEGORY.to_string(),
            blob: SEL_BLOB.to_string(),
            hero: SEL_HERO.to_string(),
            anchor: SEL_ANCHOR.to_string(),
        }
    }
}

/// Intersection observer options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverCfg {
    pub root_margin: String,
    pub threshold: f64,
}

impl ObserverCfg {
    fn section_default() -> Self {
        Self {
            root_margin: SECTION_ROOT_MARGIN.to_string(),
            threshold: SECTION_THRESHOLD,
        }
    }

    fn reveal_default() -> Self {
        Self {
            root_margin: REVEAL_ROOT_MARGIN.to_string(),
            threshold: REVEAL_THRESHOLD,
        }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.root_margin.trim().is_empty() {
            return Err(ConfigError::EmptyRootMargin { field });
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::RangeViolation {
                field,
                min: 0.0,
                max: 1.0,
                value: self.threshold,
            });
        }
        Ok(())
    }
}

/// Per-group stagger steps, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaggerCfg {
    #[serde(default = "StaggerCfg::default_timeline")]
    pub timeline: f64,
    #[serde(default = "StaggerCfg::default_project")]
    pub project: f64,
    #[serde(default = "StaggerCfg::default_skill")]
    pub skill: f64,
}

impl StaggerCfg {
    const fn default_timeline() -> f64 {
        STAGGER_TIMELINE_SECS
    }

    const fn default_project() -> f64 {
        STAGGER_PROJECT_SECS
    }

    const fn default_skill() -> f64 {
        STAGGER_SKILL_SECS
    }

    /// Step for one group.
    #[must_use]
    pub const fn step_for(&self, group: RevealGroup) -> f64 {
        match group {
            RevealGroup::Timeline => self.timeline,
            RevealGroup::ProjectCard => self.project,
            RevealGroup::SkillCategory => self.skill,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("stagger.timeline", self.timeline),
            ("stagger.project", self.project),
            ("stagger.skill", self.skill),
        ] {
            if !value.is_finite() || value < STAGGER_MIN_SECS {
                return Err(ConfigError::MinViolation {
                    field,
                    min: STAGGER_MIN_SECS,
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Default for StaggerCfg {
    fn default() -> Self {
        Self {
            timeline: Self::default_timeline(),
            project: Self::default_project(),
            skill: Self::default_skill(),
        }
    }
}

/// Parallax speed ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParallaxCfg {
    #[serde(default = "ParallaxCfg::default_base_speed")]
    pub base_speed: f64,
    #[serde(default = "ParallaxCfg::default_speed_step")]
    pub speed_step: f64,
}

impl ParallaxCfg {
    const fn default_base_speed() -> f64 {
        PARALLAX_BASE_SPEED
    }

    const fn default_speed_step() -> f64 {
        PARALLAX_SPEED_STEP
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("parallax.base_speed", self.base_speed),
            ("parallax.speed_step", self.speed_step),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RangeViolation {
                    field,
                    min: 0.0,
                    max: 1.0,
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Default for ParallaxCfg {
    fn default() -> Self {
        Self {
            base_speed: Self::default_base_speed(),
            speed_step: Self::default_speed_step(),
        }
    }
}
