//! Parallax offsets for decorative hero shapes.

use crate::config::ParallaxCfg;

/// Speed factor for the decoration at `index`.
#[must_use]
pub fn speed_for(index: usize) -> f64 {
    speed_with(&ParallaxCfg::default(), index)
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn speed_with(cfg: &ParallaxCfg, index: usize) -> f64 {
    cfg.speed_step.mul_add(index as f64, cfg.base_speed)
}

/// Vertical translation for the decoration at `index` at scroll `offset`.
#[must_use]
pub fn translation(offset: f64, index: usize) -> f64 {
    offset * speed_for(index)
}

/// Translations for `count` decorations, or `None` once the hero is scrolled past.
#[must_use]
pub fn plan(offset: f64, hero_height: f64, count: usize) -> Option<Vec<f64>> {
    plan_with(&ParallaxCfg::default(), offset, hero_height, count)
}

#[must_use]
pub fn plan_with(cfg: &ParallaxCfg, offset: f64, hero_height: f64, count: usize) -> Option<Vec<f64>> {
    if offset >= hero_height {
        return None;
    }
    Some((0..count).map(|idx| offset * speed_with(cfg, idx)).collect())
}

/// CSS transform for a vertical translation in pixels.
#[must_use]
pub fn transform_css(px: f64) -> String {
    format!("translateY({px}px)")
}
