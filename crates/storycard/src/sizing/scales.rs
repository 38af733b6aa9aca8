//! Group scale calculator — hero, schedule, and footer font-scale factors.
//!
//! Every group blends the same five signals (density, spacing preference,
//! layout style, text length, measured pressure), but each has its own
//! sensitivity and allowed range: hero text tolerates far more variation
//! than dense schedule rows before the card looks broken.

use serde::{Deserialize, Serialize};

use crate::models::preferences::{LayoutStyle, SpacingPreference, StylePreferences};
use crate::sizing::density::DensityProfile;
use crate::sizing::pressure::HeightPressure;

/// The per-group (and per-hero-element) font scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupScales {
    /// Shared hero base the three hero elements derive from.
    pub hero: f32,
    pub heading: f32,
    pub subtitle: f32,
    pub schedule_date: f32,
    pub schedule: f32,
    pub footer: f32,
}

/// Derives all group scale factors.
pub fn compute_group_scales(
    profile: &DensityProfile,
    prefs: &StylePreferences,
    pressure: &HeightPressure,
) -> GroupScales {
    let hero = hero_scale(profile, prefs, pressure);
    let heading_adj = heading_length_adjustment(trimmed_len(&prefs.heading_text));
    let subtitle_adj = subtitle_length_adjustment(trimmed_len(&prefs.subtitle_text));

    GroupScales {
        hero,
        heading: (hero + heading_adj).clamp(0.8, 1.16),
        subtitle: (hero + subtitle_adj).clamp(0.78, 1.08),
        schedule_date: (hero - 0.05).clamp(0.7, 1.02),
        schedule: schedule_scale(profile, prefs, pressure),
        footer: footer_scale(profile, prefs, pressure),
    }
}

fn hero_scale(
    profile: &DensityProfile,
    prefs: &StylePreferences,
    pressure: &HeightPressure,
) -> f32 {
    // Fewer enabled hero lines leave room for a larger block. Zero enabled
    // behaves like one: the value then only drives hidden-element recompute.
    let base = match prefs.enabled_hero_count() {
        0 | 1 => 1.04,
        2 => 0.99,
        _ => 0.94,
    };

    let factor = if pressure.overflow > 0.0 {
        (1.0 - pressure.overflow * 0.08).clamp(0.8, 1.0)
    } else {
        1.0 + pressure.breathing * 0.05
    };

    let mut scale = (base - profile.density * 0.06) * factor;
    scale += match prefs.spacing {
        SpacingPreference::Spacious => 0.02,
        SpacingPreference::Compact => -0.03,
        SpacingPreference::Comfortable => 0.0,
    };
    if prefs.layout_style == LayoutStyle::Grid {
        scale -= 0.02;
    }
    scale.clamp(0.82, 1.12)
}

fn schedule_scale(
    profile: &DensityProfile,
    prefs: &StylePreferences,
    pressure: &HeightPressure,
) -> f32 {
    let mut scale = 1.02 - profile.density * 0.16;
    scale += match prefs.spacing {
        SpacingPreference::Spacious => 0.04,
        SpacingPreference::Compact => -0.05,
        SpacingPreference::Comfortable => 0.0,
    };
    scale += match prefs.layout_style {
        LayoutStyle::Grid => -0.05,
        LayoutStyle::Card => -0.02,
        LayoutStyle::List => 0.0,
    };
    if let Some(len) = profile.average_text_len {
        scale += if len > 28.0 {
            -0.07
        } else if len > 20.0 {
            -0.04
        } else if len < 12.0 {
            0.04
        } else {
            0.0
        };
    }

    let factor = if pressure.overflow > 0.0 {
        (1.0 - pressure.overflow * 0.14).clamp(0.76, 1.0)
    } else {
        1.0 + pressure.breathing * 0.04
    };
    (scale * factor).clamp(0.78, 1.08)
}

fn footer_scale(
    profile: &DensityProfile,
    prefs: &StylePreferences,
    pressure: &HeightPressure,
) -> f32 {
    let mut scale = 0.96 - profile.density * 0.05;
    if prefs.spacing == SpacingPreference::Spacious {
        scale += 0.03;
    }

    let factor = if pressure.overflow > 0.0 {
        (1.0 - pressure.overflow * 0.10).clamp(0.8, 1.02)
    } else {
        1.0 + pressure.breathing * 0.04
    };
    (scale * factor).clamp(0.82, 1.05)
}

fn trimmed_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// Length offset for the heading. Long headings shrink in three steps; very
/// short ones get a small bump.
fn heading_length_adjustment(len: usize) -> f32 {
    if len > 36 {
        -0.10
    } else if len > 28 {
        -0.06
    } else if len > 20 {
        -0.03
    } else if len < 12 {
        0.03
    } else {
        0.0
    }
}

fn subtitle_length_adjustment(len: usize) -> f32 {
    if len > 42 {
        -0.10
    } else if len > 34 {
        -0.06
    } else if len > 26 {
        -0.03
    } else if len < 10 {
        0.04
    } else {
        0.0
    }
}
