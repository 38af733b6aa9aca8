//! Density estimator — one scalar describing how busy the card is.
//!
//! Item count and text length are clamped into working bands first, so the
//! score reads as "how busy is a typical schedule of this shape" rather than
//! tracking the raw extremes.

use serde::{Deserialize, Serialize};

use crate::models::preferences::{LayoutStyle, SpacingPreference, StylePreferences};
use crate::models::schedule::ScheduleItem;

/// Upper end of the density scale. Values above 1.0 mean above-average load.
pub const DENSITY_MAX: f32 = 1.7;

/// Normalizer that maps a mid-size schedule (8 items × 3 columns) to ~1.0.
const LOAD_NORMALIZER: f32 = 24.0;

/// The density score together with the signals it was derived from. The
/// average text length is reused by the group-scale calculator so both read
/// the same signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityProfile {
    pub item_count: usize,
    pub active_elements: usize,
    /// Mean trimmed length of the wrapping text per item, across items that
    /// have any. `None` when the schedule carries no text at all.
    pub average_text_len: Option<f32>,
    /// Busy-ness score in `[0, DENSITY_MAX]`.
    pub density: f32,
}

/// Scores the current schedule shape.
///
/// `active_elements` is the number of schedule-row columns currently visible
/// (1–6 after clamping).
pub fn estimate_density(
    schedule: &[ScheduleItem],
    active_elements: usize,
    prefs: &StylePreferences,
) -> DensityProfile {
    let items = schedule.len().clamp(3, 14) as f32;
    let active = active_elements.clamp(1, 6) as f32;
    let base_load = items * active;

    let average_text_len = average_body_text_len(schedule);

    let mut multiplier = 1.0_f32;
    multiplier += match prefs.layout_style {
        LayoutStyle::Grid => 0.18,
        LayoutStyle::Card => 0.08,
        LayoutStyle::List => 0.0,
    };
    multiplier += match prefs.spacing {
        SpacingPreference::Compact => 0.12,
        SpacingPreference::Spacious => -0.08,
        SpacingPreference::Comfortable => 0.0,
    };
    if let Some(len) = average_text_len {
        // First matching band only.
        multiplier += if len > 26.0 {
            0.12
        } else if len > 18.0 {
            0.06
        } else if len < 10.0 {
            -0.04
        } else {
            0.0
        };
    }

    let density = (base_load * multiplier / LOAD_NORMALIZER).clamp(0.0, DENSITY_MAX);

    DensityProfile {
        item_count: schedule.len(),
        active_elements,
        average_text_len,
        density,
    }
}

/// Mean wrapping-text length across items that have any text.
fn average_body_text_len(schedule: &[ScheduleItem]) -> Option<f32> {
    let lengths: Vec<usize> = schedule
        .iter()
        .map(ScheduleItem::body_text_len)
        .filter(|len| *len > 0)
        .collect();
    if lengths.is_empty() {
        return None;
    }
    Some(lengths.iter().sum::<usize>() as f32 / lengths.len() as f32)
}
