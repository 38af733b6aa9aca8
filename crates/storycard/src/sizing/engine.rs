//! The sizing orchestrator — the engine's single public entry point.
//!
//! Pure and synchronous: the same inputs always produce the same result, no
//! input is mutated, and there is nothing to clean up, so it is safe to call
//! on every keystroke of the editor.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::EngineError;
use crate::metadata::{ContentMetadata, ElementGroup, ElementId};
use crate::models::metrics::RenderMetrics;
use crate::models::preferences::StylePreferences;
use crate::models::schedule::ScheduleItem;
use crate::models::styles::StyleMap;
use crate::sizing::apply::apply_typography;
use crate::sizing::density::estimate_density;
use crate::sizing::fill::{analyze_card_fill, CardFillVerdict};
use crate::sizing::pressure::measure_pressure;
use crate::sizing::scales::compute_group_scales;
use crate::sizing::spacing::{compute_spacing_scales, SpacingScales};

/// Canvas height assumed when nothing has been measured yet.
const REFERENCE_CANVAS_HEIGHT: f32 = 1920.0;

const SCALE_FACTOR_MIN: f32 = 0.72;
const SCALE_FACTOR_MAX: f32 = 1.12;

// ────────────────────────────────────────────────────────────────────────────
// Result
// ────────────────────────────────────────────────────────────────────────────

/// The complete sizing decision for one card state. Built fresh on every
/// call; callers that want continuity across calls keep previous results
/// themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    pub element_styles: StyleMap,
    pub spacing: SpacingScales,
    /// Whole-canvas zoom hint in `[0.72, 1.12]`, separate from the
    /// per-element font scaling.
    pub scale_factor: f32,
    /// The density score the decision was based on.
    pub density: f32,
}

impl SizingResult {
    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string_pretty(self).map_err(EngineError::Encode)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Computes per-element typography and spacing multipliers for the current
/// card content.
///
/// `visible_elements` drives the active schedule-column count; per-element
/// visibility of heading/subtitle/date/footer comes from `preferences`.
/// `metrics` is the optional height measurement from the previous render —
/// without it the engine works from content shape alone.
pub fn compute_smart_sizing(
    current_styles: &StyleMap,
    preferences: &StylePreferences,
    visible_elements: &[ElementId],
    schedule: &[ScheduleItem],
    metrics: Option<&RenderMetrics>,
    metadata: &ContentMetadata,
) -> SizingResult {
    let active_elements = ElementId::ALL
        .into_iter()
        .filter(|id| id.group() == ElementGroup::Schedule && visible_elements.contains(id))
        .count();

    let profile = estimate_density(schedule, active_elements, preferences);
    let pressure = measure_pressure(metrics);
    let spacing = compute_spacing_scales(&pressure);
    let scales = compute_group_scales(&profile, preferences, &pressure);
    let element_styles = apply_typography(current_styles, metadata, &scales, preferences);

    if let Some(measured) = metrics {
        let report = analyze_card_fill(measured);
        if report.verdict == CardFillVerdict::SevereOverflow {
            warn!(
                fill_ratio = report.fill_ratio,
                items = schedule.len(),
                "measured card overflows its canvas"
            );
        }
    }

    let scale_factor = canvas_scale_factor(metrics);
    debug!(
        density = profile.density,
        scale_factor,
        schedule_scale = scales.schedule,
        "computed card sizing"
    );

    SizingResult {
        element_styles,
        spacing,
        scale_factor,
        density: profile.density,
    }
}

/// Overall canvas zoom: how far the available height can stretch or shrink
/// the whole composition. Exactly 1.0 when nothing has been measured.
fn canvas_scale_factor(metrics: Option<&RenderMetrics>) -> f32 {
    let (content, available) = match metrics {
        Some(m) => (m.content_height, m.available_height),
        None => (REFERENCE_CANVAS_HEIGHT, REFERENCE_CANVAS_HEIGHT),
    };
    let ratio = available / content.max(1.0);
    if ratio.is_finite() {
        ratio.clamp(SCALE_FACTOR_MIN, SCALE_FACTOR_MAX)
    } else {
        1.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
