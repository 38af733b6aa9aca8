//! Font & line-height applier.
//!
//! Walks every card element, combines its group (or per-element) scale with
//! the caller's current style — falling back to the metadata default — and
//! clamps the result to the element's documented range. Line heights shrink
//! faster than they grow: tight leading reads fine at small sizes, loose
//! leading does not.

use crate::metadata::{ContentMetadata, ElementGroup, ElementId};
use crate::models::preferences::StylePreferences;
use crate::models::styles::{ElementStyle, StyleMap};
use crate::sizing::scales::GroupScales;

const LINE_HEIGHT_GROW_RATE: f32 = 0.12;
const LINE_HEIGHT_SHRINK_RATE: f32 = 0.45;

/// Produces a fresh style map for all card elements. The input map is never
/// touched.
///
/// Elements whose own visibility flag is off still get a recomputed font
/// size (so nothing jumps when they are switched back on) but keep their
/// incoming line height exactly.
pub fn apply_typography(
    current: &StyleMap,
    metadata: &ContentMetadata,
    scales: &GroupScales,
    prefs: &StylePreferences,
) -> StyleMap {
    ElementId::ALL
        .into_iter()
        .map(|id| {
            let entry = metadata.entry(id);
            let scale = element_scale(scales, id);
            let existing = current.get(&id);

            let basis_font = existing
                .map(|style| style.font_size)
                .filter(|size| size.is_finite() && *size > 0.0)
                .unwrap_or(entry.default_font_size);
            let font_size = (basis_font * scale)
                .clamp(entry.min_font_size, entry.max_font_size)
                .round();

            let line_height = if prefs.visibility_flag(id) == Some(false) {
                existing.and_then(|style| style.line_height)
            } else {
                let basis = existing
                    .and_then(|style| style.line_height)
                    .filter(|lh| lh.is_finite() && *lh > 0.0)
                    .unwrap_or(entry.default_line_height);
                Some(rescale_line_height(basis, scale, id.group()))
            };

            (id, ElementStyle { font_size, line_height })
        })
        .collect()
}

/// The scale factor that applies to one element.
fn element_scale(scales: &GroupScales, id: ElementId) -> f32 {
    match id {
        ElementId::Heading => scales.heading,
        ElementId::Subtitle => scales.subtitle,
        ElementId::ScheduleDate => scales.schedule_date,
        ElementId::Footer => scales.footer,
        _ => scales.schedule,
    }
}

fn rescale_line_height(basis: f32, scale: f32, group: ElementGroup) -> f32 {
    let delta = scale - 1.0;
    let factor = if delta >= 0.0 {
        1.0 + delta * LINE_HEIGHT_GROW_RATE
    } else {
        1.0 + delta * LINE_HEIGHT_SHRINK_RATE
    };
    let (min, max) = group.line_height_bounds();
    round_to_hundredths(basis * factor).clamp(min, max)
}

fn round_to_hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
