//! Spacing scale calculator — six gap/padding multipliers.
//!
//! Each multiplier responds to the same pressure signal with its own
//! sensitivity and clamp range: spacing that degrades visibly when crushed
//! (schedule rows, card padding) gets a tighter floor than decorative
//! padding around the logo.

use serde::{Deserialize, Serialize};

use crate::sizing::pressure::HeightPressure;

/// How one spacing multiplier responds to pressure.
struct GapResponse {
    shrink_rate: f32,
    floor: f32,
    grow_rate: f32,
    ceiling: f32,
}

impl GapResponse {
    fn scale(&self, pressure: &HeightPressure) -> f32 {
        if pressure.overflow > 0.0 {
            (1.0 - pressure.overflow * self.shrink_rate).clamp(self.floor, 1.0)
        } else {
            (1.0 + pressure.breathing * self.grow_rate).clamp(1.0, self.ceiling)
        }
    }
}

const HERO_GAP: GapResponse = GapResponse {
    shrink_rate: 0.30,
    floor: 0.74,
    grow_rate: 0.08,
    ceiling: 1.10,
};
// Shared by the schedule row gap and the card padding: both compress together.
const SCHEDULE_COMPRESSION: GapResponse = GapResponse {
    shrink_rate: 0.35,
    floor: 0.68,
    grow_rate: 0.12,
    ceiling: 1.08,
};
const FOOTER_GAP: GapResponse = GapResponse {
    shrink_rate: 0.25,
    floor: 0.76,
    grow_rate: 0.06,
    ceiling: 1.08,
};
const TIME_PADDING: GapResponse = GapResponse {
    shrink_rate: 0.28,
    floor: 0.70,
    grow_rate: 0.05,
    ceiling: 1.05,
};
const LOGO_PADDING: GapResponse = GapResponse {
    shrink_rate: 0.22,
    floor: 0.75,
    grow_rate: 0.04,
    ceiling: 1.06,
};

/// The six spacing multipliers applied by the renderer. All are 1.0 under
/// neutral pressure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingScales {
    pub hero_gap: f32,
    pub schedule_gap: f32,
    pub card_padding: f32,
    pub footer_gap: f32,
    pub time_padding: f32,
    pub logo_padding: f32,
}

/// Derives all six multipliers from the measured pressure.
pub fn compute_spacing_scales(pressure: &HeightPressure) -> SpacingScales {
    let compression = SCHEDULE_COMPRESSION.scale(pressure);
    SpacingScales {
        hero_gap: HERO_GAP.scale(pressure),
        schedule_gap: compression,
        card_padding: compression,
        footer_gap: FOOTER_GAP.scale(pressure),
        time_padding: TIME_PADDING.scale(pressure),
        logo_padding: LOGO_PADDING.scale(pressure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::metrics::RenderMetrics;
    use crate::sizing::pressure::measure_pressure;

    fn pressure_for(content: f32, available: f32) -> HeightPressure {
        measure_pressure(Some(&RenderMetrics {
            content_height: content,
            available_height: available,
            ..RenderMetrics::default()
        }))
    }

    fn all_scales(s: &SpacingScales) -> [f32; 6] {
        [
            s.hero_gap,
            s.schedule_gap,
            s.card_padding,
            s.footer_gap,
            s.time_padding,
            s.logo_padding,
        ]
    }

    #[test]
    fn test_neutral_pressure_keeps_everything_at_one() {
        let scales = compute_spacing_scales(&HeightPressure::neutral());
        for scale in all_scales(&scales) {
            assert_eq!(scale, 1.0);
        }
    }

    #[test]
    fn test_overflow_compresses_schedule_gap() {
        // 2400/1920 → overflow 0.25 → 1 − 0.25×0.35 = 0.9125.
        let scales = compute_spacing_scales(&pressure_for(2400.0, 1920.0));
        assert!((scales.schedule_gap - 0.9125).abs() < 1e-5);
        assert_eq!(scales.schedule_gap, scales.card_padding);
    }

    #[test]
    fn test_breathing_room_grows_hero_gap() {
        // 1600/1920 → breathing ≈ 0.1667 → 1 + 0.1667×0.08 ≈ 1.0133.
        let scales = compute_spacing_scales(&pressure_for(1600.0, 1920.0));
        assert!((scales.hero_gap - 1.01333).abs() < 1e-4);
    }

    #[test]
    fn test_scales_stay_inside_documented_ranges() {
        let bounds = [
            (0.74, 1.10),
            (0.68, 1.08),
            (0.68, 1.08),
            (0.76, 1.08),
            (0.70, 1.05),
            (0.75, 1.06),
        ];
        for content in (400..6000).step_by(200) {
            let scales = compute_spacing_scales(&pressure_for(content as f32, 1920.0));
            for (scale, (floor, ceiling)) in all_scales(&scales).iter().zip(bounds) {
                assert!(
                    (floor..=ceiling).contains(scale),
                    "content={content}: {scale} outside [{floor}, {ceiling}]"
                );
            }
        }
    }

    #[test]
    fn test_monotonic_in_measured_height() {
        let mut previous = all_scales(&compute_spacing_scales(&pressure_for(800.0, 1920.0)));
        for content in (1000..5000).step_by(100) {
            let current = all_scales(&compute_spacing_scales(&pressure_for(
                content as f32,
                1920.0,
            )));
            for (now, before) in current.iter().zip(previous) {
                assert!(
                    *now <= before + 1e-6,
                    "content={content}: multiplier rose with more overflow"
                );
            }
            previous = current;
        }
    }
}
