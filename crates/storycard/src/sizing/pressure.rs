//! Overflow pressure vs. breathing room, from a measured render.
//!
//! The two scalars are complementary by construction: content taller than
//! the canvas produces pressure and zero breathing room, shorter content the
//! opposite, and an exact fit (or no measurement at all) produces neither.

use serde::{Deserialize, Serialize};

use crate::models::metrics::RenderMetrics;

const PRESSURE_FLOOR: f32 = 0.7;
const PRESSURE_CEILING: f32 = 1.8;

/// Measured content-to-canvas ratio split into its two actionable halves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightPressure {
    /// `content_height / available_height`, clamped to `[0.7, 1.8]`.
    pub pressure: f32,
    /// How far past the canvas the content runs (0 when it fits).
    pub overflow: f32,
    /// How much slack the canvas has left (0 when full or overflowing).
    pub breathing: f32,
}

impl HeightPressure {
    /// The no-measurement state: ratio 1, nothing to shrink or grow.
    pub fn neutral() -> Self {
        Self {
            pressure: 1.0,
            overflow: 0.0,
            breathing: 0.0,
        }
    }
}

/// Derives pressure from an optional measurement. Absent or unusable metrics
/// (zero/negative/non-finite heights) resolve to neutral.
pub fn measure_pressure(metrics: Option<&RenderMetrics>) -> HeightPressure {
    let ratio = match metrics {
        Some(m) if m.available_height > 0.0 => m.content_height / m.available_height,
        _ => return HeightPressure::neutral(),
    };
    if !ratio.is_finite() {
        return HeightPressure::neutral();
    }

    let pressure = ratio.clamp(PRESSURE_FLOOR, PRESSURE_CEILING);
    HeightPressure {
        pressure,
        overflow: (pressure - 1.0).max(0.0),
        breathing: (1.0 - pressure).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_metrics(content: f32, available: f32) -> RenderMetrics {
        RenderMetrics {
            content_height: content,
            available_height: available,
            ..RenderMetrics::default()
        }
    }

    #[test]
    fn test_absent_metrics_are_neutral() {
        let p = measure_pressure(None);
        assert_eq!(p.pressure, 1.0);
        assert_eq!(p.overflow, 0.0);
        assert_eq!(p.breathing, 0.0);
    }

    #[test]
    fn test_overflowing_card() {
        let p = measure_pressure(Some(&make_metrics(2400.0, 1920.0)));
        assert!((p.pressure - 1.25).abs() < 1e-5);
        assert!((p.overflow - 0.25).abs() < 1e-5);
        assert_eq!(p.breathing, 0.0);
    }

    #[test]
    fn test_underfilled_card() {
        let p = measure_pressure(Some(&make_metrics(1600.0, 1920.0)));
        assert!((p.breathing - (1.0 - 1600.0 / 1920.0)).abs() < 1e-5);
        assert_eq!(p.overflow, 0.0);
    }

    #[test]
    fn test_ratio_clamped_both_ways() {
        let high = measure_pressure(Some(&make_metrics(5000.0, 1000.0)));
        assert_eq!(high.pressure, PRESSURE_CEILING);
        assert!((high.overflow - 0.8).abs() < 1e-5);

        let low = measure_pressure(Some(&make_metrics(500.0, 1000.0)));
        assert_eq!(low.pressure, PRESSURE_FLOOR);
        assert!((low.breathing - 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_zero_available_height_is_neutral() {
        let p = measure_pressure(Some(&make_metrics(1200.0, 0.0)));
        assert_eq!(p, HeightPressure::neutral());
    }

    #[test]
    fn test_at_most_one_side_nonzero() {
        for content in [500, 1000, 1500, 1920, 2200, 3000, 5000] {
            let p = measure_pressure(Some(&make_metrics(content as f32, 1920.0)));
            assert!(
                p.overflow == 0.0 || p.breathing == 0.0,
                "content={content}: overflow and breathing both set"
            );
        }
    }
}
