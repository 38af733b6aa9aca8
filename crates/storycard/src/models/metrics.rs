//! Measured render heights, reported by the caller's layout-measurement
//! utility after a previous render. All values are pixels in the same linear
//! unit; the engine never measures anything itself.

use serde::{Deserialize, Serialize};

/// One measurement of the rendered card against its canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderMetrics {
    /// Total rendered height of the card content.
    pub content_height: f32,
    /// Height the canvas allows for that content.
    pub available_height: f32,
    pub hero_height: f32,
    pub schedule_height: f32,
    pub footer_height: f32,
    pub item_count: usize,
}
