//! The JSON boundary the editor feeds the engine through.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::metadata::ElementId;
use crate::models::metrics::RenderMetrics;
use crate::models::preferences::StylePreferences;
use crate::models::schedule::ScheduleItem;
use crate::models::styles::StyleMap;

/// Everything one sizing computation needs, bundled for transport.
///
/// Every field defaults, so a partial payload (fresh card, nothing measured
/// yet) still parses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SizingRequest {
    pub current_styles: StyleMap,
    pub preferences: StylePreferences,
    pub visible_elements: Vec<ElementId>,
    pub schedule: Vec<ScheduleItem>,
    pub metrics: Option<RenderMetrics>,
}

impl SizingRequest {
    pub fn from_json(payload: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(payload)?)
    }
}
