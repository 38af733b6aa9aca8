//! Card fill analysis — classifies a measured render so callers can decide
//! whether another measure-and-size round is worth running.

use serde::{Deserialize, Serialize};

use crate::models::metrics::RenderMetrics;

/// Overflow beyond this fraction of the canvas is severe: typography alone
/// may not recover it and the caller should re-measure after resizing.
const SEVERE_OVERFLOW_FRACTION: f32 = 0.05;
/// Whitespace below this fraction reads as intentional margin, not a gap.
const WHITESPACE_TOLERANCE: f32 = 0.08;

/// Overall verdict on how the rendered card fills its canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFillVerdict {
    /// Fits with at most tolerable whitespace.
    Balanced,
    /// More than 8% of the canvas is empty.
    ExcessWhitespace,
    /// Up to 5% taller than the canvas.
    MinorOverflow,
    /// More than 5% taller than the canvas.
    SevereOverflow,
}

/// What the caller should do with the current sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeAction {
    /// Re-run sizing with these metrics so typography tightens.
    Shrink,
    /// Re-run sizing with these metrics so typography relaxes.
    Grow,
    NoAction,
}

/// Fill analysis of one measured render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardFillReport {
    pub fill_ratio: f32,
    pub whitespace_fraction: f32,
    pub overflow_fraction: f32,
    pub verdict: CardFillVerdict,
}

impl CardFillReport {
    pub fn recommended_action(&self) -> ResizeAction {
        match self.verdict {
            CardFillVerdict::Balanced => ResizeAction::NoAction,
            CardFillVerdict::ExcessWhitespace => ResizeAction::Grow,
            CardFillVerdict::MinorOverflow | CardFillVerdict::SevereOverflow => {
                ResizeAction::Shrink
            }
        }
    }
}

/// Analyzes how the measured content fills the available canvas height.
/// Unusable measurements (zero/non-finite available height) read as an exact
/// fit.
pub fn analyze_card_fill(metrics: &RenderMetrics) -> CardFillReport {
    let fill_ratio = if metrics.available_height > 0.0 {
        let ratio = metrics.content_height / metrics.available_height;
        if ratio.is_finite() {
            ratio.max(0.0)
        } else {
            1.0
        }
    } else {
        1.0
    };

    let whitespace_fraction = (1.0 - fill_ratio).max(0.0);
    let overflow_fraction = (fill_ratio - 1.0).max(0.0);

    let verdict = if overflow_fraction > SEVERE_OVERFLOW_FRACTION {
        CardFillVerdict::SevereOverflow
    } else if overflow_fraction > 0.0 {
        CardFillVerdict::MinorOverflow
    } else if whitespace_fraction > WHITESPACE_TOLERANCE {
        CardFillVerdict::ExcessWhitespace
    } else {
        CardFillVerdict::Balanced
    };

    CardFillReport {
        fill_ratio,
        whitespace_fraction,
        overflow_fraction,
        verdict,
    }
}
