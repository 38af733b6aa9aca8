//! Per-element style records exchanged with the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::metadata::ElementId;

/// The typography of one card element.
///
/// `line_height` is a unitless multiplier and may be unset — elements whose
/// visibility flag is off keep whatever value (or absence) they came in with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    pub font_size: f32,
    #[serde(default)]
    pub line_height: Option<f32>,
}

/// Style map keyed by element. `BTreeMap` keeps iteration and serialization
/// order deterministic.
pub type StyleMap = BTreeMap<ElementId, ElementStyle>;
