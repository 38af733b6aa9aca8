//! Content-element metadata — the engine's injected configuration layer.
//!
//! Maps every renderable text element to its semantic group, its default
//! typography, and the font-size range the engine is allowed to scale within.
//! The table is supplied by the embedding application and is never mutated
//! here; `default_metadata()` returns the stock story-card table. A caller
//! table that omits an element falls back to a generic entry, so lookups are
//! total.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Element identifiers
// ────────────────────────────────────────────────────────────────────────────

/// Every renderable text element on the story card.
///
/// The variants partition into three fixed groups — see [`ElementId::group`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ElementId {
    /// Main heading of the hero block.
    Heading,
    /// Subtitle line under the heading.
    Subtitle,
    /// Date line of the hero block (e.g. "Week of March 3").
    ScheduleDate,
    /// Class name of a schedule row.
    ClassName,
    /// Time column of a schedule row.
    Time,
    /// Instructor name of a schedule row.
    Instructor,
    /// Location of a schedule row.
    Location,
    /// Duration of a schedule row.
    Duration,
    /// Free-form description of a schedule row.
    Description,
    /// Footer line at the bottom of the card.
    Footer,
}

/// Semantic grouping of card elements. Each group shares line-height bounds
/// and (for schedule/footer) a scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ElementGroup {
    Hero,
    Schedule,
    Footer,
}

impl ElementId {
    /// All card elements, in render order.
    pub const ALL: [ElementId; 10] = [
        ElementId::Heading,
        ElementId::Subtitle,
        ElementId::ScheduleDate,
        ElementId::ClassName,
        ElementId::Time,
        ElementId::Instructor,
        ElementId::Location,
        ElementId::Duration,
        ElementId::Description,
        ElementId::Footer,
    ];

    /// The semantic group this element belongs to.
    pub fn group(self) -> ElementGroup {
        match self {
            ElementId::Heading | ElementId::Subtitle | ElementId::ScheduleDate => {
                ElementGroup::Hero
            }
            ElementId::ClassName
            | ElementId::Time
            | ElementId::Instructor
            | ElementId::Location
            | ElementId::Duration
            | ElementId::Description => ElementGroup::Schedule,
            ElementId::Footer => ElementGroup::Footer,
        }
    }
}

impl ElementGroup {
    /// Inclusive line-height range for elements of this group.
    pub fn line_height_bounds(self) -> (f32, f32) {
        match self {
            ElementGroup::Hero => (1.05, 1.4),
            ElementGroup::Schedule => (1.1, 1.6),
            ElementGroup::Footer => (1.1, 1.5),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Metadata table
// ────────────────────────────────────────────────────────────────────────────

/// Default typography and scaling bounds for a single element.
///
/// `min_font_size`/`max_font_size` are the inclusive range the engine clamps
/// to after scaling; the defaults are the basis when the caller supplies no
/// current style for the element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementMetadata {
    pub default_font_size: f32,
    pub default_line_height: f32,
    pub min_font_size: f32,
    pub max_font_size: f32,
}

/// Generic entry used when a caller-supplied table has no row for an element.
const FALLBACK_ENTRY: ElementMetadata = ElementMetadata {
    default_font_size: 18.0,
    default_line_height: 1.3,
    min_font_size: 16.0,
    max_font_size: 30.0,
};

/// Read-only element metadata table, injected into every sizing call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMetadata {
    entries: BTreeMap<ElementId, ElementMetadata>,
}

impl ContentMetadata {
    pub fn new(entries: BTreeMap<ElementId, ElementMetadata>) -> Self {
        Self { entries }
    }

    /// Looks up the entry for an element, falling back to the generic entry
    /// when the table has no row for it.
    pub fn entry(&self, id: ElementId) -> &ElementMetadata {
        self.entries.get(&id).unwrap_or(&FALLBACK_ENTRY)
    }
}

/// Returns the stock story-card metadata table.
///
/// Font ranges are the engine's working ranges; an embedding application with
/// narrower editor limits injects its own table instead.
pub fn default_metadata() -> ContentMetadata {
    let rows: [(ElementId, f32, f32, f32, f32); 10] = [
        // (element, default size, default line height, min size, max size)
        (ElementId::Heading, 46.0, 1.1, 28.0, 68.0),
        (ElementId::Subtitle, 26.0, 1.25, 20.0, 44.0),
        (ElementId::ScheduleDate, 20.0, 1.2, 16.0, 30.0),
        (ElementId::ClassName, 26.0, 1.25, 20.0, 34.0),
        (ElementId::Time, 24.0, 1.2, 18.0, 30.0),
        (ElementId::Instructor, 20.0, 1.3, 16.0, 26.0),
        (ElementId::Location, 18.0, 1.3, 15.0, 24.0),
        (ElementId::Duration, 18.0, 1.3, 15.0, 24.0),
        (ElementId::Description, 16.0, 1.35, 15.0, 24.0),
        (ElementId::Footer, 20.0, 1.3, 16.0, 28.0),
    ];

    let entries = rows
        .into_iter()
        .map(|(id, size, line_height, min, max)| {
            (
                id,
                ElementMetadata {
                    default_font_size: size,
                    default_line_height: line_height,
                    min_font_size: min,
                    max_font_size: max,
                },
            )
        })
        .collect();

    ContentMetadata { entries }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
