//! Adaptive sizing engine for fixed-canvas story cards.
//!
//! A story card has constant pixel dimensions but user-controlled content:
//! any number of schedule rows, arbitrarily long names and headings, and
//! toggleable hero/footer lines. A fixed type scale either overflows the
//! canvas or leaves it looking empty. This crate computes, per call, a
//! complete set of per-element font sizes, line heights, and spacing
//! multipliers that keep the composition balanced — combining the card's
//! content shape with an optional height measurement from the previous
//! render.
//!
//! The engine is a pure function over its inputs: no I/O, no shared state,
//! nothing mutated. Pixel layout, text measurement, persistence, and export
//! all live in the embedding application.

pub mod errors;
pub mod metadata;
pub mod models;
pub mod sizing;

pub use errors::EngineError;
pub use metadata::{default_metadata, ContentMetadata, ElementGroup, ElementId, ElementMetadata};
pub use models::{
    ElementStyle, LayoutStyle, RenderMetrics, ScheduleItem, SizingRequest, SpacingPreference,
    StyleMap, StylePreferences,
};
pub use sizing::{
    analyze_card_fill, compute_smart_sizing, CardFillReport, CardFillVerdict, SizingResult,
    SpacingScales,
};
