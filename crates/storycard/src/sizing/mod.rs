// Adaptive layout density: estimates how busy the card is, reads measured
// overflow/breathing room, and turns both into spacing multipliers and
// per-group font scales.

pub mod apply;
pub mod density;
pub mod engine;
pub mod fill;
pub mod pressure;
pub mod scales;
pub mod spacing;

// Re-export the public API consumed by embedding applications.
pub use density::{estimate_density, DensityProfile, DENSITY_MAX};
pub use engine::{compute_smart_sizing, SizingResult};
pub use fill::{analyze_card_fill, CardFillReport, CardFillVerdict, ResizeAction};
pub use pressure::{measure_pressure, HeightPressure};
pub use scales::{compute_group_scales, GroupScales};
pub use spacing::{compute_spacing_scales, SpacingScales};
