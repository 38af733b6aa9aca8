pub mod metrics;
pub mod preferences;
pub mod request;
pub mod schedule;
pub mod styles;

pub use metrics::RenderMetrics;
pub use preferences::{LayoutStyle, SpacingPreference, StylePreferences};
pub use request::SizingRequest;
pub use schedule::ScheduleItem;
pub use styles::{ElementStyle, StyleMap};
