//! Schedule records as supplied by the data-fetch layer.
//!
//! The engine treats the schedule as read-only; a fresh list is passed on
//! every computation call. All text fields are optional — an item straight
//! out of the editor may have nothing filled in yet.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single schedule row on the story card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: Uuid,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ScheduleItem {
    /// Character count of the wrapping text fields (class name, instructor,
    /// location, description), trimmed and concatenated. Time and duration
    /// are excluded — they render in fixed-width columns and never wrap.
    pub fn body_text_len(&self) -> usize {
        [
            &self.class_name,
            &self.instructor,
            &self.location,
            &self.description,
        ]
        .into_iter()
        .flatten()
        .map(|field| field.trim().chars().count())
        .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(class_name: &str, instructor: &str) -> ScheduleItem {
        ScheduleItem {
            id: Uuid::new_v4(),
            class_name: Some(class_name.to_string()),
            time: Some("6:00 AM".to_string()),
            instructor: Some(instructor.to_string()),
            location: None,
            duration: None,
            description: None,
        }
    }

    #[test]
    fn test_body_text_len_sums_trimmed_fields() {
        let item = make_item("  Yoga Flow ", "Maya");
        // "Yoga Flow" (9) + "Maya" (4); time is excluded.
        assert_eq!(item.body_text_len(), 13);
    }

    #[test]
    fn test_body_text_len_empty_item() {
        let item = ScheduleItem {
            id: Uuid::new_v4(),
            class_name: None,
            time: None,
            instructor: None,
            location: None,
            duration: None,
            description: None,
        };
        assert_eq!(item.body_text_len(), 0);
    }
}
