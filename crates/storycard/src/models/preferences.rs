//! User-visible style preferences relevant to sizing.

use serde::{Deserialize, Serialize};

use crate::metadata::ElementId;

/// How schedule rows are arranged on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStyle {
    List,
    Grid,
    Card,
}

/// The user's overall spacing choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingPreference {
    Compact,
    Comfortable,
    Spacious,
}

/// The slice of the style editor's state the sizing engine reads.
///
/// `heading_text`/`subtitle_text` are carried only for their length — the
/// engine never renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePreferences {
    pub show_heading: bool,
    pub show_subtitle: bool,
    pub show_schedule_date: bool,
    pub show_footer: bool,
    pub layout_style: LayoutStyle,
    pub spacing: SpacingPreference,
    pub heading_text: String,
    pub subtitle_text: String,
}

impl Default for StylePreferences {
    fn default() -> Self {
        Self {
            show_heading: true,
            show_subtitle: true,
            show_schedule_date: true,
            show_footer: true,
            layout_style: LayoutStyle::List,
            spacing: SpacingPreference::Comfortable,
            heading_text: String::new(),
            subtitle_text: String::new(),
        }
    }
}

impl StylePreferences {
    /// Number of hero elements the user currently has switched on (0–3).
    pub fn enabled_hero_count(&self) -> usize {
        [self.show_heading, self.show_subtitle, self.show_schedule_date]
            .into_iter()
            .filter(|on| *on)
            .count()
    }

    /// The individual visibility flag for an element, if it has one.
    ///
    /// Schedule-row elements are toggled collectively through the visible-
    /// element list, not per flag, so they return `None`.
    pub fn visibility_flag(&self, id: ElementId) -> Option<bool> {
        match id {
            ElementId::Heading => Some(self.show_heading),
            ElementId::Subtitle => Some(self.show_subtitle),
            ElementId::ScheduleDate => Some(self.show_schedule_date),
            ElementId::Footer => Some(self.show_footer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_hero_count() {
        let mut prefs = StylePreferences::default();
        assert_eq!(prefs.enabled_hero_count(), 3);
        prefs.show_subtitle = false;
        prefs.show_schedule_date = false;
        assert_eq!(prefs.enabled_hero_count(), 1);
    }

    #[test]
    fn test_visibility_flag_only_for_toggleable_elements() {
        let prefs = StylePreferences {
            show_footer: false,
            ..StylePreferences::default()
        };
        assert_eq!(prefs.visibility_flag(ElementId::Footer), Some(false));
        assert_eq!(prefs.visibility_flag(ElementId::Heading), Some(true));
        assert_eq!(prefs.visibility_flag(ElementId::ClassName), None);
    }

    #[test]
    fn test_lowercase_wire_names() {
        let prefs = StylePreferences {
            layout_style: LayoutStyle::Grid,
            spacing: SpacingPreference::Spacious,
            ..StylePreferences::default()
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("\"grid\""));
        assert!(json.contains("\"spacious\""));
    }
}
