//! StretchText configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How deferred class toggles are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SchedulerPreference {
    /// Per-frame callback when the host has one, timer otherwise
    #[default]
    Auto,
    /// Always use the host's per-frame callback
    AnimationFrame,
    /// Always use the fixed timer fallback
    Timer,
}

/// Markup conventions and behavior switches.
///
/// Every field has a default, so partial JSON / JS objects are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Attribute marking a summary (`epub-type`)
    pub summary_attribute: String,
    /// Required value of [`Config::summary_attribute`]
    pub summary_attribute_value: String,
    /// Class marking a summary
    pub summary_class: String,
    /// Marker class present on summary and detail while open
    pub open_class: String,
    /// Attribute carrying the action hint
    pub label_attribute: String,
    /// Hint while closed
    pub label_closed: String,
    /// Hint while open
    pub label_open: String,
    /// Collapse summaries matched by both selector rules into one entry.
    /// When false, such summaries get two sets of handlers and every press
    /// toggles them twice.
    pub dedupe_summaries: bool,
    /// Leave author-supplied labels alone at discovery time
    pub preserve_author_labels: bool,
    /// Re-evaluate the label after each toggle. Only writes when no label
    /// attribute exists, which after discovery is never the case.
    pub refresh_label_on_toggle: bool,
    pub scheduler: SchedulerPreference,
    /// Timer fallback interval in milliseconds
    pub frame_fallback_ms: u64,
}

impl Config {
    /// Timer fallback interval
    pub fn frame_fallback(&self) -> Duration {
        Duration::from_millis(self.frame_fallback_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_attribute: "epub-type".to_string(),
            summary_attribute_value: "stretchsummary".to_string(),
            summary_class: "stretchsummary".to_string(),
            open_class: "stretchtext-open".to_string(),
            label_attribute: "title".to_string(),
            label_closed: "Expand".to_string(),
            label_open: "Collapse".to_string(),
            dedupe_summaries: true,
            preserve_author_labels: true,
            refresh_label_on_toggle: true,
            scheduler: SchedulerPreference::Auto,
            frame_fallback_ms: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_markup_conventions() {
        let config = Config::default();
        assert_eq!(config.summary_attribute, "epub-type");
        assert_eq!(config.summary_class, "stretchsummary");
        assert_eq!(config.open_class, "stretchtext-open");
        assert_eq!(config.label_closed, "Expand");
        assert_eq!(config.label_open, "Collapse");
        assert_eq!(config.frame_fallback(), Duration::from_millis(16));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(
            r#"{ "openClass": "is-open", "scheduler": "timer", "frameFallbackMs": 33 }"#,
        ).unwrap();

        assert_eq!(config.open_class, "is-open");
        assert_eq!(config.scheduler, SchedulerPreference::Timer);
        assert_eq!(config.frame_fallback_ms, 33);
        assert_eq!(config.summary_class, "stretchsummary");
        assert!(config.dedupe_summaries);
    }

    #[test]
    fn test_unknown_scheduler_rejected() {
        let result: Result<Config, _> = serde_json::from_str(r#"{ "scheduler": "idle" }"#);
        assert!(result.is_err());
    }
}
