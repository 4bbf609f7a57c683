//! Configuration for task drafts.

use super::DurationMinutes;

/// Defaults applied while editing a task draft.
///
/// # Examples
///
/// ```
/// use daybook::task::domain::{DraftConfig, DurationMinutes};
///
/// let config = DraftConfig::default();
/// assert_eq!(config.default_duration, DurationMinutes::DEFAULT);
/// assert_eq!(config.duration_step_minutes, 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftConfig {
    /// Duration a new draft starts with and falls back to on bad input.
    pub default_duration: DurationMinutes,
    /// Minutes added or removed by one duration step.
    pub duration_step_minutes: u32,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            default_duration: DurationMinutes::DEFAULT,
            duration_step_minutes: DurationMinutes::STEP,
        }
    }
}

impl DraftConfig {
    /// Returns a configuration with a different default duration.
    #[must_use]
    pub const fn with_default_duration(mut self, duration: DurationMinutes) -> Self {
        self.default_duration = duration;
        self
    }

    /// Returns a configuration with a different stepper increment.
    #[must_use]
    pub const fn with_duration_step(mut self, minutes: u32) -> Self {
        self.duration_step_minutes = minutes;
        self
    }
}
