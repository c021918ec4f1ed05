//! Template renderer module
//!
//! Fills the week placeholders of a Markdown report template.

use crate::models::DateInfo;

/// Placeholder for the zero-padded ISO week number
pub const WEEK_PLACEHOLDER: &str = "{{.Week}}";
/// Placeholder for the Monday of the week
pub const WEEK_START_PLACEHOLDER: &str = "{{.WeekStart}}";
/// Placeholder for the Friday of the week
pub const WEEK_END_PLACEHOLDER: &str = "{{.WeekEnd}}";

/// Replace every placeholder occurrence with its date value
///
/// Replacement is literal: no escaping, and substituted text is never expanded again.
pub fn fill(template: &str, info: &DateInfo) -> String {
    template
        .replace(WEEK_PLACEHOLDER, &info.week)
        .replace(WEEK_START_PLACEHOLDER, &info.week_start)
        .replace(WEEK_END_PLACEHOLDER, &info.week_end)
}
