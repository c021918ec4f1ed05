//! Week resolution for weekly reports
//!
//! A report covers Monday through Friday of the ISO week containing the
//! reference day, and is filed under the month of the reference day itself.
use chrono::{Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use log::debug;

use crate::error::{GoweekError, Result};

/// Date values substituted into a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInfo {
    /// ISO week number, zero-padded to two digits
    pub week: String,
    /// Monday of the week, `YYYY/MM/DD`
    pub week_start: String,
    /// Friday of the week, `YYYY/MM/DD`
    pub week_end: String,
    /// Month of the reference day, `YYYY-MM`
    pub month: String,
}

impl DateInfo {
    /// Resolve the report week for `reference`, or for the week before it
    pub fn resolve(reference: NaiveDate, last_week: bool) -> Self {
        let day = if last_week {
            reference - Duration::days(7)
        } else {
            reference
        };

        // Monday = 1 .. Sunday = 7
        let weekday = i64::from(day.weekday().number_from_monday());
        let week_start = day - Duration::days(weekday - 1);
        let week_end = day + Duration::days(5 - weekday);

        let info = Self {
            week: format!("{:02}", day.iso_week().week()),
            week_start: week_start.format("%Y/%m/%d").to_string(),
            week_end: week_end.format("%Y/%m/%d").to_string(),
            month: day.format("%Y-%m").to_string(),
        };

        debug!("Resolved {} (last_week={}) to {:?}", reference, last_week, info);
        info
    }
}

/// Current calendar date in the named IANA timezone
pub fn today_in(timezone: &str) -> Result<NaiveDate> {
    let tz: Tz = timezone.parse().map_err(|e| {
        GoweekError::Timezone(format!("Cannot load timezone '{}': {}", timezone, e))
    })?;

    Ok(Utc::now().with_timezone(&tz).date_naive())
}
