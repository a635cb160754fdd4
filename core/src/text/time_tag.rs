//! Chat timestamp tags for a wall-clock time in New York.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::America::New_York;
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeTagError {
    #[error("Time must look like 9:30pm")]
    Format(#[from] chrono::ParseError),

    #[error("{time} does not exist on {date} in New York")]
    Nonexistent { time: NaiveTime, date: NaiveDate },
}

/// Parse a 12-hour clock time such as `9:30pm` or `11:05`.
///
/// Case is ignored. Without an `AM`/`PM` suffix the time is taken as PM.
pub fn parse_clock_time(time: &str) -> Result<NaiveTime, TimeTagError> {
    let mut time = time.to_uppercase();
    if !time.ends_with('M') {
        time.push_str("PM");
    }
    Ok(NaiveTime::parse_from_str(&time, "%I:%M%p")?)
}

/// The instant `time` names on `date`, read as New York local time.
///
/// An ambiguous time (the repeated hour in autumn) resolves to its first
/// occurrence. A time skipped by the spring change is read with the offset
/// in force just before it, landing one hour later on the clock.
pub fn new_york_instant(time: &str, date: NaiveDate) -> Result<DateTime<Tz>, TimeTagError> {
    let clock = parse_clock_time(time)?;
    let local = date.and_time(clock);
    New_York
        .from_local_datetime(&local)
        .earliest()
        .or_else(|| {
            New_York
                .from_local_datetime(&(local + TimeDelta::hours(1)))
                .earliest()
        })
        .ok_or(TimeTagError::Nonexistent { time: clock, date })
}

/// The reply for `make-time-tag`: the rendered tag, then its source in a
/// code block for copying.
///
/// ```
/// use chrono::NaiveDate;
/// use stackbot_core::text::time_tag;
///
/// let date = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
/// assert_eq!(
///     time_tag("9:30pm", date).unwrap(),
///     "<t:1720143000:t>\n```\n<t:1720143000:t>\n```"
/// );
/// ```
pub fn time_tag(time: &str, date: NaiveDate) -> Result<String, TimeTagError> {
    let timestamp = new_york_instant(time, date)?.timestamp();
    Ok(format!("<t:{timestamp}:t>\n```\n<t:{timestamp}:t>\n```"))
}

/// [`time_tag`] for today's date in New York.
pub fn time_tag_today(time: &str) -> Result<String, TimeTagError> {
    let today = Utc::now().with_timezone(&New_York).date_naive();
    time_tag(time, today)
}
