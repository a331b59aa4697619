//! Which row of the schedule table counts as "today".
//!
//! Near local midnight the local calendar date and the UTC date differ, so the
//! choice is explicit: callers pass a clock reading and a [`DatePolicy`].

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// How the current instant is turned into a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatePolicy {
    /// Date on the wall calendar of the reading's UTC offset.
    #[default]
    LocalCalendar,
    /// Date in UTC regardless of where the reader is.
    UtcCalendar,
}

impl DatePolicy {
    /// `"utc"` selects [`DatePolicy::UtcCalendar`]; anything else is local.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => DatePolicy::UtcCalendar,
            _ => DatePolicy::LocalCalendar,
        }
    }
}

/// Source of the current instant, with the local UTC offset attached.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock of the running platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(feature = "web")]
    fn now(&self) -> DateTime<FixedOffset> {
        use chrono::Offset;
        use js_sys::Date;

        let d = Date::new_0();
        let millis = d.get_time() as i64;
        // getTimezoneOffset is minutes *behind* UTC
        let offset_secs = -(d.get_timezone_offset() as i32) * 60;
        let offset = FixedOffset::east_opt(offset_secs).unwrap_or_else(|| Utc.fix());
        DateTime::<Utc>::from_timestamp_millis(millis)
            .unwrap_or_default()
            .with_timezone(&offset)
    }

    #[cfg(not(feature = "web"))]
    fn now(&self) -> DateTime<FixedOffset> {
        chrono::Local::now().fixed_offset()
    }
}

/// A clock frozen at one instant.
#[cfg(test)]
pub struct FixedClock(pub DateTime<FixedOffset>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

pub fn today(now: DateTime<FixedOffset>, policy: DatePolicy) -> NaiveDate {
    match policy {
        DatePolicy::LocalCalendar => now.date_naive(),
        DatePolicy::UtcCalendar => now.with_timezone(&Utc).date_naive(),
    }
}

/// Key of today's row, formatted `YYYY-MM-DD`.
pub fn today_key(now: DateTime<FixedOffset>, policy: DatePolicy) -> String {
    today(now, policy).format("%Y-%m-%d").to_string()
}
