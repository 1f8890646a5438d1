use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use portal_core::Clock;

/// e.g. `Monday, January 1, 2024`.
#[must_use]
pub fn format_long_date<Tz: TimeZone>(value: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value.format("%A, %B %-d, %Y").to_string()
}

/// e.g. `14:05:09 UTC`.
#[must_use]
pub fn format_clock_time<Tz: TimeZone>(value: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value.format("%H:%M:%S %Z").to_string()
}

#[must_use]
pub fn format_news_date(value: NaiveDate) -> String {
    value.format("%B %-d, %Y").to_string()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockFaceVm {
    pub date: String,
    pub time: String,
}

/// The system clock reads in local time; a fixed clock stays in UTC.
#[must_use]
pub fn clock_face(clock: &Clock) -> ClockFaceVm {
    match clock {
        Clock::System => face(&Local::now()),
        Clock::Fixed(at) => face::<Utc>(at),
    }
}

fn face<Tz: TimeZone>(value: &DateTime<Tz>) -> ClockFaceVm
where
    Tz::Offset: std::fmt::Display,
{
    ClockFaceVm {
        date: format_long_date(value),
        time: format_clock_time(value),
    }
}
