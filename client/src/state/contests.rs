//! Contest list state and upcoming/previous bucketing.
//!
//! Dates arrive either as RFC 3339 (stored by the backend) or as the
//! `datetime-local` text the creation form sends. Local form values carry no
//! zone and are read as UTC.

#[cfg(test)]
#[path = "contests_test.rs"]
mod contests_test;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::net::types::Contest;

const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Clone, Debug)]
pub struct ContestsState {
    pub items: Vec<Contest>,
    pub loading: bool,
}

impl Default for ContestsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true }
    }
}

/// Contests split around a reference instant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContestBuckets {
    pub upcoming: Vec<Contest>,
    pub previous: Vec<Contest>,
}

pub fn parse_contest_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Display form of a contest date; unparseable input is shown as-is.
pub fn format_contest_time(raw: &str) -> String {
    parse_contest_time(raw).map_or_else(|| raw.to_owned(), |t| t.format(DISPLAY_FORMAT).to_string())
}

/// Upcoming contests start after `now`; previous contests ended before it.
///
/// A running contest lands in neither bucket, and so does one whose dates do
/// not parse.
pub fn partition_contests(contests: &[Contest], now: DateTime<Utc>) -> ContestBuckets {
    let mut buckets = ContestBuckets::default();
    for contest in contests {
        if parse_contest_time(&contest.start_date).is_some_and(|start| start > now) {
            buckets.upcoming.push(contest.clone());
        } else if parse_contest_time(&contest.end_date).is_some_and(|end| end < now) {
            buckets.previous.push(contest.clone());
        }
    }
    buckets
}
