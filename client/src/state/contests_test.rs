use chrono::TimeZone;

use super::*;

fn contest(id: &str, start: &str, end: &str) -> Contest {
    Contest {
        id: id.to_owned(),
        name: format!("Contest {id}"),
        description: String::new(),
        start_date: start.to_owned(),
        end_date: end.to_owned(),
    }
}

fn noon_jan_10() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
}

// =============================================================
// Date parsing
// =============================================================

#[test]
fn parses_rfc3339_with_offset() {
    let t = parse_contest_time("2024-01-10T14:00:00+02:00").unwrap();
    assert_eq!(t, noon_jan_10());
}

#[test]
fn parses_backend_zulu_timestamps() {
    let t = parse_contest_time("2024-01-10T12:00:00.000Z").unwrap();
    assert_eq!(t, noon_jan_10());
}

#[test]
fn parses_datetime_local_as_utc() {
    assert_eq!(parse_contest_time("2024-01-10T12:00").unwrap(), noon_jan_10());
    assert_eq!(parse_contest_time("2024-01-10T12:00:00").unwrap(), noon_jan_10());
}

#[test]
fn rejects_garbage_dates() {
    assert!(parse_contest_time("").is_none());
    assert!(parse_contest_time("next tuesday").is_none());
}

#[test]
fn format_uses_minutes_and_falls_back_to_raw() {
    assert_eq!(format_contest_time("2024-01-10T12:00:00.000Z"), "2024-01-10 12:00");
    assert_eq!(format_contest_time("soon"), "soon");
}

// =============================================================
// Bucketing
// =============================================================

#[test]
fn partition_splits_upcoming_and_previous() {
    let contests = vec![
        contest("future", "2024-01-11T09:00", "2024-01-11T11:00"),
        contest("past", "2024-01-01T09:00", "2024-01-01T11:00"),
    ];
    let buckets = partition_contests(&contests, noon_jan_10());
    assert_eq!(buckets.upcoming.len(), 1);
    assert_eq!(buckets.upcoming[0].id, "future");
    assert_eq!(buckets.previous.len(), 1);
    assert_eq!(buckets.previous[0].id, "past");
}

#[test]
fn running_contest_is_in_neither_bucket() {
    let contests = vec![contest("live", "2024-01-10T11:00", "2024-01-10T13:00")];
    let buckets = partition_contests(&contests, noon_jan_10());
    assert!(buckets.upcoming.is_empty());
    assert!(buckets.previous.is_empty());
}

#[test]
fn unparseable_dates_are_skipped() {
    let contests = vec![contest("bad", "tbd", "tbd")];
    assert_eq!(partition_contests(&contests, noon_jan_10()), ContestBuckets::default());
}

#[test]
fn partition_keeps_source_order() {
    let contests = vec![
        contest("b", "2024-02-01T00:00", "2024-02-02T00:00"),
        contest("a", "2024-01-20T00:00", "2024-01-21T00:00"),
    ];
    let ids: Vec<String> = partition_contests(&contests, noon_jan_10()).upcoming.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn state_starts_loading() {
    let state = ContestsState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
}
