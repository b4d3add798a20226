use problemset::Difficulty;

use super::*;

fn problem(id: &str, name: &str) -> Problem {
    serde_json::from_value(serde_json::json!({ "_id": id, "problemName": name, "difficulty": "Easy" })).unwrap()
}

#[test]
fn default_store_is_empty_and_idle() {
    let state = ProblemsState::default();
    assert!(state.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn finish_load_replaces_items() {
    let mut state = ProblemsState::default();
    state.begin_load();
    assert!(state.loading);
    state.finish_load(Ok(vec![problem("1", "A"), problem("2", "B")]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn failed_load_keeps_previous_items() {
    let mut state = ProblemsState::default();
    state.finish_load(Ok(vec![problem("1", "A")]));
    state.begin_load();
    state.finish_load(Err("offline".to_owned()));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("offline"));
}

#[test]
fn begin_load_clears_previous_error() {
    let mut state = ProblemsState::default();
    state.finish_load(Err("offline".to_owned()));
    state.begin_load();
    assert!(state.error.is_none());
}

#[test]
fn add_problem_appends_and_replaces_by_id() {
    let mut state = ProblemsState::default();
    state.add_problem(problem("1", "A"));
    state.add_problem(problem("2", "B"));
    state.add_problem(problem("1", "A v2"));
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.find("1").map(|p| p.problem_name.as_str()), Some("A v2"));
    assert_eq!(state.find("2").map(|p| p.difficulty.clone()), Some(Difficulty::Easy));
    assert!(state.find("3").is_none());
}

#[test]
fn empty_idle_store_needs_fetch() {
    let mut state = ProblemsState::default();
    assert!(state.needs_fetch());
    state.begin_load();
    assert!(!state.needs_fetch());
    state.finish_load(Ok(vec![problem("1", "A")]));
    assert!(!state.needs_fetch());
}

#[test]
fn failed_first_load_is_reported_and_retryable() {
    let mut state = ProblemsState::default();
    state.begin_load();
    assert_eq!(state.empty_after_failure(), None);
    state.finish_load(Err("offline".to_owned()));
    assert!(state.needs_fetch());
    assert_eq!(state.empty_after_failure(), Some("offline"));

    state.begin_load();
    assert_eq!(state.empty_after_failure(), None);
    state.finish_load(Ok(vec![problem("1", "A")]));
    assert_eq!(state.empty_after_failure(), None);
}

#[test]
fn failed_refresh_over_loaded_items_is_not_an_empty_failure() {
    let mut state = ProblemsState::default();
    state.finish_load(Ok(vec![problem("1", "A")]));
    state.finish_load(Err("offline".to_owned()));
    assert_eq!(state.empty_after_failure(), None);
}
