//! Problem-set data models and list-view derivation helpers.
//!
//! This crate is UI-framework agnostic so the browser client can consume it
//! directly for rendering the problem table and card grid.
//!
//! DESIGN
//! ======
//! The list view never caches an ordering. Callers keep the source collection
//! and a [`ProblemListView`] and call [`derive_ordering`] on every read.


use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};

/// Number of description characters shown on a grid card.
pub const GRID_DESCRIPTION_CHARS: usize = 100;

// =============================================================================
// PROBLEM RECORD
// =============================================================================

/// Difficulty label attached to a problem.
///
/// Values outside the three known labels are kept verbatim so they still
/// render; they just get no difficulty class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Other(String),
}

impl Difficulty {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Other(raw) => raw,
        }
    }

    /// CSS class for known difficulties.
    #[must_use]
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Easy => Some("difficulty--easy"),
            Self::Medium => Some("difficulty--medium"),
            Self::Hard => Some("difficulty--hard"),
            Self::Other(_) => None,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Easy" => Self::Easy,
            "Medium" => Self::Medium,
            "Hard" => Self::Hard,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Difficulty {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Other(raw) => raw,
            known => known.label().to_owned(),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A coding problem as served by the problem store.
///
/// Every field except the id tolerates both a missing key and an explicit
/// `null`, so one sparse record never rejects the whole list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub problem_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: Difficulty,
    #[serde(default, deserialize_with = "null_as_default")]
    pub submissions: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub marks: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub constraints: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub input_format: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub output_format: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sample_input: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sample_output: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
struct WrappedProblemList {
    problems: Vec<Problem>,
}

/// Parse a problem-list response body.
///
/// Accepts a bare JSON array or an object with a `problems` array.
///
/// # Errors
///
/// Returns the underlying JSON error, naming the offending field, when the
/// body matches neither shape.
pub fn parse_problem_list(body: &str) -> Result<Vec<Problem>, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    if value.is_array() {
        serde_json::from_value(value)
    } else {
        serde_json::from_value::<WrappedProblemList>(value).map(|list| list.problems)
    }
}

/// First [`GRID_DESCRIPTION_CHARS`] characters of a description, with an
/// ellipsis when anything was cut.
#[must_use]
pub fn truncate_description(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(GRID_DESCRIPTION_CHARS).collect();
    if chars.next().is_some() { format!("{head}...") } else { head }
}

// =============================================================================
// SORTING
// =============================================================================

/// Sortable table columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    ProblemName,
    Marks,
    Submissions,
    Difficulty,
}

impl SortKey {
    /// Columns in table order.
    pub const COLUMNS: [Self; 4] = [Self::ProblemName, Self::Marks, Self::Submissions, Self::Difficulty];

    #[must_use]
    pub fn header(self) -> &'static str {
        match self {
            Self::ProblemName => "Problem Name",
            Self::Marks => "Marks",
            Self::Submissions => "Submissions",
            Self::Difficulty => "Difficulty",
        }
    }

    /// Field name as it appears on the wire; rendered as the header's
    /// `data-field` attribute.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::ProblemName => "problemName",
            Self::Marks => "marks",
            Self::Submissions => "submissions",
            Self::Difficulty => "difficulty",
        }
    }

    /// Natural comparison of this field between two records.
    ///
    /// Text fields compare lexicographically (difficulty by its label), numeric
    /// fields numerically.
    #[must_use]
    pub fn compare(self, a: &Problem, b: &Problem) -> Ordering {
        match self {
            Self::ProblemName => a.problem_name.cmp(&b.problem_name),
            Self::Marks => a.marks.cmp(&b.marks),
            Self::Submissions => a.submissions.cmp(&b.submissions),
            Self::Difficulty => a.difficulty.label().cmp(b.difficulty.label()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Active sort column and direction. `key: None` keeps source order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    #[must_use]
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key: Some(key), direction }
    }
}

/// Header icon state for a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortIcon {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Unsorted => "\u{21c5}",
            Self::Ascending => "\u{25b2}",
            Self::Descending => "\u{25bc}",
        }
    }
}

/// Sorted copy of `records` under `config`.
///
/// The sort is stable and the descending comparator reverses only strict
/// orderings, so records with equal keys keep their input order in both
/// directions.
#[must_use]
pub fn derive_ordering(records: &[Problem], config: SortConfig) -> Vec<Problem> {
    let mut ordered = records.to_vec();
    let Some(key) = config.key else {
        return ordered;
    };
    ordered.sort_by(|a, b| {
        let ord = key.compare(a, b);
        match config.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    ordered
}

// =============================================================================
// VIEW STATE
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

impl ViewMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Table => Self::Grid,
            Self::Grid => Self::Table,
        }
    }

    /// Label for the control that switches away from this mode.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Table => "Grid View",
            Self::Grid => "Table View",
        }
    }
}

/// Local state of the problem list: sort configuration and view mode.
///
/// Created with defaults when the view mounts and dropped with it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProblemListView {
    pub sort: SortConfig,
    pub view_mode: ViewMode,
}

impl ProblemListView {
    /// Header click: flip to descending on the active ascending column,
    /// otherwise sort ascending by `key`.
    pub fn request_sort(&mut self, key: SortKey) {
        let direction = if self.sort.key == Some(key) && self.sort.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.sort = SortConfig::new(key, direction);
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    #[must_use]
    pub fn icon_for(&self, key: SortKey) -> SortIcon {
        match (self.sort.key, self.sort.direction) {
            (Some(active), SortDirection::Ascending) if active == key => SortIcon::Ascending,
            (Some(active), SortDirection::Descending) if active == key => SortIcon::Descending,
            _ => SortIcon::Unsorted,
        }
    }

    /// Direction class for the active column header.
    #[must_use]
    pub fn header_class(&self, key: SortKey) -> Option<&'static str> {
        (self.sort.key == Some(key)).then(|| self.sort.direction.as_str())
    }

    #[must_use]
    pub fn ordering(&self, records: &[Problem]) -> Vec<Problem> {
        derive_ordering(records, self.sort)
    }
}
