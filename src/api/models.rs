//! Wire models for the Taskaz REST API.
//!
//! Field names follow the backend's camelCase JSON. Priority and status are
//! closed enums, so a payload carrying an unknown value fails to decode
//! instead of leaking a stray string into the UI.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::utils::datetime::wire_datetime;

/// Backend-assigned identifier of a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskListId(pub Uuid);

/// Backend-assigned identifier of a task, unique within its task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub Uuid);

impl TaskListId {
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl TaskId {
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TaskListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskListId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Task priority. The backend defaults new tasks to `MEDIUM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::High, TaskPriority::Medium, TaskPriority::Low];

    /// Wire name, e.g. `HIGH`
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Next value in selector order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::High,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Medium => Self::High,
            Self::Low => Self::Medium,
        }
    }
}

/// Task status. New tasks start `OPEN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Open,
    Closed,
}

impl TaskStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// A task list as returned by the backend.
///
/// `count` and `progress` are computed server-side. The backend may also embed
/// the list's tasks; the client always fetches them separately and ignores
/// that field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    pub id: TaskListId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default, deserialize_with = "lenient_progress::deserialize")]
    pub progress: Option<f64>,
}

impl TaskList {
    /// Number of tasks, treating a missing count as zero.
    #[must_use]
    pub fn task_count(&self) -> u32 {
        self.count.unwrap_or(0)
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::from_raw(self.progress)
    }
}

/// A task as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "wire_datetime")]
    pub due_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default)]
    pub status: TaskStatus,
}

/// User-editable fields of a task list, produced by the list form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListDraft {
    pub title: String,
    pub description: Option<String>,
}

impl From<&TaskList> for TaskListDraft {
    fn from(task_list: &TaskList) -> Self {
        Self {
            title: task_list.title.clone(),
            description: task_list.description.clone(),
        }
    }
}

/// User-editable fields of a task, produced by the task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            priority: task.priority,
            status: task.status,
        }
    }
}

impl TaskDraft {
    /// The same task with its status flipped and every other field untouched.
    #[must_use]
    pub fn toggled(task: &Task) -> Self {
        Self {
            status: task.status.toggled(),
            ..Self::from(task)
        }
    }
}

/// Completion progress of a task list as reported by the backend.
///
/// The current backend sends a `0..=1` fraction, older ones a `0..=100`
/// percentage. Values in `(0, 1]` are read as fractions, everything else as a
/// percentage. A missing value is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress(f64);

/// Colour band of a progress gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Complete,
    Good,
    Low,
}

impl Progress {
    #[must_use]
    pub fn from_raw(raw: Option<f64>) -> Self {
        Self(raw.unwrap_or(0.0))
    }

    #[must_use]
    pub fn raw(&self) -> f64 {
        self.0
    }

    /// Whole percentage for display. Not clamped.
    #[must_use]
    pub fn percent(&self) -> i64 {
        self.scaled().round() as i64
    }

    /// Gauge fill ratio, clamped to `[0, 1]`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        (self.percent() as f64 / 100.0).clamp(0.0, 1.0)
    }

    /// Unrounded percentage, same scaling as [`Progress::percent`].
    fn scaled(&self) -> f64 {
        let p = self.0;
        if !p.is_finite() {
            0.0
        } else if p > 0.0 && p <= 1.0 {
            p * 100.0
        } else {
            p
        }
    }

    /// Only an exact 100% is complete; anything above it is shown as good.
    #[must_use]
    pub fn tier(&self) -> ProgressTier {
        match self.scaled() {
            p if p == 100.0 => ProgressTier::Complete,
            p if p >= 50.0 => ProgressTier::Good,
            _ => ProgressTier::Low,
        }
    }
}

/// Serde adapter for `progress`.
///
/// A list with no tasks reads back as `0 / 0`, which the backend's JSON
/// encoder writes as the string `"NaN"`. Non-finite values, numeric or
/// spelled out, decode as `None` so such a list shows 0%.
mod lenient_progress {
    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawProgress {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match Option::<RawProgress>::deserialize(deserializer)? {
            None => return Ok(None),
            Some(RawProgress::Number(n)) => n,
            Some(RawProgress::Text(text)) => match text.trim() {
                "NaN" | "Infinity" | "-Infinity" => return Ok(None),
                other => other
                    .parse::<f64>()
                    .map_err(|_| de::Error::custom(format!("invalid progress '{}'", other)))?,
            },
        };
        Ok(value.is_finite().then_some(value))
    }
}

/// Open/closed/total counts derived from a list's tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub open: usize,
    pub closed: usize,
    pub total: usize,
}

impl TaskCounts {
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let closed = tasks.iter().filter(|task| task.status.is_closed()).count();
        Self {
            open: tasks.len() - closed,
            closed,
            total: tasks.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_fraction_is_scaled() {
        assert_eq!(Progress::from_raw(Some(0.5)).percent(), 50);
        assert_eq!(Progress::from_raw(Some(1.0)).percent(), 100);
        assert_eq!(Progress::from_raw(Some(0.333)).percent(), 33);
        assert_eq!(Progress::from_raw(Some(0.006)).percent(), 1);
    }

    #[test]
    fn test_progress_percentage_is_kept() {
        assert_eq!(Progress::from_raw(Some(0.0)).percent(), 0);
        assert_eq!(Progress::from_raw(Some(42.4)).percent(), 42);
        assert_eq!(Progress::from_raw(Some(150.0)).percent(), 150);
        assert_eq!(Progress::from_raw(Some(-3.0)).percent(), -3);
        assert_eq!(Progress::from_raw(None).percent(), 0);
    }

    #[test]
    fn test_progress_ratio_is_clamped() {
        assert_eq!(Progress::from_raw(Some(150.0)).ratio(), 1.0);
        assert_eq!(Progress::from_raw(Some(-3.0)).ratio(), 0.0);
        assert_eq!(Progress::from_raw(Some(f64::NAN)).ratio(), 0.0);
        assert_eq!(Progress::from_raw(Some(0.25)).ratio(), 0.25);
    }

    #[test]
    fn test_progress_tiers() {
        assert_eq!(Progress::from_raw(Some(1.0)).tier(), ProgressTier::Complete);
        assert_eq!(Progress::from_raw(Some(0.5)).tier(), ProgressTier::Good);
        assert_eq!(Progress::from_raw(Some(49.0)).tier(), ProgressTier::Low);
        assert_eq!(Progress::from_raw(Some(100.0)).tier(), ProgressTier::Complete);
    }

    #[test]
    fn test_only_exact_hundred_is_complete() {
        // 99.6% rounds to 100 for display but is not done yet
        let almost = Progress::from_raw(Some(0.996));
        assert_eq!(almost.percent(), 100);
        assert_eq!(almost.tier(), ProgressTier::Good);
        assert_eq!(Progress::from_raw(Some(150.0)).tier(), ProgressTier::Good);
        assert_eq!(Progress::from_raw(Some(99.5)).tier(), ProgressTier::Good);
        assert_eq!(Progress::from_raw(Some(-3.0)).tier(), ProgressTier::Low);
    }

    #[test]
    fn test_non_finite_progress_decodes_as_missing() {
        for raw in [r#""NaN""#, r#""Infinity""#, r#""-Infinity""#, "null"] {
            let json = format!(
                r#"{{"id":"6f1c1c9e-52a4-4b55-9c57-3f0d4b0a8e11","title":"Empty","count":0,"progress":{}}}"#,
                raw
            );
            let list: TaskList = serde_json::from_str(&json).unwrap();
            assert_eq!(list.progress, None, "{}", raw);
            assert_eq!(list.progress().percent(), 0);
            assert_eq!(list.progress().tier(), ProgressTier::Low);
        }
    }

    #[test]
    fn test_numeric_progress_still_decodes() {
        let json = r#"{"id":"6f1c1c9e-52a4-4b55-9c57-3f0d4b0a8e11","title":"Half","count":2,"progress":0.5}"#;
        let list: TaskList = serde_json::from_str(json).unwrap();
        assert_eq!(list.progress, Some(0.5));
        assert_eq!(list.progress().percent(), 50);

        let garbage = r#"{"id":"6f1c1c9e-52a4-4b55-9c57-3f0d4b0a8e11","title":"Bad","progress":"lots"}"#;
        assert!(serde_json::from_str::<TaskList>(garbage).is_err());
    }

    #[test]
    fn test_unknown_priority_is_rejected() {
        let json = r#"{"id":"6f1c1c9e-52a4-4b55-9c57-3f0d4b0a8e11","title":"x","priority":"URGENT","status":"OPEN"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_task_list_without_optional_fields() {
        let json = r#"{"id":"6f1c1c9e-52a4-4b55-9c57-3f0d4b0a8e11","title":"Groceries","tasks":null}"#;
        let list: TaskList = serde_json::from_str(json).unwrap();
        assert_eq!(list.task_count(), 0);
        assert_eq!(list.description, None);
        assert_eq!(list.progress().percent(), 0);
    }

    #[test]
    fn test_toggle_keeps_other_fields() {
        let task = Task {
            id: TaskId::new_v4(),
            title: "Milk".to_string(),
            description: Some("2 litres".to_string()),
            due_date: None,
            priority: TaskPriority::Low,
            status: TaskStatus::Open,
        };
        let draft = TaskDraft::toggled(&task);
        assert_eq!(draft.status, TaskStatus::Closed);
        assert_eq!(draft.priority, TaskPriority::Low);
        assert_eq!(draft.title, "Milk");
        assert_eq!(draft.description.as_deref(), Some("2 litres"));
    }
}
