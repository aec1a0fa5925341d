//! Client for the Taskaz REST API.
//!
//! The backend exposes task lists at `/task-lists` and their tasks at
//! `/task-lists/{listId}/tasks`. Page containers only see the [`TaskListApi`]
//! and [`TaskApi`] traits (combined as [`Api`]); [`HttpClient`] is the real
//! implementation and tests substitute in-memory fakes.

pub mod client;
pub mod models;
pub mod task_lists;
pub mod tasks;

pub use client::HttpClient;
pub use models::{
    Progress, ProgressTier, Task, TaskCounts, TaskDraft, TaskId, TaskList, TaskListDraft, TaskListId, TaskPriority,
    TaskStatus,
};
pub use task_lists::TaskListApi;
pub use tasks::TaskApi;

/// Errors returned by API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Everything a page container needs from the backend.
pub trait Api: TaskListApi + TaskApi {}

impl<T: TaskListApi + TaskApi + ?Sized> Api for T {}
