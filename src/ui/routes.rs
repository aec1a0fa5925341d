//! Navigation routes: `/` (dashboard) and `/task-lists/{id}` (list details).

use crate::api::TaskListId;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    TaskList(TaskListId),
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("unknown route '{0}'")]
    Unknown(String),

    #[error("invalid task list id '{id}': {source}")]
    InvalidId {
        id: String,
        #[source]
        source: uuid::Error,
    },
}

const TASK_LISTS_SEGMENT: &str = "task-lists";

impl Route {
    /// Parse a path such as `/` or `/task-lists/{uuid}`. A trailing slash is
    /// ignored.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed.split('/').filter(|segment| !segment.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::Dashboard),
            [TASK_LISTS_SEGMENT, id] => id
                .parse::<TaskListId>()
                .map(Route::TaskList)
                .map_err(|source| RouteError::InvalidId {
                    id: (*id).to_string(),
                    source,
                }),
            _ => Err(RouteError::Unknown(trimmed.to_string())),
        }
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::TaskList(id) => format!("/{}/{}", TASK_LISTS_SEGMENT, id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
