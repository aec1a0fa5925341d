//! Task operations, always scoped under a task list
//! (`/task-lists/{listId}/tasks`).

use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Method;
use serde::Serialize;

use super::models::{Task, TaskDraft, TaskId, TaskListId, TaskPriority, TaskStatus};
use super::task_lists::task_list_path;
use super::{ApiResult, HttpClient};
use crate::utils::datetime::wire_datetime;

/// Operations on the tasks of one task list.
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list_tasks(&self, list_id: TaskListId) -> ApiResult<Vec<Task>>;

    /// `None` when the backend knows no such task in this list.
    async fn get_task(&self, list_id: TaskListId, id: TaskId) -> ApiResult<Option<Task>>;

    async fn create_task(&self, list_id: TaskListId, draft: &TaskDraft) -> ApiResult<Task>;

    /// Full replace, including status, priority and due date.
    async fn update_task(&self, list_id: TaskListId, id: TaskId, draft: &TaskDraft) -> ApiResult<Task>;

    async fn delete_task(&self, list_id: TaskListId, id: TaskId) -> ApiResult<()>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<TaskId>,
    title: &'a str,
    description: Option<&'a str>,
    #[serde(with = "wire_datetime")]
    due_date: Option<NaiveDateTime>,
    priority: TaskPriority,
    status: TaskStatus,
}

impl<'a> TaskBody<'a> {
    fn new(id: Option<TaskId>, draft: &'a TaskDraft) -> Self {
        Self {
            id,
            title: &draft.title,
            description: draft.description.as_deref(),
            due_date: draft.due_date,
            priority: draft.priority,
            status: draft.status,
        }
    }
}

fn tasks_path(list_id: TaskListId) -> String {
    format!("{}/tasks", task_list_path(list_id))
}

fn task_path(list_id: TaskListId, id: TaskId) -> String {
    format!("{}/{}", tasks_path(list_id), id)
}

#[async_trait]
impl TaskApi for HttpClient {
    async fn list_tasks(&self, list_id: TaskListId) -> ApiResult<Vec<Task>> {
        self.get(&tasks_path(list_id)).await
    }

    async fn get_task(&self, list_id: TaskListId, id: TaskId) -> ApiResult<Option<Task>> {
        self.get_optional(&task_path(list_id, id)).await
    }

    async fn create_task(&self, list_id: TaskListId, draft: &TaskDraft) -> ApiResult<Task> {
        self.send(Method::POST, &tasks_path(list_id), &TaskBody::new(None, draft))
            .await
    }

    async fn update_task(&self, list_id: TaskListId, id: TaskId, draft: &TaskDraft) -> ApiResult<Task> {
        self.send(Method::PUT, &task_path(list_id, id), &TaskBody::new(Some(id), draft))
            .await
    }

    async fn delete_task(&self, list_id: TaskListId, id: TaskId) -> ApiResult<()> {
        self.delete(&task_path(list_id, id)).await
    }
}
