//! Task-list operations (`/task-lists`).

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::models::{TaskList, TaskListDraft, TaskListId};
use super::{ApiResult, HttpClient};

/// Operations on task lists.
#[async_trait]
pub trait TaskListApi: Send + Sync {
    async fn list_task_lists(&self) -> ApiResult<Vec<TaskList>>;

    /// `None` when the backend knows no list with this id.
    async fn get_task_list(&self, id: TaskListId) -> ApiResult<Option<TaskList>>;

    async fn create_task_list(&self, draft: &TaskListDraft) -> ApiResult<TaskList>;

    /// Full replace of title and description.
    async fn update_task_list(&self, id: TaskListId, draft: &TaskListDraft) -> ApiResult<TaskList>;

    async fn delete_task_list(&self, id: TaskListId) -> ApiResult<()>;
}

/// Request body. `id` must be absent on create and equal to the path id on
/// update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskListBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<TaskListId>,
    title: &'a str,
    description: Option<&'a str>,
}

impl<'a> TaskListBody<'a> {
    fn new(id: Option<TaskListId>, draft: &'a TaskListDraft) -> Self {
        Self {
            id,
            title: &draft.title,
            description: draft.description.as_deref(),
        }
    }
}

const TASK_LISTS_PATH: &str = "/task-lists";

pub(crate) fn task_list_path(id: TaskListId) -> String {
    format!("{}/{}", TASK_LISTS_PATH, id)
}

#[async_trait]
impl TaskListApi for HttpClient {
    async fn list_task_lists(&self) -> ApiResult<Vec<TaskList>> {
        self.get(TASK_LISTS_PATH).await
    }

    async fn get_task_list(&self, id: TaskListId) -> ApiResult<Option<TaskList>> {
        self.get_optional(&task_list_path(id)).await
    }

    async fn create_task_list(&self, draft: &TaskListDraft) -> ApiResult<TaskList> {
        self.send(Method::POST, TASK_LISTS_PATH, &TaskListBody::new(None, draft))
            .await
    }

    async fn update_task_list(&self, id: TaskListId, draft: &TaskListDraft) -> ApiResult<TaskList> {
        self.send(Method::PUT, &task_list_path(id), &TaskListBody::new(Some(id), draft))
            .await
    }

    async fn delete_task_list(&self, id: TaskListId) -> ApiResult<()> {
        self.delete(&task_list_path(id)).await
    }
}
