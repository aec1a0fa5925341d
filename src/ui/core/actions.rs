use crate::api::{Task, TaskDraft, TaskId, TaskList, TaskListDraft, TaskListId};
use crate::ui::components::toast::Toast;
use crate::ui::confirm::ConfirmReply;
use crate::ui::routes::Route;

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigate(Route),

    // Dashboard
    FetchTaskLists,
    TaskListsLoaded(Vec<TaskList>),
    TaskListsFailed(String),
    CreateTaskList(TaskListDraft),
    DeleteTaskList(TaskListId),

    // Task list details
    FetchTaskList(TaskListId),
    TaskListLoaded {
        id: TaskListId,
        task_list: Option<TaskList>,
        tasks: Vec<Task>,
    },
    TaskListFailed {
        id: TaskListId,
        error: String,
    },
    UpdateTaskList {
        id: TaskListId,
        draft: TaskListDraft,
    },
    CreateTask {
        list_id: TaskListId,
        draft: TaskDraft,
    },
    UpdateTask {
        list_id: TaskListId,
        task_id: TaskId,
        draft: TaskDraft,
    },
    ToggleTaskStatus {
        list_id: TaskListId,
        task: Task,
    },
    DeleteTask {
        list_id: TaskListId,
        task_id: TaskId,
    },

    // Outcomes of background mutations
    MutationSucceeded {
        message: String,
        refresh: Route,
    },
    MutationFailed(String),

    // UI operations
    Notify(Toast),
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    TaskListCreation,
    TaskListEdit { task_list: TaskList },
    TaskCreation { list_id: TaskListId },
    TaskEdit { list_id: TaskListId, task: Task },
    Confirm { prompt: String, reply: ConfirmReply },
    Help,
    Logs,
}
