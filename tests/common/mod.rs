#![allow(dead_code)]

pub mod backend;

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use taskaz::api::{
    ApiError, ApiResult, Task, TaskApi, TaskDraft, TaskId, TaskList, TaskListApi, TaskListDraft, TaskListId,
    TaskPriority, TaskStatus,
};
use taskaz::config::Config;
use taskaz::logger::Logger;
use taskaz::ui::confirm::Confirm;
use taskaz::ui::AppComponent;

/// Every API call made against [`MockApi`], in order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListTaskLists,
    GetTaskList(TaskListId),
    CreateTaskList(TaskListDraft),
    UpdateTaskList(TaskListId, TaskListDraft),
    DeleteTaskList(TaskListId),
    ListTasks(TaskListId),
    GetTask(TaskListId, TaskId),
    CreateTask(TaskListId, TaskDraft),
    UpdateTask(TaskListId, TaskId, TaskDraft),
    DeleteTask(TaskListId, TaskId),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Call::ListTaskLists | Call::GetTaskList(_) | Call::ListTasks(_) | Call::GetTask(_, _)
        )
    }
}

#[derive(Default)]
struct MockState {
    task_lists: Vec<TaskList>,
    tasks: HashMap<TaskListId, Vec<Task>>,
    calls: Vec<Call>,
    fail: bool,
}

/// In-memory [`TaskListApi`] + [`TaskApi`] that records every call
#[derive(Clone, Default)]
pub struct MockApi {
    state: Arc<Mutex<MockState>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with HTTP 500
    pub fn set_failing(&self, fail: bool) {
        self.state.lock().unwrap().fail = fail;
    }

    pub fn add_task_list(&self, title: &str) -> TaskList {
        let task_list = TaskList {
            id: TaskListId::new_v4(),
            title: title.to_string(),
            description: None,
            count: Some(0),
            progress: None,
        };
        let mut state = self.state.lock().unwrap();
        state.task_lists.push(task_list.clone());
        state.tasks.insert(task_list.id, Vec::new());
        task_list
    }

    pub fn add_task(&self, list_id: TaskListId, title: &str, priority: TaskPriority, status: TaskStatus) -> Task {
        let task = Task {
            id: TaskId::new_v4(),
            title: title.to_string(),
            description: None,
            due_date: None,
            priority,
            status,
        };
        self.state
            .lock()
            .unwrap()
            .tasks
            .entry(list_id)
            .or_default()
            .push(task.clone());
        task
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| predicate(call)).count()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn tasks_of(&self, list_id: TaskListId) -> Vec<Task> {
        self.state.lock().unwrap().tasks.get(&list_id).cloned().unwrap_or_default()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if state.fail {
            return Err(ApiError::Status {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(())
    }

    fn with_counts(state: &MockState, task_list: &TaskList) -> TaskList {
        let tasks = state.tasks.get(&task_list.id).map(Vec::as_slice).unwrap_or_default();
        let closed = tasks.iter().filter(|task| task.status.is_closed()).count();
        TaskList {
            count: Some(tasks.len() as u32),
            progress: (!tasks.is_empty()).then(|| closed as f64 / tasks.len() as f64),
            ..task_list.clone()
        }
    }
}

#[async_trait]
impl TaskListApi for MockApi {
    async fn list_task_lists(&self) -> ApiResult<Vec<TaskList>> {
        self.record(Call::ListTaskLists)?;
        let state = self.state.lock().unwrap();
        Ok(state
            .task_lists
            .iter()
            .map(|task_list| Self::with_counts(&state, task_list))
            .collect())
    }

    async fn get_task_list(&self, id: TaskListId) -> ApiResult<Option<TaskList>> {
        self.record(Call::GetTaskList(id))?;
        let state = self.state.lock().unwrap();
        Ok(state
            .task_lists
            .iter()
            .find(|task_list| task_list.id == id)
            .map(|task_list| Self::with_counts(&state, task_list)))
    }

    async fn create_task_list(&self, draft: &TaskListDraft) -> ApiResult<TaskList> {
        self.record(Call::CreateTaskList(draft.clone()))?;
        let task_list = TaskList {
            id: TaskListId::new_v4(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            count: Some(0),
            progress: None,
        };
        let mut state = self.state.lock().unwrap();
        state.task_lists.push(task_list.clone());
        state.tasks.insert(task_list.id, Vec::new());
        Ok(task_list)
    }

    async fn update_task_list(&self, id: TaskListId, draft: &TaskListDraft) -> ApiResult<TaskList> {
        self.record(Call::UpdateTaskList(id, draft.clone()))?;
        let mut state = self.state.lock().unwrap();
        let task_list = state
            .task_lists
            .iter_mut()
            .find(|task_list| task_list.id == id)
            .ok_or_else(|| ApiError::Status {
                status: 400,
                message: "Task list not found".to_string(),
            })?;
        task_list.title = draft.title.clone();
        task_list.description = draft.description.clone();
        Ok(task_list.clone())
    }

    async fn delete_task_list(&self, id: TaskListId) -> ApiResult<()> {
        self.record(Call::DeleteTaskList(id))?;
        let mut state = self.state.lock().unwrap();
        state.task_lists.retain(|task_list| task_list.id != id);
        state.tasks.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl TaskApi for MockApi {
    async fn list_tasks(&self, list_id: TaskListId) -> ApiResult<Vec<Task>> {
        self.record(Call::ListTasks(list_id))?;
        Ok(self.tasks_of(list_id))
    }

    async fn get_task(&self, list_id: TaskListId, id: TaskId) -> ApiResult<Option<Task>> {
        self.record(Call::GetTask(list_id, id))?;
        Ok(self.tasks_of(list_id).into_iter().find(|task| task.id == id))
    }

    async fn create_task(&self, list_id: TaskListId, draft: &TaskDraft) -> ApiResult<Task> {
        self.record(Call::CreateTask(list_id, draft.clone()))?;
        let task = Task {
            id: TaskId::new_v4(),
            title: draft.title.clone(),
            description: draft.description.clone(),
            due_date: draft.due_date,
            priority: draft.priority,
            status: draft.status,
        };
        self.state
            .lock()
            .unwrap()
            .tasks
            .entry(list_id)
            .or_default()
            .push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, list_id: TaskListId, id: TaskId, draft: &TaskDraft) -> ApiResult<Task> {
        self.record(Call::UpdateTask(list_id, id, draft.clone()))?;
        let mut state = self.state.lock().unwrap();
        let task = state
            .tasks
            .get_mut(&list_id)
            .and_then(|tasks| tasks.iter_mut().find(|task| task.id == id))
            .ok_or_else(|| ApiError::Status {
                status: 400,
                message: "Task not found".to_string(),
            })?;
        task.title = draft.title.clone();
        task.description = draft.description.clone();
        task.due_date = draft.due_date;
        task.priority = draft.priority;
        task.status = draft.status;
        Ok(task.clone())
    }

    async fn delete_task(&self, list_id: TaskListId, id: TaskId) -> ApiResult<()> {
        self.record(Call::DeleteTask(list_id, id))?;
        if let Some(tasks) = self.state.lock().unwrap().tasks.get_mut(&list_id) {
            tasks.retain(|task| task.id != id);
        }
        Ok(())
    }
}

/// Confirmation that answers from a script; an exhausted script says "no"
#[derive(Default)]
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answers: &[bool]) -> Arc<Self> {
        Arc::new(Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Confirm for ScriptedConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// App wired to `api` and `confirm`, with default config and a fresh logger
pub fn app_with(api: &MockApi, confirm: Arc<dyn Confirm>) -> AppComponent {
    AppComponent::with_confirm(Arc::new(api.clone()), confirm, &Config::default(), Logger::new())
}

/// Feed a key through the app exactly like the event loop does
pub fn press(app: &mut AppComponent, key: KeyEvent) {
    let action = app.handle_key(key);
    app.handle_action(action);
}

pub fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, char_key(c));
    }
}

/// Let background requests finish and process their results until idle
pub async fn settle(app: &mut AppComponent) {
    for _ in 0..400 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        app.process_background_actions();
        if !app.is_busy() && app.process_background_actions() == 0 && !app.is_busy() {
            return;
        }
    }
    panic!("background work did not settle");
}
