//! One task list with its tasks.

use std::sync::Arc;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListState, Paragraph, Wrap},
    Frame,
};

use crate::api::{Api, Task, TaskCounts, TaskDraft, TaskId, TaskList, TaskListDraft, TaskListId};
use crate::constants::{
    BANNER_FETCH_TASK_LIST, CONFIRM_DELETE_TASK, EMPTY_TASKS_HINT, EMPTY_TASKS_TITLE, ERROR_FETCH_TASK_LIST,
    ERROR_TASK_DELETE_FAILED, ERROR_TASK_LIST_UPDATE_FAILED, ERROR_TASK_SAVE_FAILED, ERROR_TASK_STATUS_FAILED, LOADING,
    NO_DESCRIPTION, OVERALL_PROGRESS, SUCCESS_TASK_CREATED, SUCCESS_TASK_DELETED, SUCCESS_TASK_LIST_UPDATED,
    SUCCESS_TASK_UPDATED, TASK_LIST_NOT_FOUND,
};
use crate::ui::components::notice::{render_banner, render_empty_state, render_placeholder};
use crate::ui::components::progress::render_progress;
use crate::ui::components::task_card::task_list_item;
use crate::ui::components::Toast;
use crate::ui::confirm::Confirm;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component, TaskManager,
};
use crate::ui::routes::Route;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Default)]
pub struct TaskListDetailsState {
    /// `None` once loaded means the backend doesn't know the list
    pub task_list: Option<TaskList>,
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
    pub selected: usize,
}

impl TaskListDetailsState {
    pub fn counts(&self) -> TaskCounts {
        TaskCounts::from_tasks(&self.tasks)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected)
    }

    pub fn is_not_found(&self) -> bool {
        self.loaded && self.task_list.is_none()
    }
}

/// `"Task marked as closed!"` / `"Task marked as open!"`
#[must_use]
pub fn status_toast_message(task: &Task) -> String {
    format!("Task marked as {}!", task.status.toggled().label().to_lowercase())
}

pub struct TaskListDetails {
    api: Arc<dyn Api>,
    confirm: Arc<dyn Confirm>,
    list_id: TaskListId,
    pub state: TaskListDetailsState,
    list_state: ListState,
}

impl TaskListDetails {
    pub fn new(api: Arc<dyn Api>, confirm: Arc<dyn Confirm>, list_id: TaskListId) -> Self {
        Self {
            api,
            confirm,
            list_id,
            state: TaskListDetailsState::default(),
            list_state: ListState::default(),
        }
    }

    pub fn list_id(&self) -> TaskListId {
        self.list_id
    }

    pub fn mount(&mut self, tasks: &mut TaskManager) {
        self.fetch(tasks);
    }

    /// List first, then its tasks; a missing list skips the second request.
    fn fetch(&mut self, tasks: &mut TaskManager) {
        self.state.loading = true;
        let api = Arc::clone(&self.api);
        let id = self.list_id;

        tasks.spawn(format!("Fetch task list {}", id), async move {
            let task_list = match api.get_task_list(id).await {
                Ok(task_list) => task_list,
                Err(e) => {
                    log::error!("Task list {}: failed to fetch: {}", id, e);
                    return Action::TaskListFailed {
                        id,
                        error: e.to_string(),
                    };
                }
            };

            if task_list.is_none() {
                log::warn!("Task list {}: not found", id);
                return Action::TaskListLoaded {
                    id,
                    task_list,
                    tasks: Vec::new(),
                };
            }

            match api.list_tasks(id).await {
                Ok(tasks) => Action::TaskListLoaded { id, task_list, tasks },
                Err(e) => {
                    log::error!("Task list {}: failed to fetch tasks: {}", id, e);
                    Action::TaskListFailed {
                        id,
                        error: e.to_string(),
                    }
                }
            }
        });
    }

    fn spawn_mutation<Fut>(&mut self, description: &str, tasks: &mut TaskManager, operation: Fut)
    where
        Fut: std::future::Future<Output = Action> + Send + 'static,
    {
        tasks.spawn(format!("{} ({})", description, self.list_id), operation);
    }

    fn update_task_list(&mut self, draft: TaskListDraft, tasks: &mut TaskManager) {
        let api = Arc::clone(&self.api);
        let id = self.list_id;

        self.spawn_mutation("Update task list", tasks, async move {
            match api.update_task_list(id, &draft).await {
                Ok(_) => Action::MutationSucceeded {
                    message: SUCCESS_TASK_LIST_UPDATED.to_string(),
                    refresh: Route::TaskList(id),
                },
                Err(e) => {
                    log::error!("Task list {}: failed to update: {}", id, e);
                    Action::MutationFailed(ERROR_TASK_LIST_UPDATE_FAILED.to_string())
                }
            }
        });
    }

    fn create_task(&mut self, draft: TaskDraft, tasks: &mut TaskManager) {
        log::info!("Task list {}: creating task '{}'", self.list_id, draft.title);
        let api = Arc::clone(&self.api);
        let id = self.list_id;

        self.spawn_mutation("Create task", tasks, async move {
            match api.create_task(id, &draft).await {
                Ok(_) => Action::MutationSucceeded {
                    message: SUCCESS_TASK_CREATED.to_string(),
                    refresh: Route::TaskList(id),
                },
                Err(e) => {
                    log::error!("Task list {}: failed to create task: {}", id, e);
                    Action::MutationFailed(ERROR_TASK_SAVE_FAILED.to_string())
                }
            }
        });
    }

    fn update_task(&mut self, task_id: TaskId, draft: TaskDraft, tasks: &mut TaskManager) {
        let api = Arc::clone(&self.api);
        let id = self.list_id;

        self.spawn_mutation("Update task", tasks, async move {
            match api.update_task(id, task_id, &draft).await {
                Ok(_) => Action::MutationSucceeded {
                    message: SUCCESS_TASK_UPDATED.to_string(),
                    refresh: Route::TaskList(id),
                },
                Err(e) => {
                    log::error!("Task {}: failed to update: {}", task_id, e);
                    Action::MutationFailed(ERROR_TASK_SAVE_FAILED.to_string())
                }
            }
        });
    }

    fn toggle_task_status(&mut self, task: Task, tasks: &mut TaskManager) {
        let api = Arc::clone(&self.api);
        let id = self.list_id;
        let draft = TaskDraft::toggled(&task);
        let message = status_toast_message(&task);
        log::info!("Task {}: {} -> {}", task.id, task.status.as_str(), draft.status.as_str());

        self.spawn_mutation("Toggle task status", tasks, async move {
            match api.update_task(id, task.id, &draft).await {
                Ok(_) => Action::MutationSucceeded {
                    message,
                    refresh: Route::TaskList(id),
                },
                Err(e) => {
                    log::error!("Task {}: failed to update status: {}", task.id, e);
                    Action::MutationFailed(ERROR_TASK_STATUS_FAILED.to_string())
                }
            }
        });
    }

    fn delete_task(&mut self, task_id: TaskId, tasks: &mut TaskManager) {
        let api = Arc::clone(&self.api);
        let confirm = Arc::clone(&self.confirm);
        let id = self.list_id;

        self.spawn_mutation("Delete task", tasks, async move {
            if !confirm.confirm(CONFIRM_DELETE_TASK).await {
                log::debug!("Task {}: deletion declined", task_id);
                return Action::None;
            }

            match api.delete_task(id, task_id).await {
                Ok(()) => {
                    log::info!("Task {}: deleted", task_id);
                    Action::MutationSucceeded {
                        message: SUCCESS_TASK_DELETED.to_string(),
                        refresh: Route::TaskList(id),
                    }
                }
                Err(e) => {
                    log::error!("Task {}: failed to delete: {}", task_id, e);
                    Action::MutationFailed(ERROR_TASK_DELETE_FAILED.to_string())
                }
            }
        });
    }

    fn is_current(&self, id: TaskListId) -> bool {
        if id != self.list_id {
            log::debug!("Task list {}: discarding result for {}", self.list_id, id);
        }
        id == self.list_id
    }

    fn move_selection(&mut self, delta: isize) {
        let target = self.state.selected as isize + delta;
        if (0..self.state.tasks.len() as isize).contains(&target) {
            self.state.selected = target as usize;
        }
    }

    fn render_summary(&self, f: &mut Frame, area: Rect, task_list: &TaskList, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.palette.border))
            .title(format!(" {} {} ", theme.icons.task_list(), task_list.title))
            .title_style(Style::default().fg(theme.palette.text).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [description_area, stats_area, progress_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .areas(inner);

        let description = task_list
            .description
            .as_deref()
            .filter(|description| !description.trim().is_empty())
            .unwrap_or(NO_DESCRIPTION);
        f.render_widget(
            Paragraph::new(Span::styled(description.to_string(), Style::default().fg(theme.palette.muted)))
                .wrap(Wrap { trim: true }),
            description_area,
        );

        let counts = self.state.counts();
        let stats = Line::from(vec![
            Span::styled(format!("{} Open", counts.open), Style::default().fg(theme.palette.primary)),
            Span::styled(" / ", Style::default().fg(theme.palette.muted)),
            Span::styled(
                format!("{} Completed", counts.closed),
                Style::default().fg(theme.palette.success),
            ),
            Span::styled(" / ", Style::default().fg(theme.palette.muted)),
            Span::styled(format!("{} Total", counts.total), Style::default().fg(theme.palette.text)),
        ]);
        f.render_widget(Paragraph::new(stats), stats_area);

        render_progress(f, progress_area, OVERALL_PROGRESS, task_list.progress(), theme);
    }
}

impl Component for TaskListDetails {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let list_id = self.list_id;

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Esc | KeyCode::Backspace => return Action::Navigate(Route::Dashboard),
            KeyCode::Char('r') => return Action::FetchTaskList(list_id),
            // Everything below needs the list to exist
            _ if self.state.task_list.is_none() => {}
            KeyCode::Char('n') => return Action::ShowDialog(DialogType::TaskCreation { list_id }),
            KeyCode::Char('E') => {
                if let Some(task_list) = &self.state.task_list {
                    return Action::ShowDialog(DialogType::TaskListEdit {
                        task_list: task_list.clone(),
                    });
                }
            }
            KeyCode::Char('e') => {
                if let Some(task) = self.state.selected_task() {
                    return Action::ShowDialog(DialogType::TaskEdit {
                        list_id,
                        task: task.clone(),
                    });
                }
            }
            KeyCode::Char(' ') => {
                if let Some(task) = self.state.selected_task() {
                    return Action::ToggleTaskStatus {
                        list_id,
                        task: task.clone(),
                    };
                }
            }
            KeyCode::Char('d') => {
                if let Some(task) = self.state.selected_task() {
                    return Action::DeleteTask {
                        list_id,
                        task_id: task.id,
                    };
                }
            }
            _ => {}
        }
        Action::None
    }

    fn update(&mut self, action: Action, tasks: &mut TaskManager) -> Action {
        match action {
            Action::FetchTaskList(id) if id == self.list_id => {
                self.fetch(tasks);
                Action::None
            }
            Action::TaskListLoaded { id, task_list, tasks: list_tasks } => {
                if self.is_current(id) {
                    self.state.task_list = task_list;
                    self.state.tasks = list_tasks;
                    self.state.loading = false;
                    self.state.loaded = true;
                    self.state.error = None;
                    self.state.selected = self.state.selected.min(self.state.tasks.len().saturating_sub(1));
                }
                Action::None
            }
            Action::TaskListFailed { id, .. } => {
                if !self.is_current(id) {
                    return Action::None;
                }
                self.state.loading = false;
                self.state.error = Some(BANNER_FETCH_TASK_LIST.to_string());
                Action::Notify(Toast::error(ERROR_FETCH_TASK_LIST))
            }
            Action::UpdateTaskList { id, draft } if id == self.list_id => {
                self.update_task_list(draft, tasks);
                Action::None
            }
            Action::CreateTask { list_id, draft } if list_id == self.list_id => {
                self.create_task(draft, tasks);
                Action::None
            }
            Action::UpdateTask { list_id, task_id, draft } if list_id == self.list_id => {
                self.update_task(task_id, draft, tasks);
                Action::None
            }
            Action::ToggleTaskStatus { list_id, task } if list_id == self.list_id => {
                self.toggle_task_status(task, tasks);
                Action::None
            }
            Action::DeleteTask { list_id, task_id } if list_id == self.list_id => {
                self.delete_task(task_id, tasks);
                Action::None
            }
            Action::MutationSucceeded {
                message,
                refresh: Route::TaskList(id),
            } if id == self.list_id => {
                self.fetch(tasks);
                Action::Notify(Toast::success(message))
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let area = rect.inner(Margin::new(1, 0));

        if self.state.loading && !self.state.loaded {
            render_placeholder(f, area, LOADING, theme);
            return;
        }

        let banner_height = u16::from(self.state.error.is_some());
        let summary_height = if self.state.task_list.is_some() { 6 } else { 0 };
        let [banner_area, summary_area, tasks_area] = Layout::vertical([
            Constraint::Length(banner_height),
            Constraint::Length(summary_height),
            Constraint::Min(0),
        ])
        .areas(area);

        if let Some(error) = &self.state.error {
            render_banner(f, banner_area, error, theme);
        }

        if self.state.is_not_found() {
            render_empty_state(
                f,
                tasks_area,
                TASK_LIST_NOT_FOUND,
                "The task list may have been deleted.",
                "Press Esc to go back",
                theme,
            );
            return;
        }

        let Some(task_list) = &self.state.task_list else {
            return;
        };
        self.render_summary(f, summary_area, task_list, theme);

        if self.state.tasks.is_empty() {
            render_empty_state(
                f,
                tasks_area,
                EMPTY_TASKS_TITLE,
                EMPTY_TASKS_HINT,
                "Press 'n' to create a task",
                theme,
            );
            return;
        }

        let now = Local::now().naive_local();
        let items: Vec<_> = self
            .state
            .tasks
            .iter()
            .map(|task| task_list_item(task, now, theme))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.palette.border))
                    .title(format!(" Tasks ({}) ", self.state.tasks.len())),
            )
            .highlight_style(Style::default().bg(theme.palette.border))
            .highlight_symbol("▶ ");

        self.list_state.select(Some(self.state.selected));
        f.render_stateful_widget(list, tasks_area, &mut self.list_state);
    }
}
