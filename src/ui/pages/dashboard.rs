//! Dashboard: every task list as a card grid.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::api::{Api, TaskList, TaskListDraft, TaskListId};
use crate::constants::{
    BANNER_FETCH_TASK_LISTS, CONFIRM_DELETE_TASK_LIST, DASHBOARD_SUBTITLE, DASHBOARD_TITLE, EMPTY_TASK_LISTS_HINT,
    EMPTY_TASK_LISTS_TITLE, ERROR_FETCH_TASK_LISTS, ERROR_TASK_LIST_CREATE_FAILED, ERROR_TASK_LIST_DELETE_FAILED,
    LOADING, SUCCESS_TASK_LIST_CREATED, SUCCESS_TASK_LIST_DELETED,
};
use crate::ui::components::notice::{render_banner, render_empty_state, render_placeholder};
use crate::ui::components::task_list_card::render_task_list_card;
use crate::ui::components::Toast;
use crate::ui::confirm::Confirm;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component, TaskManager,
};
use crate::ui::layout::LayoutManager;
use crate::ui::routes::Route;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub task_lists: Vec<TaskList>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected: usize,
}

impl DashboardState {
    pub fn selected_task_list(&self) -> Option<&TaskList> {
        self.task_lists.get(self.selected)
    }
}

pub struct Dashboard {
    api: Arc<dyn Api>,
    confirm: Arc<dyn Confirm>,
    pub state: DashboardState,
    columns: usize,
    first_row: usize,
}

impl Dashboard {
    pub fn new(api: Arc<dyn Api>, confirm: Arc<dyn Confirm>) -> Self {
        Self {
            api,
            confirm,
            state: DashboardState::default(),
            columns: 1,
            first_row: 0,
        }
    }

    pub fn mount(&mut self, tasks: &mut TaskManager) {
        self.fetch(tasks);
    }

    fn fetch(&mut self, tasks: &mut TaskManager) {
        self.state.loading = true;
        let api = Arc::clone(&self.api);

        tasks.spawn("Fetch task lists", async move {
            match api.list_task_lists().await {
                Ok(task_lists) => Action::TaskListsLoaded(task_lists),
                Err(e) => {
                    log::error!("Dashboard: failed to fetch task lists: {}", e);
                    Action::TaskListsFailed(e.to_string())
                }
            }
        });
    }

    fn create_task_list(&mut self, draft: TaskListDraft, tasks: &mut TaskManager) {
        log::info!("Dashboard: creating task list '{}'", draft.title);
        let api = Arc::clone(&self.api);

        tasks.spawn("Create task list", async move {
            match api.create_task_list(&draft).await {
                Ok(task_list) => {
                    log::info!("Dashboard: created task list {}", task_list.id);
                    Action::MutationSucceeded {
                        message: SUCCESS_TASK_LIST_CREATED.to_string(),
                        refresh: Route::Dashboard,
                    }
                }
                Err(e) => {
                    log::error!("Dashboard: failed to create task list: {}", e);
                    Action::MutationFailed(ERROR_TASK_LIST_CREATE_FAILED.to_string())
                }
            }
        });
    }

    fn delete_task_list(&mut self, id: TaskListId, tasks: &mut TaskManager) {
        let api = Arc::clone(&self.api);
        let confirm = Arc::clone(&self.confirm);

        tasks.spawn("Delete task list", async move {
            if !confirm.confirm(CONFIRM_DELETE_TASK_LIST).await {
                log::debug!("Dashboard: deletion of task list {} declined", id);
                return Action::None;
            }

            match api.delete_task_list(id).await {
                Ok(()) => {
                    log::info!("Dashboard: deleted task list {}", id);
                    Action::MutationSucceeded {
                        message: SUCCESS_TASK_LIST_DELETED.to_string(),
                        refresh: Route::Dashboard,
                    }
                }
                Err(e) => {
                    log::error!("Dashboard: failed to delete task list {}: {}", id, e);
                    Action::MutationFailed(ERROR_TASK_LIST_DELETE_FAILED.to_string())
                }
            }
        });
    }

    fn move_selection(&mut self, delta: isize) {
        let target = self.state.selected as isize + delta;
        // Moves past either end are ignored
        if (0..self.state.task_lists.len() as isize).contains(&target) {
            self.state.selected = target as usize;
        }
    }

    fn clamp_selection(&mut self) {
        self.state.selected = self.state.selected.min(self.state.task_lists.len().saturating_sub(1));
    }

    fn scroll_to_selection(&mut self, visible_rows: usize) {
        let selected_row = self.state.selected / self.columns;
        if selected_row < self.first_row {
            self.first_row = selected_row;
        } else if selected_row >= self.first_row + visible_rows {
            self.first_row = selected_row + 1 - visible_rows;
        }
    }

    fn render_title(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = vec![
            Line::from(Span::styled(
                DASHBOARD_TITLE,
                Style::default().fg(theme.palette.text).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(DASHBOARD_SUBTITLE, Style::default().fg(theme.palette.muted))),
        ];
        f.render_widget(Paragraph::new(title), area);
    }
}

impl Component for Dashboard {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let columns = self.columns.max(1) as isize;

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-columns),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(columns),
            KeyCode::Enter => {
                if let Some(task_list) = self.state.selected_task_list() {
                    return Action::Navigate(Route::TaskList(task_list.id));
                }
            }
            KeyCode::Char('n') => return Action::ShowDialog(DialogType::TaskListCreation),
            KeyCode::Char('d') => {
                if let Some(task_list) = self.state.selected_task_list() {
                    return Action::DeleteTaskList(task_list.id);
                }
            }
            KeyCode::Char('r') => return Action::FetchTaskLists,
            _ => {}
        }
        Action::None
    }

    fn update(&mut self, action: Action, tasks: &mut TaskManager) -> Action {
        match action {
            Action::FetchTaskLists => {
                self.fetch(tasks);
                Action::None
            }
            Action::TaskListsLoaded(task_lists) => {
                log::debug!("Dashboard: loaded {} task lists", task_lists.len());
                self.state.task_lists = task_lists;
                self.state.loading = false;
                self.state.error = None;
                self.clamp_selection();
                Action::None
            }
            Action::TaskListsFailed(_) => {
                self.state.loading = false;
                self.state.error = Some(BANNER_FETCH_TASK_LISTS.to_string());
                Action::Notify(Toast::error(ERROR_FETCH_TASK_LISTS))
            }
            Action::CreateTaskList(draft) => {
                self.create_task_list(draft, tasks);
                Action::None
            }
            Action::DeleteTaskList(id) => {
                self.delete_task_list(id, tasks);
                Action::None
            }
            Action::MutationSucceeded {
                message,
                refresh: Route::Dashboard,
            } => {
                self.fetch(tasks);
                Action::Notify(Toast::success(message))
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let banner_height = u16::from(self.state.error.is_some());
        let [title_area, banner_area, _, content_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(banner_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(rect.inner(Margin::new(1, 0)));

        self.render_title(f, title_area, theme);
        if let Some(error) = &self.state.error {
            render_banner(f, banner_area, error, theme);
        }

        if self.state.loading && self.state.task_lists.is_empty() {
            render_placeholder(f, content_area, LOADING, theme);
            return;
        }

        if self.state.task_lists.is_empty() {
            if self.state.error.is_none() {
                render_empty_state(
                    f,
                    content_area,
                    EMPTY_TASK_LISTS_TITLE,
                    EMPTY_TASK_LISTS_HINT,
                    "Press 'n' to create a task list",
                    theme,
                );
            }
            return;
        }

        self.columns = LayoutManager::grid_columns(content_area.width);
        self.scroll_to_selection(LayoutManager::grid_rows(content_area.height));

        let cells = LayoutManager::card_grid(content_area, self.columns, self.state.task_lists.len(), self.first_row);
        let first = self.first_row * self.columns;
        for (offset, cell) in cells.into_iter().enumerate() {
            let index = first + offset;
            if let Some(task_list) = self.state.task_lists.get(index) {
                render_task_list_card(f, cell, task_list, index == self.state.selected, theme);
            }
        }
    }
}
