//! Modal dialog layer.
//!
//! At most one dialog is open at a time. While it is, it receives every key
//! before the page does. Form dialogs emit the mutation action for the page
//! to run; confirmation dialogs answer the pending [`ConfirmReply`] directly.

use crate::logger::Logger;
use crate::ui::components::dialogs::{form_dialogs, system_dialogs};
use crate::ui::components::forms::{TaskForm, TaskListForm};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component, TaskManager,
};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

const PAGE_SIZE: usize = 10;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub list_form: TaskListForm,
    pub task_form: TaskForm,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Option<Logger>,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            list_form: TaskListForm::blank(),
            task_form: TaskForm::blank(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger: None,
        }
    }

    /// Source for the log viewer
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn open(&mut self, dialog_type: DialogType) {
        self.clear_dialog();

        match &dialog_type {
            DialogType::TaskListCreation => self.list_form = TaskListForm::blank(),
            DialogType::TaskListEdit { task_list } => self.list_form = TaskListForm::from_task_list(task_list),
            DialogType::TaskCreation { .. } => self.task_form = TaskForm::blank(),
            DialogType::TaskEdit { task, .. } => self.task_form = TaskForm::from_task(task),
            DialogType::Confirm { prompt, .. } => log::debug!("Dialog: confirm '{}'", prompt),
            DialogType::Help | DialogType::Logs => {}
        }

        self.dialog_type = Some(dialog_type);
    }

    /// Close whatever is open. A confirmation closed this way counts as "no".
    pub fn clear_dialog(&mut self) {
        if let Some(DialogType::Confirm { reply, .. }) = self.dialog_type.take() {
            reply.answer(false);
        }
        self.list_form = TaskListForm::blank();
        self.task_form = TaskForm::blank();
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
    }

    fn handle_submit(&mut self) -> Action {
        let action = match &self.dialog_type {
            Some(DialogType::TaskListCreation) => self.list_form.submit().map(Action::CreateTaskList),
            Some(DialogType::TaskListEdit { task_list }) => {
                let id = task_list.id;
                self.list_form.submit().map(|draft| Action::UpdateTaskList { id, draft })
            }
            Some(DialogType::TaskCreation { list_id }) => {
                let list_id = *list_id;
                self.task_form.submit().map(|draft| Action::CreateTask { list_id, draft })
            }
            Some(DialogType::TaskEdit { list_id, task }) => {
                let (list_id, task_id) = (*list_id, task.id);
                self.task_form
                    .submit()
                    .map(|draft| Action::UpdateTask { list_id, task_id, draft })
            }
            _ => None,
        };

        match action {
            Some(action) => {
                self.clear_dialog();
                action
            }
            // Invalid input: stay open with the inline error
            None => Action::None,
        }
    }

    fn answer_confirm(&mut self, confirmed: bool) -> Action {
        if let Some(DialogType::Confirm { reply, prompt }) = self.dialog_type.take() {
            log::info!("Dialog: '{}' answered {}", prompt, if confirmed { "yes" } else { "no" });
            reply.answer(confirmed);
        }
        self.clear_dialog();
        Action::None
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn handle_scroll_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(PAGE_SIZE as isize)),
            KeyCode::PageDown => self.scroll_by(PAGE_SIZE as isize),
            KeyCode::Home => self.scroll_by(isize::MIN),
            // Clamped to the content at render time
            KeyCode::End => self.scroll_by(isize::MAX),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('G') => {
                return Action::HideDialog
            }
            _ => {}
        }
        Action::None
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::Confirm { .. }) => match key.code {
                KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => self.answer_confirm(true),
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => self.answer_confirm(false),
                _ => Action::None,
            },
            Some(DialogType::Help) | Some(DialogType::Logs) => self.handle_scroll_key(key),
            Some(DialogType::TaskListCreation) | Some(DialogType::TaskListEdit { .. }) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.handle_submit(),
                _ => {
                    self.list_form.handle_key(key);
                    Action::None
                }
            },
            Some(DialogType::TaskCreation { .. }) | Some(DialogType::TaskEdit { .. }) => match key.code {
                KeyCode::Esc => Action::HideDialog,
                KeyCode::Enter => self.handle_submit(),
                _ => {
                    self.task_form.handle_key(key);
                    Action::None
                }
            },
        }
    }

    fn update(&mut self, action: Action, _tasks: &mut TaskManager) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.open(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let Some(dialog_type) = &self.dialog_type else {
            return;
        };

        match dialog_type {
            DialogType::TaskListCreation => {
                form_dialogs::render_task_list_form_dialog(f, rect, theme, &self.list_form, "New Task List")
            }
            DialogType::TaskListEdit { .. } => {
                form_dialogs::render_task_list_form_dialog(f, rect, theme, &self.list_form, "Edit Task List")
            }
            DialogType::TaskCreation { .. } => {
                form_dialogs::render_task_form_dialog(f, rect, theme, &self.task_form, "New Task")
            }
            DialogType::TaskEdit { .. } => {
                form_dialogs::render_task_form_dialog(f, rect, theme, &self.task_form, "Edit Task")
            }
            DialogType::Confirm { prompt, .. } => system_dialogs::render_confirm_dialog(f, rect, theme, prompt),
            DialogType::Help => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state)
            }
            DialogType::Logs => system_dialogs::render_logs_dialog(
                f,
                rect,
                self.logger.as_ref(),
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
        }
    }
}
