//! Field state of the task-list and task modals.
//!
//! A form is either blank (create) or pre-filled from an existing entity
//! (edit). Submission trims title and description, turns an empty description
//! into `None`, and is refused while the title is blank.

use crate::api::{Task, TaskDraft, TaskList, TaskListDraft, TaskPriority, TaskStatus};
use crate::constants::{ERROR_INVALID_DUE_DATE, ERROR_TITLE_REQUIRED};
use crate::ui::components::input::TextInput;
use crate::utils::datetime::{format_form_input, parse_form_input};
use crossterm::event::{KeyCode, KeyEvent};

fn trimmed_title(input: &TextInput) -> Option<String> {
    let title = input.value().trim();
    (!title.is_empty()).then(|| title.to_string())
}

fn trimmed_description(input: &TextInput) -> Option<String> {
    let description = input.value().trim();
    (!description.is_empty()).then(|| description.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskListField {
    #[default]
    Title,
    Description,
}

/// Title and description of a task list.
#[derive(Debug, Clone, Default)]
pub struct TaskListForm {
    pub title: TextInput,
    pub description: TextInput,
    pub focus: TaskListField,
    pub error: Option<String>,
}

impl TaskListForm {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn from_task_list(task_list: &TaskList) -> Self {
        Self {
            title: TextInput::with_value(task_list.title.clone()),
            description: TextInput::with_value(task_list.description.clone().unwrap_or_default()),
            ..Self::default()
        }
    }

    pub fn can_submit(&self) -> bool {
        trimmed_title(&self.title).is_some()
    }

    /// The draft to send, or `None` (with an inline error) while the title is blank
    pub fn submit(&mut self) -> Option<TaskListDraft> {
        let Some(title) = trimmed_title(&self.title) else {
            self.error = Some(ERROR_TITLE_REQUIRED.to_string());
            return None;
        };

        self.error = None;
        Some(TaskListDraft {
            title,
            description: trimmed_description(&self.description),
        })
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            TaskListField::Title => TaskListField::Description,
            TaskListField::Description => TaskListField::Title,
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => self.focus_next(),
            _ => {
                let input = match self.focus {
                    TaskListField::Title => &mut self.title,
                    TaskListField::Description => &mut self.description,
                };
                if input.handle_key(key) {
                    self.error = None;
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskField {
    #[default]
    Title,
    Description,
    DueDate,
    Priority,
    Status,
}

impl TaskField {
    const ORDER: [TaskField; 5] = [
        TaskField::Title,
        TaskField::Description,
        TaskField::DueDate,
        TaskField::Priority,
        TaskField::Status,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|field| *field == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Title, description, due date, priority and status of a task.
#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub title: TextInput,
    pub description: TextInput,
    pub due_date: TextInput,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub focus: TaskField,
    pub error: Option<String>,
}

impl TaskForm {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Form pre-filled from `task`; the due date is shown to the minute.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: TextInput::with_value(task.title.clone()),
            description: TextInput::with_value(task.description.clone().unwrap_or_default()),
            due_date: TextInput::with_value(task.due_date.map(format_form_input).unwrap_or_default()),
            priority: task.priority,
            status: task.status,
            ..Self::default()
        }
    }

    pub fn can_submit(&self) -> bool {
        trimmed_title(&self.title).is_some()
    }

    /// The draft to send, or `None` with an inline error when the title is
    /// blank or the due date doesn't parse
    pub fn submit(&mut self) -> Option<TaskDraft> {
        let Some(title) = trimmed_title(&self.title) else {
            self.error = Some(ERROR_TITLE_REQUIRED.to_string());
            self.focus = TaskField::Title;
            return None;
        };

        let due_date = match parse_form_input(self.due_date.value()) {
            Ok(due_date) => due_date,
            Err(e) => {
                log::debug!("Task form: rejected due date '{}': {}", self.due_date.value(), e);
                self.error = Some(ERROR_INVALID_DUE_DATE.to_string());
                self.focus = TaskField::DueDate;
                return None;
            }
        };

        self.error = None;
        Some(TaskDraft {
            title,
            description: trimmed_description(&self.description),
            due_date,
            priority: self.priority,
            status: self.status,
        })
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if matches!(self.focus, TaskField::Priority | TaskField::Status) =>
            {
                let forward = !matches!(key.code, KeyCode::Left);
                match self.focus {
                    TaskField::Priority => {
                        self.priority = if forward {
                            self.priority.next()
                        } else {
                            self.priority.previous()
                        };
                    }
                    _ => self.status = self.status.toggled(),
                }
            }
            _ => {
                let input = match self.focus {
                    TaskField::Title => &mut self.title,
                    TaskField::Description => &mut self.description,
                    TaskField::DueDate => &mut self.due_date,
                    TaskField::Priority | TaskField::Status => return,
                };
                if input.handle_key(key) {
                    self.error = None;
                }
            }
        }
    }
}
