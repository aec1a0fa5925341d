//! Constants used throughout the application
//!
//! This module centralizes user-facing text and other constant values
//! to improve maintainability and consistency.

// App
pub const APP_TITLE: &str = "Taskaz";
pub const CONFIG_FILE_NAME: &str = "taskaz.toml";
pub const CONFIG_DIR_NAME: &str = "taskaz";
pub const LOG_FILE_NAME: &str = "taskaz.log";
pub const API_URL_ENV: &str = "TASKAZ_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

// Success Messages
pub const SUCCESS_TASK_LIST_CREATED: &str = "Task list created successfully!";
pub const SUCCESS_TASK_LIST_UPDATED: &str = "Task list updated successfully!";
pub const SUCCESS_TASK_LIST_DELETED: &str = "Task list deleted successfully!";
pub const SUCCESS_TASK_CREATED: &str = "Task created successfully!";
pub const SUCCESS_TASK_UPDATED: &str = "Task updated successfully!";
pub const SUCCESS_TASK_DELETED: &str = "Task deleted successfully!";

// Error Messages
pub const ERROR_FETCH_TASK_LISTS: &str = "Failed to fetch task lists. Please try again.";
pub const ERROR_FETCH_TASK_LIST: &str = "Failed to fetch data. Please try again.";
pub const ERROR_TASK_LIST_CREATE_FAILED: &str = "Failed to create task list. Please try again.";
pub const ERROR_TASK_LIST_UPDATE_FAILED: &str = "Failed to update task list. Please try again.";
pub const ERROR_TASK_LIST_DELETE_FAILED: &str = "Failed to delete task list. Please try again.";
pub const ERROR_TASK_SAVE_FAILED: &str = "Failed to save task. Please try again.";
pub const ERROR_TASK_DELETE_FAILED: &str = "Failed to delete task. Please try again.";
pub const ERROR_TASK_STATUS_FAILED: &str = "Failed to update task status. Please try again.";

// Inline error banners
pub const BANNER_FETCH_TASK_LISTS: &str = "Failed to fetch task lists.";
pub const BANNER_FETCH_TASK_LIST: &str = "Failed to fetch data.";

// Form validation
pub const ERROR_TITLE_REQUIRED: &str = "Title is required";
pub const ERROR_INVALID_DUE_DATE: &str = "Due date must look like YYYY-MM-DD HH:MM";

// Confirmation prompts
pub const CONFIRM_DELETE_TASK_LIST: &str = "Are you sure you want to delete this task list?";
pub const CONFIRM_DELETE_TASK: &str = "Are you sure you want to delete this task?";

// Empty states
pub const EMPTY_TASK_LISTS_TITLE: &str = "No task lists yet";
pub const EMPTY_TASK_LISTS_HINT: &str = "Create your first task list to get started organizing your tasks!";
pub const EMPTY_TASKS_TITLE: &str = "No tasks yet";
pub const EMPTY_TASKS_HINT: &str = "Press 'n' to add the first task to this list.";
pub const TASK_LIST_NOT_FOUND: &str = "Task list not found";
pub const NO_DESCRIPTION: &str = "No description";

// Page titles
pub const DASHBOARD_TITLE: &str = "My Task Lists";
pub const DASHBOARD_SUBTITLE: &str = "Organize your tasks into lists and track your progress";
pub const OVERALL_PROGRESS: &str = "Overall Progress";
pub const LOADING: &str = "Loading...";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "Help - Press 'Esc' or '?' to close";

// UI Layout Constants
/// Minimum toast lifetime in seconds
pub const TOAST_MIN_SECONDS: u64 = 1;
/// Maximum toast lifetime in seconds
pub const TOAST_MAX_SECONDS: u64 = 60;
/// Default toast lifetime in seconds
pub const TOAST_DEFAULT_SECONDS: u64 = 3;
/// Toasts shown at once; older ones are dropped first
pub const TOAST_MAX_VISIBLE: usize = 4;
/// Height of a task list card in rows
pub const CARD_HEIGHT: u16 = 7;
/// Minimum width of a task list card in columns
pub const CARD_MIN_WIDTH: u16 = 30;
/// Maximum number of card columns on the dashboard
pub const CARD_MAX_COLUMNS: usize = 3;
/// In-memory log lines kept for the log viewer
pub const LOG_BUFFER_CAPACITY: usize = 1000;
