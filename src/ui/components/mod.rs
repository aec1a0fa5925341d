//! Reusable UI components

pub mod badge;
pub mod forms;
pub mod header;
pub mod input;
pub mod notice;
pub mod progress;
pub mod status_bar;
pub mod task_card;
pub mod task_list_card;
pub mod toast;

// Component architecture
pub mod dialog_component;
pub mod dialogs;

// Component exports
pub use dialog_component::DialogComponent;
pub use status_bar::StatusBar;
pub use toast::{Toast, ToastHost, ToastKind};
