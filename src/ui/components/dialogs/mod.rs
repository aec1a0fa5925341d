//! Rendering helpers for the modal dialogs owned by
//! [`DialogComponent`](crate::ui::components::DialogComponent).

pub mod common;
pub mod form_dialogs;
pub mod system_dialogs;
