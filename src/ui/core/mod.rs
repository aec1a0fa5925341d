//! Core UI functionality for the Taskaz client.
//!
//! This module contains the fundamental building blocks for the user interface:
//!
//! - [`actions`] - Messages exchanged between components, background tasks and the app shell
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background execution of API calls
//!
//! Key events become [`Action`]s, which flow through the dialog, the active
//! page and finally the app shell. API calls never run on the UI loop: pages
//! spawn them on the [`TaskManager`], and their outcomes come back as actions
//! on the next tick.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{BackgroundTaskId, TaskManager};
