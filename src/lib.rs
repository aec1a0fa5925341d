//! Taskaz - A terminal client for the Taskaz task-list REST API
//!
//! Task lists are shown as a dashboard of progress cards; each list opens
//! into its tasks, which can be created, edited, toggled open/closed and
//! deleted. All data lives in the backend and is re-fetched after every
//! change.
//!
//! # Modules
//!
//! * [`api`] - HTTP client and data model of the REST API
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface: pages, dialogs and the event loop
//! * [`utils`] - Date/time helpers

/// REST API client and data models
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging to the in-app log viewer and an optional file
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;
