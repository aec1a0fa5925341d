//! UI module for Taskaz
//!
//! This module handles all user interface components, rendering, and user interactions.

pub mod app;
pub mod components;
pub mod confirm;
pub mod core;
pub mod layout;
pub mod pages;
pub mod renderer;
pub mod routes;
pub mod theme;

pub use app::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
pub use routes::Route;
pub use theme::Theme;
