//! Page containers. Each owns its data, fetches it through the [`Api`]
//! trait and handles the actions of its route.
//!
//! [`Api`]: crate::api::Api

pub mod dashboard;
pub mod task_list_details;

pub use dashboard::{Dashboard, DashboardState};
pub use task_list_details::{TaskListDetails, TaskListDetailsState};
