//! Utility modules for the Taskaz client.
//!
//! - [`datetime`] - Due-date wire/form formats and human-readable rendering

pub mod datetime;
