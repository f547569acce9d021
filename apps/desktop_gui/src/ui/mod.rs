//! UI layer for the course manager: app shell, form, list, and theme.

pub mod app;
pub mod theme;

pub use app::{CourseManagerApp, StartupConfig};
