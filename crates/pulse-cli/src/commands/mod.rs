pub mod actions;
pub mod classify;
pub mod config;
pub mod dispatch;
pub mod evaluate;
pub mod feedback;
pub mod insights;
pub mod questions;
pub mod schema;
pub mod settings;
pub mod shared;
