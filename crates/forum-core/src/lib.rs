pub mod api;
pub mod config;
pub mod constants;
pub mod controller;
pub mod models;
pub mod tracing_setup;

#[cfg(test)]
mod testing;

pub use api::{ApiError, CreateOutcome, ForumApi, HttpForumApi};
pub use config::ForumConfig;
pub use controller::{ForumController, ForumEvent, ForumSurface};
