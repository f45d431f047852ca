//! Git commit visualizer service: fetches recent commits from the GitHub or
//! GitLab public API and renders them as a self-contained SVG.

pub mod classify;
pub mod error;
pub mod fetch;
pub mod models;
pub mod platform;
pub mod render;
pub mod server;
pub mod svg;

pub use error::AppError;
pub use fetch::Fetcher;
pub use server::{app, AppState};
