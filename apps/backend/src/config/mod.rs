//! Configuration loaded from the process environment.

pub mod app;

pub use app::AppConfig;
