pub mod api;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod orchestrator;
pub mod ui;
