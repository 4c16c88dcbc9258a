//! Terminal front end: configuration, logging, the interactive screen and
//! the headless runner, all driving the same preview state machine.
mod app;
pub mod config;
mod effects;
mod headless;
mod input;
pub mod logging;
mod session;
mod ui;

pub use app::run_app;
pub use headless::run_headless;
