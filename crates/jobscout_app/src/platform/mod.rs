mod app;
mod effects;
mod logging;
mod session;
mod ui;

pub use app::run_app;
