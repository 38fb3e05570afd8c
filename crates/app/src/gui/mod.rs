//! Interactive window: sliders, live plot, cue overlay and snapshot key.

mod app;
mod controls;
mod engine;

pub use app::run_gui;
