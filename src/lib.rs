pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod model;
pub mod rank;
pub mod records;
pub mod ui;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::QuizApp;
