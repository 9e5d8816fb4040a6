//! Shared library module for the egg timer app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod app;
pub mod config;
pub mod state;
pub mod ticker;
pub mod ui;
pub mod version;
pub mod view_model_builder;

pub use self::{app::EggTimerApp, config::AppConfig};
