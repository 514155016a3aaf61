//! Application module
//!
//! This module contains the form state, its reducer, the controller running
//! effects, and the fixed configuration.

pub mod config;
mod controller;
mod state;

pub use config::{Action, AppConfig, ShortcutConfig, APP_ID};
pub use controller::{task_outcome, Controller};
pub use state::{FormState, Tone};
