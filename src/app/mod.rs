//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct, package switching and fetch plumbing
//! - `input`: Key and mouse event handling
//! - `render`: UI rendering

mod input;
mod render;
mod state;

pub use state::App;
