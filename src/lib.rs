//! pkglog - terminal changelog viewer
//!
//! Shows a package summary and, on request, its changelog in a modal.
//!
//! This library provides:
//! - [`api`]: Changelog API abstraction and background fetching
//! - [`app`]: Application state and logic
//! - [`config`]: Command line configuration
//! - [`keys`]: Key binding definitions
//! - [`logging`]: File logging setup
//! - [`model`]: Domain models
//! - [`router`]: URL state and injected history
//! - [`ui`]: User interface components

pub mod api;
pub mod app;
pub mod config;
pub mod keys;
pub mod logging;
pub mod model;
pub mod router;
pub mod ui;
