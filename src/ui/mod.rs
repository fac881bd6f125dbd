//! UI layer
//!
//! Contains components, widgets, symbols, and theme definitions.

pub mod components;
pub mod element;
pub mod symbols;
pub mod theme;
pub mod time;
pub mod widgets;
