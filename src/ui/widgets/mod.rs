//! Reusable UI widgets

mod package_header;
mod status_bar;

pub use package_header::{build_package_lines, render_package_header};
pub use status_bar::{build_status_bar, render_status_bar};
