//! Configuration loading for the Labour Payment Engine.
//!
//! The only configurable concern is the report layout: column titles and
//! widths, loaded from a `report.yaml` file.
//!
//! # Example
//!
//! ```no_run
//! use labour_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded report: {}", config.report().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ColumnSpec, ReportConfig, ReportLayout, ReportMetadata};
