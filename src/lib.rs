//! Core entry point for the salary_slip crate.

pub mod canvas;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod record;
pub mod slip;

pub use error::RenderError;
pub use record::{FieldValue, Record};
pub use slip::{download_filename, render};
