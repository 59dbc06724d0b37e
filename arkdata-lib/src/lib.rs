//! Record mapping and the pipeline driver.
//!
//! Ties the table fetchers to the public schema: fetch the upstream
//! fingerprint, reuse the stored document when it still matches, otherwise
//! fetch every table, map the merged records and store the result.

pub mod error;
pub mod mapper;
pub mod pipeline;
pub mod settings;

pub use error::{MapError, PipelineError, SettingsError};
pub use pipeline::{PipelineRun, build_document, load_or_build};
pub use settings::Settings;
