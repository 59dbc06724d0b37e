use thiserror::Error;

/// Errors that end a CLI run.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Settings file unreadable or malformed
    #[error(transparent)]
    Settings(#[from] arkdata_lib::SettingsError),

    /// HTTP client setup failed
    #[error(transparent)]
    Http(#[from] arkdata_tables::TableError),

    /// Fetching, mapping or storing the data failed
    #[error(transparent)]
    Pipeline(#[from] arkdata_lib::PipelineError),

    /// Image directory could not be prepared
    #[error(transparent)]
    Media(#[from] arkdata_media::MediaError),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
