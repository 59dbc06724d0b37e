use thiserror::Error;

/// A value that should have been a sequence could not be coerced into one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The value is neither an array nor an object.
    #[error("expected an array or an object, found {0}")]
    NotAnObject(&'static str),

    /// The value is an object, but one of its keys is not a non-negative integer.
    #[error("object key '{0}' is not a non-negative integer")]
    NonNumericKey(String),
}

/// Upstream table failed validation. Always fatal: the run aborts with the
/// offending table, record and field so schema drift can be diagnosed.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("{table}: record '{record}' is missing required field '{field}'")]
    MissingField {
        table: String,
        record: String,
        field: String,
    },

    #[error("{table}: record '{record}' field '{field}' is not {expected}")]
    InvalidField {
        table: String,
        record: String,
        field: String,
        expected: &'static str,
    },

    #[error("{table}: record '{record}' field '{field}' has an unusable shape: {source}")]
    Shape {
        table: String,
        record: String,
        field: String,
        source: ShapeError,
    },

    #[error("{table}: failed to decode validated table: {source}")]
    Decode {
        table: String,
        source: serde_json::Error,
    },
}

impl SchemaError {
    pub fn missing(
        table: impl Into<String>,
        record: impl Into<String>,
        field: impl Into<String>,
    ) -> Self {
        Self::MissingField {
            table: table.into(),
            record: record.into(),
            field: field.into(),
        }
    }

    pub fn invalid(
        table: impl Into<String>,
        record: impl Into<String>,
        field: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidField {
            table: table.into(),
            record: record.into(),
            field: field.into(),
            expected,
        }
    }

    pub fn shape(
        table: impl Into<String>,
        record: impl Into<String>,
        field: impl Into<String>,
        source: ShapeError,
    ) -> Self {
        Self::Shape {
            table: table.into(),
            record: record.into(),
            field: field.into(),
            source,
        }
    }

    pub fn decode(table: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            table: table.into(),
            source,
        }
    }

    /// Name of the field at fault, if the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field, .. }
            | Self::InvalidField { field, .. }
            | Self::Shape { field, .. } => Some(field),
            Self::Decode { .. } => None,
        }
    }

    /// Id of the record at fault, if the error is tied to one.
    pub fn record(&self) -> Option<&str> {
        match self {
            Self::MissingField { record, .. }
            | Self::InvalidField { record, .. }
            | Self::Shape { record, .. } => Some(record),
            Self::Decode { .. } => None,
        }
    }
}

/// A single retrieval failed.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The request never produced a usable response (DNS, TLS, timeout, body read).
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },
}

impl FetchError {
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Transport { url, .. } => url,
        }
    }
}
