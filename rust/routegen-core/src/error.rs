use thiserror::Error;

/// Failure of the upstream catalog during the bulk-read phase.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("catalog unavailable: {message}")]
    Unavailable { message: String },
    #[error("catalog read timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },
}

impl SourceError {
    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable { message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid option {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub fn invalid<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Self::Invalid { field, reason: reason.into() }
    }
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("xml: {0}")]
    Xml(#[from] quick_xml::se::SeError),
}
