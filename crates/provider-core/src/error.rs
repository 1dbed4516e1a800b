use thiserror::Error;

use crate::diagnostics::Diagnostic;

/// Errors surfaced to the plugin host.
#[derive(Error, Debug)]
pub enum ProviderError {
    // ── Configuration ──────────────────────────────────────────
    #[error("{0}")]
    Config(String),

    #[error("{}", summarize(.0))]
    Validation(Vec<Diagnostic>),

    #[error("\"{key}\": {message}")]
    InvalidValue { key: String, message: String },

    #[error("\"{0}\": unknown field")]
    UnknownField(String),

    // ── Schema / registry ──────────────────────────────────────
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("unknown resource type: {0}")]
    UnknownResource(String),

    #[error("unknown data source: {0}")]
    UnknownDataSource(String),

    #[error("{0} does not support read")]
    ReadNotSupported(String),

    #[error("provider is not configured")]
    NotConfigured,

    // ── Downstream client ──────────────────────────────────────
    #[error(transparent)]
    Client(Box<dyn std::error::Error + Send + Sync>),
}

impl ProviderError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Wrap an error produced by the API client library.
    pub fn client(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Client(Box::new(e))
    }
}

fn summarize(diags: &[Diagnostic]) -> String {
    diags
        .iter()
        .filter(|d| d.is_error())
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type ProviderResult<T> = Result<T, ProviderError>;
