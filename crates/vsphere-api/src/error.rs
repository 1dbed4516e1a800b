//! Error types for the vSphere API client.

use std::fmt;

/// Categorised error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VmwareErrorKind {
    /// vSphere REST API unreachable or session missing
    ConnectionError,
    /// Authentication failed (401)
    AuthenticationError,
    /// Resource not found (404)
    NotFound,
    /// Server address could not be turned into an endpoint URL
    InvalidEndpoint,
    /// HTTP / API error with status code
    ApiError(u16),
    /// Timeout
    Timeout,
    /// Permission denied (403)
    AccessDenied,
    /// JSON parse / deserialization error
    ParseError,
    /// Debug trace directory or file could not be written
    TraceError,
    /// Generic
    Other,
}

/// Crate error type carrying a kind + human-readable message.
#[derive(Debug, Clone)]
pub struct VmwareError {
    pub kind: VmwareErrorKind,
    pub message: String,
}

impl VmwareError {
    pub fn new(kind: VmwareErrorKind, msg: impl Into<String>) -> Self {
        Self { kind, message: msg.into() }
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::new(VmwareErrorKind::ConnectionError, msg)
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::new(VmwareErrorKind::AuthenticationError, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(VmwareErrorKind::NotFound, msg)
    }

    pub fn endpoint(msg: impl Into<String>) -> Self {
        Self::new(VmwareErrorKind::InvalidEndpoint, msg)
    }

    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        Self::new(VmwareErrorKind::ApiError(status), msg)
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::new(VmwareErrorKind::ParseError, msg)
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::new(VmwareErrorKind::Timeout, msg)
    }

    pub fn trace(msg: impl Into<String>) -> Self {
        Self::new(VmwareErrorKind::TraceError, msg)
    }

    /// True for 404-style errors.
    pub fn is_not_found(&self) -> bool {
        self.kind == VmwareErrorKind::NotFound
    }
}

impl fmt::Display for VmwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.kind, self.message)
    }
}

impl std::error::Error for VmwareError {}

impl From<reqwest::Error> for VmwareError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::timeout(format!("HTTP timeout: {e}"))
        } else if e.is_connect() {
            Self::connection(format!("Connection failed: {e}"))
        } else {
            Self::new(VmwareErrorKind::Other, format!("HTTP error: {e}"))
        }
    }
}

impl From<serde_json::Error> for VmwareError {
    fn from(e: serde_json::Error) -> Self {
        Self::parse(format!("JSON parse error: {e}"))
    }
}

impl From<url::ParseError> for VmwareError {
    fn from(e: url::ParseError) -> Self {
        Self::endpoint(format!("Invalid server address: {e}"))
    }
}

impl From<std::io::Error> for VmwareError {
    fn from(e: std::io::Error) -> Self {
        Self::trace(format!("Debug trace I/O error: {e}"))
    }
}

/// Convenience alias.
pub type VmwareResult<T> = Result<T, VmwareError>;
