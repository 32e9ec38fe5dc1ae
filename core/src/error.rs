//! Error types for the todo client and controller.
//!
//! # Design
//! `ApiError` keeps the detail of what went wrong on the wire. The
//! controller folds every `ApiError` into one of three `ActionError`
//! variants whose `Display` text is what the user sees; the original
//! `ApiError` stays reachable through `source()` for logging.

use thiserror::Error;

/// Errors returned by `TodoClient` parse methods and `Transport`s.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
}

/// User-facing failure of a controller action.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Unable to create Todo item")]
    CreateFailed(#[source] ApiError),

    #[error("Failed to update Todo item")]
    UpdateFailed(#[source] ApiError),

    #[error("Failed to delete Todo item")]
    DeleteFailed(#[source] ApiError),
}

impl ActionError {
    pub fn api_error(&self) -> &ApiError {
        match self {
            ActionError::CreateFailed(e) | ActionError::UpdateFailed(e) | ActionError::DeleteFailed(e) => e,
        }
    }
}

/// Errors raised while loading a `Config`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
