use client_core::error::{ApiError, ConfigError, CoreError};

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors that end a command run.
///
/// View-model failures arrive as the already formatted `error_message` of the
/// screen state and are carried in [`AidvisorsError::Request`].
#[derive(Debug, Error)]
pub enum AidvisorsError {
    /// Error from this App
    #[error("Aidvisors Error: {message} {location}")]
    Aidvisors {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core operations (config, API client)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// A view-model finished with an error message
    #[error("Request Error: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    /// Writing command output failed
    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },
}

impl AidvisorsError {
    /// The message without its source location, for showing to the user.
    pub fn message(&self) -> &str {
        match self {
            AidvisorsError::Aidvisors { message, .. }
            | AidvisorsError::Core { message, .. }
            | AidvisorsError::Request { message, .. }
            | AidvisorsError::Output { message, .. } => message,
        }
    }
}

impl From<ApiError> for AidvisorsError {
    #[track_caller]
    fn from(error: ApiError) -> Self {
        AidvisorsError::Core {
            message: error.description(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for AidvisorsError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        AidvisorsError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AidvisorsError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Api(e) => e.into(),
            CoreError::Config(e) => e.into(),
        }
    }
}

impl From<std::io::Error> for AidvisorsError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        AidvisorsError::Output {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
