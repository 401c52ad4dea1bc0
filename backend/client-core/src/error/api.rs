use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failure of a single API call.
///
/// Exactly one variant is produced per call. The client checks in this order:
/// URL composition, body encoding, transport, response framing, HTTP status,
/// then body decoding. A 500 with garbage in the body is therefore `Server`,
/// never `Decoding`.
#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("Invalid URL Error: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },

    #[error("Request Serialization Error: {message} {location}")]
    RequestSerialization {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request Failed Error: {message} {location}")]
    RequestFailed {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid Response Error: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} {location}")]
    Server {
        status: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Decoding Error: {message} {location}")]
    Decoding {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown Error: {message} {location}")]
    Unknown {
        message: String,
        location: ErrorLocation,
    },
}

/// Payload-free view of [`ApiError`] for matching and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    InvalidUrl,
    RequestSerialization,
    RequestFailed,
    InvalidResponse,
    Server(u16),
    Decoding,
    Unknown,
}

impl ApiErrorKind {
    /// Collapses body-encoding failures into `InvalidUrl`, the coarser
    /// taxonomy older clients expect.
    pub fn coarse(self) -> Self {
        match self {
            ApiErrorKind::RequestSerialization => ApiErrorKind::InvalidUrl,
            other => other,
        }
    }
}

impl ApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::InvalidUrl { .. } => ApiErrorKind::InvalidUrl,
            ApiError::RequestSerialization { .. } => ApiErrorKind::RequestSerialization,
            ApiError::RequestFailed { .. } => ApiErrorKind::RequestFailed,
            ApiError::InvalidResponse { .. } => ApiErrorKind::InvalidResponse,
            ApiError::Server { status, .. } => ApiErrorKind::Server(status.as_u16()),
            ApiError::Decoding { .. } => ApiErrorKind::Decoding,
            ApiError::Unknown { .. } => ApiErrorKind::Unknown,
        }
    }

    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable sentence for display, without source locations.
    pub fn description(&self) -> String {
        match self {
            ApiError::InvalidUrl { message, .. } => {
                format!("The API address is not a valid URL ({message})")
            }
            ApiError::RequestSerialization { .. } => {
                String::from("The request could not be encoded")
            }
            ApiError::RequestFailed { message, .. } => {
                format!("The server could not be reached ({message})")
            }
            ApiError::InvalidResponse { .. } => String::from("The server sent an invalid response"),
            ApiError::Server { status, .. } => {
                format!("The server responded with status {status}")
            }
            ApiError::Decoding { message, .. } => {
                format!("The server response could not be read ({message})")
            }
            ApiError::Unknown { .. } => String::from("An unknown error occurred"),
        }
    }

    #[track_caller]
    pub(crate) fn invalid_url(message: impl Into<String>) -> Self {
        ApiError::InvalidUrl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn server(status: u16) -> Self {
        ApiError::Server {
            status: HttpStatusCode::from(status),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn serialization(error: serde_json::Error) -> Self {
        ApiError::RequestSerialization {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }

    #[track_caller]
    pub(crate) fn decoding(error: serde_json::Error) -> Self {
        ApiError::Decoding {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }

    /// Classifies an error raised while sending, before any response arrived.
    #[track_caller]
    pub(crate) fn from_send(error: reqwest::Error) -> Self {
        if error.is_builder() {
            return ApiError::invalid_url(error.to_string());
        }

        ApiError::RequestFailed {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }

    /// Classifies an error raised while reading a response body.
    #[track_caller]
    pub(crate) fn from_body(error: reqwest::Error) -> Self {
        if error.is_body() || error.is_decode() {
            ApiError::InvalidResponse {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            ApiError::Unknown {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

impl From<url::ParseError> for ApiError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ApiError::InvalidUrl {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
