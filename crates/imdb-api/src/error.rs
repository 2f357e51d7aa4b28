//! Error types for the IMDb API client.
//!
//! Every public call returns `Result<T, ImdbError>`; the variant tells the
//! caller which stage of the request/decode pipeline failed, and the
//! original cause is always attached via `source`.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the IMDb API client.
#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ImdbError {
    /// The assembled request URL is not syntactically valid.
    #[error("malformed request URL '{url}'")]
    MalformedUrl {
        /// The string that failed to parse as a URL.
        url: String,
        /// Parse failure from the `url` crate.
        #[source]
        source: url::ParseError,
    },

    /// The URL could not be converted into a request target.
    #[error("invalid request target '{url}'")]
    InvalidUrl {
        /// The URL the request was built from.
        url: String,
        /// Request construction failure from the HTTP client.
        #[source]
        source: reqwest::Error,
    },

    /// Network or TLS failure from the injected HTTP client.
    #[error("connection error")]
    Connection {
        /// I/O failure from the HTTP client.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a redirect or client error status (300-499).
    #[error("client error (HTTP {status}): {message}")]
    Client {
        /// Upstream HTTP status code.
        status: StatusCode,
        /// Message from the decoded error envelope.
        message: String,
    },

    /// The API answered with a server error status (500 and above).
    #[error("server error (HTTP {status}): {message}")]
    Server {
        /// Upstream HTTP status code.
        status: StatusCode,
        /// Message from the decoded error envelope.
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode {context}")]
    Decode {
        /// What was being decoded when the failure occurred.
        context: String,
        /// JSON failure, absent when a required section was missing.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A search payload carried none of the known discriminator keys.
    #[error("unrecognized search payload: {payload}")]
    UnrecognizedVariant {
        /// The payload that failed to match any variant.
        payload: String,
    },

    /// A request was attempted before an HTTP client was injected.
    #[error("HTTP client is not configured")]
    UninitializedClient,
}

impl ImdbError {
    /// Classifies a non-success HTTP status into `Server` (>= 500) or
    /// `Client` (300-499), carrying the error envelope's message.
    pub(crate) fn from_status(status: StatusCode, message: String) -> Self {
        if status.as_u16() >= 500 {
            Self::Server { status, message }
        } else {
            Self::Client { status, message }
        }
    }

    /// Decode failure for a response that lacks the section an endpoint
    /// is expected to populate.
    pub(crate) fn missing_section(function: &str, section: &str) -> Self {
        Self::Decode {
            context: format!("{function}: response has no `{section}` section"),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_status_300_maps_to_client_error() {
        // Arrange & Act
        let err = ImdbError::from_status(StatusCode::MULTIPLE_CHOICES, String::from("moved"));

        // Assert
        assert!(matches!(
            err,
            ImdbError::Client { status, .. } if status == StatusCode::MULTIPLE_CHOICES
        ));
    }

    #[test]
    fn test_status_404_maps_to_client_error() {
        // Arrange & Act
        let err = ImdbError::from_status(StatusCode::NOT_FOUND, String::from("not found"));

        // Assert
        assert!(matches!(err, ImdbError::Client { .. }));
    }

    #[test]
    fn test_status_499_maps_to_client_error() {
        // Arrange
        let status = StatusCode::from_u16(499).unwrap();

        // Act
        let err = ImdbError::from_status(status, String::from("client closed request"));

        // Assert
        assert!(matches!(err, ImdbError::Client { .. }));
    }

    #[test]
    fn test_status_500_maps_to_server_error() {
        // Arrange & Act
        let err = ImdbError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            String::from("internal error"),
        );

        // Assert
        assert!(matches!(err, ImdbError::Server { .. }));
    }

    #[test]
    fn test_status_503_maps_to_server_error() {
        // Arrange & Act
        let err = ImdbError::from_status(StatusCode::SERVICE_UNAVAILABLE, String::from("down"));

        // Assert
        assert!(matches!(
            err,
            ImdbError::Server { status, message }
                if status == StatusCode::SERVICE_UNAVAILABLE && message == "down"
        ));
    }

    #[test]
    fn test_missing_section_names_function_and_section() {
        // Arrange & Act
        let err = ImdbError::missing_section("title/synopsis", "text");

        // Assert
        let rendered = err.to_string();
        assert!(rendered.contains("title/synopsis"));
        assert!(rendered.contains("`text`"));
    }
}
