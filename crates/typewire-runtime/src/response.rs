//! The response taxonomy every generated call resolves into.
//!
//! A call produces exactly one of three recoverable outcomes: the decoded
//! payload, a structured API error, or a connection failure. Anything else
//! is a [`ParseFailure`], which is not an outcome but a contract violation
//! surfaced through the `Err` arm of the call's `Result`.

use http::StatusCode;
use thiserror::Error;

/// Outcome of a value-returning operation.
///
/// Callers match all three variants; there is no fourth state hiding
/// behind a catch-all.
///
/// # Examples
///
/// ```
/// use typewire_runtime::DataResponse;
///
/// fn describe(response: &DataResponse<u32, String>) -> String {
///     match response {
///         DataResponse::Success(value) => format!("got {value}"),
///         DataResponse::ApiError { cause, status } => {
///             format!("server rejected with {status}: {cause}")
///         }
///         DataResponse::ConnectionError(_) => "network trouble".to_string(),
///     }
/// }
///
/// assert_eq!(describe(&DataResponse::Success(7)), "got 7");
/// ```
#[derive(Debug)]
#[must_use]
pub enum DataResponse<T, E> {
    /// 2xx response whose body decoded as the declared payload type.
    Success(T),
    /// Non-2xx response whose body decoded as the service's error type.
    ApiError {
        /// Decoded error body.
        cause: E,
        /// HTTP status of the response.
        status: StatusCode,
    },
    /// The request never completed at the transport level.
    ConnectionError(reqwest::Error),
}

impl<T, E> DataResponse<T, E> {
    /// Returns `true` for the `Success` variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for the `ApiError` variant.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }

    /// Returns `true` for the `ConnectionError` variant.
    #[must_use]
    pub const fn is_connection_error(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }

    /// The decoded payload, if this is a success.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::ApiError { .. } | Self::ConnectionError(_) => None,
        }
    }

    /// Consumes the response and returns the payload, if this is a success.
    #[must_use]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::ApiError { .. } | Self::ConnectionError(_) => None,
        }
    }

    /// The decoded error and status, if the server rejected the call.
    #[must_use]
    pub const fn api_error(&self) -> Option<(&E, StatusCode)> {
        match self {
            Self::ApiError { cause, status } => Some((cause, *status)),
            Self::Success(_) | Self::ConnectionError(_) => None,
        }
    }
}

/// Outcome of a void operation.
///
/// Identical to [`DataResponse`] with the payload replaced by a bare
/// success marker.
#[derive(Debug)]
#[must_use]
pub enum UnitResponse<E> {
    /// 2xx response; the body, if any, is ignored.
    Success,
    /// Non-2xx response whose body decoded as the service's error type.
    ApiError {
        /// Decoded error body.
        cause: E,
        /// HTTP status of the response.
        status: StatusCode,
    },
    /// The request never completed at the transport level.
    ConnectionError(reqwest::Error),
}

impl<E> UnitResponse<E> {
    /// Returns `true` for the `Success` variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns `true` for the `ApiError` variant.
    #[must_use]
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }

    /// Returns `true` for the `ConnectionError` variant.
    #[must_use]
    pub const fn is_connection_error(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }

    /// The decoded error and status, if the server rejected the call.
    #[must_use]
    pub const fn api_error(&self) -> Option<(&E, StatusCode)> {
        match self {
            Self::ApiError { cause, status } => Some((cause, *status)),
            Self::Success | Self::ConnectionError(_) => None,
        }
    }
}

/// A response body that should have contained decodable JSON did not.
///
/// Raised for empty bodies, malformed JSON, and shape mismatches alike,
/// on both the success path and the error-body path. This is never folded
/// into [`DataResponse::ConnectionError`]: a malformed body is a contract
/// violation between client and server, not a recoverable network
/// condition.
#[derive(Debug, Error)]
#[error("failed to parse response body")]
pub struct ParseFailure {
    is_api_error_parsing_failure: bool,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl ParseFailure {
    /// A body on the success path failed to decode.
    pub(crate) fn success_body(
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            is_api_error_parsing_failure: false,
            source: source.into(),
        }
    }

    /// A non-2xx body failed to decode as the declared error type.
    pub(crate) fn error_body(
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            is_api_error_parsing_failure: true,
            source: source.into(),
        }
    }

    /// Returns `true` when the failure happened while decoding an error
    /// body rather than a success body.
    ///
    /// The two paths share one type and one flag; no finer distinction is
    /// tracked.
    #[must_use]
    pub const fn is_api_error_parsing_failure(&self) -> bool {
        self.is_api_error_parsing_failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    #[test]
    fn test_data_response_accessors() {
        let response: DataResponse<u32, String> = DataResponse::Success(7);
        assert!(response.is_success());
        assert_eq!(response.success(), Some(&7));
        assert_eq!(response.api_error(), None);
        assert_eq!(response.into_success(), Some(7));

        let response: DataResponse<u32, String> = DataResponse::ApiError {
            cause: "bad request".to_string(),
            status: StatusCode::BAD_REQUEST,
        };
        assert!(response.is_api_error());
        assert!(!response.is_success());
        let (cause, status) = response.api_error().unwrap();
        assert_eq!(cause, "bad request");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response.into_success(), None);
    }

    #[test]
    fn test_unit_response_accessors() {
        let response: UnitResponse<String> = UnitResponse::Success;
        assert!(response.is_success());
        assert!(!response.is_api_error());

        let response: UnitResponse<String> = UnitResponse::ApiError {
            cause: "nope".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        let (cause, status) = response.api_error().unwrap();
        assert_eq!(cause, "nope");
        assert_eq!(status.as_u16(), 500);
    }

    #[test]
    fn test_parse_failure_tracks_the_failing_path() {
        let failure = ParseFailure::success_body(json_error());
        assert!(!failure.is_api_error_parsing_failure());

        let failure = ParseFailure::error_body(json_error());
        assert!(failure.is_api_error_parsing_failure());
    }

    #[test]
    fn test_parse_failure_keeps_its_source() {
        use std::error::Error as _;

        let failure = ParseFailure::error_body(json_error());
        assert_eq!(failure.to_string(), "failed to parse response body");
        assert!(failure.source().is_some());
    }
}
