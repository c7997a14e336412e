//! Classification of raw call outcomes into the response taxonomy.
//!
//! Generated wrappers funnel every raw call through [`data_call`] or
//! [`unit_call`]. Classification is pure and lock-free; it is safe to run
//! with unbounded concurrency.

use crate::response::{DataResponse, ParseFailure, UnitResponse};
use crate::transport::CallError;
use http::StatusCode;
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::debug;

/// Runs a value-returning raw call and classifies its outcome.
///
/// Exactly one [`DataResponse`] variant is produced per invocation:
/// a decoded payload becomes `Success`, a non-2xx response with a
/// decodable error body becomes `ApiError`, and a transport failure
/// becomes `ConnectionError`.
///
/// # Errors
///
/// [`ParseFailure`] when a body that should have contained JSON did not
/// decode, on either the success path or the error-body path. This is
/// the only failure that escapes the taxonomy.
pub async fn data_call<T, E, F>(call: F) -> Result<DataResponse<T, E>, ParseFailure>
where
    E: DeserializeOwned,
    F: Future<Output = Result<T, CallError>>,
{
    match call.await {
        Ok(value) => Ok(DataResponse::Success(value)),
        Err(error) => match classify_failure::<E>(error)? {
            Failure::Api { cause, status } => Ok(DataResponse::ApiError { cause, status }),
            Failure::Connection(source) => Ok(DataResponse::ConnectionError(source)),
        },
    }
}

/// Runs a void raw call and classifies its outcome.
///
/// Identical to [`data_call`] except that success carries no payload.
///
/// # Errors
///
/// [`ParseFailure`] when a non-2xx body did not decode as `E`.
pub async fn unit_call<E, F>(call: F) -> Result<UnitResponse<E>, ParseFailure>
where
    E: DeserializeOwned,
    F: Future<Output = Result<(), CallError>>,
{
    match call.await {
        Ok(()) => Ok(UnitResponse::Success),
        Err(error) => match classify_failure::<E>(error)? {
            Failure::Api { cause, status } => Ok(UnitResponse::ApiError { cause, status }),
            Failure::Connection(source) => Ok(UnitResponse::ConnectionError(source)),
        },
    }
}

/// Runs a void raw call, discarding every outcome.
///
/// The fire-and-forget escape hatch backing generated `*_safe` siblings.
/// Parse failures are logged at debug level instead of propagating; the
/// three regular outcomes are dropped without ceremony.
pub async fn safe_unit_call<E, F>(call: F)
where
    E: DeserializeOwned,
    F: Future<Output = Result<(), CallError>>,
{
    if let Err(failure) = unit_call::<E, F>(call).await {
        debug!(error = %failure, "discarding parse failure in safe call");
    }
}

enum Failure<E> {
    Api { cause: E, status: StatusCode },
    Connection(reqwest::Error),
}

/// Maps one raw failure onto the taxonomy.
///
/// The non-2xx case is settled before anything transport-shaped: its body
/// either decodes as `E` or the call is a parse failure. It is never
/// demoted to a connection error.
fn classify_failure<E: DeserializeOwned>(error: CallError) -> Result<Failure<E>, ParseFailure> {
    match error {
        CallError::Status { status, body } => match serde_json::from_slice::<E>(&body) {
            Ok(cause) => Ok(Failure::Api { cause, status }),
            Err(source) => Err(ParseFailure::error_body(source)),
        },
        CallError::Decode { source } => Err(ParseFailure::success_body(source)),
        request @ CallError::Request { .. } => Err(ParseFailure::success_body(request)),
        CallError::Connection { source } => Ok(Failure::Connection(source)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct ApiErr {
        message: String,
    }

    fn status_error(status: u16, body: &[u8]) -> CallError {
        CallError::Status {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_vec(),
        }
    }

    fn decode_error() -> CallError {
        CallError::Decode {
            source: serde_json::from_slice::<u32>(b"oops").unwrap_err(),
        }
    }

    async fn refused_connection() -> reqwest::Error {
        // Port 9 is the discard service; nothing listens on it locally.
        reqwest::Client::new()
            .get("http://127.0.0.1:9/")
            .send()
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_ok_value_becomes_success() {
        let response = data_call::<u32, ApiErr, _>(async { Ok(41) }).await.unwrap();
        assert_eq!(response.success(), Some(&41));
    }

    #[tokio::test]
    async fn test_classification_is_idempotent_per_fixture() {
        let first = data_call::<u32, ApiErr, _>(async { Ok(41) }).await.unwrap();
        let second = data_call::<u32, ApiErr, _>(async { Ok(41) }).await.unwrap();
        assert_eq!(first.success(), second.success());
    }

    #[tokio::test]
    async fn test_decodable_error_body_becomes_api_error() {
        let response = data_call::<u32, ApiErr, _>(async {
            Err(status_error(409, br#"{"message": "conflict"}"#))
        })
        .await
        .unwrap();
        let (cause, status) = response.api_error().unwrap();
        assert_eq!(cause.message, "conflict");
        assert_eq!(status.as_u16(), 409);
    }

    #[tokio::test]
    async fn test_unparsable_error_body_is_a_parse_failure_not_a_connection_error() {
        let failure = data_call::<u32, ApiErr, _>(async {
            Err(status_error(500, b"<html>Internal Server Error</html>"))
        })
        .await
        .unwrap_err();
        assert!(failure.is_api_error_parsing_failure());
    }

    #[tokio::test]
    async fn test_empty_error_body_is_a_parse_failure() {
        let failure = data_call::<u32, ApiErr, _>(async { Err(status_error(500, b"")) })
            .await
            .unwrap_err();
        assert!(failure.is_api_error_parsing_failure());
    }

    #[tokio::test]
    async fn test_success_body_decode_failure_keeps_the_flag_down() {
        let failure = data_call::<u32, ApiErr, _>(async { Err(decode_error()) })
            .await
            .unwrap_err();
        assert!(!failure.is_api_error_parsing_failure());
    }

    #[tokio::test]
    async fn test_request_construction_failure_is_a_success_path_parse_failure() {
        let failure = data_call::<u32, ApiErr, _>(async {
            Err(CallError::Request {
                path: "signIn".to_string(),
                reason: "failed to serialize request body".to_string(),
            })
        })
        .await
        .unwrap_err();
        assert!(!failure.is_api_error_parsing_failure());
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_connection_error() {
        let source = refused_connection().await;
        let response = data_call::<u32, ApiErr, _>(async {
            Err(CallError::Connection { source })
        })
        .await
        .unwrap();
        assert!(response.is_connection_error());
    }

    #[tokio::test]
    async fn test_unit_call_success_has_no_payload() {
        let response = unit_call::<ApiErr, _>(async { Ok(()) }).await.unwrap();
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_unit_call_classifies_error_bodies_like_data_call() {
        let response = unit_call::<ApiErr, _>(async {
            Err(status_error(403, br#"{"message": "forbidden"}"#))
        })
        .await
        .unwrap();
        let (cause, status) = response.api_error().unwrap();
        assert_eq!(cause.message, "forbidden");
        assert_eq!(status.as_u16(), 403);
    }

    #[tokio::test]
    async fn test_safe_call_swallows_parse_failures() {
        // HTTP 500 with an unparsable body would be a ParseFailure through
        // unit_call; the safe sibling must complete without propagating it.
        safe_unit_call::<ApiErr, _>(async { Err(status_error(500, b"<html>")) }).await;
    }

    #[tokio::test]
    async fn test_safe_call_swallows_connection_errors() {
        let source = refused_connection().await;
        safe_unit_call::<ApiErr, _>(async { Err(CallError::Connection { source }) }).await;
    }
}
