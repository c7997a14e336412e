//! Request construction and execution for generated raw services.
//!
//! [`Transport`] pairs a `reqwest` client with the endpoint base URL and
//! the client-wide boxing default. Generated raw functions build calls
//! through [`CallBuilder`] and get back either the decoded payload or a
//! [`CallError`] that keeps the failure kinds apart: the classifier later
//! maps those kinds onto the response taxonomy without ever re-reading the
//! wire.

use crate::convert::{self, Boxing};
use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// A raw call failed before a decoded value could be produced.
///
/// The variants deliberately mirror the stages of a call: building the
/// request, moving bytes, checking the status line, and decoding the body.
/// A non-2xx response is its own variant carrying the fully buffered body,
/// so the error-body decode can happen later without touching the socket
/// again.
#[derive(Debug, Error)]
pub enum CallError {
    /// The server answered with a non-2xx status.
    #[error("server returned {status}")]
    Status {
        /// HTTP status of the response.
        status: StatusCode,
        /// Fully buffered response body.
        body: Vec<u8>,
    },

    /// The request could not be constructed from the call's arguments.
    #[error("failed to build request for `{path}`: {reason}")]
    Request {
        /// Declared operation path.
        path: String,
        /// What went wrong while building.
        reason: String,
    },

    /// A 2xx body did not decode as the declared payload type.
    #[error("failed to decode response body")]
    Decode {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The transport failed before a complete response was available.
    #[error("connection failed")]
    Connection {
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
}

impl CallError {
    /// Returns `true` for a non-2xx HTTP response.
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Returns `true` when the request could not be built.
    #[must_use]
    pub const fn is_request(&self) -> bool {
        matches!(self, Self::Request { .. })
    }

    /// Returns `true` when a success body failed to decode.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Returns `true` for a transport-level failure.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// HTTP status, when the server produced one.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request { .. } | Self::Decode { .. } | Self::Connection { .. } => None,
        }
    }
}

/// One endpoint's HTTP execution state.
///
/// Immutable once built; changing the base URL means building a new
/// transport (and with it a new service cache) rather than mutating this
/// one, so in-flight calls keep the configuration they started with.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    base_url: Url,
    boxed_by_default: bool,
}

impl Transport {
    /// Creates a transport for one base URL.
    ///
    /// A base URL without a trailing slash would make relative paths
    /// replace its last segment on join, so one is appended when missing.
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: Url, boxed_by_default: bool) -> Self {
        let mut base_url = base_url;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
            debug!(url = %base_url, "appended missing trailing slash to base URL");
        }
        Self {
            http,
            base_url,
            boxed_by_default,
        }
    }

    /// The base URL relative operation paths resolve against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Starts building a call for one operation.
    #[must_use]
    pub fn call(&self, method: Method, path: &str) -> CallBuilder<'_> {
        CallBuilder {
            transport: self,
            method,
            path: path.to_string(),
            url_override: None,
            queries: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Resolves a call site's boxing marker against the client default.
    pub(crate) const fn is_boxed(&self, call_site: Option<Boxing>) -> bool {
        match call_site {
            Some(Boxing::Boxed) => true,
            Some(Boxing::NotBoxed) => false,
            None => self.boxed_by_default,
        }
    }
}

/// Builder for one HTTP invocation.
///
/// All argument-shaping methods are infallible; problems surface as
/// [`CallError::Request`] when the call is sent.
#[derive(Debug)]
pub struct CallBuilder<'a> {
    transport: &'a Transport,
    method: Method,
    path: String,
    url_override: Option<String>,
    queries: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<serde_json::Result<Vec<u8>>>,
}

impl CallBuilder<'_> {
    /// Substitutes a `{name}` placeholder in the operation path.
    #[must_use]
    pub fn path_param(mut self, name: &str, value: impl Display) -> Self {
        let placeholder = format!("{{{name}}}");
        self.path = self.path.replace(&placeholder, &value.to_string());
        self
    }

    /// Appends one query pair.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl Display) -> Self {
        self.queries.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends one request header.
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Display) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Serializes a JSON request body.
    #[must_use]
    pub fn json_body(mut self, value: &impl Serialize) -> Self {
        self.body = Some(serde_json::to_vec(value));
        self
    }

    /// Replaces the resolved URL with an absolute one supplied at call
    /// time, ignoring both the operation path and the base URL.
    #[must_use]
    pub fn url(mut self, target: impl Display) -> Self {
        self.url_override = Some(target.to_string());
        self
    }

    /// Sends the call and decodes a 2xx body as `T`.
    ///
    /// # Errors
    ///
    /// Every failure kind maps onto one [`CallError`] variant; see the
    /// variant docs.
    pub async fn send_json<T: DeserializeOwned>(
        self,
        boxing: Option<Boxing>,
    ) -> Result<T, CallError> {
        let boxed = self.transport.is_boxed(boxing);
        let body = self.execute().await?;
        convert::from_json(&body, boxed).map_err(|source| CallError::Decode { source })
    }

    /// Sends the call and discards any 2xx body.
    ///
    /// # Errors
    ///
    /// Same mapping as [`CallBuilder::send_json`], minus the decode stage.
    pub async fn send_unit(self) -> Result<(), CallError> {
        self.execute().await?;
        Ok(())
    }

    async fn execute(self) -> Result<Vec<u8>, CallError> {
        let Self {
            transport,
            method,
            path,
            url_override,
            queries,
            headers,
            body,
        } = self;

        let request_error = |reason: String| CallError::Request {
            path: path.clone(),
            reason,
        };

        let url = resolve_url(&transport.base_url, &path, url_override.as_deref())
            .map_err(&request_error)?;

        debug!(method = %method, url = %url, "sending request");

        let mut request = transport.http.request(method, url);
        if !queries.is_empty() {
            request = request.query(&queries);
        }
        for (name, value) in &headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| request_error(format!("invalid header name `{name}`: {err}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|err| request_error(format!("invalid value for header `{name}`: {err}")))?;
            request = request.header(name, value);
        }
        if let Some(serialized) = body {
            let bytes = serialized
                .map_err(|err| request_error(format!("failed to serialize request body: {err}")))?;
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let response = request
            .send()
            .await
            .map_err(|source| CallError::Connection { source })?;
        let status = response.status();
        // Buffer the whole body first. Losing the connection mid-body is a
        // transport failure even when the status line already arrived.
        let body = response
            .bytes()
            .await
            .map_err(|source| CallError::Connection { source })?
            .to_vec();

        debug!(status = %status, bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(CallError::Status { status, body });
        }
        Ok(body)
    }
}

/// Picks the request URL: call-time override, then an absolute declared
/// path, then a join against the base URL.
fn resolve_url(base: &Url, path: &str, url_override: Option<&str>) -> Result<Url, String> {
    if let Some(target) = url_override {
        return Url::parse(target).map_err(|err| format!("invalid url override `{target}`: {err}"));
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return Url::parse(path).map_err(|err| format!("invalid absolute path `{path}`: {err}"));
    }
    base.join(path)
        .map_err(|err| format!("cannot join `{path}` onto `{base}`: {err}"))
}
