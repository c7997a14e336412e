//! Runtime support for typewire-generated HTTP clients.
//!
//! Every client the typewire generator emits leans on this crate for three
//! things:
//!
//! - **Outcome classification**: each call settles on exactly one of
//!   success, API error, or connection error, modeled by [`DataResponse`]
//!   and its void sibling [`UnitResponse`]. A body that cannot be decoded
//!   is a [`ParseFailure`] carried in the `Err` arm instead of being folded
//!   into a connection problem.
//! - **Envelope unboxing**: servers that wrap payloads in a single-key JSON
//!   object (`{"data": ...}`) are unwrapped transparently, controlled per
//!   call site by [`Boxing`] with a client-wide default.
//! - **Endpoint management**: [`ClientProvider`] owns the current
//!   transport plus a per-service instance cache, swaps both atomically
//!   when the base URL changes, and suspends calls issued before the first
//!   URL is known.
//!
//! # Architecture
//!
//! - [`Transport`]: request construction and execution over `reqwest`,
//!   producing raw payloads or a [`CallError`]
//! - [`data_call`] / [`unit_call`]: turn one raw call outcome into a
//!   response taxonomy value or a [`ParseFailure`]
//! - [`Boxing`]: the per-call envelope-unwrapping decision
//! - [`ServicesCache`]: one lazily bound instance per service type per
//!   endpoint generation
//! - [`ClientProvider`]: the composition point generated client facades
//!   delegate to
//!
//! # Examples
//!
//! ```
//! use typewire_runtime::{ClientOptions, ClientProvider, DataResponse, Url};
//!
//! let url = Url::parse("https://api.example.com/").unwrap();
//! let provider = ClientProvider::with_base_url(ClientOptions::default(), url);
//! assert!(provider.is_ready());
//!
//! // Generated wrappers resolve calls into the three-variant taxonomy.
//! let outcome: DataResponse<u32, String> = DataResponse::Success(7);
//! match outcome {
//!     DataResponse::Success(value) => assert_eq!(value, 7),
//!     DataResponse::ApiError { .. } | DataResponse::ConnectionError(_) => {}
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod cache;
mod classify;
mod convert;
mod provider;
mod response;
mod transport;

pub use cache::{BoundService, ServicesCache};
pub use classify::{data_call, safe_unit_call, unit_call};
pub use convert::Boxing;
pub use provider::{ClientOptions, ClientProvider, Endpoint};
pub use response::{DataResponse, ParseFailure, UnitResponse};
pub use transport::{CallBuilder, CallError, Transport};

// Generated code speaks these types; re-export them so downstream crates
// only need typewire-runtime and serde in their dependency table.
pub use http::{Method, StatusCode};
pub use reqwest;
pub use tokio::sync::mpsc;
pub use url::Url;
