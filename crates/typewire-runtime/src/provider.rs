//! The composition point generated client facades delegate to.
//!
//! A [`ClientProvider`] owns the current [`Endpoint`], an immutable pair
//! of transport and service cache. Installing a base URL replaces the
//! whole pair atomically: readers either see the old endpoint or the new
//! one, never a half-updated mix. Calls issued before the first URL is
//! known suspend until one arrives.

use crate::cache::{BoundService, ServicesCache};
use crate::transport::Transport;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};
use url::Url;

/// Client-wide configuration shared by every endpoint generation.
///
/// # Examples
///
/// ```
/// use typewire_runtime::ClientOptions;
///
/// let options = ClientOptions::default();
/// assert!(!options.boxed_by_default);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// HTTP client reused across base-URL changes. `reqwest` clients are
    /// cheap to clone and share their connection pool.
    pub http: reqwest::Client,
    /// Envelope policy applied to call sites without an explicit boxing
    /// marker.
    pub boxed_by_default: bool,
}

/// One immutable (transport, service cache) generation.
///
/// In-flight calls that resolved this endpoint before a base-URL change
/// keep using it; the next resolution through the provider picks up the
/// replacement.
#[derive(Debug)]
pub struct Endpoint {
    transport: Arc<Transport>,
    services: ServicesCache,
}

impl Endpoint {
    fn new(options: &ClientOptions, base_url: Url) -> Self {
        Self {
            transport: Arc::new(Transport::new(
                options.http.clone(),
                base_url,
                options.boxed_by_default,
            )),
            services: ServicesCache::new(),
        }
    }

    /// Returns the cached instance of service `S`, binding it on first use.
    pub fn service<S: BoundService>(&self) -> Arc<S> {
        self.services.get_or_bind(&self.transport)
    }

    /// Base URL this generation resolves relative paths against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    /// The transport bound to this generation.
    #[must_use]
    pub const fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    /// This generation's service cache.
    #[must_use]
    pub const fn services(&self) -> &ServicesCache {
        &self.services
    }
}

/// Holder of the current endpoint with single-writer, multi-reader
/// semantics.
///
/// Two construction modes: a base URL known up front
/// ([`ClientProvider::with_base_url`]) or a stream of URLs for deployments
/// that reconfigure at run time ([`ClientProvider::with_url_stream`]).
/// Either way, [`ClientProvider::endpoint`] suspends until the first URL
/// has been installed and afterwards resolves without blocking.
#[derive(Debug)]
pub struct ClientProvider {
    options: ClientOptions,
    endpoint: watch::Sender<Option<Arc<Endpoint>>>,
}

impl ClientProvider {
    /// Creates a provider with no endpoint yet; calls suspend until
    /// [`ClientProvider::set_base_url`] runs.
    #[must_use]
    pub fn pending(options: ClientOptions) -> Self {
        let (endpoint, _) = watch::channel(None);
        Self { options, endpoint }
    }

    /// Creates a provider with a fixed base URL, ready immediately.
    #[must_use]
    pub fn with_base_url(options: ClientOptions, base_url: Url) -> Self {
        let provider = Self::pending(options);
        provider.set_base_url(base_url);
        provider
    }

    /// Creates a provider fed by a URL stream.
    ///
    /// Every received URL installs a fresh endpoint, the first one
    /// releasing any suspended calls. The forwarding task ends when the
    /// stream's sender side is dropped. Must be called from within a Tokio
    /// runtime.
    #[must_use]
    pub fn with_url_stream(options: ClientOptions, mut urls: mpsc::Receiver<Url>) -> Self {
        let provider = Self::pending(options);
        let endpoint = provider.endpoint.clone();
        let options = provider.options.clone();
        tokio::spawn(async move {
            while let Some(url) = urls.recv().await {
                info!(url = %url, "base URL received from stream");
                endpoint.send_replace(Some(Arc::new(Endpoint::new(&options, url))));
            }
            debug!("base URL stream ended");
        });
        provider
    }

    /// Builds and installs a new endpoint for `base_url`.
    ///
    /// The transport and the (empty) service cache are swapped in as one
    /// unit. Calls already resolving against the previous endpoint finish
    /// there; the next call through the provider sees the new one.
    pub fn set_base_url(&self, base_url: Url) {
        info!(url = %base_url, "installing new endpoint");
        self.endpoint
            .send_replace(Some(Arc::new(Endpoint::new(&self.options, base_url))));
    }

    /// Returns `true` once a base URL has been installed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.endpoint.borrow().is_some()
    }

    /// Resolves the current endpoint, suspending until the first base URL
    /// is known.
    pub async fn endpoint(&self) -> Arc<Endpoint> {
        if let Some(endpoint) = self.endpoint.borrow().as_ref() {
            return Arc::clone(endpoint);
        }
        let mut receiver = self.endpoint.subscribe();
        let current = receiver
            .wait_for(Option::is_some)
            .await
            .ok()
            .and_then(|guard| guard.clone());
        if let Some(endpoint) = current {
            return endpoint;
        }
        // The sender lives inside this provider, so the channel only closes
        // when the provider is dropped; treat that as a gate that never
        // opens.
        std::future::pending().await
    }
}
