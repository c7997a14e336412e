//! Type-keyed cache of lazily bound service instances.
//!
//! One cache belongs to one endpoint generation: when the base URL
//! changes, the owning [`Endpoint`](crate::Endpoint) is replaced wholesale
//! and a fresh cache starts empty against the new transport. Old caches
//! are never mutated, so callers still holding one finish their calls
//! against the configuration they started with.

use crate::transport::Transport;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A generated service type that can be constructed against a transport.
///
/// The generator emits one impl per service; by hand it looks like this:
///
/// ```
/// use std::sync::Arc;
/// use typewire_runtime::{BoundService, Transport};
///
/// #[derive(Debug)]
/// struct StatusService {
///     transport: Arc<Transport>,
/// }
///
/// impl BoundService for StatusService {
///     fn bind(transport: Arc<Transport>) -> Self {
///         Self { transport }
///     }
/// }
/// ```
pub trait BoundService: Send + Sync + 'static {
    /// Builds the service instance against one endpoint's transport.
    fn bind(transport: Arc<Transport>) -> Self;
}

/// Per-endpoint registry of service instances, one per service type.
///
/// `get_or_bind` uses a read-lock fast path and re-checks under the write
/// lock, so at most one instance is ever built per type per cache and
/// lookups never serialize against each other.
#[derive(Default)]
pub struct ServicesCache {
    services: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServicesCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached instance of `S`, binding it first if needed.
    pub fn get_or_bind<S: BoundService>(&self, transport: &Arc<Transport>) -> Arc<S> {
        if let Some(service) = self.lookup::<S>() {
            return service;
        }
        let mut services = self.services.write();
        if let Some(service) = services.get(&TypeId::of::<S>()).and_then(downcast::<S>) {
            return service;
        }
        let service = Arc::new(S::bind(Arc::clone(transport)));
        services.insert(TypeId::of::<S>(), service.clone());
        service
    }

    fn lookup<S: BoundService>(&self) -> Option<Arc<S>> {
        self.services
            .read()
            .get(&TypeId::of::<S>())
            .and_then(downcast::<S>)
    }

    /// Number of service types bound so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.read().len()
    }

    /// Returns `true` while no service has been bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.read().is_empty()
    }
}

impl fmt::Debug for ServicesCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServicesCache")
            .field("len", &self.len())
            .finish()
    }
}

fn downcast<S: BoundService>(entry: &Arc<dyn Any + Send + Sync>) -> Option<Arc<S>> {
    Arc::clone(entry).downcast::<S>().ok()
}
