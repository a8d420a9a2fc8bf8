//! Scoped service registry.
//!
//! [`ScopedRegistry`] maps fully qualified [`ServiceName`]s to registered values.
//! There is a single table for the whole process: scoping comes from the names
//! themselves, since everything a deployment registers descends from its scope
//! root. Tearing a deployment down is therefore a prefix removal.
//!
//! ## Sharing
//!
//! The registry is cheap to clone and every clone sees the same entries. It is
//! meant to be constructed once at start-up and handed to whoever needs it;
//! there is no global instance. [`ScopedRegistry::clear`] is the matching
//! teardown.
//!
//! ## Consistency
//!
//! Writes to a given name are atomic: `register` either inserts or leaves the
//! existing entry untouched, and a lookup racing a scope teardown observes the
//! whole value or `NotFound`, never anything in between.
//!
//! ## Scope tracking
//!
//! A registry built with [`ScopedRegistry::new`] makes
//! [`ScopedRegistry::open_scope`] remember live scope roots and refuse to open
//! the same deployment twice, surfacing a deployment-name collision before any
//! service is registered. [`ScopedRegistry::untracked`] skips the check. The
//! choice is fixed at construction and shared by every clone, like the live
//! scopes themselves.

use std::{future::Future, pin::Pin, sync::Arc, task::Poll};

use dashmap::{DashMap, DashSet, mapref::entry::Entry};
use tower::Service;
use tracing::{debug, info, warn};

use crate::services::{
    api::{RegistryRequest, RegistryResponse},
    error::RegistryError,
    naming::ServiceName,
};

mod scope;

pub use scope::{DeploymentScope, DeploymentUnit};

#[derive(Debug, Clone)]
pub struct ScopedRegistry<V> {
    entries: Arc<DashMap<ServiceName, V>>,
    /// Roots of the scopes opened and not yet torn down, `None` when untracked
    scopes: Option<Arc<DashSet<ServiceName>>>,
}

impl<V> Default for ScopedRegistry<V> {
    fn default() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            scopes: Some(Arc::new(DashSet::new())),
        }
    }
}

impl<V: Clone> ScopedRegistry<V> {
    /// Creates an empty registry that tracks live deployment scopes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry without the live scope check of [`Self::open_scope`].
    ///
    /// Every clone shares the setting, so a deployment-name collision then
    /// surfaces at its first conflicting registration.
    pub fn untracked() -> Self {
        Self { entries: Arc::new(DashMap::new()), scopes: None }
    }

    /// Whether [`Self::open_scope`] rejects a deployment whose scope is still live.
    pub fn tracks_scopes(&self) -> bool {
        self.scopes.is_some()
    }

    /// Opens the scope of a deployment unit.
    ///
    /// With scope tracking enabled, fails with
    /// [`RegistryError::DuplicateRegistration`] if a scope with the same root
    /// is still live.
    pub fn open_scope<U>(&self, unit: &U) -> Result<DeploymentScope, RegistryError>
    where
        U: DeploymentUnit + ?Sized,
    {
        let scope = DeploymentScope::for_unit(unit)?;
        if let Some(scopes) = &self.scopes
            && !scopes.insert(scope.root().clone())
        {
            warn!(scope = %scope.root(), "deployment scope already open");
            return Err(RegistryError::DuplicateRegistration(scope.root().clone()));
        }
        info!(scope = %scope.root(), "deployment scope opened");
        Ok(scope)
    }

    /// Tears a scope down, see [`Self::unregister_scope`].
    pub fn close_scope(&self, scope: &DeploymentScope) -> usize {
        self.unregister_scope(scope.root())
    }

    /// Registers `value` under `name`.
    ///
    /// An existing entry is never overwritten: the call fails with
    /// [`RegistryError::DuplicateRegistration`] and the registered value stays
    /// retrievable. Use [`Self::replace`] to overwrite on purpose.
    pub fn register(&self, name: ServiceName, value: V) -> Result<(), RegistryError> {
        match self.entries.entry(name) {
            Entry::Occupied(occupied) => {
                warn!(service = %occupied.key(), "duplicate service registration");
                Err(RegistryError::DuplicateRegistration(occupied.key().clone()))
            }
            Entry::Vacant(vacant) => {
                debug!(service = %vacant.key(), "service registered");
                vacant.insert(value);
                Ok(())
            }
        }
    }

    /// Registers `value` under `name`, returning the value it replaced.
    pub fn replace(&self, name: ServiceName, value: V) -> Option<V> {
        debug!(service = %name, "service replaced");
        self.entries.insert(name, value)
    }

    /// Returns a clone of the value registered under `name`.
    pub fn lookup(&self, name: &ServiceName) -> Result<V, RegistryError> {
        self.entries
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RegistryError::NotFound(name.clone()))
    }

    /// Whether an entry is registered under `name`.
    pub fn contains(&self, name: &ServiceName) -> bool {
        self.entries.contains_key(name)
    }

    /// Removes a single entry and returns its value.
    pub fn unregister(&self, name: &ServiceName) -> Result<V, RegistryError> {
        let (name, value) =
            self.entries.remove(name).ok_or_else(|| RegistryError::NotFound(name.clone()))?;
        debug!(service = %name, "service unregistered");
        Ok(value)
    }

    /// Removes `root` and every entry beneath it, returning how many were removed.
    ///
    /// Entries of sibling scopes are left alone. Idempotent: once a scope is
    /// torn down, further calls return 0.
    pub fn unregister_scope(&self, root: &ServiceName) -> usize {
        let mut removed = 0;
        self.entries.retain(|name, _| {
            let within = name.is_within(root);
            if within {
                removed += 1;
            }
            !within
        });
        if let Some(scopes) = &self.scopes {
            scopes.remove(root);
        }
        info!(scope = %root, removed, "deployment scope torn down");
        removed
    }

    /// Sorted names of the entries registered within `root`.
    pub fn names_within(&self, root: &ServiceName) -> Vec<ServiceName> {
        let mut names: Vec<ServiceName> = self
            .entries
            .iter()
            .filter(|entry| entry.key().is_within(root))
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    /// Number of registered entries, across all scopes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry is registered at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry and every live scope, returning the number of entries removed.
    pub fn clear(&self) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, _| {
            removed += 1;
            false
        });
        if let Some(scopes) = &self.scopes {
            scopes.clear();
        }
        info!(removed, "service registry cleared");
        removed
    }
}

impl<V> Service<RegistryRequest<V>> for ScopedRegistry<V>
where
    V: Clone + Send + Sync + 'static,
{
    type Response = RegistryResponse<V>;
    type Error = RegistryError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: RegistryRequest<V>) -> Self::Future {
        let this = self.clone();
        Box::pin(async move {
            match request {
                RegistryRequest::Register { name, value } => {
                    this.register(name, value).map(|_| RegistryResponse::Ack)
                }
                RegistryRequest::Replace { name, value } => {
                    Ok(RegistryResponse::Replaced(this.replace(name, value)))
                }
                RegistryRequest::Lookup(name) => this.lookup(&name).map(RegistryResponse::Entry),
                RegistryRequest::Unregister(name) => {
                    this.unregister(&name).map(RegistryResponse::Entry)
                }
                RegistryRequest::UnregisterScope(root) => {
                    Ok(RegistryResponse::Removed(this.unregister_scope(&root)))
                }
                RegistryRequest::ListScope(root) => {
                    Ok(RegistryResponse::Names(this.names_within(&root)))
                }
            }
        })
    }
}
