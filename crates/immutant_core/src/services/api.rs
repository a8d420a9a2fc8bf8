//! Registry API type definitions.
//!
//! Request and response types used to drive a
//! [`ScopedRegistry`](crate::services::registry::ScopedRegistry) as a
//! `tower::Service`. Each request maps to exactly one registry operation and
//! carries the same failure semantics:
//!
//! - `Register` fails with `DuplicateRegistration` on an occupied name
//! - `Lookup` and `Unregister` fail with `NotFound` on an absent name
//! - `Replace`, `UnregisterScope` and `ListScope` never fail

use crate::services::naming::ServiceName;

/// Registry service request types.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RegistryRequest<V> {
    /// Register a value under a name that must not be taken yet.
    Register {
        /// Fully qualified, scope-rooted name
        name: ServiceName,
        /// Value made available to lookups
        value: V,
    },

    /// Register a value, overwriting any existing entry.
    Replace {
        /// Fully qualified, scope-rooted name
        name: ServiceName,
        /// New value for the name
        value: V,
    },

    /// Fetch the value registered under a name.
    Lookup(ServiceName),

    /// Remove a single entry.
    Unregister(ServiceName),

    /// Remove a scope root and everything registered beneath it.
    UnregisterScope(ServiceName),

    /// List the names registered within a scope, sorted.
    ListScope(ServiceName),
}

/// Registry service response types.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RegistryResponse<V> {
    /// Registration accepted.
    Ack,
    /// Value found by `Lookup` or removed by `Unregister`.
    Entry(V),
    /// Previous value overwritten by `Replace`, if any.
    Replaced(Option<V>),
    /// Number of entries removed by `UnregisterScope`.
    Removed(usize),
    /// Names returned by `ListScope`.
    Names(Vec<ServiceName>),
}
