//! Service naming and registration.
//!
//! ## Layers
//!
//! - **Naming**: [`naming::ServiceName`], the immutable hierarchical identifier,
//!   and [`naming::well_known`], the fixed infrastructure names of the container
//!   together with the per-deployment roles derived from a scope root.
//! - **Registry**: [`registry::ScopedRegistry`], the shared map from names to
//!   registered values, and [`registry::DeploymentScope`], the namespace owned by
//!   one deployment unit.
//! - **API**: request/response types so the registry can be driven as a
//!   `tower::Service`, the same way the other container services are composed.
//! - **Error**: [`error::RegistryError`], shared by every layer.
//!
//! ## Typical flow
//!
//! A deployment is opened once, names are derived from its scope, services are
//! registered and looked up, and the scope is closed on undeploy:
//!
//! ```
//! use immutant_core::services::{naming::WellKnownService, registry::ScopedRegistry};
//!
//! let registry = ScopedRegistry::<u32>::new();
//! let scope = registry.open_scope("app1").unwrap();
//! let housekeeper = scope.well_known(WellKnownService::Housekeeper);
//! registry.register(housekeeper.clone(), 7).unwrap();
//! assert_eq!(registry.lookup(&housekeeper), Ok(7));
//! assert_eq!(registry.close_scope(&scope), 1);
//! assert!(registry.lookup(&housekeeper).is_err());
//! ```
pub mod api;
pub mod error;
pub mod naming;
pub mod registry;
