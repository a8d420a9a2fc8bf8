//! Scoped service naming for the Immutant deployment container.
//!
//! Independently deployed applications register and discover their services
//! through hierarchical [`ServiceName`](services::naming::ServiceName)s. Every
//! deployment owns a root name, infrastructure services are derived beneath it,
//! and the whole subtree is dropped when the deployment goes away.
pub mod immutant_tracing;
pub mod services;

#[cfg(test)]
mod tests;
