//! Deployment scopes.
//!
//! A deployment scope is the namespace of one deployed unit: every service the
//! unit registers, infrastructure roles included, is named beneath the scope
//! root. The root is built from the deployment name handed over by the
//! deployment-unit provider, which is responsible for keeping it unique among
//! live deployments. The container's own `immutant` root is reserved: a
//! deployment under that name would own, and on teardown remove, the
//! container-wide infrastructure entries.

use crate::services::{
    error::RegistryError,
    naming::{ServiceName, WellKnownService, well_known},
};

/// Source of the deployment name seeding a scope root.
pub trait DeploymentUnit {
    fn deployment_name(&self) -> &str;
}

impl DeploymentUnit for str {
    fn deployment_name(&self) -> &str {
        self
    }
}

impl DeploymentUnit for String {
    fn deployment_name(&self) -> &str {
        self
    }
}

/// Namespace owned by a single deployment unit.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct DeploymentScope {
    root: ServiceName,
}

impl DeploymentScope {
    /// Creates the scope rooted at `[deployment_name]`.
    ///
    /// Fails with [`RegistryError::InvalidSegment`] for a name that is not a
    /// valid segment or that is the reserved container root `immutant`.
    pub fn new(deployment_name: impl Into<String>) -> Result<Self, RegistryError> {
        let root = ServiceName::of(deployment_name)?;
        if root == well_known::immutant() {
            return Err(RegistryError::InvalidSegment(root.simple_name().to_owned()));
        }
        Ok(Self { root })
    }

    /// Scope of `unit`, rooted at its deployment name.
    pub fn for_unit<U>(unit: &U) -> Result<Self, RegistryError>
    where
        U: DeploymentUnit + ?Sized,
    {
        Self::new(unit.deployment_name())
    }

    /// Single-segment name every name of the scope descends from.
    pub fn root(&self) -> &ServiceName {
        &self.root
    }

    /// Name of an infrastructure role within this scope.
    pub fn well_known(&self, role: WellKnownService) -> ServiceName {
        role.derive(&self.root)
    }

    /// Name of an application-defined service directly under the scope root.
    pub fn service(&self, segment: impl Into<String>) -> Result<ServiceName, RegistryError> {
        self.root.append(segment)
    }
}
