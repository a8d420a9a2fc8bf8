//! Fixed infrastructure names and per-deployment roles.
//!
//! The container's own services live under the `immutant` root. Each
//! deployment then gets its own copy of the infrastructure roles, derived by
//! prefixing the deployment's scope root:
//!
//! | role                         | name under scope root `app1`                                |
//! |------------------------------|-------------------------------------------------------------|
//! | service registry             | `app1.immutant.core.service-registry`                       |
//! | service target               | `app1.immutant.core.service-target`                         |
//! | runtime injection analyzer   | `app1.immutant.core.injection.runtime-injection-analyzer`   |
//! | namespace context selector   | `app1.immutant.core.ns-context-selector`                    |
//! | housekeeper                  | `app1.immutant.housekeeper`                                 |
//! | clojure runtime              | `app1.immutant.core.clojure-runtime`                        |
//! | application initializer      | `app1.immutant.core.application-initializer`                |
//! | resource mounter             | `app1.resource-mounter`                                     |

use std::fmt::{Display, Formatter};

use crate::services::naming::ServiceName;

/// `immutant`
pub fn immutant() -> ServiceName {
    ServiceName::from_static(&["immutant"])
}

/// `immutant.core`
pub fn immutant_core() -> ServiceName {
    ServiceName::from_static(&["immutant", "core"])
}

/// `immutant.housekeeper`
pub fn housekeeper() -> ServiceName {
    ServiceName::from_static(&["immutant", "housekeeper"])
}

/// `immutant.core.injection`
pub fn injection() -> ServiceName {
    ServiceName::from_static(&["immutant", "core", "injection"])
}

/// `immutant.core.injection.injectable-handler-registry`
pub fn injectable_handler_registry() -> ServiceName {
    ServiceName::from_static(&["immutant", "core", "injection", "injectable-handler-registry"])
}

/// Infrastructure role instantiated once per deployment scope.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum WellKnownService {
    ServiceRegistry,
    ServiceTarget,
    RuntimeInjectionAnalyzer,
    NamespaceContextSelector,
    Housekeeper,
    Runtime,
    AppInitializer,
    ResourceMounter,
}

impl WellKnownService {
    pub const ALL: [WellKnownService; 8] = [
        WellKnownService::ServiceRegistry,
        WellKnownService::ServiceTarget,
        WellKnownService::RuntimeInjectionAnalyzer,
        WellKnownService::NamespaceContextSelector,
        WellKnownService::Housekeeper,
        WellKnownService::Runtime,
        WellKnownService::AppInitializer,
        WellKnownService::ResourceMounter,
    ];

    /// Final segment of the derived name. Unique per role.
    pub fn suffix(self) -> &'static str {
        match self {
            WellKnownService::ServiceRegistry => "service-registry",
            WellKnownService::ServiceTarget => "service-target",
            WellKnownService::RuntimeInjectionAnalyzer => "runtime-injection-analyzer",
            WellKnownService::NamespaceContextSelector => "ns-context-selector",
            WellKnownService::Housekeeper => "housekeeper",
            WellKnownService::Runtime => "clojure-runtime",
            WellKnownService::AppInitializer => "application-initializer",
            WellKnownService::ResourceMounter => "resource-mounter",
        }
    }

    /// Infrastructure name the role hangs off, relative to the scope root.
    fn parent(self) -> Option<ServiceName> {
        match self {
            WellKnownService::ServiceRegistry
            | WellKnownService::ServiceTarget
            | WellKnownService::NamespaceContextSelector
            | WellKnownService::Runtime
            | WellKnownService::AppInitializer => Some(immutant_core()),
            WellKnownService::RuntimeInjectionAnalyzer => Some(injection()),
            WellKnownService::Housekeeper => Some(immutant()),
            WellKnownService::ResourceMounter => None,
        }
    }

    /// Derives the name of this role inside the scope rooted at `scope_root`.
    pub fn derive(self, scope_root: &ServiceName) -> ServiceName {
        let base = match self.parent() {
            Some(parent) => scope_root.append_name(&parent),
            None => scope_root.clone(),
        };
        base.append_name(&ServiceName::from_static(&[self.suffix()]))
    }
}

impl Display for WellKnownService {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}
