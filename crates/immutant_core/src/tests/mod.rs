
use fixtures::MockDeployment;
use tower::Service;

use crate::services::{
    api::{RegistryRequest, RegistryResponse},
    error::RegistryError,
    naming::{ServiceName, WellKnownService, well_known},
    registry::ScopedRegistry,
};

#[tokio::test]
async fn integration_housekeeper_per_deployment() {
    crate::immutant_tracing::init();
    let mut registry = ScopedRegistry::new();

    let app1 = MockDeployment::new("app1");
    let app2 = MockDeployment::new("app2");
    let housekeeper1 = app1.well_known(WellKnownService::Housekeeper);
    let housekeeper2 = app2.well_known(WellKnownService::Housekeeper);

    // Deployment first, then the fixed infrastructure root, then the role
    assert_eq!(housekeeper1.segments(), ["app1", "immutant", "housekeeper"]);
    assert_eq!(housekeeper2.segments(), ["app2", "immutant", "housekeeper"]);
    assert_eq!(housekeeper1, app1.scope().root().append_name(&well_known::housekeeper()));

    register!(registry, housekeeper1.clone(), "housekeeper-1".to_string());
    register!(registry, housekeeper2.clone(), "housekeeper-2".to_string());

    undeploy!(registry, app1, 1);

    assert_not_found!(registry, housekeeper1);
    assert_lookup!(registry, housekeeper2, "housekeeper-2".to_string());
}

#[tokio::test]
async fn integration_deploy_undeploy_sibling_scopes() {
    crate::immutant_tracing::init();
    let mut registry = ScopedRegistry::new();

    let app1 = MockDeployment::with_services("app1", vec!["web", "jobs"]);
    let app10 = MockDeployment::with_services("app10", vec!["web"]);
    let per_deployment = WellKnownService::ALL.len();

    deploy!(registry, app1);
    deploy!(registry, app10);
    assert_eq!(registry.len(), 2 * per_deployment + 3);

    undeploy!(registry, app1, per_deployment + 2);
    undeploy!(registry, app1, 0);

    for name in app1.all_names() {
        assert_not_found!(registry, name);
    }
    for name in app10.all_names() {
        let value = app10.value_for(&name);
        assert_lookup!(registry, name, value);
    }
}

#[tokio::test]
async fn integration_redeploy_after_undeploy() {
    crate::immutant_tracing::init();
    let mut registry = ScopedRegistry::new();
    let app1 = MockDeployment::with_services("app1", vec!["web"]);

    let scope = registry.open_scope(&app1).unwrap();
    deploy!(registry, app1);

    // Same deployment name while the first one is live
    assert_eq!(
        registry.open_scope(&app1),
        Err(RegistryError::DuplicateRegistration(scope.root().clone()))
    );

    assert_eq!(registry.close_scope(&scope), WellKnownService::ALL.len() + 1);

    let scope = registry.open_scope(&app1).unwrap();
    deploy!(registry, app1);
    assert_eq!(
        registry.call(RegistryRequest::ListScope(scope.root().clone())).await.unwrap(),
        RegistryResponse::Names({
            let mut names = app1.all_names();
            names.sort();
            names
        })
    );
}

#[tokio::test]
async fn integration_duplicate_registration_across_deployments() {
    crate::immutant_tracing::init();
    let mut registry = ScopedRegistry::<String>::untracked();

    // Two units accidentally handed the same deployment name by the provider
    let first = MockDeployment::with_services("app1", vec!["web"]);
    let second = MockDeployment::with_services("app1", vec!["web"]);
    deploy!(registry, first);

    let runtime = second.well_known(WellKnownService::Runtime);
    assert_eq!(
        registry
            .call(RegistryRequest::Register { name: runtime.clone(), value: "second".to_string() })
            .await
            .unwrap_err(),
        RegistryError::DuplicateRegistration(runtime.clone())
    );
    assert_lookup!(registry, runtime.clone(), first.value_for(&runtime));
}

#[tokio::test]
async fn integration_container_infrastructure_names() {
    crate::immutant_tracing::init();
    let mut registry = ScopedRegistry::new();

    // Container-wide services live outside of any deployment scope
    register!(registry, well_known::injectable_handler_registry(), "handlers".to_string());

    let app1 = MockDeployment::new("app1");
    deploy!(registry, app1);
    undeploy!(registry, app1, WellKnownService::ALL.len());

    assert_lookup!(registry, well_known::injectable_handler_registry(), "handlers".to_string());
    assert_eq!(
        registry.call(RegistryRequest::ListScope(well_known::immutant())).await.unwrap(),
        RegistryResponse::Names(vec![well_known::injectable_handler_registry()])
    );
    assert_eq!(
        registry
            .call(RegistryRequest::ListScope(ServiceName::of("app1").unwrap()))
            .await
            .unwrap(),
        RegistryResponse::Names(Vec::new())
    );
}
