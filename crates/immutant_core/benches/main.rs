use criterion::{Criterion, black_box, criterion_group, criterion_main};
use immutant_core::services::{
    naming::{ServiceName, WellKnownService},
    registry::{DeploymentScope, ScopedRegistry},
};
use tower::Service;

// Helper functions for creating test data
fn create_scope(i: usize) -> DeploymentScope {
    DeploymentScope::new(format!("app{i}")).unwrap()
}

fn populated_registry(deployments: usize) -> ScopedRegistry<usize> {
    let registry = ScopedRegistry::new();
    for i in 0..deployments {
        let scope = create_scope(i);
        for (j, role) in WellKnownService::ALL.iter().enumerate() {
            registry.register(scope.well_known(*role), j).unwrap();
        }
    }
    registry
}

// Naming Benchmarks
fn bench_naming_append(c: &mut Criterion) {
    let root = ServiceName::of("app1").unwrap();
    c.bench_function("naming_append", |b| {
        b.iter(|| black_box(root.append("immutant").unwrap().append("housekeeper").unwrap()));
    });
}

fn bench_naming_derive_all_roles(c: &mut Criterion) {
    let root = ServiceName::of("app1").unwrap();
    c.bench_function("naming_derive_all_roles", |b| {
        b.iter(|| {
            for role in WellKnownService::ALL {
                black_box(role.derive(&root));
            }
        });
    });
}

// Registry Benchmarks
fn bench_registry_register(c: &mut Criterion) {
    c.bench_function("registry_register", |b| {
        b.iter(|| {
            let registry = ScopedRegistry::new();
            let scope = create_scope(0);
            for role in WellKnownService::ALL {
                let _ = black_box(registry.register(scope.well_known(role), role));
            }
        });
    });
}

fn bench_registry_lookup_populated(c: &mut Criterion) {
    let registry = populated_registry(1000);
    let housekeeper = create_scope(500).well_known(WellKnownService::Housekeeper);
    c.bench_function("registry_lookup_populated", |b| {
        b.iter(|| black_box(registry.lookup(&housekeeper)));
    });
}

fn bench_registry_unregister_scope(c: &mut Criterion) {
    c.bench_function("registry_unregister_scope", |b| {
        b.iter_batched(
            || populated_registry(100),
            |registry| black_box(registry.unregister_scope(create_scope(50).root())),
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_registry_service_lookup(c: &mut Criterion) {
    let registry = populated_registry(1000);
    let runtime = create_scope(500).well_known(WellKnownService::Runtime);
    c.bench_function("registry_service_lookup", |b| {
        b.to_async(tokio::runtime::Runtime::new().unwrap()).iter(|| {
            let mut registry = registry.clone();
            let runtime = runtime.clone();
            async move {
                let _ = black_box(
                    registry
                        .call(immutant_core::services::api::RegistryRequest::Lookup(runtime))
                        .await,
                );
            }
        });
    });
}

criterion_group!(naming_benches, bench_naming_append, bench_naming_derive_all_roles);

criterion_group!(
    registry_benches,
    bench_registry_register,
    bench_registry_lookup_populated,
    bench_registry_unregister_scope,
    bench_registry_service_lookup,
);

criterion_main!(naming_benches, registry_benches);
