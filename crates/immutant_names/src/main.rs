use clap::{Parser, ValueEnum};
use immutant_core::services::{naming::WellKnownService, registry::DeploymentScope};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Role {
    ServiceRegistry,
    ServiceTarget,
    RuntimeInjectionAnalyzer,
    NsContextSelector,
    Housekeeper,
    Runtime,
    AppInitializer,
    ResourceMounter,
}

impl From<Role> for WellKnownService {
    fn from(role: Role) -> Self {
        match role {
            Role::ServiceRegistry => WellKnownService::ServiceRegistry,
            Role::ServiceTarget => WellKnownService::ServiceTarget,
            Role::RuntimeInjectionAnalyzer => WellKnownService::RuntimeInjectionAnalyzer,
            Role::NsContextSelector => WellKnownService::NamespaceContextSelector,
            Role::Housekeeper => WellKnownService::Housekeeper,
            Role::Runtime => WellKnownService::Runtime,
            Role::AppInitializer => WellKnownService::AppInitializer,
            Role::ResourceMounter => WellKnownService::ResourceMounter,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "immutant_names")]
#[command(about = "Print the scoped service names of an Immutant deployment")]
struct ImmutantNamesArgs {
    /// Deployment name seeding the scope root
    deployment: String,

    /// Only print the name of this infrastructure role
    #[arg(short, long, value_enum)]
    role: Option<Role>,

    /// Also print the name of an application service in the scope
    #[arg(short, long)]
    service: Vec<String>,
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    immutant_core::immutant_tracing::init();

    let args = ImmutantNamesArgs::parse();
    let scope = DeploymentScope::new(args.deployment)?;
    tracing::debug!(scope = %scope.root(), "deriving scoped names");

    let roles = match args.role {
        Some(role) => vec![WellKnownService::from(role)],
        None => WellKnownService::ALL.to_vec(),
    };
    for role in roles {
        println!("{role}\t{}", scope.well_known(role));
    }
    for service in args.service {
        let name = scope.service(service)?;
        println!("{}\t{name}", name.simple_name());
    }

    Ok(())
}
