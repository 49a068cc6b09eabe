//! CRD manifest generator
//!
//! Prints the provider-owned CRD manifests as YAML documents to stdout.
//! Cluster API's own resources (Cluster, Machine) are not emitted; those
//! CRDs are installed by Cluster API itself.

use crds::{TalosConfig, TalosConfigTemplate};
use kube::CustomResourceExt;

fn main() -> Result<(), serde_yaml::Error> {
    print!("{}", serde_yaml::to_string(&TalosConfig::crd())?);
    println!("---");
    print!("{}", serde_yaml::to_string(&TalosConfigTemplate::crd())?);
    Ok(())
}
