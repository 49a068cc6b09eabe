//! Talos bootstrap provider CRD definitions
//!
//! Kubernetes Custom Resource Definitions for the Talos bootstrap
//! provider, plus partial typed views of the Cluster API resources the
//! provider collaborates with.

pub mod capi;
pub mod talos_config;
pub mod talos_config_template;

pub use talos_config::*;
pub use talos_config_template::*;
