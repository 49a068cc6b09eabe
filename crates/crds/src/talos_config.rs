//! TalosConfig CRD
//!
//! Machine bootstrap configuration for a Talos node. Created by a client
//! once its owning Machine exists; the bootstrap reconciler generates the
//! machine configuration and flips `status.ready` exactly once.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[kube(
    group = "bootstrap.cluster.x-k8s.io",
    version = "v1alpha3",
    kind = "TalosConfig",
    namespaced,
    status = "TalosConfigStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct TalosConfigSpec {
    /// Type of configuration to generate ("init", "controlplane", "join", "none")
    pub generate_type: String,

    /// User-supplied machine configuration, used when `generateType` is "none"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct TalosConfigStatus {
    /// True once bootstrap data has been generated and stored
    #[serde(default)]
    pub ready: bool,

    /// Name of the secret holding the generated bootstrap data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_secret_name: Option<String>,

    /// Client-side Talos configuration for reaching the node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talos_config: Option<String>,

    /// Error message if generation failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
