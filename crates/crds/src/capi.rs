//! Partial Cluster API resource types
//!
//! Typed views of the upstream `cluster.x-k8s.io/v1alpha3` Cluster and
//! Machine resources, limited to the fields the bootstrap flow touches.
//! These resources are owned by Cluster API itself; they are declared
//! here only so the provider and its tests can create and read them with
//! a typed client. crdgen deliberately does not emit them.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[kube(
    group = "cluster.x-k8s.io",
    version = "v1alpha3",
    kind = "Cluster",
    namespaced,
    status = "ClusterStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    /// Cluster-wide network configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_network: Option<ClusterNetwork>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClusterNetwork {
    /// Pod network ranges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pods: Option<NetworkRanges>,

    /// Service network ranges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<NetworkRanges>,

    /// Cluster DNS service domain (e.g. "cluster.local")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_domain: Option<String>,
}

/// A list of CIDR blocks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRanges {
    /// CIDR blocks in "a.b.c.d/nn" notation
    pub cidr_blocks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStatus {
    /// Set by the infrastructure provider once the underlying
    /// infrastructure exists; gates bootstrap-config processing
    #[serde(default)]
    pub infrastructure_ready: bool,
}

#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[kube(
    group = "cluster.x-k8s.io",
    version = "v1alpha3",
    kind = "Machine",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct MachineSpec {
    /// Name of the owning Cluster
    pub cluster_name: String,

    /// Bootstrap configuration for this machine
    #[serde(default)]
    pub bootstrap: Bootstrap,
}

/// Machine bootstrap linkage.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct Bootstrap {
    /// Name of the secret holding bootstrap data, set either by the
    /// client up front or by the bootstrap reconciler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_secret_name: Option<String>,
}
