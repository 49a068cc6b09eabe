//! TalosConfigTemplate CRD
//!
//! Template resource stamped out per machine by Cluster API machine
//! deployments. The spec is write-once: the admission webhook rejects any
//! update that changes it. Equality is the derived structural comparison
//! over the full value tree, so two independently constructed but
//! identical specs always compare equal.

use crate::talos_config::TalosConfigSpec;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[kube(
    group = "bootstrap.cluster.x-k8s.io",
    version = "v1alpha3",
    kind = "TalosConfigTemplate",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct TalosConfigTemplateSpec {
    /// Per-machine config template
    pub template: TalosConfigTemplateResource,
}

/// Template for a single TalosConfig instance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TalosConfigTemplateResource {
    /// Spec copied into each generated TalosConfig
    pub spec: TalosConfigSpec,
}
