//! Controller-specific error types.
//!
//! This module defines error types specific to the Talos bootstrap
//! controller that are not covered by upstream library errors.

use kube::Error as KubeError;
use thiserror::Error;

/// Errors that can occur in the Talos bootstrap controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Admission rejection: an update attempted to change an immutable spec
    #[error("{0}")]
    Immutable(String),

    /// Kubernetes API error (transport failures, NotFound, conflicts)
    #[error("Kubernetes error: {0}")]
    Kube(#[from] KubeError),

    /// Deadline elapsed before readiness was observed
    #[error("timed out waiting for readiness; last observed: {last}")]
    Timeout {
        /// Description of the last object state seen before expiry
        last: String,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Webhook serving failed
    #[error("Webhook server failed: {0}")]
    Serve(String),
}
