//! Talos Bootstrap Controller
//!
//! Admission-control and readiness-observation pieces of the Talos
//! bootstrap provider for Cluster API. The webhook enforces that
//! `TalosConfigTemplate.spec` is write-once; the readiness module waits
//! for the (separately deployed) bootstrap reconciler to mark a
//! `TalosConfig` ready.

pub mod error;
pub mod readiness;
pub mod server;
pub mod webhook;
