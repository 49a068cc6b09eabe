//! Bootstrap-config readiness polling.
//!
//! The bootstrap reconciler flips `TalosConfig.status.ready` exactly once,
//! asynchronously. Callers that need to wait for that transition (the
//! integration suite, operational tooling) poll the object at a fixed
//! interval until it becomes ready or their deadline expires. Transport
//! errors are not retried here; only the readiness flag is polled.

use crate::error::ControllerError;
use async_trait::async_trait;
use crds::TalosConfig;
use kube::Api;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Source of TalosConfig objects, keyed by name within a namespace.
///
/// This trait abstracts the backing store so the poll loop can be unit
/// tested against an in-memory implementation. The namespace is fixed by
/// the source itself (a namespaced `Api` in production).
#[async_trait]
pub trait TalosConfigSource: Send + Sync {
    /// Fetches the current state of the named TalosConfig.
    async fn fetch(&self, name: &str) -> Result<TalosConfig, kube::Error>;
}

#[async_trait]
impl TalosConfigSource for Api<TalosConfig> {
    async fn fetch(&self, name: &str) -> Result<TalosConfig, kube::Error> {
        self.get(name).await
    }
}

/// Polls a TalosConfig until `status.ready` becomes true.
///
/// Re-fetches the object, returning it on the first ready observation.
/// A fetch error fails the wait immediately. If `deadline` passes before
/// readiness is observed, the wait fails with [`ControllerError::Timeout`]
/// carrying the last observed state; the final sleep is clamped to the
/// deadline so the loop exits promptly. There is no attempt cap: total
/// wait time is entirely the caller's deadline.
pub async fn wait_for_ready<S>(
    source: &S,
    name: &str,
    interval: Duration,
    deadline: Instant,
) -> Result<TalosConfig, ControllerError>
where
    S: TalosConfigSource + ?Sized,
{
    loop {
        let config = source.fetch(name).await?;

        if config.status.as_ref().is_some_and(|status| status.ready) {
            debug!("TalosConfig {} is ready", name);
            return Ok(config);
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(ControllerError::Timeout {
                last: last_observed(&config),
            });
        }

        debug!("TalosConfig {} not ready yet, retrying", name);
        tokio::time::sleep_until(deadline.min(now + interval)).await;
    }
}

fn last_observed(config: &TalosConfig) -> String {
    match &config.status {
        Some(status) => format!(
            "ready={}, dataSecretName={:?}, error={:?}",
            status.ready, status.data_secret_name, status.error
        ),
        None => "no status".to_string(),
    }
}
