//! Admission webhook HTTP server.
//!
//! Serves the TalosConfigTemplate validating webhook plus liveness and
//! readiness probes. The API server posts an `AdmissionReview` to the
//! validate path and commits or aborts the write based on the response;
//! the webhook is registered with `failurePolicy=fail`, so an unreachable
//! server also blocks the write. TLS is terminated in front of this
//! process.

use crate::webhook;
use axum::routing::{get, post};
use axum::{Json, Router};
use crds::TalosConfigTemplate;
use kube::core::DynamicObject;
use kube::core::admission::{AdmissionRequest, AdmissionResponse, AdmissionReview};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

/// Webhook path for TalosConfigTemplate validation, matching the
/// registration in the provider's webhook configuration manifest.
pub const VALIDATE_TEMPLATE_PATH: &str =
    "/validate-bootstrap-cluster-x-k8s-io-v1alpha3-talosconfigtemplate";

/// Builds the webhook router.
pub fn router() -> Router {
    Router::new()
        .route(VALIDATE_TEMPLATE_PATH, post(validate_template))
        .route("/healthz", get(healthz))
        .route("/readyz", get(healthz))
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn validate_template(
    Json(review): Json<AdmissionReview<TalosConfigTemplate>>,
) -> Json<AdmissionReview<DynamicObject>> {
    let req: AdmissionRequest<TalosConfigTemplate> = match review.try_into() {
        Ok(req) => req,
        Err(err) => {
            error!("Invalid admission review: {}", err);
            return Json(AdmissionResponse::invalid(err.to_string()).into_review());
        }
    };

    let res = webhook::review(&req);
    if !res.allowed {
        warn!(
            "Denied {:?} of TalosConfigTemplate {}/{}",
            req.operation,
            req.namespace.as_deref().unwrap_or("<cluster>"),
            req.name
        );
    }

    Json(res.into_review())
}
