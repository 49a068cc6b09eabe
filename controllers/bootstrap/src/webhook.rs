//! Admission validation for TalosConfigTemplate.
//!
//! Enforces that the template spec is write-once. The checks are pure
//! functions over typed objects so they stay trivially unit-testable;
//! `review` adapts them to the admission request/response shapes the API
//! server speaks.

use crate::error::ControllerError;
use crds::TalosConfigTemplate;
use kube::core::admission::{AdmissionRequest, AdmissionResponse, Operation};

/// Human-readable warnings returned alongside an accepted request.
///
/// This provider never emits warnings, but the admission contract carries
/// them, so the validators keep the slot in their signatures.
pub type Warnings = Vec<String>;

/// Validates a TalosConfigTemplate creation. Creation is unconstrained.
pub fn validate_create(_obj: &TalosConfigTemplate) -> Result<Warnings, ControllerError> {
    Ok(Warnings::new())
}

/// Validates a TalosConfigTemplate update.
///
/// The spec is immutable after creation. Comparison is the derived
/// structural equality over the whole spec tree, so logically identical
/// specs built through different code paths are accepted; metadata and
/// any other field may change freely.
pub fn validate_update(
    old: &TalosConfigTemplate,
    new: &TalosConfigTemplate,
) -> Result<Warnings, ControllerError> {
    if old.spec != new.spec {
        return Err(ControllerError::Immutable(
            "TalosConfigTemplate.spec is immutable".to_string(),
        ));
    }

    Ok(Warnings::new())
}

/// Validates a TalosConfigTemplate deletion. Deletion is unconstrained.
pub fn validate_delete(_obj: &TalosConfigTemplate) -> Result<Warnings, ControllerError> {
    Ok(Warnings::new())
}

/// Evaluates an admission request against the validators.
///
/// Synchronous and side-effect free: the response must be produced before
/// the API server commits the write, so no I/O happens here.
pub fn review(req: &AdmissionRequest<TalosConfigTemplate>) -> AdmissionResponse {
    let outcome = match req.operation {
        Operation::Create => match req.object.as_ref() {
            Some(obj) => validate_create(obj),
            None => Ok(Warnings::new()),
        },
        Operation::Update => match (req.old_object.as_ref(), req.object.as_ref()) {
            (Some(old), Some(new)) => validate_update(old, new),
            // Nothing to compare against; let the API server's own
            // consistency checks handle a malformed update request.
            _ => Ok(Warnings::new()),
        },
        Operation::Delete => match req.old_object.as_ref() {
            Some(obj) => validate_delete(obj),
            None => Ok(Warnings::new()),
        },
        Operation::Connect => Ok(Warnings::new()),
    };

    match outcome {
        Ok(warnings) => {
            let mut res = AdmissionResponse::from(req);
            if !warnings.is_empty() {
                res.warnings = Some(warnings);
            }
            res
        }
        Err(err) => AdmissionResponse::from(req).deny(err.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crds::{TalosConfigSpec, TalosConfigTemplateResource, TalosConfigTemplateSpec};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
    use kube::core::admission::AdmissionReview;
    use serde_json::json;

    fn template(generate_type: &str, data: Option<&str>) -> TalosConfigTemplate {
        TalosConfigTemplate {
            metadata: ObjectMeta {
                name: Some("test-template".to_string()),
                namespace: Some("default".to_string()),
                ..Default::default()
            },
            spec: TalosConfigTemplateSpec {
                template: TalosConfigTemplateResource {
                    spec: TalosConfigSpec {
                        generate_type: generate_type.to_string(),
                        data: data.map(|s| s.to_string()),
                    },
                },
            },
        }
    }

    #[test]
    fn test_create_always_allowed() {
        assert!(validate_create(&template("init", None)).unwrap().is_empty());

        // Zero-value object is fine too
        let zero = TalosConfigTemplate {
            metadata: ObjectMeta::default(),
            spec: TalosConfigTemplateSpec::default(),
        };
        assert!(validate_create(&zero).unwrap().is_empty());
    }

    #[test]
    fn test_delete_always_allowed() {
        assert!(validate_delete(&template("init", None)).unwrap().is_empty());
    }

    #[test]
    fn test_update_equal_specs_allowed() {
        // Two independently constructed but identical specs must compare
        // equal; identity comparison would reject this pair.
        let old = template("init", Some("machine-config"));
        let new = template("init", Some("machine-config"));

        assert!(validate_update(&old, &new).unwrap().is_empty());
    }

    #[test]
    fn test_update_metadata_change_allowed() {
        let old = template("init", None);
        let mut new = template("init", None);
        new.metadata.labels =
            Some([("app".to_string(), "talos".to_string())].into_iter().collect());
        new.metadata.resource_version = Some("42".to_string());

        assert!(validate_update(&old, &new).is_ok());
    }

    #[test]
    fn test_update_changed_spec_denied() {
        let old = template("init", None);
        let new = template("join", None);

        let err = validate_update(&old, &new).unwrap_err();
        assert!(matches!(err, ControllerError::Immutable(_)));
    }

    #[test]
    fn test_update_nested_field_change_denied() {
        // Equality must recurse into the full value tree
        let old = template("init", Some("a"));
        let new = template("init", Some("b"));

        let err = validate_update(&old, &new).unwrap_err();
        assert!(matches!(err, ControllerError::Immutable(_)));
    }

    fn update_request(
        old: &TalosConfigTemplate,
        new: &TalosConfigTemplate,
    ) -> AdmissionRequest<TalosConfigTemplate> {
        let review_json = json!({
            "apiVersion": "admission.k8s.io/v1",
            "kind": "AdmissionReview",
            "request": {
                "uid": "test-uid",
                "kind": {
                    "group": "bootstrap.cluster.x-k8s.io",
                    "version": "v1alpha3",
                    "kind": "TalosConfigTemplate"
                },
                "resource": {
                    "group": "bootstrap.cluster.x-k8s.io",
                    "version": "v1alpha3",
                    "resource": "talosconfigtemplates"
                },
                "name": "test-template",
                "namespace": "default",
                "operation": "UPDATE",
                "userInfo": {},
                "object": serde_json::to_value(new).unwrap(),
                "oldObject": serde_json::to_value(old).unwrap()
            }
        });

        let review: AdmissionReview<TalosConfigTemplate> =
            serde_json::from_value(review_json).unwrap();
        review.try_into().unwrap()
    }

    #[test]
    fn test_review_allows_unchanged_spec() {
        let req = update_request(&template("init", None), &template("init", None));

        let res = review(&req);
        assert!(res.allowed);
        assert!(res.warnings.is_none());
    }

    #[test]
    fn test_review_denies_changed_spec() {
        let req = update_request(&template("init", None), &template("controlplane", None));

        let res = review(&req);
        assert!(!res.allowed, "spec change must be rejected");
        assert!(res.warnings.is_none());
    }
}
