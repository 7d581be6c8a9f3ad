use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Restricted set of fields a Deployment is assembled from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_health_check"))]
pub struct DeploymentCreateRequest {
    #[validate(length(min = 1, max = 253))]
    pub name: String,
    #[validate(length(min = 1, max = 63))]
    pub namespace: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub replicas: i32,
    #[validate(length(min = 1))]
    pub image: String,
    /// Applied to the Deployment, its selector and the pod template.
    #[serde(default, alias = "labels")]
    pub label: BTreeMap<String, String>,
    /// Used as both request and limit, e.g. `"500m"`.
    #[serde(default)]
    pub cpu: Option<String>,
    /// Used as both request and limit, e.g. `"256Mi"`.
    #[serde(default)]
    pub memory: Option<String>,
    #[serde(alias = "container_port")]
    #[validate(range(min = 1, max = 65535))]
    pub container_port: i32,
    #[serde(default, alias = "health_check")]
    pub health_check: bool,
    #[serde(default, alias = "health_path")]
    pub health_path: Option<String>,
}

fn validate_health_check(req: &DeploymentCreateRequest) -> Result<(), ValidationError> {
    if !req.health_check {
        return Ok(());
    }

    match req.health_path.as_deref() {
        Some(path) if path.starts_with('/') => Ok(()),
        _ => Err(ValidationError::new("health_path")
            .with_message("healthPath must start with '/' when healthCheck is enabled".into())),
    }
}
