//! Maps kube-rs / k8s-openapi types → internal domain shapes

use chrono::{DateTime, Utc};

use crate::core::client::kube_resources::{Deployment, ObjectMeta, Pod, Time};
use crate::domain::common::model::DataCell;

/// Converts a k8s-openapi `Time` into a chrono timestamp.
///
/// Goes through the RFC 3339 wire form so it does not depend on which time
/// crate k8s-openapi wraps.
pub fn k8s_time_to_utc(ts: &Time) -> Option<DateTime<Utc>> {
    let value = serde_json::to_value(ts).ok()?;
    let raw = value.as_str()?;

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn meta_creation_time(metadata: &ObjectMeta) -> Option<DateTime<Utc>> {
    metadata.creation_timestamp.as_ref().and_then(k8s_time_to_utc)
}

fn meta_name(metadata: &ObjectMeta) -> &str {
    metadata.name.as_deref().unwrap_or_default()
}

impl DataCell for Pod {
    fn creation_time(&self) -> Option<DateTime<Utc>> {
        meta_creation_time(&self.metadata)
    }

    fn name(&self) -> &str {
        meta_name(&self.metadata)
    }
}

impl DataCell for Deployment {
    fn creation_time(&self) -> Option<DateTime<Utc>> {
        meta_creation_time(&self.metadata)
    }

    fn name(&self) -> &str {
        meta_name(&self.metadata)
    }
}

/// Container names of a pod, in spec order
pub fn map_pod_to_container_names(pod: &Pod) -> Vec<String> {
    pod.spec
        .as_ref()
        .map(|spec| spec.containers.iter().map(|c| c.name.clone()).collect())
        .unwrap_or_default()
}
