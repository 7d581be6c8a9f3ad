//! Workload API DTOs
//!
//! Field names are snake_case with aliases for the camelCase spellings older
//! clients send.

use serde::Deserialize;
use serde_with::{serde_as, NoneAsEmptyString};

use crate::domain::common::model::DataSelectQuery;

/// Query of the pod/deployment list endpoints
///
/// `limit=` and `page=` with no value read as unset, which disables paging.
#[serde_as]
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct WorkloadListQuery {
    #[serde(alias = "filterName")]
    pub filter_name: String,
    pub namespace: String,
    #[serde_as(as = "NoneAsEmptyString")]
    pub limit: Option<i64>,
    #[serde_as(as = "NoneAsEmptyString")]
    pub page: Option<i64>,
}

impl WorkloadListQuery {
    pub fn to_select_query(&self) -> DataSelectQuery {
        DataSelectQuery::new(
            self.filter_name.clone(),
            self.limit.unwrap_or_default(),
            self.page.unwrap_or_default(),
        )
    }
}

/// Identifies one pod (query string for reads, JSON body for delete)
#[derive(Deserialize, Debug)]
pub struct PodTarget {
    #[serde(alias = "podName")]
    pub pod_name: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Deserialize, Debug)]
pub struct PodLogQuery {
    #[serde(default, alias = "containerName", alias = "contName")]
    pub container_name: String,
    #[serde(alias = "podName")]
    pub pod_name: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Deserialize, Debug)]
pub struct DeploymentTarget {
    #[serde(alias = "deploymentName")]
    pub deployment_name: String,
    #[serde(default)]
    pub namespace: String,
}

/// Full-object replace: `content` is the resource serialized as JSON
#[derive(Deserialize, Debug)]
pub struct WorkloadUpdateBody {
    #[serde(default)]
    pub namespace: String,
    pub content: String,
}
