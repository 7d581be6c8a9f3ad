use serde::Serialize;

/// One page of a list call plus the number of items that matched the filter.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodsPerNamespace {
    pub namespace: String,
    pub pod_num: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentsPerNamespace {
    pub namespace: String,
    pub deploy_num: usize,
}
