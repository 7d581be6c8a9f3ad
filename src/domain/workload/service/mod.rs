//! Pod and Deployment use cases, delegating to the cluster

pub mod workload_deployment_service;
pub mod workload_pod_service;

#[cfg(test)]
pub(crate) mod fake_workload_api;
