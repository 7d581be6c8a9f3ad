use anyhow::Result;
use async_trait::async_trait;

use crate::core::client::kube_resources::{Deployment, Pod};

/// Pod operations the pod service needs from the cluster.
#[async_trait]
pub trait PodApi: Send + Sync {
    /// Empty `namespace` lists across all namespaces.
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>>;
    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod>;
    async fn replace_pod(&self, namespace: &str, name: &str, pod: &Pod) -> Result<Pod>;
    async fn delete_pod(&self, namespace: &str, name: &str) -> Result<()>;
    async fn pod_logs(
        &self,
        namespace: &str,
        name: &str,
        container: Option<&str>,
        tail_lines: i64,
    ) -> Result<String>;
}

#[async_trait]
pub trait DeploymentApi: Send + Sync {
    /// Empty `namespace` lists across all namespaces.
    async fn list_deployments(&self, namespace: &str) -> Result<Vec<Deployment>>;
    async fn get_deployment(&self, namespace: &str, name: &str) -> Result<Deployment>;
    async fn create_deployment(
        &self,
        namespace: &str,
        deployment: &Deployment,
    ) -> Result<Deployment>;
    async fn replace_deployment(
        &self,
        namespace: &str,
        name: &str,
        deployment: &Deployment,
    ) -> Result<Deployment>;
    async fn delete_deployment(&self, namespace: &str, name: &str) -> Result<()>;
}

#[async_trait]
pub trait NamespaceApi: Send + Sync {
    async fn list_namespace_names(&self) -> Result<Vec<String>>;
}

/// Everything the workload services need, as one object-safe handle.
pub trait WorkloadApi: PodApi + DeploymentApi + NamespaceApi {}

impl<T> WorkloadApi for T where T: PodApi + DeploymentApi + NamespaceApi {}
