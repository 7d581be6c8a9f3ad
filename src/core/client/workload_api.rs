use anyhow::Result;
use async_trait::async_trait;
use kube::Client;

use crate::core::client::kube_resources::{Deployment, Pod};
use crate::core::client::workload_api_trait::{DeploymentApi, NamespaceApi, PodApi};
use crate::core::client::{deployments, namespaces, pods};

/// Cluster access backed by one shared `kube::Client`.
#[derive(Clone)]
pub struct KubeWorkloadApi {
    client: Client,
}

impl KubeWorkloadApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PodApi for KubeWorkloadApi {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>> {
        pods::fetch_pods_by_namespace(&self.client, namespace).await
    }

    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod> {
        pods::fetch_pod_by_name_and_namespace(&self.client, namespace, name).await
    }

    async fn replace_pod(&self, namespace: &str, name: &str, pod: &Pod) -> Result<Pod> {
        pods::replace_pod(&self.client, namespace, name, pod).await
    }

    async fn delete_pod(&self, namespace: &str, name: &str) -> Result<()> {
        pods::delete_pod(&self.client, namespace, name).await
    }

    async fn pod_logs(
        &self,
        namespace: &str,
        name: &str,
        container: Option<&str>,
        tail_lines: i64,
    ) -> Result<String> {
        pods::fetch_pod_logs(&self.client, namespace, name, container, tail_lines).await
    }
}

#[async_trait]
impl DeploymentApi for KubeWorkloadApi {
    async fn list_deployments(&self, namespace: &str) -> Result<Vec<Deployment>> {
        deployments::fetch_deployments_by_namespace(&self.client, namespace).await
    }

    async fn get_deployment(&self, namespace: &str, name: &str) -> Result<Deployment> {
        deployments::fetch_deployment_by_name_and_namespace(&self.client, namespace, name).await
    }

    async fn create_deployment(
        &self,
        namespace: &str,
        deployment: &Deployment,
    ) -> Result<Deployment> {
        deployments::create_deployment(&self.client, namespace, deployment).await
    }

    async fn replace_deployment(
        &self,
        namespace: &str,
        name: &str,
        deployment: &Deployment,
    ) -> Result<Deployment> {
        deployments::replace_deployment(&self.client, namespace, name, deployment).await
    }

    async fn delete_deployment(&self, namespace: &str, name: &str) -> Result<()> {
        deployments::delete_deployment(&self.client, namespace, name).await
    }
}

#[async_trait]
impl NamespaceApi for KubeWorkloadApi {
    async fn list_namespace_names(&self) -> Result<Vec<String>> {
        namespaces::fetch_namespace_names(&self.client).await
    }
}
