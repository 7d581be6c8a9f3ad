//! In-memory cluster used by the service and router tests

use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use serde_json::json;

use crate::core::client::kube_resources::{Deployment, Pod};
use crate::core::client::workload_api_trait::{DeploymentApi, NamespaceApi, PodApi};

#[derive(Default)]
pub struct FakeWorkloadApi {
    pub namespaces: Vec<String>,
    /// Keyed by (namespace, name)
    pub pods: Mutex<BTreeMap<(String, String), Pod>>,
    pub deployments: Mutex<BTreeMap<(String, String), Deployment>>,
    /// Every call, as `"<verb> <namespace>/<name>"`
    pub calls: Mutex<Vec<String>>,
    /// When set, every call fails with this message
    pub fail_with: Option<String>,
}

pub fn pod(namespace: &str, name: &str, created: &str) -> Pod {
    serde_json::from_value(json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "creationTimestamp": created
        },
        "spec": {
            "containers": [
                { "name": format!("{name}-app"), "image": "busybox" },
                { "name": "sidecar", "image": "envoy" }
            ]
        }
    }))
    .expect("valid pod")
}

pub fn deployment(namespace: &str, name: &str, created: &str) -> Deployment {
    serde_json::from_value(json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "creationTimestamp": created
        }
    }))
    .expect("valid deployment")
}

impl FakeWorkloadApi {
    pub fn with_namespaces(namespaces: &[&str]) -> Self {
        Self {
            namespaces: namespaces.iter().map(|ns| ns.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn insert_pod(&self, pod: Pod) {
        let key = key_of(&pod.metadata.namespace, &pod.metadata.name);
        self.pods.lock().unwrap().insert(key, pod);
    }

    pub fn insert_deployment(&self, deployment: Deployment) {
        let key = key_of(&deployment.metadata.namespace, &deployment.metadata.name);
        self.deployments.lock().unwrap().insert(key, deployment);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, verb: &str, namespace: &str, name: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{verb} {namespace}/{name}"));

        match &self.fail_with {
            Some(message) => bail!("{message}"),
            None => Ok(()),
        }
    }
}

fn key_of(namespace: &Option<String>, name: &Option<String>) -> (String, String) {
    (
        namespace.clone().unwrap_or_default(),
        name.clone().unwrap_or_default(),
    )
}

fn in_namespace<T: Clone>(
    objects: &BTreeMap<(String, String), T>,
    namespace: &str,
) -> Vec<T> {
    objects
        .iter()
        .filter(|((ns, _), _)| namespace.is_empty() || ns == namespace)
        .map(|(_, obj)| obj.clone())
        .collect()
}

#[async_trait]
impl PodApi for FakeWorkloadApi {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>> {
        self.record("list", namespace, "pods")?;
        Ok(in_namespace(&self.pods.lock().unwrap(), namespace))
    }

    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod> {
        self.record("get", namespace, name)?;
        self.pods
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| anyhow!("pods \"{name}\" not found"))
    }

    async fn replace_pod(&self, namespace: &str, name: &str, pod: &Pod) -> Result<Pod> {
        self.record("replace", namespace, name)?;
        self.pods
            .lock()
            .unwrap()
            .insert((namespace.to_string(), name.to_string()), pod.clone());
        Ok(pod.clone())
    }

    async fn delete_pod(&self, namespace: &str, name: &str) -> Result<()> {
        self.record("delete", namespace, name)?;
        self.pods
            .lock()
            .unwrap()
            .remove(&(namespace.to_string(), name.to_string()))
            .map(|_| ())
            .ok_or_else(|| anyhow!("pods \"{name}\" not found"))
    }

    async fn pod_logs(
        &self,
        namespace: &str,
        name: &str,
        container: Option<&str>,
        tail_lines: i64,
    ) -> Result<String> {
        self.record("logs", namespace, name)?;
        Ok(format!(
            "container={} tail={tail_lines}",
            container.unwrap_or("<default>")
        ))
    }
}

#[async_trait]
impl DeploymentApi for FakeWorkloadApi {
    async fn list_deployments(&self, namespace: &str) -> Result<Vec<Deployment>> {
        self.record("list", namespace, "deployments")?;
        Ok(in_namespace(&self.deployments.lock().unwrap(), namespace))
    }

    async fn get_deployment(&self, namespace: &str, name: &str) -> Result<Deployment> {
        self.record("get", namespace, name)?;
        self.deployments
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| anyhow!("deployments.apps \"{name}\" not found"))
    }

    async fn create_deployment(
        &self,
        namespace: &str,
        deployment: &Deployment,
    ) -> Result<Deployment> {
        let name = deployment.metadata.name.clone().unwrap_or_default();
        self.record("create", namespace, &name)?;
        self.deployments
            .lock()
            .unwrap()
            .insert((namespace.to_string(), name), deployment.clone());
        Ok(deployment.clone())
    }

    async fn replace_deployment(
        &self,
        namespace: &str,
        name: &str,
        deployment: &Deployment,
    ) -> Result<Deployment> {
        self.record("replace", namespace, name)?;
        self.deployments
            .lock()
            .unwrap()
            .insert((namespace.to_string(), name.to_string()), deployment.clone());
        Ok(deployment.clone())
    }

    async fn delete_deployment(&self, namespace: &str, name: &str) -> Result<()> {
        self.record("delete", namespace, name)?;
        self.deployments
            .lock()
            .unwrap()
            .remove(&(namespace.to_string(), name.to_string()))
            .map(|_| ())
            .ok_or_else(|| anyhow!("deployments.apps \"{name}\" not found"))
    }
}

#[async_trait]
impl NamespaceApi for FakeWorkloadApi {
    async fn list_namespace_names(&self) -> Result<Vec<String>> {
        self.record("list", "", "namespaces")?;
        Ok(self.namespaces.clone())
    }
}
