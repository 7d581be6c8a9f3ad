use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future::try_join_all;
use serde::de::Error as _;
use tracing::{debug, error};

use crate::core::client::kube_resources::{ObjectMeta, Pod};
use crate::core::client::mappers::map_pod_to_container_names;
use crate::core::client::workload_api_trait::{NamespaceApi, PodApi, WorkloadApi};
use crate::domain::common::model::{DataSelectQuery, DataSelection};
use crate::domain::common::service::data_selector;
use crate::domain::workload::dto::workload_response::{ListResponse, PodsPerNamespace};

pub struct PodService<A: ?Sized = dyn WorkloadApi> {
    api: Arc<A>,
    log_tail_lines: i64,
}

impl<A> PodService<A>
where
    A: PodApi + NamespaceApi + ?Sized,
{
    pub fn new(api: Arc<A>, log_tail_lines: i64) -> Self {
        Self { api, log_tail_lines }
    }

    /// List pods in `namespace` (all when empty), filtered, newest first, paged
    pub async fn list_pods(
        &self,
        namespace: &str,
        query: &DataSelectQuery,
    ) -> Result<ListResponse<Pod>> {
        let pods = self
            .api
            .list_pods(namespace)
            .await
            .inspect_err(|e| error!("Failed to list pods in '{namespace}': {e:?}"))
            .context("failed to list pods")?;

        let DataSelection { items, total } = data_selector::select(pods, query);
        debug!("Selected {} of {} matching pod(s)", items.len(), total);

        Ok(ListResponse { items, total })
    }

    pub async fn get_pod(&self, namespace: &str, pod_name: &str) -> Result<Pod> {
        self.api
            .get_pod(namespace, pod_name)
            .await
            .inspect_err(|e| error!("Failed to get pod {namespace}/{pod_name}: {e:?}"))
            .context("failed to get pod detail")
    }

    pub async fn delete_pod(&self, namespace: &str, pod_name: &str) -> Result<()> {
        self.api
            .delete_pod(namespace, pod_name)
            .await
            .inspect_err(|e| error!("Failed to delete pod {namespace}/{pod_name}: {e:?}"))
            .context("failed to delete pod")
    }

    /// Replace a pod with `content`, the complete object as JSON
    pub async fn update_pod(&self, namespace: &str, content: &str) -> Result<Pod> {
        let pod: Pod = serde_json::from_str(content)
            .inspect_err(|e| error!("Failed to decode pod content: {e}"))
            .context("failed to decode pod content")?;

        let pod_name =
            required_name(&pod.metadata).context("pod content has no metadata.name")?;
        let namespace = effective_namespace(namespace, pod.metadata.namespace.as_deref());

        self.api
            .replace_pod(namespace, &pod_name, &pod)
            .await
            .inspect_err(|e| error!("Failed to update pod {namespace}/{pod_name}: {e:?}"))
            .context("failed to update pod")
    }

    pub async fn get_pod_containers(&self, namespace: &str, pod_name: &str) -> Result<Vec<String>> {
        let pod = self.get_pod(namespace, pod_name).await?;
        Ok(map_pod_to_container_names(&pod))
    }

    /// Tail of one container's log; empty `container` picks the pod's default
    pub async fn get_pod_logs(
        &self,
        namespace: &str,
        pod_name: &str,
        container: &str,
    ) -> Result<String> {
        let container = Some(container).filter(|c| !c.is_empty());

        self.api
            .pod_logs(namespace, pod_name, container, self.log_tail_lines)
            .await
            .inspect_err(|e| error!("Failed to fetch logs of {namespace}/{pod_name}: {e:?}"))
            .context("failed to fetch pod logs")
    }

    /// Pod count for every namespace, in namespace-list order
    pub async fn get_pod_num_per_namespace(&self) -> Result<Vec<PodsPerNamespace>> {
        let namespaces = self
            .api
            .list_namespace_names()
            .await
            .inspect_err(|e| error!("Failed to list namespaces: {e:?}"))
            .context("failed to list namespaces")?;

        let counts = namespaces.into_iter().map(|namespace| async move {
            let pods = self
                .api
                .list_pods(&namespace)
                .await
                .inspect_err(|e| error!("Failed to count pods in '{namespace}': {e:?}"))
                .context("failed to count pods")?;

            Ok::<_, anyhow::Error>(PodsPerNamespace {
                namespace,
                pod_num: pods.len(),
            })
        });

        try_join_all(counts).await
    }
}

/// `metadata.name` of a decoded object; absent or empty counts as malformed content
pub(crate) fn required_name(
    metadata: &ObjectMeta,
) -> std::result::Result<String, serde_json::Error> {
    metadata
        .name
        .clone()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| serde_json::Error::missing_field("metadata.name"))
}

/// Explicit namespace wins over the one embedded in the object
pub(crate) fn effective_namespace<'a>(explicit: &'a str, embedded: Option<&'a str>) -> &'a str {
    if explicit.is_empty() {
        embedded.unwrap_or_default()
    } else {
        explicit
    }
}
