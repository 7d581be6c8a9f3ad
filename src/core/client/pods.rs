use anyhow::Result;
use kube::api::{DeleteParams, ListParams, LogParams, PostParams};
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Pod;

/// Namespaced pod API; an empty namespace spans the whole cluster
fn pods_api(client: &Client, namespace: &str) -> Api<Pod> {
    if namespace.is_empty() {
        Api::all(client.clone())
    } else {
        Api::namespaced(client.clone(), namespace)
    }
}

/// Single-object pod API; an empty namespace means the client's default
fn pod_api(client: &Client, namespace: &str) -> Api<Pod> {
    if namespace.is_empty() {
        Api::default_namespaced(client.clone())
    } else {
        Api::namespaced(client.clone(), namespace)
    }
}

/// Fetch pods in a namespace (all namespaces when empty)
pub async fn fetch_pods_by_namespace(client: &Client, namespace: &str) -> Result<Vec<Pod>> {
    let pod_list = pods_api(client, namespace)
        .list(&ListParams::default())
        .await?;

    debug!("Discovered {} pod(s) in namespace '{}'", pod_list.items.len(), namespace);
    Ok(pod_list.items)
}

/// Fetch a single pod by name and namespace
pub async fn fetch_pod_by_name_and_namespace(
    client: &Client,
    namespace: &str,
    pod_name: &str,
) -> Result<Pod> {
    let pod = pod_api(client, namespace).get(pod_name).await?;

    debug!("Fetched pod: {}/{}", namespace, pod_name);
    Ok(pod)
}

/// Replace a pod with the given object (full update, no merge)
pub async fn replace_pod(
    client: &Client,
    namespace: &str,
    pod_name: &str,
    pod: &Pod,
) -> Result<Pod> {
    let updated = pod_api(client, namespace)
        .replace(pod_name, &PostParams::default(), pod)
        .await?;

    debug!("Replaced pod: {}/{}", namespace, pod_name);
    Ok(updated)
}

/// Delete a pod by name and namespace
pub async fn delete_pod(client: &Client, namespace: &str, pod_name: &str) -> Result<()> {
    pod_api(client, namespace)
        .delete(pod_name, &DeleteParams::default())
        .await?;

    debug!("Deleted pod: {}/{}", namespace, pod_name);
    Ok(())
}

/// Fetch the last `tail_lines` lines of a container's log
pub async fn fetch_pod_logs(
    client: &Client,
    namespace: &str,
    pod_name: &str,
    container: Option<&str>,
    tail_lines: i64,
) -> Result<String> {
    let params = LogParams {
        container: container.map(str::to_owned),
        tail_lines: Some(tail_lines),
        ..LogParams::default()
    };
    let logs = pod_api(client, namespace).logs(pod_name, &params).await?;

    debug!("Fetched {} byte(s) of logs from {}/{}", logs.len(), namespace, pod_name);
    Ok(logs)
}
