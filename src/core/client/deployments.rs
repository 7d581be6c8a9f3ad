use anyhow::Result;
use kube::api::{DeleteParams, ListParams, PostParams};
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::kube_resources::Deployment;

fn deployments_api(client: &Client, namespace: &str) -> Api<Deployment> {
    if namespace.is_empty() {
        Api::all(client.clone())
    } else {
        Api::namespaced(client.clone(), namespace)
    }
}

fn deployment_api(client: &Client, namespace: &str) -> Api<Deployment> {
    if namespace.is_empty() {
        Api::default_namespaced(client.clone())
    } else {
        Api::namespaced(client.clone(), namespace)
    }
}

/// Fetch deployments in a namespace (all namespaces when empty)
pub async fn fetch_deployments_by_namespace(
    client: &Client,
    namespace: &str,
) -> Result<Vec<Deployment>> {
    let deployment_list = deployments_api(client, namespace)
        .list(&ListParams::default())
        .await?;

    debug!(
        "Discovered {} deployment(s) in namespace '{}'",
        deployment_list.items.len(),
        namespace
    );
    Ok(deployment_list.items)
}

/// Fetch a single deployment by name and namespace
pub async fn fetch_deployment_by_name_and_namespace(
    client: &Client,
    namespace: &str,
    deployment_name: &str,
) -> Result<Deployment> {
    let deployment = deployment_api(client, namespace).get(deployment_name).await?;

    debug!("Fetched deployment: {}/{}", namespace, deployment_name);
    Ok(deployment)
}

pub async fn create_deployment(
    client: &Client,
    namespace: &str,
    deployment: &Deployment,
) -> Result<Deployment> {
    let created = deployment_api(client, namespace)
        .create(&PostParams::default(), deployment)
        .await?;

    debug!("Created deployment in namespace '{}'", namespace);
    Ok(created)
}

pub async fn replace_deployment(
    client: &Client,
    namespace: &str,
    deployment_name: &str,
    deployment: &Deployment,
) -> Result<Deployment> {
    let updated = deployment_api(client, namespace)
        .replace(deployment_name, &PostParams::default(), deployment)
        .await?;

    debug!("Replaced deployment: {}/{}", namespace, deployment_name);
    Ok(updated)
}

pub async fn delete_deployment(
    client: &Client,
    namespace: &str,
    deployment_name: &str,
) -> Result<()> {
    deployment_api(client, namespace)
        .delete(deployment_name, &DeleteParams::default())
        .await?;

    debug!("Deleted deployment: {}/{}", namespace, deployment_name);
    Ok(())
}
