use anyhow::Result;
use kube::api::ListParams;
use kube::{Api, Client, ResourceExt};
use tracing::debug;

use crate::core::client::kube_resources::Namespace;

/// Names of every namespace the client can see, in API-server order
pub async fn fetch_namespace_names(client: &Client) -> Result<Vec<String>> {
    let api: Api<Namespace> = Api::all(client.clone());
    let names: Vec<String> = api
        .list_metadata(&ListParams::default())
        .await?
        .items
        .iter()
        .map(|ns| ns.name_any())
        .collect();

    debug!("Found {} namespace(s): {:?}", names.len(), names);
    Ok(names)
}
