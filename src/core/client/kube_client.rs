use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::debug;

use crate::config::AppConfig;

/// Creates a Kubernetes client from an explicit kubeconfig, or inferred
/// (in-cluster service account, then local kubeconfig)
pub async fn build_kube_client(config: &AppConfig) -> Result<Client> {
    let mut kube_config = match &config.kubeconfig {
        Some(path) => {
            debug!("Using kubeconfig from {}", path.display());
            let kubeconfig = Kubeconfig::read_from(path)
                .with_context(|| format!("failed to read kubeconfig {}", path.display()))?;
            Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?
        }
        None => {
            debug!("Inferring cluster configuration");
            Config::infer().await?
        }
    };

    kube_config.read_timeout = Some(config.request_timeout);

    let client = Client::try_from(kube_config)?;
    debug!("Kubernetes client initialized successfully");
    Ok(client)
}
