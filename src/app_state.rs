use std::sync::Arc;

use crate::config::AppConfig;
use crate::core::client::workload_api_trait::WorkloadApi;
use crate::domain::workload::service::workload_deployment_service::DeploymentService;
use crate::domain::workload::service::workload_pod_service::PodService;

#[derive(Clone)]
pub struct AppState {
    pub pod_service: Arc<PodService>,
    pub deployment_service: Arc<DeploymentService>,
}

/// Both services share one cluster handle.
pub fn build_app_state(api: Arc<dyn WorkloadApi>, config: &AppConfig) -> AppState {
    AppState {
        pod_service: Arc::new(PodService::new(api.clone(), config.pod_log_tail_lines)),
        deployment_service: Arc::new(DeploymentService::new(api)),
    }
}
