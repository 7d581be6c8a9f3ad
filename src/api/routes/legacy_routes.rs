//! Path spellings of the first web console (e.g., /api/k8s/PodDetail, /api/k8s/appsv1/*)
//!
//! Same controllers as the pod and deployment routes; `/api/k8s/pods` is shared.

use axum::{routing::{delete, get, post, put}, Router};
use crate::api::controller::workload::deployment::DeploymentController;
use crate::api::controller::workload::pod::PodController;
use crate::app_state::AppState;

pub fn legacy_routes() -> Router<AppState> {
    Router::new()
        .route("/PodDetail", get(PodController::get_pod_detail))
        .route("/delete", delete(PodController::delete_pod))
        .route("/update", put(PodController::update_pod))
        .route("/GetContName", get(PodController::get_pod_containers))
        .route("/getlogs", get(PodController::get_pod_logs))
        .route("/podnum", get(PodController::get_pod_num_per_namespace))
        .nest("/appsv1", legacy_deployment_routes())
}

fn legacy_deployment_routes() -> Router<AppState> {
    Router::new()
        .route("/getdeploy", get(DeploymentController::list_deployments))
        .route("/getdetail", get(DeploymentController::get_deployment_detail))
        .route("/deldeployment", delete(DeploymentController::delete_deployment))
        .route("/updatedeployment", put(DeploymentController::update_deployment))
        .route(
            "/getdeploymenynum",
            get(DeploymentController::get_deployment_num_per_namespace),
        )
        .route("/createdeployment", post(DeploymentController::create_deployment))
}
