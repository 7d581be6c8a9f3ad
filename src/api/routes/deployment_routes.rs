//! Deployment routes (e.g., /api/k8s/deployments, /api/k8s/deployment/*)

use axum::{routing::{delete, get, post, put}, Router};
use crate::api::controller::workload::deployment::DeploymentController;
use crate::app_state::AppState;

pub fn deployment_routes() -> Router<AppState> {
    Router::new()
        .route("/deployments", get(DeploymentController::list_deployments))
        .route("/deployment/detail", get(DeploymentController::get_deployment_detail))
        .route("/deployment/del", delete(DeploymentController::delete_deployment))
        .route("/deployment/update", put(DeploymentController::update_deployment))
        .route("/deployment/create", post(DeploymentController::create_deployment))
        .route(
            "/deployment/numnp",
            get(DeploymentController::get_deployment_num_per_namespace),
        )
}
