//! Pod routes (e.g., /api/k8s/pods, /api/k8s/pod/*)

use axum::{routing::{delete, get, put}, Router};
use crate::api::controller::workload::pod::PodController;
use crate::app_state::AppState;

pub fn pod_routes() -> Router<AppState> {
    Router::new()
        .route("/pods", get(PodController::list_pods))
        .route("/pod/detail", get(PodController::get_pod_detail))
        .route("/pod/del", delete(PodController::delete_pod))
        .route("/pod/update", put(PodController::update_pod))
        .route("/pod/container", get(PodController::get_pod_containers))
        .route("/pod/log", get(PodController::get_pod_logs))
        .route("/pod/numnp", get(PodController::get_pod_num_per_namespace))
}
