use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;

use crate::api::dto::workload_dto::{PodLogQuery, PodTarget, WorkloadListQuery, WorkloadUpdateBody};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::api::util::request::{bind_json, bind_query};
use crate::app_state::AppState;
use crate::core::client::kube_resources::Pod;
use crate::domain::workload::dto::workload_response::{ListResponse, PodsPerNamespace};
use crate::errors::AppError;

pub struct PodController;

impl PodController {
    /// List pods – filter by name substring, newest first, optionally paged
    pub async fn list_pods(
        State(state): State<AppState>,
        query: Result<Query<WorkloadListQuery>, QueryRejection>,
    ) -> Result<Json<ApiResponse<ListResponse<Pod>>>, AppError> {
        let query = bind_query(query)?;
        to_json(
            "list pods succeeded",
            state
                .pod_service
                .list_pods(&query.namespace, &query.to_select_query())
                .await,
        )
    }

    pub async fn get_pod_detail(
        State(state): State<AppState>,
        query: Result<Query<PodTarget>, QueryRejection>,
    ) -> Result<Json<ApiResponse<Pod>>, AppError> {
        let target = bind_query(query)?;
        to_json(
            "get pod detail succeeded",
            state.pod_service.get_pod(&target.namespace, &target.pod_name).await,
        )
    }

    pub async fn delete_pod(
        State(state): State<AppState>,
        body: Result<Json<PodTarget>, JsonRejection>,
    ) -> Result<Json<ApiResponse<()>>, AppError> {
        let target = bind_json(body)?;
        to_json(
            "delete pod succeeded",
            state.pod_service.delete_pod(&target.namespace, &target.pod_name).await,
        )
    }

    pub async fn update_pod(
        State(state): State<AppState>,
        body: Result<Json<WorkloadUpdateBody>, JsonRejection>,
    ) -> Result<Json<ApiResponse<Pod>>, AppError> {
        let update = bind_json(body)?;
        to_json(
            "update pod succeeded",
            state.pod_service.update_pod(&update.namespace, &update.content).await,
        )
    }

    pub async fn get_pod_containers(
        State(state): State<AppState>,
        query: Result<Query<PodTarget>, QueryRejection>,
    ) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
        let target = bind_query(query)?;
        to_json(
            "get pod containers succeeded",
            state
                .pod_service
                .get_pod_containers(&target.namespace, &target.pod_name)
                .await,
        )
    }

    pub async fn get_pod_logs(
        State(state): State<AppState>,
        query: Result<Query<PodLogQuery>, QueryRejection>,
    ) -> Result<Json<ApiResponse<String>>, AppError> {
        let query = bind_query(query)?;
        to_json(
            "get pod logs succeeded",
            state
                .pod_service
                .get_pod_logs(&query.namespace, &query.pod_name, &query.container_name)
                .await,
        )
    }

    pub async fn get_pod_num_per_namespace(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<PodsPerNamespace>>>, AppError> {
        to_json(
            "get pod count per namespace succeeded",
            state.pod_service.get_pod_num_per_namespace().await,
        )
    }
}
