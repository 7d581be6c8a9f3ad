use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;

use crate::api::dto::workload_dto::{DeploymentTarget, WorkloadListQuery, WorkloadUpdateBody};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::api::util::request::{bind_json, bind_query};
use crate::app_state::AppState;
use crate::core::client::kube_resources::Deployment;
use crate::domain::workload::dto::deployment_create_request::DeploymentCreateRequest;
use crate::domain::workload::dto::workload_response::{DeploymentsPerNamespace, ListResponse};
use crate::errors::AppError;

pub struct DeploymentController;

impl DeploymentController {
    pub async fn list_deployments(
        State(state): State<AppState>,
        query: Result<Query<WorkloadListQuery>, QueryRejection>,
    ) -> Result<Json<ApiResponse<ListResponse<Deployment>>>, AppError> {
        let query = bind_query(query)?;
        to_json(
            "list deployments succeeded",
            state
                .deployment_service
                .list_deployments(&query.namespace, &query.to_select_query())
                .await,
        )
    }

    pub async fn get_deployment_detail(
        State(state): State<AppState>,
        query: Result<Query<DeploymentTarget>, QueryRejection>,
    ) -> Result<Json<ApiResponse<Deployment>>, AppError> {
        let target = bind_query(query)?;
        to_json(
            "get deployment detail succeeded",
            state
                .deployment_service
                .get_deployment(&target.namespace, &target.deployment_name)
                .await,
        )
    }

    pub async fn delete_deployment(
        State(state): State<AppState>,
        body: Result<Json<DeploymentTarget>, JsonRejection>,
    ) -> Result<Json<ApiResponse<()>>, AppError> {
        let target = bind_json(body)?;
        to_json(
            "delete deployment succeeded",
            state
                .deployment_service
                .delete_deployment(&target.namespace, &target.deployment_name)
                .await,
        )
    }

    pub async fn update_deployment(
        State(state): State<AppState>,
        body: Result<Json<WorkloadUpdateBody>, JsonRejection>,
    ) -> Result<Json<ApiResponse<Deployment>>, AppError> {
        let update = bind_json(body)?;
        to_json(
            "update deployment succeeded",
            state
                .deployment_service
                .update_deployment(&update.namespace, &update.content)
                .await,
        )
    }

    /// Build a Deployment from the flat create form and submit it
    pub async fn create_deployment(
        State(state): State<AppState>,
        body: Result<Json<DeploymentCreateRequest>, JsonRejection>,
    ) -> Result<Json<ApiResponse<Deployment>>, AppError> {
        let request = bind_json(body)?;
        to_json(
            "create deployment succeeded",
            state.deployment_service.create_deployment(request).await,
        )
    }

    pub async fn get_deployment_num_per_namespace(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<DeploymentsPerNamespace>>>, AppError> {
        to_json(
            "get deployment count per namespace succeeded",
            state.deployment_service.get_deployment_num_per_namespace().await,
        )
    }
}
