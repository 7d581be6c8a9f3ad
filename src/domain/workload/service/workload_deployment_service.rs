use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future::try_join_all;
use tracing::{debug, error, info};
use validator::Validate;

use crate::core::client::kube_resources::{
    ContainerPort, Deployment, DeploymentSpec, HTTPGetAction, IntOrString, K8sContainer,
    LabelSelector, ObjectMeta, PodSpec, PodTemplateSpec, Probe, Quantity, ResourceRequirements,
};
use crate::core::client::workload_api_trait::{DeploymentApi, NamespaceApi, WorkloadApi};
use crate::domain::common::model::{DataSelectQuery, DataSelection};
use crate::domain::common::service::data_selector;
use crate::domain::workload::dto::deployment_create_request::DeploymentCreateRequest;
use crate::domain::workload::dto::workload_response::{DeploymentsPerNamespace, ListResponse};
use crate::domain::workload::service::workload_pod_service::{effective_namespace, required_name};

const READINESS_INITIAL_DELAY_SECS: i32 = 5;
const LIVENESS_INITIAL_DELAY_SECS: i32 = 15;
const PROBE_TIMEOUT_SECS: i32 = 5;
const PROBE_PERIOD_SECS: i32 = 5;

pub struct DeploymentService<A: ?Sized = dyn WorkloadApi> {
    api: Arc<A>,
}

impl<A> DeploymentService<A>
where
    A: DeploymentApi + NamespaceApi + ?Sized,
{
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    pub async fn list_deployments(
        &self,
        namespace: &str,
        query: &DataSelectQuery,
    ) -> Result<ListResponse<Deployment>> {
        let deployments = self
            .api
            .list_deployments(namespace)
            .await
            .inspect_err(|e| error!("Failed to list deployments in '{namespace}': {e:?}"))
            .context("failed to list deployments")?;

        let DataSelection { items, total } = data_selector::select(deployments, query);
        debug!("Selected {} of {} matching deployment(s)", items.len(), total);

        Ok(ListResponse { items, total })
    }

    pub async fn get_deployment(
        &self,
        namespace: &str,
        deployment_name: &str,
    ) -> Result<Deployment> {
        self.api
            .get_deployment(namespace, deployment_name)
            .await
            .inspect_err(|e| {
                error!("Failed to get deployment {namespace}/{deployment_name}: {e:?}")
            })
            .context("failed to get deployment detail")
    }

    pub async fn delete_deployment(&self, namespace: &str, deployment_name: &str) -> Result<()> {
        self.api
            .delete_deployment(namespace, deployment_name)
            .await
            .inspect_err(|e| {
                error!("Failed to delete deployment {namespace}/{deployment_name}: {e:?}")
            })
            .context("failed to delete deployment")
    }

    /// Replace a deployment with `content`, the complete object as JSON
    pub async fn update_deployment(&self, namespace: &str, content: &str) -> Result<Deployment> {
        let deployment: Deployment = serde_json::from_str(content)
            .inspect_err(|e| error!("Failed to decode deployment content: {e}"))
            .context("failed to decode deployment content")?;

        let deployment_name = required_name(&deployment.metadata)
            .context("deployment content has no metadata.name")?;
        let namespace =
            effective_namespace(namespace, deployment.metadata.namespace.as_deref());

        self.api
            .replace_deployment(namespace, &deployment_name, &deployment)
            .await
            .inspect_err(|e| {
                error!("Failed to update deployment {namespace}/{deployment_name}: {e:?}")
            })
            .context("failed to update deployment")
    }

    pub async fn create_deployment(&self, req: DeploymentCreateRequest) -> Result<Deployment> {
        req.validate()?;

        let deployment = build_deployment(&req);
        let created = self
            .api
            .create_deployment(&req.namespace, &deployment)
            .await
            .inspect_err(|e| {
                error!("Failed to create deployment {}/{}: {e:?}", req.namespace, req.name)
            })
            .with_context(|| format!("failed to create deployment {}", req.name))?;

        info!("Created deployment {}/{}", req.namespace, req.name);
        Ok(created)
    }

    /// Deployment count for every namespace, in namespace-list order
    pub async fn get_deployment_num_per_namespace(&self) -> Result<Vec<DeploymentsPerNamespace>> {
        let namespaces = self
            .api
            .list_namespace_names()
            .await
            .inspect_err(|e| error!("Failed to list namespaces: {e:?}"))
            .context("failed to list namespaces")?;

        let counts = namespaces.into_iter().map(|namespace| async move {
            let deployments = self
                .api
                .list_deployments(&namespace)
                .await
                .inspect_err(|e| error!("Failed to count deployments in '{namespace}': {e:?}"))
                .context("failed to count deployments")?;

            Ok::<_, anyhow::Error>(DeploymentsPerNamespace {
                namespace,
                deploy_num: deployments.len(),
            })
        });

        try_join_all(counts).await
    }
}

/// Assemble a single-container Deployment from a create request
fn build_deployment(req: &DeploymentCreateRequest) -> Deployment {
    // A selector must match something, so fall back to app=<name>
    let labels = if req.label.is_empty() {
        BTreeMap::from([("app".to_string(), req.name.clone())])
    } else {
        req.label.clone()
    };

    let mut container = K8sContainer {
        name: req.name.clone(),
        image: Some(req.image.clone()),
        ports: Some(vec![ContainerPort {
            name: Some("http".to_string()),
            protocol: Some("TCP".to_string()),
            container_port: req.container_port,
            ..ContainerPort::default()
        }]),
        resources: build_resources(req),
        ..K8sContainer::default()
    };

    if req.health_check {
        let path = req.health_path.clone().unwrap_or_default();
        container.readiness_probe = Some(http_probe(
            &path,
            req.container_port,
            READINESS_INITIAL_DELAY_SECS,
        ));
        container.liveness_probe = Some(http_probe(
            &path,
            req.container_port,
            LIVENESS_INITIAL_DELAY_SECS,
        ));
    }

    Deployment {
        metadata: ObjectMeta {
            name: Some(req.name.clone()),
            namespace: Some(req.namespace.clone()),
            labels: Some(labels.clone()),
            ..ObjectMeta::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(req.replicas),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..LabelSelector::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    name: Some(req.name.clone()),
                    labels: Some(labels),
                    ..ObjectMeta::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![container],
                    ..PodSpec::default()
                }),
            },
            ..DeploymentSpec::default()
        }),
        status: None,
    }
}

/// cpu/memory become both requests and limits; nothing set means no resources block
fn build_resources(req: &DeploymentCreateRequest) -> Option<ResourceRequirements> {
    let quantities: BTreeMap<String, Quantity> = [("cpu", &req.cpu), ("memory", &req.memory)]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key.to_string(), Quantity(v.to_string())))
        })
        .collect();

    if quantities.is_empty() {
        return None;
    }

    Some(ResourceRequirements {
        limits: Some(quantities.clone()),
        requests: Some(quantities),
        ..ResourceRequirements::default()
    })
}

fn http_probe(path: &str, port: i32, initial_delay_seconds: i32) -> Probe {
    Probe {
        http_get: Some(HTTPGetAction {
            path: Some(path.to_string()),
            port: IntOrString::Int(port),
            ..HTTPGetAction::default()
        }),
        initial_delay_seconds: Some(initial_delay_seconds),
        timeout_seconds: Some(PROBE_TIMEOUT_SECS),
        period_seconds: Some(PROBE_PERIOD_SECS),
        ..Probe::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::model::DataCell;
    use crate::domain::workload::service::fake_workload_api::{deployment, FakeWorkloadApi};
    use crate::errors::AppError;
    use serde_json::json;

    fn seeded() -> DeploymentService<FakeWorkloadApi> {
        let api = FakeWorkloadApi::with_namespaces(&["default", "prod"]);
        api.insert_deployment(deployment("default", "frontend", "2024-01-10T00:00:00Z"));
        api.insert_deployment(deployment("default", "backend", "2024-01-20T00:00:00Z"));
        api.insert_deployment(deployment("prod", "frontend", "2024-01-15T00:00:00Z"));
        DeploymentService::new(Arc::new(api))
    }

    fn create_request() -> DeploymentCreateRequest {
        serde_json::from_value(json!({
            "name": "nginx",
            "namespace": "default",
            "replicas": 3,
            "image": "nginx:1.27",
            "label": { "app": "nginx", "tier": "web" },
            "cpu": "250m",
            "memory": "128Mi",
            "containerPort": 8080,
            "healthCheck": true,
            "healthPath": "/ready"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn list_filters_and_counts_across_namespaces() {
        let svc = seeded();

        let resp = svc
            .list_deployments("", &DataSelectQuery::new("front", 0, 0))
            .await
            .unwrap();

        assert_eq!(resp.total, 2);
        let namespaces: Vec<_> = resp
            .items
            .iter()
            .map(|d| d.metadata.namespace.clone().unwrap())
            .collect();
        assert_eq!(namespaces, vec!["prod", "default"]);
        assert!(resp.items.iter().all(|d| DataCell::name(d) == "frontend"));
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_with_total() {
        let svc = seeded();

        let resp = svc
            .list_deployments("default", &DataSelectQuery::new("", 5, 2))
            .await
            .unwrap();

        assert!(resp.items.is_empty());
        assert_eq!(resp.total, 2);
    }

    #[tokio::test]
    async fn create_submits_the_assembled_deployment() {
        let svc = seeded();

        let created = svc.create_deployment(create_request()).await.unwrap();

        assert_eq!(created.metadata.name.as_deref(), Some("nginx"));
        assert_eq!(svc.api.calls(), vec!["create default/nginx"]);
    }

    #[tokio::test]
    async fn invalid_create_request_is_rejected_before_submission() {
        let svc = seeded();
        let mut req = create_request();
        req.container_port = 0;

        let err = svc.create_deployment(req).await.unwrap_err();

        assert!(err.downcast_ref::<validator::ValidationErrors>().is_some());
        assert!(svc.api.calls().is_empty());
    }

    #[test]
    fn builds_selector_template_and_container() {
        let deployment = build_deployment(&create_request());
        let spec = deployment.spec.unwrap();

        assert_eq!(spec.replicas, Some(3));
        let labels = spec.selector.match_labels.unwrap();
        assert_eq!(labels["app"], "nginx");
        assert_eq!(labels["tier"], "web");
        assert_eq!(spec.template.metadata.unwrap().labels.unwrap(), labels);

        let pod_spec = spec.template.spec.unwrap();
        let container = &pod_spec.containers[0];
        assert_eq!(container.name, "nginx");
        assert_eq!(container.image.as_deref(), Some("nginx:1.27"));

        let port = &container.ports.as_ref().unwrap()[0];
        assert_eq!(port.container_port, 8080);
        assert_eq!(port.name.as_deref(), Some("http"));
        assert_eq!(port.protocol.as_deref(), Some("TCP"));

        let resources = container.resources.as_ref().unwrap();
        let limits = resources.limits.as_ref().unwrap();
        assert_eq!(limits["cpu"], Quantity("250m".into()));
        assert_eq!(limits["memory"], Quantity("128Mi".into()));
        assert_eq!(resources.requests.as_ref(), Some(limits));
    }

    #[test]
    fn health_check_adds_readiness_and_liveness_probes() {
        let deployment = build_deployment(&create_request());
        let container = deployment.spec.unwrap().template.spec.unwrap().containers.remove(0);

        let readiness = container.readiness_probe.unwrap();
        let liveness = container.liveness_probe.unwrap();

        assert_eq!(readiness.initial_delay_seconds, Some(5));
        assert_eq!(liveness.initial_delay_seconds, Some(15));
        for probe in [&readiness, &liveness] {
            assert_eq!(probe.timeout_seconds, Some(5));
            assert_eq!(probe.period_seconds, Some(5));
            let http_get = probe.http_get.as_ref().unwrap();
            assert_eq!(http_get.path.as_deref(), Some("/ready"));
            assert_eq!(http_get.port, IntOrString::Int(8080));
        }
    }

    #[test]
    fn minimal_request_has_no_probes_or_resources() {
        let mut req = create_request();
        req.health_check = false;
        req.cpu = None;
        req.memory = Some(" ".into());
        req.label.clear();

        let deployment = build_deployment(&req);
        let spec = deployment.spec.unwrap();
        let container = &spec.template.spec.as_ref().unwrap().containers[0];

        assert!(container.readiness_probe.is_none());
        assert!(container.liveness_probe.is_none());
        assert!(container.resources.is_none());
        assert_eq!(spec.selector.match_labels.unwrap()["app"], "nginx");
    }

    #[tokio::test]
    async fn update_uses_namespace_from_content_when_not_given() {
        let svc = seeded();
        let content = json!({
            "apiVersion": "apps/v1",
            "kind": "Deployment",
            "metadata": { "name": "backend", "namespace": "default" },
            "spec": {
                "replicas": 5,
                "selector": { "matchLabels": { "app": "backend" } },
                "template": { "spec": { "containers": [{ "name": "backend", "image": "api:2" }] } }
            }
        })
        .to_string();

        let updated = svc.update_deployment("", &content).await.unwrap();

        assert_eq!(updated.spec.unwrap().replicas, Some(5));
        assert_eq!(svc.api.calls(), vec!["replace default/backend"]);
    }

    #[tokio::test]
    async fn nameless_content_is_a_decode_error() {
        let svc = seeded();
        let content = r#"{"apiVersion":"apps/v1","kind":"Deployment","metadata":{"name":""}}"#;

        let err = svc.update_deployment("default", content).await.unwrap_err();

        assert!(matches!(AppError::from(err), AppError::DeserializeError(_)));
        assert!(svc.api.calls().is_empty());
    }

    #[tokio::test]
    async fn counts_deployments_per_namespace() {
        let svc = seeded();

        let counts = svc.get_deployment_num_per_namespace().await.unwrap();

        assert_eq!(
            counts,
            vec![
                DeploymentsPerNamespace { namespace: "default".into(), deploy_num: 2 },
                DeploymentsPerNamespace { namespace: "prod".into(), deploy_num: 1 },
            ]
        );
    }

    #[tokio::test]
    async fn delete_of_missing_deployment_fails() {
        let svc = seeded();
        let err = svc.delete_deployment("prod", "backend").await.unwrap_err();
        assert!(format!("{err:#}").starts_with("failed to delete deployment"));
    }
}
