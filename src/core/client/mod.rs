// Kube-rs based Kubernetes client
pub mod kube_client;
pub mod kube_resources;
pub mod pods;
pub mod deployments;
pub mod namespaces;
pub mod mappers;

// Seam between the services and the cluster
pub mod workload_api;
pub mod workload_api_trait;
