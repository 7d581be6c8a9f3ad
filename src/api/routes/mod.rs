//! API route declarations (mounted under /api/k8s)

pub mod deployment_routes;
pub mod legacy_routes;
pub mod pod_routes;
