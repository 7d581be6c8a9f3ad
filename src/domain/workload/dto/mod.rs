pub mod deployment_create_request;
pub mod workload_response;
