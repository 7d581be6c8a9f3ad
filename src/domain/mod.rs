pub mod common;
pub mod workload;
