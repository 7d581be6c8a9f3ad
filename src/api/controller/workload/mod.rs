pub mod deployment;
pub mod pod;
