//! Shared domain services (list shaping)

pub mod data_selector;
