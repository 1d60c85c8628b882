// src/core/mod.rs
//! Core services shared by the controller and the CLI

pub mod service_client;

pub use service_client::{AnalysisService, ServiceClient};
