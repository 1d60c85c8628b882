// src/types/mod.rs
pub mod analysis;
pub mod response;

pub use analysis::{AnalysisRequest, AnalysisResult, ResumeFile};
pub use response::{HealthStatus, ServiceErrorBody};
