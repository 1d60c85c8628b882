//! Client for a resume-to-job-description ATS match service.
//!
//! The controller validates the page inputs, submits them to the analysis service and
//! either renders the returned result or shows an error card.

pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod output;
pub mod render;
pub mod types;
pub mod ui;
pub mod utils;

pub use config::ClientConfig;
pub use controller::{Outcome, RequestController};
pub use crate::core::{AnalysisService, ServiceClient};
pub use error::AnalyzeError;
pub use render::{render, RenderedView, TipMarkers};
pub use types::{AnalysisRequest, AnalysisResult, ResumeFile};
pub use ui::Page;
