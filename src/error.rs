// src/error.rs
use thiserror::Error;

/// Everything a single analysis attempt can fail with
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Please upload a resume file.")]
    MissingResume,

    #[error("Please paste the job description.")]
    MissingJobDescription,

    #[error("Analysis failed{}", detail_suffix(.detail))]
    AnalysisFailed { detail: Option<String> },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl AnalyzeError {
    pub fn failed(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        AnalyzeError::AnalysisFailed {
            detail: (!detail.trim().is_empty()).then_some(detail),
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            AnalyzeError::AnalysisFailed { detail } => detail.as_deref(),
            _ => None,
        }
    }
}
