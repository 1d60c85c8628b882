use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ===== Service Response Types =====

/// Error body the analysis service sends alongside a non-success status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ServiceErrorBody {
    /// Most specific human-readable text in the body, if any
    pub fn detail(&self) -> Option<String> {
        non_blank(&self.message)
            .or_else(|| non_blank(&self.error))
            .map(str::to_string)
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: Option<String>,
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn is_up(&self) -> bool {
        self.status.eq_ignore_ascii_case("up")
    }

    /// The service reports a zone-less local timestamp, optionally with fractional seconds
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        let raw = self.timestamp.as_deref()?;
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
    }
}
