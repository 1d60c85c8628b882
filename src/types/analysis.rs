// src/types/analysis.rs
//! Request and result structures exchanged with the analysis service

use serde::{Deserialize, Serialize};

// ===== Outbound =====

/// Resume file picked by the user, read fully into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// One submission. Only built by the controller once both inputs validated.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub resume_file: ResumeFile,
    /// Sent exactly as typed; trimming is only used for the emptiness check
    pub job_description_text: String,
}

// ===== Inbound =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: f64,
    #[serde(default)]
    pub matched_skills: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub extra_skills: Vec<String>,
    /// Index 0 is the top priority
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_parses_service_json() {
        let body = r#"{
            "score": 85.0,
            "matchedSkills": ["SQL"],
            "missingSkills": ["Go"],
            "extraSkills": ["PHP"],
            "suggestions": ["Add Go experience", "Focus on matching keywords"]
        }"#;

        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.score, 85.0);
        assert_eq!(result.matched_skills, vec!["SQL"]);
        assert_eq!(result.missing_skills, vec!["Go"]);
        assert_eq!(result.extra_skills, vec!["PHP"]);
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let result: AnalysisResult = serde_json::from_str(r#"{"score": 12.5}"#).unwrap();
        assert!(result.matched_skills.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_score_is_required() {
        assert!(serde_json::from_str::<AnalysisResult>(r#"{"matchedSkills": []}"#).is_err());
    }
}
