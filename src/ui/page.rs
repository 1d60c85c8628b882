// src/ui/page.rs
//! The four page regions the controller reads and writes

use serde::Serialize;
use tracing::warn;

use super::state::UiState;
use crate::render::RenderedView;
use crate::types::ResumeFile;

pub const RESUME_FILE_ID: &str = "resumeFile";
pub const JOB_DESCRIPTION_ID: &str = "jobDescription";
pub const RESULTS_ID: &str = "results";
pub const TRIGGER_ID: &str = "analyzeBtn";

pub const DEFAULT_LABEL: &str = "Check ATS Match";
pub const BUSY_LABEL: &str = "Analyzing...";
pub const LOADING_TEXT: &str = "Analyzing your resume...";

#[derive(Debug, Clone, Default)]
pub struct ResumeSelector {
    files: Vec<ResumeFile>,
}

impl ResumeSelector {
    /// Only the first selected file is submitted
    pub fn selected(&self) -> Option<&ResumeFile> {
        self.files.first()
    }

    pub fn select(&mut self, file: ResumeFile) {
        self.files = vec![file];
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobDescriptionField {
    value: String,
}

impl JobDescriptionField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

#[derive(Debug, Clone)]
pub struct TriggerControl {
    disabled: bool,
    label: String,
}

impl Default for TriggerControl {
    fn default() -> Self {
        Self {
            disabled: false,
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl TriggerControl {
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn disable_with_label(&mut self, label: &str) {
        self.disabled = true;
        self.label = label.to_string();
    }

    pub(crate) fn reset(&mut self) {
        self.disabled = false;
        self.label = DEFAULT_LABEL.to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorCard {
    pub detail: Option<String>,
}

impl ErrorCard {
    pub const LABEL: &'static str = "Error:";
    pub const HEADLINE: &'static str = "Unable to analyze resume.";
    pub const RETRY_PROMPT: &'static str = "Please try again.";

    /// Detail when known, the retry prompt otherwise
    pub fn body(&self) -> &str {
        self.detail.as_deref().unwrap_or(Self::RETRY_PROMPT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ResultsContent {
    Empty,
    Loading,
    Error(ErrorCard),
    Analysis(Box<RenderedView>),
}

#[derive(Debug, Clone)]
pub struct ResultsArea {
    visible: bool,
    content: ResultsContent,
}

impl Default for ResultsArea {
    fn default() -> Self {
        Self {
            visible: false,
            content: ResultsContent::Empty,
        }
    }
}

impl ResultsArea {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> &ResultsContent {
        &self.content
    }

    /// Replace the whole area and make it visible
    pub(crate) fn show(&mut self, content: ResultsContent) {
        self.content = content;
        self.visible = true;
    }
}

/// One page session
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub(crate) resume_file: ResumeSelector,
    pub(crate) job_description: JobDescriptionField,
    pub(crate) results: ResultsArea,
    pub(crate) trigger: TriggerControl,
    pub(crate) state: UiState,
    notices: Vec<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resume_file(&self) -> &ResumeSelector {
        &self.resume_file
    }

    pub fn resume_file_mut(&mut self) -> &mut ResumeSelector {
        &mut self.resume_file
    }

    pub fn job_description(&self) -> &JobDescriptionField {
        &self.job_description
    }

    pub fn job_description_mut(&mut self) -> &mut JobDescriptionField {
        &mut self.job_description
    }

    pub fn results(&self) -> &ResultsArea {
        &self.results
    }

    pub fn trigger(&self) -> &TriggerControl {
        &self.trigger
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Blocking notices shown so far, oldest first
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub(crate) fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("Notice: {}", message);
        self.notices.push(message);
    }
}
