// src/core/service_client.rs
//! HTTP client for the remote analysis service

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, error, info, trace};

use crate::config::ClientConfig;
use crate::error::AnalyzeError;
use crate::types::{AnalysisRequest, AnalysisResult, HealthStatus, ServiceErrorBody};
use crate::utils::resume_content_type;

pub const ANALYZE_ENDPOINT: &str = "/api/analyze";
pub const HEALTH_ENDPOINT: &str = "/api/health";

pub const RESUME_PART: &str = "resume";
pub const JOB_DESCRIPTION_PART: &str = "jobDescription";

/// Seam between the controller and the network
pub trait AnalysisService {
    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = std::result::Result<AnalysisResult, AnalyzeError>>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
    timeout_seconds: u64,
}

impl ServiceClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.origin.clone(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn build_form(request: &AnalysisRequest) -> std::result::Result<Form, AnalyzeError> {
        let file = &request.resume_file;
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(resume_content_type(&file.file_name))
            .map_err(|e| AnalyzeError::failed(format!("Failed to create multipart: {e}")))?;

        Ok(Form::new()
            .part(RESUME_PART, part)
            .text(JOB_DESCRIPTION_PART, request.job_description_text.clone()))
    }

    fn transport_detail(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!(
                "The analysis service did not respond within {} seconds.",
                self.timeout_seconds
            )
        } else if err.is_connect() {
            format!("Could not reach the analysis service at {}.", self.base_url)
        } else {
            err.to_string()
        }
    }

    /// Service health, for diagnostics only
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.url(HEALTH_ENDPOINT);
        debug!("Checking service health: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<HealthStatus>()
                .await
                .context("Failed to parse health response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }
}

impl AnalysisService for ServiceClient {
    async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> std::result::Result<AnalysisResult, AnalyzeError> {
        let url = self.url(ANALYZE_ENDPOINT);
        let form = Self::build_form(request)?;

        info!(
            "Calling analysis service: {} ({}, {} bytes)",
            url,
            request.resume_file.file_name,
            request.resume_file.bytes.len()
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("Analysis request failed: {}", e);
                AnalyzeError::failed(self.transport_detail(&e))
            })?;

        let status = response.status();
        trace!("Response status: {}", status);

        let body = response.text().await.map_err(|e| {
            error!("Failed to read analysis response: {}", e);
            AnalyzeError::failed(self.transport_detail(&e))
        })?;

        if !status.is_success() {
            error!("Analysis service error response {}: {}", status, body);
            let detail = serde_json::from_str::<ServiceErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail())
                .unwrap_or_else(|| format!("Analysis failed (HTTP {})", status.as_u16()));
            return Err(AnalyzeError::failed(detail));
        }

        serde_json::from_str::<AnalysisResult>(&body).map_err(|e| {
            error!("Unparseable analysis response: {}", e);
            AnalyzeError::failed(format!("Unexpected response from the analysis service: {e}"))
        })
    }
}
