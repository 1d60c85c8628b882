// src/utils.rs
use anyhow::{Context, Result};
use std::path::Path;

use crate::types::ResumeFile;

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// MIME type for the multipart `resume` part. Unknown formats go through as
/// octet-stream and the service decides whether it can parse them.
pub fn resume_content_type(file_name: &str) -> &'static str {
    match get_file_extension(file_name).as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Strip trailing slashes and require an http(s) scheme
pub fn normalize_origin(origin: &str) -> Result<String> {
    let trimmed = origin.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        anyhow::bail!("Origin must start with http:// or https://: {}", origin);
    }
    Ok(trimmed.to_string())
}

/// Read a resume from disk with proper error context
pub async fn read_resume_file(path: &Path) -> Result<ResumeFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read resume file: {}", path.display()))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume")
        .to_string();

    Ok(ResumeFile::new(file_name, bytes))
}

/// Read file content as string with proper error context
pub async fn read_file_content(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))
}
