// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::config::ClientConfig;
use crate::controller::{Outcome, RequestController};
use crate::core::ServiceClient;
use crate::output::{format_results, OutputFormat};
use crate::ui::Page;
use crate::utils::{read_file_content, read_resume_file};

#[derive(Parser)]
#[command(name = "ats-match")]
#[command(about = "Check how well a resume matches a job description")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Origin of the analysis service, e.g. http://localhost:8080
    #[arg(long, global = true)]
    pub origin: Option<String>,

    /// YAML configuration file (defaults to ./ats-match.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Submit a resume and job description and show the match
    Analyze {
        /// Resume file (.pdf, .txt, .docx)
        #[arg(long)]
        resume: Option<PathBuf>,
        /// File containing the job description
        #[arg(long, conflicts_with = "job_text")]
        job: Option<PathBuf>,
        /// Job description passed inline
        #[arg(long)]
        job_text: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write the rendered results here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Check that the analysis service is up
    Health,
}

/// Returns whether the command succeeded from the user's point of view
pub async fn handle_command(cli: Cli) -> Result<bool> {
    let config = ClientConfig::load(cli.config.as_deref(), cli.origin.as_deref())?;
    let client = ServiceClient::new(&config)?;

    match cli.command {
        Command::Analyze {
            resume,
            job,
            job_text,
            format,
            out,
        } => {
            let mut page = Page::new();

            if let Some(path) = resume {
                page.resume_file_mut().select(read_resume_file(&path).await?);
            }

            let text = match (job, job_text) {
                (Some(path), _) => read_file_content(&path).await?,
                (None, Some(text)) => text,
                (None, None) => String::new(),
            };
            page.job_description_mut().set(text);

            let controller = RequestController::new(client, config.tip_markers.clone());
            let outcome = controller.submit(&mut page).await;

            for notice in page.notices() {
                eprintln!("{}", notice);
            }

            if page.results().is_visible() {
                let rendered = format_results(page.results().content(), format)?;
                match out {
                    Some(path) => {
                        tokio::fs::write(&path, rendered)
                            .await
                            .with_context(|| format!("Failed to write results: {}", path.display()))?;
                        info!("Results written to {}", path.display());
                    }
                    None => print!("{}", rendered),
                }
            }

            Ok(matches!(outcome, Outcome::Rendered))
        }

        Command::Health => match client.health().await {
            Ok(health) => {
                let service = health.service.as_deref().unwrap_or("analysis service");
                match health.parsed_timestamp() {
                    Some(ts) => println!(
                        "{} at {}: {} ({})",
                        service,
                        client.base_url(),
                        health.status,
                        ts.format("%Y-%m-%d %H:%M:%S")
                    ),
                    None => println!("{} at {}: {}", service, client.base_url(), health.status),
                }
                Ok(health.is_up())
            }
            Err(e) => {
                eprintln!("❌ {} is unreachable: {:#}", client.base_url(), e);
                Ok(false)
            }
        },
    }
}
