// src/output.rs
//! Serializes the results area for the terminal, a browser, or another program

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fmt::Write as _;

use crate::render::{RenderedView, SkillKind, SuggestionStyle};
use crate::render::view::{SCORE_LABEL, SUGGESTIONS_HEADING};
use crate::ui::page::{ErrorCard, ResultsContent, LOADING_TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

pub fn format_results(content: &ResultsContent, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(to_text(content)),
        OutputFormat::Html => Ok(to_html(content)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(content).context("Failed to serialize results")
        }
    }
}

// ===== Text =====

pub fn to_text(content: &ResultsContent) -> String {
    match content {
        ResultsContent::Empty => String::new(),
        ResultsContent::Loading => format!("{LOADING_TEXT}\n"),
        ResultsContent::Error(card) => format!(
            "{} {}\n{}\n",
            ErrorCard::LABEL,
            ErrorCard::HEADLINE,
            card.body()
        ),
        ResultsContent::Analysis(view) => view_to_text(view),
    }
}

fn view_to_text(view: &RenderedView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.headline);
    let _ = writeln!(out, "{}", view.summary);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}: {}", SCORE_LABEL, view.score_text());

    for section in &view.skills {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", section.kind.title(), section.count);
        for skill in &section.skills {
            let _ = writeln!(out, "  - {}", skill);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", SUGGESTIONS_HEADING);
    for suggestion in &view.suggestions {
        let marker = match suggestion.style {
            SuggestionStyle::Primary => "!!",
            SuggestionStyle::Tip => "  ",
            SuggestionStyle::Secondary => " -",
        };
        let _ = writeln!(out, "{} {}", marker, suggestion.text);
    }
    out
}

// ===== HTML =====

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Fragment for the results container, using the page stylesheet's class names
pub fn to_html(content: &ResultsContent) -> String {
    match content {
        ResultsContent::Empty => String::new(),
        ResultsContent::Loading => format!(r#"<div class="loading">{LOADING_TEXT}</div>"#),
        ResultsContent::Error(card) => {
            let body = match &card.detail {
                Some(detail) => format!(
                    r#"<br><small style="color: #64748b; margin-top: 8px;">{}</small>"#,
                    escape_html(detail)
                ),
                None => ErrorCard::RETRY_PROMPT.to_string(),
            };
            format!(
                r#"<div class="card"><strong>{}</strong> {} {}</div>"#,
                ErrorCard::LABEL,
                ErrorCard::HEADLINE,
                body
            )
        }
        ResultsContent::Analysis(view) => view_to_html(view),
    }
}

fn view_to_html(view: &RenderedView) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<div class="result-summary"><strong>{}</strong><p>{}</p></div>"#,
        escape_html(&view.headline),
        escape_html(&view.summary)
    );
    let _ = write!(
        out,
        r#"<div class="score-card"><div class="score-label">{}</div><div class="score-value">{}</div></div>"#,
        SCORE_LABEL,
        view.score_text()
    );

    out.push_str(r#"<div class="grid">"#);
    for kind in [SkillKind::Matched, SkillKind::Missing, SkillKind::Extra] {
        let section = view.section(kind);
        let items: String = section
            .skills
            .iter()
            .map(|s| format!("<li>{}</li>", escape_html(s)))
            .collect();
        let _ = write!(
            out,
            r#"<div class="metric-card"><div class="metric-header"><span class="metric-title">{}</span><span class="metric-count">{}</span></div><div class="metric-list"><ul>{}</ul></div></div>"#,
            kind.title(),
            section.count,
            items
        );
    }
    out.push_str("</div>");

    let _ = write!(out, r#"<div class="suggestions-card"><h3>{}</h3>"#, SUGGESTIONS_HEADING);
    for suggestion in &view.suggestions {
        let _ = write!(
            out,
            r#"<div class="{}">{}</div>"#,
            suggestion.style.css_class(),
            escape_html(&suggestion.text)
        );
    }
    out.push_str("</div>");
    out
}
