// src/render/suggestions.rs
//! Suggestion styling: position first, then marker-phrase lookup

use serde::Serialize;

pub const TIP_ICON: &str = "💡 ";

/// Phrases that turn a non-primary suggestion into a tip
pub const DEFAULT_TIP_MARKERS: [&str; 3] =
    ["instead of listing", "Strong alignment", "Focus on matching"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipMarkers(Vec<String>);

impl TipMarkers {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            phrases
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        )
    }

    /// Case-sensitive substring match
    pub fn matches(&self, text: &str) -> bool {
        self.0.iter().any(|phrase| text.contains(phrase.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for TipMarkers {
    fn default() -> Self {
        Self::new(DEFAULT_TIP_MARKERS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStyle {
    Primary,
    Tip,
    Secondary,
}

impl SuggestionStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            SuggestionStyle::Primary => "recommendation primary",
            SuggestionStyle::Tip => "recommendation tip",
            SuggestionStyle::Secondary => "recommendation secondary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledSuggestion {
    pub style: SuggestionStyle,
    /// Display text, icon-prefixed for tips
    pub text: String,
}

/// Primary wins over tip for index 0
pub fn classify(index: usize, text: &str, markers: &TipMarkers) -> SuggestionStyle {
    if index == 0 {
        SuggestionStyle::Primary
    } else if markers.matches(text) {
        SuggestionStyle::Tip
    } else {
        SuggestionStyle::Secondary
    }
}

pub fn style_suggestions(suggestions: &[String], markers: &TipMarkers) -> Vec<StyledSuggestion> {
    suggestions
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let style = classify(idx, text, markers);
            let text = match style {
                SuggestionStyle::Tip => format!("{TIP_ICON}{text}"),
                _ => text.clone(),
            };
            StyledSuggestion { style, text }
        })
        .collect()
}
