// src/render/view.rs
use serde::Serialize;

use super::suggestions::{style_suggestions, StyledSuggestion, TipMarkers};
use super::tier::{display_score, ScoreTier};
use crate::types::AnalysisResult;

pub const SCORE_LABEL: &str = "ATS Match Score";
pub const SUGGESTIONS_HEADING: &str = "What to Fix First";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Matched,
    Missing,
    Extra,
}

impl SkillKind {
    pub fn title(self) -> &'static str {
        match self {
            SkillKind::Matched => "Matched Skills",
            SkillKind::Missing => "Missing Skills",
            SkillKind::Extra => "Extra Skills",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillSection {
    pub kind: SkillKind,
    pub count: usize,
    pub skills: Vec<String>,
}

impl SkillSection {
    fn new(kind: SkillKind, skills: &[String]) -> Self {
        Self {
            kind,
            count: skills.len(),
            skills: skills.to_vec(),
        }
    }
}

/// Fully composed result view; always replaces whatever was shown before
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedView {
    pub score: i64,
    pub tier: ScoreTier,
    pub headline: String,
    pub summary: String,
    /// Matched, missing, extra, in that order
    pub skills: [SkillSection; 3],
    pub suggestions: Vec<StyledSuggestion>,
}

impl RenderedView {
    pub fn section(&self, kind: SkillKind) -> &SkillSection {
        match kind {
            SkillKind::Matched => &self.skills[0],
            SkillKind::Missing => &self.skills[1],
            SkillKind::Extra => &self.skills[2],
        }
    }

    pub fn score_text(&self) -> String {
        format!("{}%", self.score)
    }
}

/// Pure: same result and markers always give the same view
pub fn render(result: &AnalysisResult, markers: &TipMarkers) -> RenderedView {
    let score = display_score(result.score);
    let tier = ScoreTier::from_display_score(score);

    RenderedView {
        score,
        tier,
        headline: format!("Your resume matches {}% of the job requirements.", score),
        summary: tier.summary().to_string(),
        skills: [
            SkillSection::new(SkillKind::Matched, &result.matched_skills),
            SkillSection::new(SkillKind::Missing, &result.missing_skills),
            SkillSection::new(SkillKind::Extra, &result.extra_skills),
        ],
        suggestions: style_suggestions(&result.suggestions, markers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SuggestionStyle;

    fn result(score: f64) -> AnalysisResult {
        AnalysisResult {
            score,
            matched_skills: vec!["SQL".into(), "Rust".into()],
            missing_skills: vec!["Go".into()],
            extra_skills: vec![],
            suggestions: vec!["Add Go experience".into()],
        }
    }

    #[test]
    fn test_counts_equal_list_lengths() {
        let view = render(&result(72.0), &TipMarkers::default());
        assert_eq!(view.section(SkillKind::Matched).count, 2);
        assert_eq!(view.section(SkillKind::Missing).count, 1);
        assert_eq!(view.section(SkillKind::Extra).count, 0);
        assert!(view.section(SkillKind::Extra).skills.is_empty());
    }

    #[test]
    fn test_skills_keep_service_order() {
        let view = render(&result(72.0), &TipMarkers::default());
        assert_eq!(view.section(SkillKind::Matched).skills, vec!["SQL", "Rust"]);
    }

    #[test]
    fn test_summary_follows_displayed_score() {
        let view = render(&result(79.6), &TipMarkers::default());
        assert_eq!(view.score_text(), "80%");
        assert_eq!(view.tier, ScoreTier::Strong);
        assert_eq!(view.summary, ScoreTier::Strong.summary());
        assert_eq!(
            view.headline,
            "Your resume matches 80% of the job requirements."
        );

        let view = render(&result(60.0), &TipMarkers::default());
        assert_eq!(view.summary, ScoreTier::Good.summary());

        let view = render(&result(12.0), &TipMarkers::default());
        assert_eq!(view.summary, ScoreTier::Weak.summary());
    }

    #[test]
    fn test_render_is_idempotent() {
        let input = result(85.0);
        let markers = TipMarkers::default();
        assert_eq!(render(&input, &markers), render(&input, &markers));
    }

    #[test]
    fn test_empty_suggestions() {
        let mut input = result(50.0);
        input.suggestions.clear();
        let view = render(&input, &TipMarkers::default());
        assert!(view.suggestions.is_empty());
    }

    #[test]
    fn test_primary_suggestion() {
        let view = render(&result(50.0), &TipMarkers::default());
        assert_eq!(view.suggestions[0].style, SuggestionStyle::Primary);
    }
}
