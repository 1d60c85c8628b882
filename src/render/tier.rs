// src/render/tier.rs
use serde::Serialize;

pub const STRONG_THRESHOLD: i64 = 80;
pub const GOOD_THRESHOLD: i64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTier {
    Strong,
    Good,
    Weak,
}

impl ScoreTier {
    /// Lower bounds are inclusive
    pub fn from_display_score(score: i64) -> Self {
        if score >= STRONG_THRESHOLD {
            ScoreTier::Strong
        } else if score >= GOOD_THRESHOLD {
            ScoreTier::Good
        } else {
            ScoreTier::Weak
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            ScoreTier::Strong => "Strong match! Your resume aligns well with the job requirements.",
            ScoreTier::Good => "Good match, but key skill gaps may reduce ATS ranking.",
            ScoreTier::Weak => {
                "Significant gaps detected. Consider adding missing skills to improve ATS performance."
            }
        }
    }
}

/// Score as shown to the user. The tier is classified from this value, not the raw float,
/// so the number and the summary text always agree.
pub fn display_score(raw: f64) -> i64 {
    if raw.is_finite() {
        raw.round() as i64
    } else {
        0
    }
}
