// src/render/mod.rs
//! Result renderer: classifies an analysis result and composes the view

pub mod suggestions;
pub mod tier;
pub mod view;

pub use suggestions::{SuggestionStyle, StyledSuggestion, TipMarkers, TIP_ICON};
pub use tier::{display_score, ScoreTier};
pub use view::{render, RenderedView, SkillKind, SkillSection};
