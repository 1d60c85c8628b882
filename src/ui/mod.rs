// src/ui/mod.rs
pub mod page;
pub mod state;

pub use page::{
    ErrorCard, JobDescriptionField, Page, ResultsArea, ResultsContent, ResumeSelector,
    TriggerControl,
};
pub use state::{BusyGuard, UiState};
