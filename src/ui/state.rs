// src/ui/state.rs
use std::ops::{Deref, DerefMut};
use tracing::debug;

use super::page::{Page, ResultsContent};
use crate::types::AnalysisResult;

/// Session-wide state; only the controller mutates it
#[derive(Debug, Clone, Default)]
pub struct UiState {
    busy: bool,
    last_rendered_result: Option<AnalysisResult>,
}

impl UiState {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn last_rendered_result(&self) -> Option<&AnalysisResult> {
        self.last_rendered_result.as_ref()
    }

    /// Replaces, never merges
    pub(crate) fn record_result(&mut self, result: AnalysisResult) {
        self.last_rendered_result = Some(result);
    }
}

/// Busy state held for the lifetime of one request. Dropping the guard releases it,
/// which covers success, handled failure, early return and unwinding alike.
pub struct BusyGuard<'a> {
    page: &'a mut Page,
}

impl<'a> BusyGuard<'a> {
    pub fn acquire(page: &'a mut Page) -> Self {
        page.state.busy = true;
        page.trigger.disable_with_label(super::page::BUSY_LABEL);
        page.results.show(ResultsContent::Loading);
        debug!("UI busy: trigger disabled, loading placeholder shown");
        Self { page }
    }
}

impl Deref for BusyGuard<'_> {
    type Target = Page;

    fn deref(&self) -> &Page {
        self.page
    }
}

impl DerefMut for BusyGuard<'_> {
    fn deref_mut(&mut self) -> &mut Page {
        self.page
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.page.state.busy = false;
        self.page.trigger.reset();
        debug!("UI idle: trigger re-enabled");
    }
}
