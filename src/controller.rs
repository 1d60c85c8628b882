// src/controller.rs
//! Request lifecycle: validate, submit, render or recover

use tracing::{info, warn};

use crate::core::AnalysisService;
use crate::error::AnalyzeError;
use crate::render::{render, TipMarkers};
use crate::types::{AnalysisRequest, AnalysisResult};
use crate::ui::{BusyGuard, ErrorCard, Page, ResultsContent};

/// What one submission ended in. Nothing here is propagated as an error;
/// the page already shows the outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Result rendered into the results area
    Rendered,
    /// Service call failed, error card shown
    Failed(AnalyzeError),
    /// Validation failed, notice shown, no request made
    Rejected(AnalyzeError),
    /// Trigger was disabled, nothing happened
    Ignored,
}

impl Outcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Outcome::Rendered)
    }
}

pub struct RequestController<S> {
    service: S,
    markers: TipMarkers,
}

impl<S: AnalysisService> RequestController<S> {
    pub fn new(service: S, markers: TipMarkers) -> Self {
        Self { service, markers }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Fail-fast: resume first, then job description
    pub fn build_request(page: &Page) -> Result<AnalysisRequest, AnalyzeError> {
        let resume_file = page
            .resume_file()
            .selected()
            .ok_or(AnalyzeError::MissingResume)?;

        let text = page.job_description().value();
        if text.trim().is_empty() {
            return Err(AnalyzeError::MissingJobDescription);
        }

        Ok(AnalysisRequest {
            resume_file: resume_file.clone(),
            job_description_text: text.to_string(),
        })
    }

    /// Run one analysis against the current page inputs
    pub async fn submit(&self, page: &mut Page) -> Outcome {
        if page.trigger().is_disabled() {
            warn!("Submit ignored: trigger is disabled");
            return Outcome::Ignored;
        }

        let request = match Self::build_request(page) {
            Ok(request) => request,
            Err(err) => {
                page.notify(err.to_string());
                return Outcome::Rejected(err);
            }
        };

        let mut page = BusyGuard::acquire(page);

        match self.service.analyze(&request).await {
            Ok(result) => {
                info!(
                    "Analysis complete: score {:.1}, {} suggestions",
                    result.score,
                    result.suggestions.len()
                );
                self.show_result(&mut page, result);
                Outcome::Rendered
            }
            Err(err) => {
                warn!("Analysis failed: {}", err);
                page.results.show(ResultsContent::Error(ErrorCard {
                    detail: err.detail().map(str::to_string),
                }));
                Outcome::Failed(err)
            }
        }
    }

    fn show_result(&self, page: &mut Page, result: AnalysisResult) {
        let view = render(&result, &self.markers);
        page.results.show(ResultsContent::Analysis(Box::new(view)));
        page.state.record_result(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{SkillKind, SuggestionStyle};
    use crate::types::ResumeFile;
    use crate::ui::page::DEFAULT_LABEL;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Replays canned responses and counts calls
    #[derive(Default)]
    struct StubService {
        responses: RefCell<VecDeque<Result<AnalysisResult, AnalyzeError>>>,
        calls: Cell<usize>,
        last_text: RefCell<Option<String>>,
    }

    impl StubService {
        fn with(responses: Vec<Result<AnalysisResult, AnalyzeError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                ..Default::default()
            }
        }
    }

    impl AnalysisService for StubService {
        async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalyzeError> {
            self.calls.set(self.calls.get() + 1);
            *self.last_text.borrow_mut() = Some(request.job_description_text.clone());
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AnalyzeError::failed("no canned response")))
        }
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            score: 85.0,
            matched_skills: vec!["SQL".into()],
            missing_skills: vec!["Go".into()],
            extra_skills: vec!["PHP".into()],
            suggestions: vec![
                "Add Go experience".into(),
                "Focus on matching keywords".into(),
            ],
        }
    }

    fn filled_page(text: &str) -> Page {
        let mut page = Page::new();
        page.resume_file_mut()
            .select(ResumeFile::new("resume.pdf", b"%PDF".to_vec()));
        page.job_description_mut().set(text);
        page
    }

    fn assert_idle(page: &Page) {
        assert!(!page.state().is_busy());
        assert!(!page.trigger().is_disabled());
        assert_eq!(page.trigger().label(), DEFAULT_LABEL);
    }

    #[tokio::test]
    async fn test_missing_resume_never_calls_service() {
        let controller = RequestController::new(StubService::default(), TipMarkers::default());
        let mut page = Page::new();
        page.job_description_mut().set("Backend engineer, SQL");

        let outcome = controller.submit(&mut page).await;
        assert_eq!(outcome, Outcome::Rejected(AnalyzeError::MissingResume));
        assert_eq!(controller.service().calls.get(), 0);
        assert_eq!(page.notices(), ["Please upload a resume file."]);
        assert!(!page.results().is_visible());
        assert_idle(&page);
    }

    #[tokio::test]
    async fn test_blank_job_description_never_calls_service() {
        let controller = RequestController::new(StubService::default(), TipMarkers::default());
        let mut page = filled_page(" \n\t ");

        let outcome = controller.submit(&mut page).await;
        assert_eq!(outcome, Outcome::Rejected(AnalyzeError::MissingJobDescription));
        assert_eq!(controller.service().calls.get(), 0);
        assert_eq!(page.notices(), ["Please paste the job description."]);
    }

    #[tokio::test]
    async fn test_resume_checked_before_job_description() {
        let controller = RequestController::new(StubService::default(), TipMarkers::default());
        let mut page = Page::new();
        let outcome = controller.submit(&mut page).await;
        assert_eq!(outcome, Outcome::Rejected(AnalyzeError::MissingResume));
        assert_eq!(page.notices().len(), 1);
    }

    #[tokio::test]
    async fn test_success_renders_and_records_result() {
        let controller =
            RequestController::new(StubService::with(vec![Ok(sample_result())]), TipMarkers::default());
        let mut page = filled_page("  SQL and Go  ");

        let outcome = controller.submit(&mut page).await;
        assert!(outcome.is_rendered());
        assert_idle(&page);
        assert!(page.results().is_visible());
        assert_eq!(page.state().last_rendered_result(), Some(&sample_result()));

        // Raw text goes over the wire, untrimmed
        assert_eq!(
            controller.service().last_text.borrow().as_deref(),
            Some("  SQL and Go  ")
        );

        let ResultsContent::Analysis(view) = page.results().content() else {
            panic!("expected rendered analysis, got {:?}", page.results().content());
        };
        assert_eq!(view.score_text(), "85%");
        assert_eq!(view.section(SkillKind::Matched).count, 1);
        assert_eq!(view.section(SkillKind::Missing).count, 1);
        assert_eq!(view.suggestions[0].style, SuggestionStyle::Primary);
        assert_eq!(view.suggestions[0].text, "Add Go experience");
        assert_eq!(view.suggestions[1].style, SuggestionStyle::Tip);
        assert_eq!(view.suggestions[1].text, "💡 Focus on matching keywords");
    }

    #[tokio::test]
    async fn test_failure_shows_error_card_and_recovers() {
        let controller = RequestController::new(
            StubService::with(vec![
                Err(AnalyzeError::failed("Service returned 502")),
                Err(AnalyzeError::AnalysisFailed { detail: None }),
            ]),
            TipMarkers::default(),
        );
        let mut page = filled_page("SQL");

        let outcome = controller.submit(&mut page).await;
        assert!(matches!(outcome, Outcome::Failed(_)));
        assert_idle(&page);
        assert_eq!(
            page.results().content(),
            &ResultsContent::Error(ErrorCard {
                detail: Some("Service returned 502".into())
            })
        );

        // Session stays usable; second failure has no detail
        let outcome = controller.submit(&mut page).await;
        assert!(matches!(outcome, Outcome::Failed(_)));
        let ResultsContent::Error(card) = page.results().content() else {
            panic!("expected error card");
        };
        assert_eq!(card.body(), ErrorCard::RETRY_PROMPT);
        assert_idle(&page);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_result_in_state() {
        let controller = RequestController::new(
            StubService::with(vec![Ok(sample_result()), Err(AnalyzeError::failed("down"))]),
            TipMarkers::default(),
        );
        let mut page = filled_page("SQL");

        controller.submit(&mut page).await;
        controller.submit(&mut page).await;
        assert!(matches!(page.results().content(), ResultsContent::Error(_)));
        assert_eq!(page.state().last_rendered_result(), Some(&sample_result()));
    }

    #[tokio::test]
    async fn test_latest_success_overwrites_previous() {
        let mut second = sample_result();
        second.score = 42.0;
        second.matched_skills.clear();

        let controller = RequestController::new(
            StubService::with(vec![Ok(sample_result()), Ok(second.clone())]),
            TipMarkers::default(),
        );
        let mut page = filled_page("SQL");

        controller.submit(&mut page).await;
        controller.submit(&mut page).await;
        assert_eq!(page.state().last_rendered_result(), Some(&second));
        let ResultsContent::Analysis(view) = page.results().content() else {
            panic!("expected rendered analysis");
        };
        assert_eq!(view.section(SkillKind::Matched).count, 0);
    }

    #[tokio::test]
    async fn test_disabled_trigger_ignores_submit() {
        let controller =
            RequestController::new(StubService::with(vec![Ok(sample_result())]), TipMarkers::default());
        let mut page = filled_page("SQL");
        page.trigger.disable_with_label("Analyzing...");

        assert_eq!(controller.submit(&mut page).await, Outcome::Ignored);
        assert_eq!(controller.service().calls.get(), 0);
    }
}
