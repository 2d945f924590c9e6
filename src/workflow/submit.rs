use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{error::AppResult, services::NotificationSink, store::ProfileStore};

use super::QuizWorkflow;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Quiz successfully submitted!";
pub const SUBMIT_BLOCKED_MESSAGE: &str = "Complete all fields before submitting.";

/// Where the orchestrating caller should send the user after a successful
/// submission
pub const RESULTS_DESTINATION: &str = "/recommended";

/// What a submission attempt produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The profile was persisted and handed off
    Submitted,
    /// The form is incomplete; nothing was persisted
    Blocked,
}

/// Drives the completion-gated hand-off to the recommendation stage
///
/// A blocked submission is a signaled outcome, not an error: the store is
/// never touched and the user corrects the form and retries. A successful
/// submission persists the ordered show names, erases any stale
/// recommendation result (one atomic store operation covers both), signals
/// success, and resets the workflow for the next quiz.
pub struct SubmissionController {
    store: Arc<dyn ProfileStore>,
    notifier: Arc<dyn NotificationSink>,
}

impl SubmissionController {
    pub fn new(store: Arc<dyn ProfileStore>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { store, notifier }
    }

    /// Validates and submits the quiz
    ///
    /// Holds the write lock for the whole attempt so completeness cannot
    /// change between validation and persistence. A store failure propagates
    /// without notifying or resetting; the user may simply resubmit.
    pub async fn submit(&self, workflow: &RwLock<QuizWorkflow>) -> AppResult<SubmitOutcome> {
        let mut workflow = workflow.write().await;

        if !workflow.is_complete() {
            tracing::info!("Submission blocked on incomplete form");
            self.notifier.blocked(SUBMIT_BLOCKED_MESSAGE);
            return Ok(SubmitOutcome::Blocked);
        }

        let names = workflow.answer().reference_show_names();
        self.store.record_submission(&names).await?;

        tracing::info!(shows = ?names, "Quiz profile handed off");
        self.notifier.success(SUBMIT_SUCCESS_MESSAGE);

        // The profile is now owned by the recommendation stage; the next
        // mount starts from a fresh quiz.
        workflow.reset();

        Ok(SubmitOutcome::Submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{LengthPreference, Show};
    use crate::services::notify::MockNotificationSink;
    use crate::store::profile::MockProfileStore;

    fn complete_workflow() -> RwLock<QuizWorkflow> {
        let mut workflow = QuizWorkflow::new();
        workflow.toggle_genre("Comedy".to_string());
        workflow.toggle_genre("Drama".to_string());
        workflow.set_length(LengthPreference::ShortRun);
        workflow.select_show(Show::new("1", "ShowA"));
        workflow.select_show(Show::new("2", "ShowB"));
        workflow.select_show(Show::new("3", "ShowC"));
        RwLock::new(workflow)
    }

    #[tokio::test]
    async fn test_complete_form_submits_names_in_selection_order() {
        let mut store = MockProfileStore::new();
        store
            .expect_record_submission()
            .withf(|names| names == ["ShowA", "ShowB", "ShowC"].as_slice())
            .times(1)
            .returning(|_| Ok(()));

        let mut notifier = MockNotificationSink::new();
        notifier
            .expect_success()
            .withf(|message| message == SUBMIT_SUCCESS_MESSAGE)
            .times(1)
            .return_const(());
        notifier.expect_blocked().never();

        let controller = SubmissionController::new(Arc::new(store), Arc::new(notifier));
        let workflow = complete_workflow();

        let outcome = controller.submit(&workflow).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Submitted);

        // A successful hand-off leaves a fresh workflow behind
        let workflow = workflow.read().await;
        assert!(!workflow.is_complete());
        assert!(workflow.answer().genres().is_empty());
    }

    #[tokio::test]
    async fn test_incomplete_form_blocks_without_touching_the_store() {
        let mut store = MockProfileStore::new();
        store.expect_record_submission().never();

        let mut notifier = MockNotificationSink::new();
        notifier
            .expect_blocked()
            .withf(|message| message == SUBMIT_BLOCKED_MESSAGE)
            .times(1)
            .return_const(());
        notifier.expect_success().never();

        let controller = SubmissionController::new(Arc::new(store), Arc::new(notifier));

        let mut incomplete = QuizWorkflow::new();
        incomplete.toggle_genre("Comedy".to_string());
        let workflow = RwLock::new(incomplete);

        let outcome = controller.submit(&workflow).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Blocked);

        // The form keeps whatever the user had entered
        assert_eq!(workflow.read().await.answer().genres(), ["Comedy"].as_slice());
    }

    #[tokio::test]
    async fn test_store_failure_propagates_without_notifying_or_resetting() {
        let mut store = MockProfileStore::new();
        store
            .expect_record_submission()
            .times(1)
            .returning(|_| Err(AppError::Internal("store down".to_string())));

        let mut notifier = MockNotificationSink::new();
        notifier.expect_success().never();
        notifier.expect_blocked().never();

        let controller = SubmissionController::new(Arc::new(store), Arc::new(notifier));
        let workflow = complete_workflow();

        let result = controller.submit(&workflow).await;
        assert!(result.is_err());

        // Still complete, so the user can retry the submission
        assert!(workflow.read().await.is_complete());
    }
}
