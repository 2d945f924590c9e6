mod submit;

pub use submit::{
    SubmissionController, SubmitOutcome, RESULTS_DESTINATION, SUBMIT_BLOCKED_MESSAGE,
    SUBMIT_SUCCESS_MESSAGE,
};

use crate::models::{LengthPreference, QuizAnswer, Show, ToggleOutcome};

/// Result cap passed to the show query service on every lookup
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// A lookup the caller must dispatch to the show query service
///
/// Carries the query text as it was at dispatch time so the resolution can be
/// checked for staleness against the live text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDispatch {
    pub query: String,
    pub limit: usize,
}

/// Transient search box state; never persisted
#[derive(Debug, Clone, Default)]
struct SearchState {
    query: String,
    candidates: Vec<Show>,
}

/// The preference-capture state machine
///
/// Owns the profile under construction and the transient search state. All
/// mutations are synchronous; the single asynchronous concern, the show
/// lookup, is pushed to the caller via [`SearchDispatch`] and comes back in
/// through [`apply_search_results`](Self::apply_search_results), which drops
/// responses whose dispatch-time query no longer matches the live text.
#[derive(Debug, Clone, Default)]
pub struct QuizWorkflow {
    answer: QuizAnswer,
    search: SearchState,
}

impl QuizWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(&self) -> &QuizAnswer {
        &self.answer
    }

    pub fn query_text(&self) -> &str {
        &self.search.query
    }

    pub fn candidates(&self) -> &[Show] {
        &self.search.candidates
    }

    /// Whether the profile is ready for submission; recomputed on every call
    pub fn is_complete(&self) -> bool {
        self.answer.is_complete()
    }

    pub fn toggle_genre(&mut self, label: String) -> ToggleOutcome {
        self.answer.toggle_genre(label)
    }

    pub fn set_length(&mut self, preference: LengthPreference) {
        self.answer.set_length(preference);
    }

    /// Updates the query text
    ///
    /// Non-empty text (after trimming) yields a dispatch for the caller to
    /// run against the query service. Empty text clears the candidate list
    /// immediately and dispatches nothing.
    pub fn set_query_text(&mut self, text: &str) -> Option<SearchDispatch> {
        let trimmed = text.trim();
        self.search.query = trimmed.to_string();

        if trimmed.is_empty() {
            self.search.candidates.clear();
            return None;
        }

        Some(SearchDispatch {
            query: trimmed.to_string(),
            limit: SEARCH_RESULT_LIMIT,
        })
    }

    /// Applies a resolved lookup, unless it has gone stale
    ///
    /// The result replaces the candidate list only if the live query text
    /// still equals the dispatch-time text; a later keystroke invalidates
    /// every earlier in-flight request regardless of resolution order.
    /// Returns whether the result was applied.
    pub fn apply_search_results(&mut self, dispatched_query: &str, results: Vec<Show>) -> bool {
        if self.search.query != dispatched_query {
            return false;
        }
        self.search.candidates = results;
        true
    }

    /// Toggles a show in the reference selection and resets the search box
    ///
    /// The reset happens whether the toggle added, removed, or was ignored
    /// for capacity; a capacity rejection is deliberately silent.
    pub fn select_show(&mut self, show: Show) -> ToggleOutcome {
        let outcome = self.answer.toggle_show(show);
        if outcome == ToggleOutcome::AtCapacity {
            tracing::debug!("Reference shows at capacity; selection ignored");
        }

        self.search.query.clear();
        self.search.candidates.clear();
        outcome
    }

    /// Discards everything and starts a fresh quiz
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
