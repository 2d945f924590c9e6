use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{LengthPreference, QuizAnswer, Show, GENRES};
use crate::workflow::{
    QuizWorkflow, SubmissionController, SubmitOutcome, RESULTS_DESTINATION,
    SUBMIT_BLOCKED_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct ToggleGenreRequest {
    pub genre: String,
}

#[derive(Debug, Deserialize)]
pub struct SetLengthRequest {
    pub length: LengthPreference,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub text: String,
}

/// Snapshot of the quiz in progress, returned by every mutating endpoint so
/// the client always sees completeness alongside the data it changed
#[derive(Debug, Serialize)]
pub struct QuizView {
    pub answer: QuizAnswer,
    pub complete: bool,
    pub query: String,
    pub candidates: Vec<Show>,
}

impl From<&QuizWorkflow> for QuizView {
    fn from(workflow: &QuizWorkflow) -> Self {
        Self {
            answer: workflow.answer().clone(),
            complete: workflow.is_complete(),
            query: workflow.query_text().to_string(),
            candidates: workflow.candidates().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LengthOption {
    pub value: LengthPreference,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub genres: Vec<&'static str>,
    pub lengths: Vec<LengthOption>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitStatus {
    Submitted,
    Blocked,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: SubmitStatus,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<&'static str>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Full view of the quiz in progress
pub async fn get_quiz(State(state): State<AppState>) -> Json<QuizView> {
    let workflow = state.workflow.read().await;
    Json(QuizView::from(&*workflow))
}

/// Discards the quiz in progress and starts fresh
pub async fn reset_quiz(State(state): State<AppState>) -> StatusCode {
    state.workflow.write().await.reset();
    StatusCode::NO_CONTENT
}

/// The genre catalog and length options for rendering the form
pub async fn get_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        genres: GENRES.to_vec(),
        lengths: LengthPreference::ALL
            .iter()
            .map(|&value| LengthOption {
                value,
                label: value.label(),
            })
            .collect(),
    })
}

/// Toggles a genre in the profile
pub async fn toggle_genre(
    State(state): State<AppState>,
    Json(request): Json<ToggleGenreRequest>,
) -> AppResult<Json<QuizView>> {
    let genre = request.genre.trim();
    if genre.is_empty() {
        return Err(AppError::InvalidInput(
            "Genre label must be non-empty".to_string(),
        ));
    }

    let mut workflow = state.workflow.write().await;
    workflow.toggle_genre(genre.to_string());
    Ok(Json(QuizView::from(&*workflow)))
}

/// Sets the length preference
pub async fn set_length(
    State(state): State<AppState>,
    Json(request): Json<SetLengthRequest>,
) -> Json<QuizView> {
    let mut workflow = state.workflow.write().await;
    workflow.set_length(request.length);
    Json(QuizView::from(&*workflow))
}

/// Updates the search text and kicks off a lookup when it is non-empty
///
/// The lookup runs in the background; its result lands in the candidate list
/// at resolution time only if the text has not changed since dispatch.
pub async fn update_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> StatusCode {
    let dispatch = state.workflow.write().await.set_query_text(&request.text);

    if let Some(dispatch) = dispatch {
        let provider = Arc::clone(&state.provider);
        let workflow = Arc::clone(&state.workflow);

        tokio::spawn(async move {
            match provider.search_shows(&dispatch.query, dispatch.limit).await {
                Ok(results) => {
                    let mut workflow = workflow.write().await;
                    if !workflow.apply_search_results(&dispatch.query, results) {
                        tracing::debug!(query = %dispatch.query, "Discarded stale search response");
                    }
                }
                // Lookup failures never reach the user; the candidate list
                // stays as it was.
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        query = %dispatch.query,
                        provider = provider.name(),
                        "Show search failed"
                    );
                }
            }
        });
    }

    StatusCode::ACCEPTED
}

/// Current candidate list for the search box
pub async fn get_candidates(State(state): State<AppState>) -> Json<Vec<Show>> {
    let workflow = state.workflow.read().await;
    Json(workflow.candidates().to_vec())
}

/// Toggles a show in the reference selection
pub async fn select_show(State(state): State<AppState>, Json(show): Json<Show>) -> Json<QuizView> {
    let mut workflow = state.workflow.write().await;
    workflow.select_show(show);
    Json(QuizView::from(&*workflow))
}

/// Validates and submits the finished quiz
pub async fn submit_quiz(State(state): State<AppState>) -> AppResult<Json<SubmitResponse>> {
    let controller =
        SubmissionController::new(Arc::clone(&state.store), Arc::clone(&state.notifier));

    let response = match controller.submit(&state.workflow).await? {
        SubmitOutcome::Submitted => SubmitResponse {
            status: SubmitStatus::Submitted,
            message: SUBMIT_SUCCESS_MESSAGE,
            redirect: Some(RESULTS_DESTINATION),
        },
        SubmitOutcome::Blocked => SubmitResponse {
            status: SubmitStatus::Blocked,
            message: SUBMIT_BLOCKED_MESSAGE,
            redirect: None,
        },
    };

    Ok(Json(response))
}

/// Read-back for the recommendation stage
pub async fn get_profile(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    match state.store.load_profile().await? {
        Some(names) => Ok(Json(names)),
        None => Err(AppError::NotFound("No quiz taken yet".to_string())),
    }
}
