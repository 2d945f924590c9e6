use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    services::{NotificationSink, ShowProvider},
    store::ProfileStore,
    workflow::QuizWorkflow,
};

/// Shared application state
///
/// The workflow is the single mutable piece; the collaborators behind it are
/// trait objects so tests can swap in doubles.
#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<RwLock<QuizWorkflow>>,
    pub provider: Arc<dyn ShowProvider>,
    pub store: Arc<dyn ProfileStore>,
    pub notifier: Arc<dyn NotificationSink>,
}

impl AppState {
    /// Creates state with a fresh workflow and the given collaborators
    pub fn new(
        provider: Arc<dyn ShowProvider>,
        store: Arc<dyn ProfileStore>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            workflow: Arc::new(RwLock::new(QuizWorkflow::new())),
            provider,
            store,
            notifier,
        }
    }
}
