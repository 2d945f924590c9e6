/// Show query service abstraction
///
/// The workflow treats show lookup as an opaque service: free-text fragment
/// in, ranked candidates out. Implementations may fail or return nothing;
/// the workflow never retries and never surfaces lookup errors to the user.
use crate::{error::AppResult, models::Show};

pub mod tvmaze;

pub use tvmaze::TvMazeProvider;

/// Trait for show query providers
#[async_trait::async_trait]
pub trait ShowProvider: Send + Sync {
    /// Searches for shows matching a free-text fragment
    ///
    /// Returns at most `limit` candidates, best matches first.
    async fn search_shows(&self, query: &str, limit: usize) -> AppResult<Vec<Show>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
