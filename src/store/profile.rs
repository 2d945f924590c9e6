use redis::{AsyncCommands, Client};

use crate::error::{AppError, AppResult};

use super::StoreKey;

/// Persistence boundary between the quiz and the recommendation stage
///
/// The downstream reader must find the submitted show names in selection
/// order under the quiz key, or nothing at all ("no quiz taken yet").
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Persists the ordered show names and erases any stale recommendation
    /// result
    ///
    /// The write and the erase land together or not at all.
    async fn record_submission(&self, show_names: &[String]) -> AppResult<()>;

    /// Reads back the persisted profile, if a quiz has been submitted
    async fn load_profile(&self) -> AppResult<Option<Vec<String>>>;
}

/// Redis-backed profile store
#[derive(Clone)]
pub struct RedisProfileStore {
    client: Client,
}

impl RedisProfileStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ProfileStore for RedisProfileStore {
    async fn record_submission(&self, show_names: &[String]) -> AppResult<()> {
        let json = serde_json::to_string(show_names)
            .map_err(|e| AppError::Internal(format!("Profile serialization error: {}", e)))?;

        let mut conn = self.client.get_multiplexed_async_connection().await?;

        // One transaction: the new profile and the stale recommendation entry
        // may never be observed out of step.
        let _: () = redis::pipe()
            .atomic()
            .set(StoreKey::Quiz.to_string(), json)
            .ignore()
            .del(StoreKey::Recommendations.to_string())
            .ignore()
            .query_async(&mut conn)
            .await?;

        Ok(())
    }

    async fn load_profile(&self) -> AppResult<Option<Vec<String>>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let stored: Option<String> = conn.get(StoreKey::Quiz.to_string()).await?;

        stored
            .map(|json| {
                serde_json::from_str(&json).map_err(|e| {
                    AppError::Internal(format!("Profile deserialization error: {}", e))
                })
            })
            .transpose()
    }
}
