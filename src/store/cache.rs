use redis::{AsyncCommands, Client};
use tokio::sync::mpsc;

use crate::error::{AppError, AppResult};

use super::StoreKey;

/// A pending cache write
struct CacheWrite {
    key: String,
    value: String,
    ttl: u64,
}

/// Read-through cache for show search results
///
/// Reads hit redis directly; writes are handed to a background task over a
/// channel so a lookup never waits on cache population. Dropping the last
/// clone closes the channel and the writer drains whatever is left.
#[derive(Clone)]
pub struct SearchCache {
    client: Client,
    write_tx: mpsc::UnboundedSender<CacheWrite>,
}

impl SearchCache {
    /// Creates the cache and spawns its background writer
    pub fn new(client: Client) -> Self {
        let (write_tx, mut write_rx) = mpsc::unbounded_channel::<CacheWrite>();

        let writer_client = client.clone();
        tokio::spawn(async move {
            while let Some(write) = write_rx.recv().await {
                if let Err(e) = Self::write(&writer_client, write).await {
                    tracing::error!(error = %e, "Search cache write failed");
                }
            }
        });

        Self { client, write_tx }
    }

    async fn write(client: &Client, write: CacheWrite) -> AppResult<()> {
        let mut conn = client.get_multiplexed_async_connection().await?;
        let _: () = conn.set_ex(write.key, write.value, write.ttl).await?;
        Ok(())
    }

    /// Looks up a cached value, deserializing on hit
    pub async fn get<T: serde::de::DeserializeOwned>(&self, key: &StoreKey) -> AppResult<Option<T>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let cached: Option<String> = conn.get(key.to_string()).await?;

        cached
            .map(|json| {
                serde_json::from_str(&json)
                    .map_err(|e| AppError::Internal(format!("Cache deserialization error: {}", e)))
            })
            .transpose()
    }

    /// Queues a cache write without waiting for it to land
    pub fn set_in_background<T: serde::Serialize>(&self, key: &StoreKey, value: &T, ttl: u64) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Cache serialization error");
                return;
            }
        };

        let write = CacheWrite {
            key: key.to_string(),
            value: json,
            ttl,
        };

        if self.write_tx.send(write).is_err() {
            tracing::error!("Search cache writer is gone; dropping write");
        }
    }
}
