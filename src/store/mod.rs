pub mod cache;
pub mod profile;

pub use cache::SearchCache;
pub use profile::{ProfileStore, RedisProfileStore};

use std::fmt::Display;

use redis::Client;

/// Keys in the redis namespace shared with the recommendation stage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// Cached provider results for a search fragment
    ShowSearch { query: String, limit: usize },
    /// The submitted profile: ordered display names of the reference shows
    Quiz,
    /// The downstream stage's computed result, erased on every new submission
    Recommendations,
}

impl Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKey::ShowSearch { query, limit } => {
                write!(f, "search:{}:{}", limit, query.to_lowercase())
            }
            StoreKey::Quiz => write!(f, "quiz"),
            StoreKey::Recommendations => write!(f, "recommendations"),
        }
    }
}

/// Creates the redis client shared by the profile store and the search cache
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}
