//! Content store access.
//!
//! Collection metadata lives in a headless content store. Page handlers only
//! see the [`ContentStore`] trait, so the live Sanity client and the local
//! fixture store are interchangeable.
//!
//! - [`sanity`] - Sanity HTTP query API client
//! - [`fixtures`] - JSON file store for offline development
//! - [`queries`] - GROQ query text

pub mod fixtures;
pub mod queries;
pub mod sanity;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::SanityConfig;
use crate::error::{ConfigError, ContentResult};
use crate::models::Collection;

pub use fixtures::FixtureStore;
pub use sanity::SanityClient;

/// Read-only access to collection documents.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All collections shown in the gallery.
    async fn fetch_collections(&self) -> ContentResult<Vec<Collection>>;

    /// One collection by identifier (its slug). `Ok(None)` when absent.
    async fn fetch_collection(&self, id: &str) -> ContentResult<Option<Collection>>;
}

/// Pick the store for this process: fixtures when a file is given,
/// otherwise Sanity configured from the environment.
pub fn open_store(
    fixtures: Option<&Path>,
) -> Result<Arc<dyn ContentStore>, ConfigError> {
    match fixtures {
        Some(path) => {
            tracing::info!(path = %path.display(), "serving collections from fixtures");
            Ok(Arc::new(FixtureStore::new(path)))
        }
        None => {
            let config = SanityConfig::from_env()?;
            tracing::info!(project = %config.project_id, dataset = %config.dataset, "using Sanity content store");
            Ok(Arc::new(SanityClient::new(config)))
        }
    }
}
