//! Local JSON fixture store.
//!
//! Reads an array of collection documents from disk on every call, so the
//! file can be edited while the server runs.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::ContentStore;
use crate::error::ContentResult;
use crate::models::Collection;

/// Content store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    path: PathBuf,
}

impl FixtureStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    async fn load(&self) -> ContentResult<Vec<Collection>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl ContentStore for FixtureStore {
    async fn fetch_collections(&self) -> ContentResult<Vec<Collection>> {
        self.load().await
    }

    async fn fetch_collection(&self, id: &str) -> ContentResult<Option<Collection>> {
        let collections = self.load().await?;
        Ok(collections.into_iter().find(|c| c.slug.current == id))
    }
}
