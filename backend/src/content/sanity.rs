//! Sanity HTTP query API client.
//!
//! ```rust,ignore
//! use nftdrop::{SanityClient, SanityConfig, ContentStore};
//!
//! let client = SanityClient::new(SanityConfig::from_env()?);
//! let collections = client.fetch_collections().await?;
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::{queries, ContentStore};
use crate::config::SanityConfig;
use crate::error::{ContentError, ContentResult};
use crate::models::Collection;

/// Query response envelope.
#[derive(Debug, Deserialize)]
struct QueryResponse<T> {
    result: T,
}

/// Sanity error response.
#[derive(Debug, Deserialize)]
struct SanityError {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    description: String,
}

/// Client for one Sanity project/dataset.
#[derive(Clone)]
pub struct SanityClient {
    http: reqwest::Client,
    config: SanityConfig,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &SanityConfig {
        &self.config
    }

    /// Run a GROQ query and decode its `result`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, Value)],
    ) -> ContentResult<T> {
        let url = self.config.query_url();
        tracing::debug!(%url, params = params.len(), "querying content store");

        let mut request = self.http.get(&url).query(&query_params(query, params));
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let body = serde_json::from_str::<SanityError>(&body)
                .map(|e| e.error.description)
                .unwrap_or(body);
            tracing::warn!(status = status.as_u16(), %body, "content store error");
            return Err(ContentError::Status { status: status.as_u16(), body });
        }

        let envelope: QueryResponse<T> = serde_json::from_str(&body)?;
        Ok(envelope.result)
    }
}

#[async_trait]
impl ContentStore for SanityClient {
    async fn fetch_collections(&self) -> ContentResult<Vec<Collection>> {
        let collections: Option<Vec<Collection>> =
            self.query(&queries::all_collections(), &[]).await?;
        Ok(collections.unwrap_or_default())
    }

    async fn fetch_collection(&self, id: &str) -> ContentResult<Option<Collection>> {
        self.query(&queries::collection_by_id(), &[("id", Value::from(id))])
            .await
    }
}

/// Encode a query and its parameters as URL query pairs.
///
/// Parameters are sent as `$name=<json>`, so strings keep their quotes.
fn query_params(query: &str, params: &[(&str, Value)]) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len() + 1);
    pairs.push(("query".to_string(), query.to_string()));
    for (name, value) in params {
        pairs.push((format!("${}", name), value.to_string()));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_json_encodes_values() {
        let pairs = query_params("*[slug.current == $id][0]", &[("id", Value::from("ape-escape"))]);

        assert_eq!(pairs[0], ("query".to_string(), "*[slug.current == $id][0]".to_string()));
        assert_eq!(pairs[1], ("$id".to_string(), "\"ape-escape\"".to_string()));
    }

    #[test]
    fn test_envelope_with_null_result() {
        let body = r#"{"ms": 3, "query": "*[0]", "result": null}"#;
        let envelope: QueryResponse<Option<Collection>> = serde_json::from_str(body).unwrap();
        assert!(envelope.result.is_none());
    }

    #[test]
    fn test_error_body_parsing() {
        let body = r#"{"error": {"description": "param $id referenced, but not provided", "type": "queryParseError"}}"#;
        let err: SanityError = serde_json::from_str(body).unwrap();
        assert!(err.error.description.contains("$id"));
    }
}
