//! HTTP server for the NFT drop pages.
//!
//! Pages are rendered on every request from fresh content-store data.
//! Minting happens in the browser via the wasm widget and the thirdweb SDK.
//!
//! # Routes
//!
//! | Method | Path            | Description                                  |
//! |--------|-----------------|----------------------------------------------|
//! | GET    | `/`             | Gallery of all collections                   |
//! | GET    | `/nft/{id}`     | Mint page for one collection (404 if absent) |
//! | GET    | `/health`       | Health check                                 |
//! | GET    | `/pkg/*`        | wasm widget bundle                           |
//! | GET    | `/favicon.ico`  | Site icon                                    |

use std::{net::SocketAddr, path::Path as FsPath, sync::Arc};

use axum::{
    extract::{Path, State},
    response::{Html, Json},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::{SanityConfig, SiteConfig, DEFAULT_DATASET};
use crate::content::{open_store, ContentStore};
use crate::error::{ServerError, ServerResult};
use crate::image::ImageUrlBuilder;
use crate::render;

/// Shared, immutable request state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub images: ImageUrlBuilder,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, images: ImageUrlBuilder) -> Self {
        Self { store, images }
    }
}

/// Build the application router.
pub fn router(state: AppState, static_dir: &FsPath) -> Router {
    Router::new()
        .route("/", get(gallery))
        .route("/nft/{id}", get(mint))
        .route("/health", get(health))
        .nest_service("/pkg", ServeDir::new(static_dir))
        .route_service("/favicon.ico", ServeFile::new(static_dir.join("favicon.ico")))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store(config.fixtures.as_deref())?;

    let images = match SanityConfig::from_env() {
        Ok(sanity) => ImageUrlBuilder::from_config(&sanity),
        Err(e) if config.fixtures.is_some() => {
            tracing::warn!("{}; asset references in fixtures will not resolve", e);
            ImageUrlBuilder::new("unset", DEFAULT_DATASET)
        }
        Err(e) => return Err(e.into()),
    };

    let app = router(AppState::new(store, images), &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("NFT drop server running on http://localhost:{}", config.port);
    tracing::info!("   GET /           - Gallery");
    tracing::info!("   GET /nft/{{id}}  - Mint page");
    tracing::info!("   GET /health     - Health check");
    tracing::info!("   wasm bundle from {}", config.static_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "nftdrop",
        "version": env!("CARGO_PKG_VERSION"),
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Gallery page
async fn gallery(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let collections = state.store.fetch_collections().await?;
    tracing::debug!(count = collections.len(), "rendering gallery");

    Ok(Html(render::gallery_page(&collections, &state.images)))
}

/// Mint page for one collection
async fn mint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServerResult<Html<String>> {
    let collection = state
        .store
        .fetch_collection(&id)
        .await?
        .ok_or_else(|| ServerError::NotFound(id.clone()))?;

    tracing::debug!(slug = %id, address = %collection.address, "rendering mint page");

    let page = render::mint_page(&collection, &state.images)
        .map_err(|e| ServerError::Internal(e.to_string()))?;
    Ok(Html(page))
}

async fn not_found() -> ServerError {
    ServerError::NotFound("route".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ContentError, ContentResult};
    use crate::models::{Collection, ImageRef, Slug};
    use async_trait::async_trait;
    use axum::{
        body::to_bytes,
        http::StatusCode,
        response::{IntoResponse, Response},
    };

    struct StaticStore(Vec<Collection>);

    #[async_trait]
    impl ContentStore for StaticStore {
        async fn fetch_collections(&self) -> ContentResult<Vec<Collection>> {
            Ok(self.0.clone())
        }

        async fn fetch_collection(&self, id: &str) -> ContentResult<Option<Collection>> {
            Ok(self.0.iter().find(|c| c.slug.current == id).cloned())
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl ContentStore for BrokenStore {
        async fn fetch_collections(&self) -> ContentResult<Vec<Collection>> {
            Err(ContentError::Http("connection refused".into()))
        }

        async fn fetch_collection(&self, _id: &str) -> ContentResult<Option<Collection>> {
            Err(ContentError::Http("connection refused".into()))
        }
    }

    fn state(store: impl ContentStore + 'static) -> AppState {
        AppState::new(Arc::new(store), ImageUrlBuilder::new("p", "production"))
    }

    fn ape_escape() -> Collection {
        Collection {
            id: "1".into(),
            title: "Ape Escape".into(),
            description: "Apes".into(),
            slug: Slug::new("ape-escape"),
            nft_collection_name: "Papafam Apes".into(),
            address: "0xA".into(),
            preview_image: ImageRef::default(),
            main_image: ImageRef::default(),
            creator: None,
        }
    }

    async fn body_of(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_gallery_lists_collections() {
        let response = gallery(State(state(StaticStore(vec![ape_escape()]))))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_of(response).await.contains("/nft/ape-escape"));
    }

    #[tokio::test]
    async fn test_mint_page_found() {
        let response = mint(
            State(state(StaticStore(vec![ape_escape()]))),
            Path("ape-escape".to_string()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_of(response).await.contains("mint-page-props"));
    }

    #[tokio::test]
    async fn test_unknown_collection_is_not_found() {
        let response = mint(
            State(state(StaticStore(vec![ape_escape()]))),
            Path("moon-cats".to_string()),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_of(response).await;
        assert!(!body.contains("mint-page-props"));
        assert!(!body.contains("Papafam Apes"));
    }

    #[tokio::test]
    async fn test_store_failure_is_bad_gateway() {
        let response = gallery(State(state(BrokenStore))).await.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(!body_of(response).await.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_health() {
        let Json(value) = health().await;
        assert_eq!(value["status"], "ok");
    }
}
