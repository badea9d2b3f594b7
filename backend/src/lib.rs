//! # NFT Drop - server-rendered gallery and mint pages
//!
//! Fetches curated NFT drop collections from a headless content store and
//! renders a gallery plus one mint page per collection. Minting itself runs
//! in the browser through the wasm widget in `frontend/`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Request   │────▶│   Content   │────▶│   Render    │────▶│ HTML + JSON │
//! │ (/, /nft/x) │     │   (Sanity)  │     │ (+ images)  │     │   props     │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nftdrop::{open_store, ContentStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = open_store(None).unwrap();
//!     let collections = store.fetch_collections().await.unwrap();
//!     println!("{} drops", collections.len());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Environment configuration
//! - [`models`] - Collection and Creator documents
//! - [`content`] - Content store clients and queries
//! - [`image`] - Image URL resolution
//! - [`render`] - HTML rendering
//! - [`api`] - HTTP server

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Data sources
pub mod content;
pub mod image;

// Pages
pub mod render;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ContentError, ServerError};

pub use config::{SanityConfig, SiteConfig};

pub use models::{Collection, Creator, ImageAsset, ImageRef, Slug};

pub use content::{open_store, ContentStore, FixtureStore, SanityClient};

pub use image::ImageUrlBuilder;

pub use api::types::MintPageProps;

// Server
pub mod server {
    pub use crate::api::server::{router, start_server, AppState};
}
