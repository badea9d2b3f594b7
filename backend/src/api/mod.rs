//! HTTP API module.
//!
//! This module provides the page server and the types shared with the
//! wasm frontend.

pub mod server;
pub mod types;

pub use server::{router, start_server, AppState};
pub use types::*;
