//! Wallet, contract, and notification services.
//!
//! # Services
//!
//! - [`wallet`] - MetaMask (EIP-1193) wallet session
//! - [`contract`] - NFT drop contract via the thirdweb SDK
//! - [`toast`] - Transient notifications
//!
//! # JavaScript Bindings
//!
//! Wallet and contract calls go through bindings in `src/js/`:
//! - `wallet.js` - `window.ethereum` provider API
//! - `drop.js` - thirdweb SDK

pub mod contract;
pub mod toast;
pub mod wallet;

pub use contract::*;
pub use toast::*;
pub use wallet::*;

use wasm_bindgen::JsValue;

/// Best-effort message from a rejected JS promise.
pub(crate) fn js_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}
