//! Wallet session.
//!
//! The mint page never looks the wallet up ambiently. It receives a
//! [`WalletSession`] that wraps some [`WalletConnector`] and exposes the
//! connected address as a signal.

use std::rc::Rc;

use async_trait::async_trait;
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::js_error_message;
use crate::{AppError, AppResult};

/// Wallet connection primitives.
#[async_trait(?Send)]
pub trait WalletConnector {
    /// Ask the wallet for an account; returns its address.
    async fn connect(&self) -> AppResult<String>;

    /// Forget the connected account.
    async fn disconnect(&self) -> AppResult<()>;

    /// Address already authorized for this site, if any.
    async fn current_address(&self) -> AppResult<Option<String>>;
}

/// MetaMask, or any injected EIP-1193 provider.
pub struct MetamaskWallet;

impl MetamaskWallet {
    /// Whether `window.ethereum` exists.
    pub fn is_available() -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };

        let available = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum"))
            .map(|v| !v.is_null() && !v.is_undefined())
            .unwrap_or(false);

        if !available {
            log::warn!("No injected Ethereum provider found");
        }
        available
    }
}

#[async_trait(?Send)]
impl WalletConnector for MetamaskWallet {
    async fn connect(&self) -> AppResult<String> {
        if !Self::is_available() {
            return Err(AppError::Wallet(
                "No wallet found. Please install the MetaMask extension.".to_string(),
            ));
        }

        log::info!("Connecting to wallet...");

        let result = JsFuture::from(connect_wallet_js())
            .await
            .map_err(|e| AppError::Wallet(format!("Failed to connect wallet: {}", js_error_message(&e))))?;

        let address = result
            .as_string()
            .ok_or_else(|| AppError::Wallet("Address is not a string".to_string()))?;

        log::info!("Connected to wallet: {}", address);
        Ok(address)
    }

    async fn disconnect(&self) -> AppResult<()> {
        JsFuture::from(disconnect_wallet_js())
            .await
            .map_err(|e| AppError::Wallet(format!("Failed to disconnect: {}", js_error_message(&e))))?;
        Ok(())
    }

    async fn current_address(&self) -> AppResult<Option<String>> {
        if !Self::is_available() {
            return Ok(None);
        }

        let result = JsFuture::from(current_address_js())
            .await
            .map_err(|e| AppError::Wallet(js_error_message(&e)))?;
        Ok(result.as_string())
    }
}

/// Handle to the visitor's wallet, injected into the mint page.
#[derive(Clone)]
pub struct WalletSession {
    connector: Rc<dyn WalletConnector>,
    address: RwSignal<Option<String>>,
}

impl WalletSession {
    pub fn new(connector: Rc<dyn WalletConnector>) -> Self {
        Self {
            connector,
            address: create_rw_signal(None),
        }
    }

    /// Connected address (reactive).
    pub fn address_signal(&self) -> ReadSignal<Option<String>> {
        self.address.read_only()
    }

    /// Pick up an account the wallet already authorized.
    pub async fn restore(&self) {
        match self.connector.current_address().await {
            Ok(address) => self.address.set(address),
            Err(e) => log::warn!("Could not read wallet address: {}", e),
        }
    }

    pub async fn sign_in(&self) {
        match self.connector.connect().await {
            Ok(address) => self.address.set(Some(address)),
            Err(e) => log::error!("Wallet connection failed: {}", e),
        }
    }

    pub async fn sign_out(&self) {
        if let Err(e) = self.connector.disconnect().await {
            log::warn!("{}", e);
        }
        self.address.set(None);
    }

    /// Follow account switches made in the wallet extension.
    pub fn watch_accounts(&self) {
        if !MetamaskWallet::is_available() {
            return;
        }

        let address = self.address;
        let on_change = Closure::wrap(Box::new(move |account: JsValue| {
            let account = account.as_string();
            log::info!("Wallet account changed: {:?}", account);
            address.set(account);
        }) as Box<dyn FnMut(JsValue)>);

        on_accounts_changed_js(on_change.as_ref().unchecked_ref());
        // The listener lives as long as the page.
        on_change.forget();
    }
}

/// Shorten an address for display: first 5 and last 5 characters.
///
/// Addresses of 10 characters or fewer are returned whole.
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }

    let head: String = chars[..5].iter().collect();
    let tail: String = chars[chars.len() - 5..].iter().collect();
    format!("{}...{}", head, tail)
}

/// JavaScript functions from wallet.js
#[wasm_bindgen(module = "/src/js/wallet.js")]
extern "C" {
    #[wasm_bindgen(js_name = "connectWallet")]
    fn connect_wallet_js() -> js_sys::Promise;

    #[wasm_bindgen(js_name = "disconnectWallet")]
    fn disconnect_wallet_js() -> js_sys::Promise;

    #[wasm_bindgen(js_name = "currentAddress")]
    fn current_address_js() -> js_sys::Promise;

    #[wasm_bindgen(js_name = "onAccountsChanged")]
    fn on_accounts_changed_js(callback: &js_sys::Function);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_long_address() {
        assert_eq!(
            truncate_address("0xABCDEF1234567890ABCDEF1234567890ABCDWXYZ"),
            "0xABC...DWXYZ"
        );
    }

    #[test]
    fn test_truncate_keeps_first_and_last_five() {
        let truncated = truncate_address("0123456789A");
        assert_eq!(truncated, "01234...6789A");
    }

    #[test]
    fn test_short_addresses_are_whole() {
        assert_eq!(truncate_address(""), "");
        assert_eq!(truncate_address("0xABC"), "0xABC");
        assert_eq!(truncate_address("0123456789"), "0123456789");
    }

    #[test]
    fn test_non_ascii_does_not_panic() {
        assert_eq!(truncate_address("ééééééééééé"), "ééééé...ééééé");
    }

    struct FakeConnector {
        authorized: Option<String>,
        fail_connect: bool,
        disconnects: std::cell::Cell<u32>,
    }

    impl FakeConnector {
        fn new(authorized: Option<&str>) -> Self {
            Self {
                authorized: authorized.map(str::to_string),
                fail_connect: false,
                disconnects: std::cell::Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl WalletConnector for FakeConnector {
        async fn connect(&self) -> AppResult<String> {
            if self.fail_connect {
                return Err(AppError::Wallet("user rejected".into()));
            }
            Ok("0xABCDEF1234567890".to_string())
        }

        async fn disconnect(&self) -> AppResult<()> {
            self.disconnects.set(self.disconnects.get() + 1);
            Ok(())
        }

        async fn current_address(&self) -> AppResult<Option<String>> {
            Ok(self.authorized.clone())
        }
    }

    #[test]
    fn test_sign_in_then_out() {
        let runtime = create_runtime();
        let connector = Rc::new(FakeConnector::new(None));
        let session = WalletSession::new(connector.clone());

        futures::executor::block_on(session.sign_in());
        assert_eq!(
            session.address_signal().get_untracked().as_deref(),
            Some("0xABCDEF1234567890")
        );

        futures::executor::block_on(session.sign_out());
        assert_eq!(session.address_signal().get_untracked(), None);
        assert_eq!(connector.disconnects.get(), 1);

        runtime.dispose();
    }

    #[test]
    fn test_failed_sign_in_stays_signed_out() {
        let runtime = create_runtime();
        let mut connector = FakeConnector::new(None);
        connector.fail_connect = true;
        let session = WalletSession::new(Rc::new(connector));

        futures::executor::block_on(session.sign_in());
        assert_eq!(session.address_signal().get_untracked(), None);

        runtime.dispose();
    }

    #[test]
    fn test_restore_picks_up_authorized_account() {
        let runtime = create_runtime();
        let session = WalletSession::new(Rc::new(FakeConnector::new(Some("0x01"))));

        futures::executor::block_on(session.restore());
        assert_eq!(session.address_signal().get_untracked().as_deref(), Some("0x01"));

        runtime.dispose();
    }
}
