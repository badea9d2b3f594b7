//! NFT Drop - mint widget
//!
//! A WebAssembly widget mounted into the server-rendered mint page. The
//! server embeds the collection as JSON in `#mint-page-props`; the widget
//! reads it, connects the wallet, and talks to the drop contract.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       MintApp                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MintPage                                                    │
//! │  ├── WalletHeader (Sign In / Sign Out)                      │
//! │  ├── main image, title, supply                              │
//! │  └── mint button ──► MintController ──► DropContract        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Toaster                                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Props, chain data, and the mint view state
//! - [`mint`] - Mint flow controller
//! - [`components`] - UI components
//! - [`services`] - Wallet, drop contract, and toasts

use std::rc::Rc;

use leptos::*;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod types;
pub mod mint;
pub mod components;
pub mod services;

pub use config::*;

pub use types::{
    // Page
    MintPageProps,
    // Chain
    ClaimCondition, ClaimedToken, NftMetadata,
    // View
    MintViewState, Price,
    // Errors
    AppError, AppResult,
};

pub use components::*;
pub use mint::{MintController, MintOutcome, MintSkip, ViewStore};
pub use services::*;

/// WASM entry point, run when the module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Starting mint widget");

    if let Err(e) = mount() {
        log::error!("{}", e);
    }
}

fn mount() -> AppResult<()> {
    let props = read_props()?;

    let root = gloo_utils::document()
        .get_element_by_id(MOUNT_ID)
        .ok_or_else(|| AppError::Props(format!("Missing #{} element", MOUNT_ID)))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| AppError::Props(format!("#{} is not an HTML element", MOUNT_ID)))?;

    mount_to(root, move || view! { <MintApp props=props/> });
    Ok(())
}

/// Collection props embedded by the server.
fn read_props() -> AppResult<MintPageProps> {
    let text = gloo_utils::document()
        .get_element_by_id(PROPS_ID)
        .and_then(|el| el.text_content())
        .ok_or_else(|| AppError::Props(format!("Missing #{} script", PROPS_ID)))?;

    serde_json::from_str(&text)
        .map_err(|e| AppError::Props(format!("Invalid page props: {}", e)))
}

#[component]
pub fn MintApp(props: MintPageProps) -> impl IntoView {
    let session = WalletSession::new(Rc::new(MetamaskWallet));
    let toasts = ToastStore::new();

    view! {
        <MintPage props=props session=session toasts=toasts/>
        <Toaster store=toasts/>
    }
}
