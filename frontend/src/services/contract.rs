//! NFT drop contract access.
//!
//! Uses the thirdweb SDK directly via JavaScript. The SDK owns pricing,
//! supply bookkeeping, and transaction submission; this module only maps
//! its results into Rust types.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::js_error_message;
use crate::config::CHAIN;
use crate::{AppError, AppResult, ClaimCondition, ClaimedToken, NftMetadata};

/// Reads and writes on one drop contract.
#[async_trait(?Send)]
pub trait DropContract {
    /// Every token claimed so far.
    async fn all_claimed(&self) -> AppResult<Vec<NftMetadata>>;

    /// Number of tokens the drop holds in total.
    async fn total_supply(&self) -> AppResult<u64>;

    /// Claim conditions, in phase order.
    async fn claim_conditions(&self) -> AppResult<Vec<ClaimCondition>>;

    /// Claim `quantity` tokens to `address`. Rejects if the transaction fails.
    async fn claim_to(&self, address: &str, quantity: u32) -> AppResult<Vec<ClaimedToken>>;
}

/// Drop contract handle from the thirdweb SDK.
pub struct ThirdwebDrop {
    handle: JsValue,
}

impl ThirdwebDrop {
    /// Obtain a handle to the drop deployed at `address`.
    pub async fn acquire(address: &str) -> AppResult<Self> {
        log::info!("Loading drop contract {} on {}", address, CHAIN);

        let handle = JsFuture::from(get_nft_drop_js(CHAIN, address))
            .await
            .map_err(|e| contract_error("Failed to load drop contract", &e))?;

        Ok(Self { handle })
    }
}

#[async_trait(?Send)]
impl DropContract for ThirdwebDrop {
    async fn all_claimed(&self) -> AppResult<Vec<NftMetadata>> {
        let result = JsFuture::from(get_all_claimed_js(&self.handle))
            .await
            .map_err(|e| contract_error("Failed to read claimed tokens", &e))?;
        from_js(result)
    }

    async fn total_supply(&self) -> AppResult<u64> {
        let result = JsFuture::from(total_supply_js(&self.handle))
            .await
            .map_err(|e| contract_error("Failed to read total supply", &e))?;

        // BigNumber arrives as its decimal string
        let raw = result
            .as_string()
            .ok_or_else(|| AppError::Contract("Total supply is not a string".to_string()))?;
        raw.parse()
            .map_err(|_| AppError::Contract(format!("Invalid total supply: {}", raw)))
    }

    async fn claim_conditions(&self) -> AppResult<Vec<ClaimCondition>> {
        let result = JsFuture::from(get_claim_conditions_js(&self.handle))
            .await
            .map_err(|e| contract_error("Failed to read claim conditions", &e))?;
        from_js(result)
    }

    async fn claim_to(&self, address: &str, quantity: u32) -> AppResult<Vec<ClaimedToken>> {
        log::info!("Claiming {} token(s) to {}", quantity, address);

        let result = JsFuture::from(claim_to_js(&self.handle, address, quantity))
            .await
            .map_err(|e| contract_error("Claim failed", &e))?;
        from_js(result)
    }
}

fn contract_error(context: &str, err: &JsValue) -> AppError {
    AppError::Contract(format!("{}: {}", context, js_error_message(err)))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> AppResult<T> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| AppError::Contract(format!("Failed to parse SDK result: {}", e)))
}

/// JavaScript functions from drop.js
#[wasm_bindgen(module = "/src/js/drop.js")]
extern "C" {
    #[wasm_bindgen(js_name = "getNftDrop")]
    fn get_nft_drop_js(chain: &str, address: &str) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "getAllClaimed")]
    fn get_all_claimed_js(handle: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "totalSupply")]
    fn total_supply_js(handle: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "getClaimConditions")]
    fn get_claim_conditions_js(handle: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_name = "claimTo")]
    fn claim_to_js(handle: &JsValue, address: &str, quantity: u32) -> js_sys::Promise;
}
