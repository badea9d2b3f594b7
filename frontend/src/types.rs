//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Page Types** - Props injected by the server
//! - **Contract Types** - Values read from the drop contract
//! - **View State** - Mint page state and the rules derived from it
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::CURRENCY_SYMBOL;

// =============================================================================
// Page Types
// =============================================================================

/// Mint page props embedded by the server.
///
/// Matches the backend's `MintPageProps` field for field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintPageProps {
    /// Collection slug
    pub slug: String,
    /// Display title
    pub title: String,
    /// Collection-level name
    pub nft_collection_name: String,
    pub description: String,
    /// Drop contract address
    pub address: String,
    /// Resolved main image URL
    pub main_image_url: String,
}

// =============================================================================
// Contract Types
// =============================================================================

/// Metadata of one token in the drop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// One claim condition phase of the drop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimCondition {
    /// Price formatted for display, e.g. "0.01"
    pub display_value: String,
    #[serde(default)]
    pub currency_symbol: Option<String>,
}

/// A token transferred by a successful claim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimedToken {
    /// Token id
    pub id: String,
    /// Hash of the claim transaction receipt
    pub transaction_hash: String,
    #[serde(default)]
    pub metadata: Option<NftMetadata>,
}

// =============================================================================
// View State
// =============================================================================

/// Display price of the drop.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Price {
    /// Not read yet, or the read failed
    #[default]
    Unset,
    /// The drop has no claim conditions
    NotForSale,
    /// First claim condition's display value and currency symbol
    Display { value: String, symbol: String },
}

impl Price {
    /// Price taken from a claim condition. Falls back to the chain's native
    /// symbol when the SDK reports none.
    pub fn from_condition(condition: ClaimCondition) -> Self {
        Price::Display {
            value: condition.display_value,
            symbol: condition
                .currency_symbol
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| CURRENCY_SYMBOL.to_string()),
        }
    }
}

/// Ephemeral mint page state. Lives only as long as the page view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MintViewState {
    pub loading: bool,
    pub claimed_supply: Option<u64>,
    pub total_supply: Option<u64>,
    pub price: Price,
}

impl MintViewState {
    /// Every token has been claimed. Unknown supply is never sold out.
    pub fn is_sold_out(&self) -> bool {
        matches!(
            (self.claimed_supply, self.total_supply),
            (Some(claimed), Some(total)) if claimed >= total
        )
    }

    /// Whether the mint button may be pressed by `address`.
    pub fn can_mint(&self, address: Option<&str>) -> bool {
        !self.loading
            && !self.is_sold_out()
            && address.is_some()
            && self.price != Price::NotForSale
    }

    /// Mint button label.
    pub fn button_label(&self, address: Option<&str>) -> String {
        if self.loading {
            "Loading".to_string()
        } else if self.is_sold_out() {
            "SOLD OUT".to_string()
        } else if address.is_none() {
            "Sign in to Mint".to_string()
        } else {
            match &self.price {
                Price::NotForSale => "Not for sale".to_string(),
                Price::Unset => "Mint NFT".to_string(),
                Price::Display { value, symbol } => format!("Mint NFT ({} {})", value, symbol),
            }
        }
    }

    /// "{claimed}/{total} NFT's claimed", with `?` for unread counts.
    pub fn supply_text(&self) -> String {
        let show = |v: Option<u64>| v.map(|n| n.to_string()).unwrap_or_else(|| "?".to_string());
        format!(
            "{}/{} NFT's claimed",
            show(self.claimed_supply),
            show(self.total_supply)
        )
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Wallet connection failed.
    Wallet(String),
    /// Drop contract read or claim failed.
    Contract(String),
    /// Server-injected page props missing or malformed.
    Props(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Wallet(msg) => write!(f, "Wallet error: {}", msg),
            AppError::Contract(msg) => write!(f, "Contract error: {}", msg),
            AppError::Props(msg) => write!(f, "Page props error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
