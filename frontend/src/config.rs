//! Application configuration.
//!
//! Compile-time settings for the mint widget.

use std::time::Duration;

/// Chain the drop contracts are deployed on, as understood by the SDK.
pub const CHAIN: &str = "goerli";

/// Native currency symbol, used when a claim condition reports none.
pub const CURRENCY_SYMBOL: &str = "ETH";

/// Tokens claimed per mint. Not user-configurable.
pub const MINT_QUANTITY: u32 = 1;

/// Element the widget mounts into (rendered by the server).
pub const MOUNT_ID: &str = "mint-app";

/// Script element holding the server-injected page props.
pub const PROPS_ID: &str = "mint-page-props";

/// Loading animation shown while chain state is read or a mint runs.
pub const LOADING_ANIMATION_URL: &str = "https://cdn.hackernoon.com/images/0*Gzjgh9Y7Gu8KEtZ.gif";

/// Toast shown while the claim transaction is pending.
pub const MINTING_MESSAGE: &str = "Minting...";

/// Toast shown after a successful claim.
pub const SUCCESS_MESSAGE: &str = "You Successfully Minted";

/// Toast shown after a failed claim.
pub const FAILURE_MESSAGE: &str = "whoops... Something went wrong!";

pub const SUCCESS_TOAST_DURATION: Duration = Duration::from_millis(3000);

pub const FAILURE_TOAST_DURATION: Duration = Duration::from_millis(4000);
