//! UI components for the mint widget.
//!
//! - [`WalletHeader`] - Brand heading with Sign In / Sign Out
//! - [`MintPage`] - Collection title, supply, and the mint button
//! - [`Toaster`] - Transient notifications

mod header;
mod mint_page;
mod toaster;

pub use header::*;
pub use mint_page::*;
pub use toaster::*;
