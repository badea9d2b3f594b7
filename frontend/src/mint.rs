//! Mint page controller.
//!
//! Joins the drop contract with the page's view state and drives the single
//! mint action:
//!
//! ```text
//! idle ──attach──▶ loading chain state ──▶ ready ──mint──▶ minting ──▶ ready
//! ```
//!
//! `loading` in [`MintViewState`] covers both the chain-state load and a
//! running mint. The controller is generic over the contract, the
//! notification surface, and where the view state lives, so the same code
//! runs against signals in the browser and plain cells in tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::{RwSignal, SignalGetUntracked, SignalUpdate};

use crate::config::{
    FAILURE_MESSAGE, FAILURE_TOAST_DURATION, MINTING_MESSAGE, MINT_QUANTITY, SUCCESS_MESSAGE,
    SUCCESS_TOAST_DURATION,
};
use crate::services::{DropContract, Notifier};
use crate::{AppError, ClaimedToken, MintViewState, Price};

/// Somewhere to keep [`MintViewState`].
pub trait ViewStore {
    fn apply(&self, f: impl FnOnce(&mut MintViewState));
    fn snapshot(&self) -> MintViewState;
}

impl ViewStore for RwSignal<MintViewState> {
    fn apply(&self, f: impl FnOnce(&mut MintViewState)) {
        SignalUpdate::update(self, f);
    }

    fn snapshot(&self) -> MintViewState {
        SignalGetUntracked::get_untracked(self)
    }
}

impl ViewStore for RefCell<MintViewState> {
    fn apply(&self, f: impl FnOnce(&mut MintViewState)) {
        f(&mut self.borrow_mut());
    }

    fn snapshot(&self) -> MintViewState {
        self.borrow().clone()
    }
}

/// Why a mint call did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MintSkip {
    /// No contract handle yet
    NoContract,
    /// No wallet connected
    NoWallet,
    /// Another mint is still running
    InFlight,
}

/// Result of one mint call.
#[derive(Clone, Debug, PartialEq)]
pub enum MintOutcome {
    Skipped(MintSkip),
    Minted(Vec<ClaimedToken>),
    Failed(AppError),
}

/// Drives chain-state loading and minting for one collection.
pub struct MintController<D, N, S> {
    contract: RefCell<Option<Rc<D>>>,
    notifier: N,
    view: S,
    in_flight: AtomicBool,
}

impl<D, N, S> MintController<D, N, S>
where
    D: DropContract,
    N: Notifier,
    S: ViewStore,
{
    /// Controller with no contract handle yet.
    pub fn new(notifier: N, view: S) -> Self {
        Self {
            contract: RefCell::new(None),
            notifier,
            view,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn view(&self) -> &S {
        &self.view
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Install the drop contract handle. Enables reads and minting.
    pub fn attach(&self, contract: D) {
        *self.contract.borrow_mut() = Some(Rc::new(contract));
    }

    pub fn has_contract(&self) -> bool {
        self.contract.borrow().is_some()
    }

    fn contract(&self) -> Option<Rc<D>> {
        self.contract.borrow().clone()
    }

    /// Read pricing and supply together.
    pub async fn load_chain_state(&self) {
        futures::join!(self.load_pricing(), self.load_supply());
    }

    /// Take the first claim condition's display value as the price.
    pub async fn load_pricing(&self) {
        let Some(contract) = self.contract() else {
            return;
        };

        match contract.claim_conditions().await {
            Ok(conditions) => {
                let price = match conditions.into_iter().next() {
                    Some(first) => Price::from_condition(first),
                    None => {
                        log::info!("Drop has no claim conditions; not for sale");
                        Price::NotForSale
                    }
                };
                self.view.apply(|s| s.price = price);
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    /// Read claimed and total supply concurrently.
    ///
    /// Each count is written as soon as its own read resolves; `loading`
    /// clears only after both have.
    pub async fn load_supply(&self) {
        let Some(contract) = self.contract() else {
            return;
        };

        self.view.apply(|s| s.loading = true);

        let claimed = async {
            match contract.all_claimed().await {
                Ok(tokens) => {
                    let count = tokens.len() as u64;
                    self.view.apply(|s| s.claimed_supply = Some(count));
                }
                Err(e) => log::warn!("{}", e),
            }
        };

        let total = async {
            match contract.total_supply().await {
                Ok(total) => self.view.apply(|s| s.total_supply = Some(total)),
                Err(e) => log::warn!("{}", e),
            }
        };

        futures::join!(claimed, total);

        self.view.apply(|s| s.loading = false);
    }

    /// Claim one token to `address`.
    ///
    /// Without a contract or an address this is a no-op, as is a call made
    /// while another mint is still running.
    pub async fn mint(&self, address: Option<&str>) -> MintOutcome {
        let Some(contract) = self.contract() else {
            return MintOutcome::Skipped(MintSkip::NoContract);
        };
        let Some(address) = address else {
            return MintOutcome::Skipped(MintSkip::NoWallet);
        };

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::debug!("Mint already in flight");
            return MintOutcome::Skipped(MintSkip::InFlight);
        }

        self.view.apply(|s| s.loading = true);
        let notification = self.notifier.loading(MINTING_MESSAGE);

        let outcome = match contract.claim_to(address, MINT_QUANTITY).await {
            Ok(tokens) => {
                for token in &tokens {
                    log::info!(
                        "Minted token {} (tx {})",
                        token.id,
                        token.transaction_hash
                    );
                }
                self.notifier.success(SUCCESS_MESSAGE, SUCCESS_TOAST_DURATION);
                MintOutcome::Minted(tokens)
            }
            Err(e) => {
                log::error!("{}", e);
                self.notifier.failure(FAILURE_MESSAGE, FAILURE_TOAST_DURATION);
                MintOutcome::Failed(e)
            }
        };

        self.view.apply(|s| s.loading = false);
        self.notifier.dismiss(notification);
        self.in_flight.store(false, Ordering::Release);

        outcome
    }
}
