//! Right-hand panel of the mint page.
//!
//! Acquires the drop contract for the collection, loads pricing and supply,
//! and wires the mint button to the [`MintController`].

use std::rc::Rc;

use leptos::*;

use super::WalletHeader;
use crate::config::LOADING_ANIMATION_URL;
use crate::mint::MintController;
use crate::services::{ThirdwebDrop, ToastStore, WalletSession};
use crate::MintViewState;

#[component]
pub fn MintPage(
    props: crate::types::MintPageProps,
    session: WalletSession,
    toasts: ToastStore,
) -> impl IntoView {
    let view_state = create_rw_signal(MintViewState::default());
    let controller = Rc::new(MintController::<ThirdwebDrop, _, _>::new(toasts, view_state));
    let address = session.address_signal();

    // Chain state: handle first, then pricing + supply
    {
        let controller = controller.clone();
        let contract_address = props.address.clone();
        spawn_local(async move {
            view_state.update(|s| s.loading = true);
            match ThirdwebDrop::acquire(&contract_address).await {
                Ok(contract) => {
                    controller.attach(contract);
                    controller.load_chain_state().await;
                }
                Err(e) => {
                    log::error!("{}", e);
                    view_state.update(|s| s.loading = false);
                }
            }
        });
    }

    // Wallet: pick up an existing authorization and follow account switches
    {
        let session = session.clone();
        spawn_local(async move { session.restore().await });
    }
    session.watch_accounts();

    let on_mint = move |_| {
        let controller = controller.clone();
        let address = address.get_untracked();
        spawn_local(async move {
            controller.mint(address.as_deref()).await;
        });
    };

    view! {
        <WalletHeader session=session/>

        <div class="mt-10 flex flex-1 flex-col items-center space-y-6 text-center lg:justify-center lg:space-y-0">
            <img src=props.main_image_url class="w-80 object-cover pb-10 lg:h-40" alt=""/>
            <h1 class="text-3xl font-bold lg:text-5xl lg:font-extrabold">{props.title}</h1>

            {move || {
                let state = view_state.get();
                if state.loading {
                    view! { <p class="animate-pulse pt-2 text-xl text-green-500">"Loading"</p> }
                } else {
                    view! { <p class="pt-2 text-xl text-green-500">{state.supply_text()}</p> }
                }
            }}

            <Show
                when=move || view_state.get().loading
                fallback=|| view! { }
            >
                <img class="h-80 w-80 object-contain" src=LOADING_ANIMATION_URL alt=""/>
            </Show>
        </div>

        <button
            class="mt-10 h-16 w-full rounded-full bg-red-600 font-bold text-white disabled:bg-gray-400"
            on:click=on_mint
            disabled=move || !view_state.get().can_mint(address.get().as_deref())
        >
            {move || view_state.get().button_label(address.get().as_deref())}
        </button>
    }
}
