//! Brand heading and wallet sign-in controls.

use leptos::*;

use crate::services::{truncate_address, WalletSession};

#[component]
pub fn WalletHeader(session: WalletSession) -> impl IntoView {
    let address = session.address_signal();

    // Sign In connects, Sign Out disconnects
    let on_wallet_click = move |_| {
        let session = session.clone();
        spawn_local(async move {
            if address.get_untracked().is_some() {
                log::info!("Signing out");
                session.sign_out().await;
            } else {
                log::info!("Attempting to connect wallet...");
                session.sign_in().await;
            }
        });
    };

    view! {
        <header class="flex items-center justify-between">
            <a href="/">
                <h1 class="w-52 cursor-pointer text-xl font-extralight sm:w-80">
                    "The "
                    <span class="font-extrabold underline decoration-pink-600/50">"PAPAFAM"</span>
                    " NFT Market Place"
                </h1>
            </a>
            <button
                class="rounded-full bg-rose-400 px-4 py-2 text-xs font-bold text-white lg:px-5 lg:py-3 lg:text-base"
                on:click=on_wallet_click
            >
                {move || if address.get().is_some() { "Sign Out" } else { "Sign In" }}
            </button>
        </header>

        <hr class="my-2 border"/>

        <Show
            when=move || address.get().is_some()
            fallback=|| view! { }
        >
            <p class="text-center text-sm text-rose-400">
                "You're logged in with wallet "
                {move || address.get().map(|a| truncate_address(&a)).unwrap_or_default()}
            </p>
        </Show>
    }
}
