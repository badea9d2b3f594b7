//! Toast overlay, bottom-center.

use leptos::*;

use crate::services::{ToastKind, ToastStore};

#[component]
pub fn Toaster(store: ToastStore) -> impl IntoView {
    let toasts = store.toasts();

    view! {
        <div class="pointer-events-none fixed inset-x-0 bottom-6 z-50 flex flex-col items-center space-y-2">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let pending = toast.kind == ToastKind::Loading;
                    view! {
                        <div
                            class="rounded-lg shadow-lg"
                            class:animate-pulse=pending
                            style=toast.kind.style()
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
