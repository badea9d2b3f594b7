//! Transient notifications.
//!
//! [`Notifier`] is what the mint controller talks to. [`ToastStore`] is the
//! signal-backed implementation rendered by the `Toaster` component.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::*;

/// Handle used to dismiss a toast.
pub type ToastId = u64;

/// Toast flavour; decides styling and auto-dismiss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Stays until dismissed
    Loading,
    Success,
    Failure,
}

impl ToastKind {
    /// Inline style for this toast kind.
    pub fn style(&self) -> &'static str {
        match self {
            ToastKind::Loading => {
                "background: white; color: green; font-weight: bolder; font-size: 17px; padding: 20px;"
            }
            ToastKind::Success => {
                "background: green; color: white; font-weight: bolder; font-size: 17px; padding: 20px;"
            }
            ToastKind::Failure => {
                "background: red; color: white; font-weight: bolder; font-size: 17px; padding: 20px;"
            }
        }
    }
}

/// A toast currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
}

/// Notification surface.
pub trait Notifier {
    /// Show a loading toast that stays until [`dismiss`](Self::dismiss).
    fn loading(&self, message: &str) -> ToastId;

    /// Show a success toast for `duration`.
    fn success(&self, message: &str, duration: Duration) -> ToastId;

    /// Show a failure toast for `duration`.
    fn failure(&self, message: &str, duration: Duration) -> ToastId;

    fn dismiss(&self, id: ToastId);
}

/// Toasts held in a signal.
#[derive(Clone, Copy)]
pub struct ToastStore {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<ToastId>,
}

impl ToastStore {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    fn push(&self, kind: ToastKind, message: &str, duration: Option<Duration>) -> ToastId {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast { id, kind, message: message.to_string() });
        });

        if let Some(duration) = duration {
            let store = *self;
            let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || store.dismiss(id)).forget();
        }

        id
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastStore {
    fn loading(&self, message: &str) -> ToastId {
        self.push(ToastKind::Loading, message, None)
    }

    fn success(&self, message: &str, duration: Duration) -> ToastId {
        self.push(ToastKind::Success, message, Some(duration))
    }

    fn failure(&self, message: &str, duration: Duration) -> ToastId {
        self.push(ToastKind::Failure, message, Some(duration))
    }

    fn dismiss(&self, id: ToastId) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only loading toasts here: success and failure arm a browser timer.

    #[test]
    fn test_loading_toast_stays_until_dismissed() {
        let runtime = create_runtime();
        let store = ToastStore::new();

        let id = store.loading("Minting...");
        assert_eq!(
            store.toasts().get_untracked(),
            vec![Toast { id, kind: ToastKind::Loading, message: "Minting...".into() }]
        );

        store.dismiss(id);
        assert!(store.toasts().get_untracked().is_empty());

        runtime.dispose();
    }

    #[test]
    fn test_dismiss_removes_only_matching_id() {
        let runtime = create_runtime();
        let store = ToastStore::new();

        let first = store.loading("one");
        let second = store.loading("two");
        let third = store.loading("three");

        store.dismiss(second);
        let left: Vec<ToastId> = store.toasts().get_untracked().iter().map(|t| t.id).collect();
        assert_eq!(left, vec![first, third]);

        // Unknown or already dismissed ids are ignored
        store.dismiss(second);
        store.dismiss(99);
        assert_eq!(store.toasts().get_untracked().len(), 2);

        runtime.dispose();
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let runtime = create_runtime();
        let store = ToastStore::new();

        let a = store.loading("a");
        store.dismiss(a);
        let b = store.loading("b");
        let c = store.loading("c");
        assert!(a < b && b < c);

        runtime.dispose();
    }

    #[test]
    fn test_styles() {
        assert_eq!(
            ToastKind::Loading.style(),
            "background: white; color: green; font-weight: bolder; font-size: 17px; padding: 20px;"
        );
        assert_eq!(
            ToastKind::Success.style(),
            "background: green; color: white; font-weight: bolder; font-size: 17px; padding: 20px;"
        );
        assert_eq!(
            ToastKind::Failure.style(),
            "background: red; color: white; font-weight: bolder; font-size: 17px; padding: 20px;"
        );
    }
}
