//! Shop context and hooks for the UI.

use dioxus::prelude::*;

use crate::shop::{make_auth_store, make_sweet_store, AppAuthStore, AppSweetStore};

/// Get the auth store signal.
/// Updates when the user logs in or out.
pub fn use_auth() -> Signal<AppAuthStore> {
    use_context::<Signal<AppAuthStore>>()
}

/// Get the sweet store signal.
pub fn use_sweets() -> Signal<AppSweetStore> {
    use_context::<Signal<AppSweetStore>>()
}

/// Provider component that owns the API client and both stores.
/// Wrap your app with this component to enable `use_auth` and `use_sweets`.
///
/// Both stores share one client, so the credential the auth store attaches
/// is the one every inventory call sends.
#[component]
pub fn ShopProvider(
    #[props(default = api::DEFAULT_BASE_URL.to_string())] base_url: String,
    children: Element,
) -> Element {
    let client = use_hook(|| api::Client::new(base_url.clone()));
    let mut auth = use_signal({
        let client = client.clone();
        move || make_auth_store(client)
    });
    let sweets = use_signal(move || make_sweet_store(client));
    use_context_provider(|| auth);
    use_context_provider(|| sweets);

    // Re-validate any persisted session once on mount; a rejected
    // credential silently degrades to signed-out. Read through peek so the
    // write-back does not re-trigger the resource.
    let _ = use_resource(move || async move {
        let mut store = auth.peek().clone();
        store.check_auth().await;
        auth.set(store);
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    let onclick = move |_| {
        let mut store = auth();
        store.logout();
        auth.set(store);
        // Back to login
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
