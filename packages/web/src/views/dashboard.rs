//! Storefront page: browse, filter, and purchase sweets.

use dioxus::prelude::*;
use store::models::SearchFilter;
use ui::{guard, use_auth, use_sweets, Gate, Navbar, SearchBar, SweetCard};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut sweets = use_sweets();
    let mut purchase_error = use_signal(|| Option::<String>::None);

    {
        let state = auth();
        match guard::evaluate(state.user.as_ref(), false) {
            Gate::ToLogin => {
                nav.replace(Route::Login {});
                return rsx! {};
            }
            Gate::ToDashboard | Gate::Allow => {}
        }
    }

    // Initial load; peek keeps the write-back from re-triggering the fetch
    let _ = use_resource(move || async move {
        let mut store = sweets.peek().clone();
        store.fetch().await;
        sweets.set(store);
    });

    let handle_search = move |filter: SearchFilter| {
        spawn(async move {
            let mut store = sweets();
            // Same outcome, different endpoints: no filters means the plain
            // list fetch, not an empty search.
            if filter.is_empty() {
                store.fetch().await;
            } else {
                store.search(&filter).await;
            }
            sweets.set(store);
        });
    };

    let handle_purchase = move |(id, quantity): (i64, u32)| {
        spawn(async move {
            purchase_error.set(None);
            let mut store = sweets();
            let result = store.purchase(id, quantity).await;
            sweets.set(store);
            if let Err(err) = result {
                purchase_error.set(Some(err.detail_or("Purchase failed")));
            }
        });
    };

    let state = sweets();
    let shown = state.sweets.len();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-br from-pink-50 via-purple-50 to-blue-50",
            Navbar {}

            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                div {
                    class: "mb-8",
                    h1 { class: "text-4xl font-bold text-gray-900 mb-2", "Sweet Shop Dashboard 🍭" }
                    p { class: "text-gray-600", "Browse and purchase your favorite sweets" }
                }

                SearchBar { on_search: handle_search }

                if let Some(message) = purchase_error() {
                    div {
                        class: "mb-6 p-4 bg-red-100 border border-red-400 text-red-700 rounded-lg",
                        "{message}"
                    }
                }

                if let Some(message) = &state.error {
                    div {
                        class: "mb-6 p-4 bg-red-100 border border-red-400 text-red-700 rounded-lg",
                        "{message}"
                    }
                }

                if state.loading {
                    div {
                        class: "flex justify-center items-center h-64",
                        div { class: "animate-spin rounded-full h-16 w-16 border-t-4 border-b-4 border-purple-500" }
                    }
                } else if state.sweets.is_empty() {
                    div {
                        class: "text-center py-16 bg-white rounded-lg shadow-md",
                        div { class: "text-6xl mb-4", "🍬" }
                        h3 { class: "text-2xl font-semibold text-gray-900 mb-2", "No sweets found" }
                        p { class: "text-gray-600", "Try adjusting your search filters or check back later!" }
                    }
                } else {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6",
                        for sweet in state.sweets.clone() {
                            SweetCard {
                                key: "{sweet.id}",
                                sweet,
                                on_purchase: handle_purchase,
                                busy: state.loading,
                            }
                        }
                    }

                    div {
                        class: "mt-8 text-center text-gray-600",
                        "Showing {shown} "
                        if shown == 1 { "sweet" } else { "sweets" }
                    }
                }
            }
        }
    }
}
