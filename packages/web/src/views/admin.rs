//! Admin panel: inventory stats, table management, restock, create/edit.

use dioxus::prelude::*;
use store::models::Sweet;
use ui::{guard, use_auth, use_sweets, Gate, Navbar, SweetModal};

use crate::Route;

#[component]
pub fn Admin() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut sweets = use_sweets();
    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Sweet>::None);
    let mut restock_id = use_signal(|| Option::<i64>::None);
    let mut restock_amount = use_signal(String::new);
    let mut action_error = use_signal(|| Option::<String>::None);

    {
        let state = auth();
        match guard::evaluate(state.user.as_ref(), true) {
            Gate::ToLogin => {
                nav.replace(Route::Login {});
                return rsx! {};
            }
            Gate::ToDashboard => {
                nav.replace(Route::Dashboard {});
                return rsx! {};
            }
            Gate::Allow => {}
        }
    }

    // Initial load; peek keeps the write-back from re-triggering the fetch
    let _ = use_resource(move || async move {
        let mut store = sweets.peek().clone();
        store.fetch().await;
        sweets.set(store);
    });

    let handle_delete = move |sweet: Sweet| {
        let confirmed = {
            #[cfg(target_arch = "wasm32")]
            {
                web_sys::window()
                    .map(|w| {
                        w.confirm_with_message(&format!(
                            "Are you sure you want to delete \"{}\"?",
                            sweet.name
                        ))
                        .unwrap_or(false)
                    })
                    .unwrap_or(false)
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                true
            }
        };
        if !confirmed {
            return;
        }
        spawn(async move {
            action_error.set(None);
            let mut store = sweets();
            let result = store.delete(sweet.id).await;
            sweets.set(store);
            if let Err(err) = result {
                action_error.set(Some(err.detail_or("Failed to delete sweet")));
            }
        });
    };

    let mut handle_restock = move |id: i64| {
        let Ok(amount) = restock_amount().trim().parse::<u32>() else {
            return;
        };
        if amount == 0 {
            return;
        }
        spawn(async move {
            action_error.set(None);
            let mut store = sweets();
            let result = store.restock(id, amount).await;
            sweets.set(store);
            match result {
                Ok(()) => {
                    restock_id.set(None);
                    restock_amount.set(String::new());
                }
                Err(err) => {
                    action_error.set(Some(err.detail_or("Failed to restock sweet")));
                }
            }
        });
    };

    let mut close_modal = move || {
        show_modal.set(false);
        editing.set(None);
    };

    let state = sweets();
    let total_items: u32 = state.sweets.iter().map(|s| s.quantity).sum();
    let total_value: f64 = state
        .sweets
        .iter()
        .map(|s| s.price * f64::from(s.quantity))
        .sum();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-br from-pink-50 via-purple-50 to-blue-50",
            Navbar {}

            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8",
                div {
                    class: "mb-8",
                    h1 { class: "text-4xl font-bold text-gray-900 mb-2", "Admin Panel 👨‍💼" }
                    p { class: "text-gray-600", "Manage your sweet shop inventory" }
                }

                // Stats cards
                div {
                    class: "grid grid-cols-1 md:grid-cols-3 gap-6 mb-8",
                    StatCard { icon: "🍬", label: "Total Products", value: state.sweets.len().to_string() }
                    StatCard { icon: "📦", label: "Total Items", value: total_items.to_string() }
                    StatCard { icon: "💰", label: "Total Value", value: format!("${total_value:.2}") }
                }

                if let Some(message) = action_error() {
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

                // Inventory table
                div {
                    class: "bg-white rounded-lg shadow-md overflow-hidden",
                    div {
                        class: "p-6 bg-gradient-to-r from-purple-500 to-pink-500",
                        div {
                            class: "flex justify-between items-center",
                            h2 { class: "text-xl font-bold text-white", "Inventory Management" }
                            button {
                                class: "bg-white text-purple-600 px-4 py-2 rounded-md hover:bg-gray-100 transition font-medium",
                                onclick: move |_| {
                                    editing.set(None);
                                    show_modal.set(true);
                                },
                                "+ Add New Sweet"
                            }
                        }
                    }

                    if state.loading {
                        div {
                            class: "flex justify-center items-center h-64",
                            div { class: "animate-spin rounded-full h-12 w-12 border-t-2 border-b-2 border-purple-500" }
                        }
                    } else if state.sweets.is_empty() {
                        div {
                            class: "text-center py-16",
                            div { class: "text-6xl mb-4", "📦" }
                            h3 { class: "text-xl font-semibold text-gray-900 mb-2", "No products yet" }
                            p { class: "text-gray-600", "Start by adding your first sweet!" }
                        }
                    } else {
                        div {
                            class: "overflow-x-auto",
                            table {
                                class: "w-full",
                                thead {
                                    class: "bg-gray-50",
                                    tr {
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Product" }
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Category" }
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Price" }
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Stock" }
                                        th { class: "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider", "Actions" }
                                    }
                                }
                                tbody {
                                    class: "bg-white divide-y divide-gray-200",
                                    for sweet in state.sweets.clone() {
                                        tr {
                                            key: "{sweet.id}",
                                            class: "hover:bg-gray-50",
                                            td {
                                                class: "px-6 py-4 whitespace-nowrap",
                                                div { class: "font-medium text-gray-900", "{sweet.name}" }
                                                if let Some(description) = &sweet.description {
                                                    div { class: "text-sm text-gray-500", "{description}" }
                                                }
                                            }
                                            td {
                                                class: "px-6 py-4 whitespace-nowrap",
                                                span {
                                                    class: "px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-purple-100 text-purple-800 capitalize",
                                                    "{sweet.category}"
                                                }
                                            }
                                            td {
                                                class: "px-6 py-4 whitespace-nowrap text-sm text-gray-900",
                                                "${sweet.price:.2}"
                                            }
                                            td {
                                                class: "px-6 py-4 whitespace-nowrap",
                                                if restock_id() == Some(sweet.id) {
                                                    div {
                                                        class: "flex items-center space-x-2",
                                                        input {
                                                            class: "w-20 px-2 py-1 border border-gray-300 rounded text-sm",
                                                            r#type: "number",
                                                            min: "1",
                                                            placeholder: "Qty",
                                                            value: "{restock_amount}",
                                                            oninput: move |evt| restock_amount.set(evt.value()),
                                                        }
                                                        button {
                                                            class: "px-2 py-1 bg-green-500 text-white rounded text-xs hover:bg-green-600",
                                                            onclick: {
                                                                let id = sweet.id;
                                                                move |_| handle_restock(id)
                                                            },
                                                            "✓"
                                                        }
                                                        button {
                                                            class: "px-2 py-1 bg-gray-300 text-gray-700 rounded text-xs hover:bg-gray-400",
                                                            onclick: move |_| {
                                                                restock_id.set(None);
                                                                restock_amount.set(String::new());
                                                            },
                                                            "✕"
                                                        }
                                                    }
                                                } else {
                                                    div {
                                                        class: "flex items-center space-x-2",
                                                        span {
                                                            class: (if sweet.quantity == 0 {
                                                                "font-semibold text-red-500"
                                                            } else if sweet.quantity < 10 {
                                                                "font-semibold text-orange-500"
                                                            } else {
                                                                "font-semibold text-green-500"
                                                            }).to_string(),
                                                            "{sweet.quantity}"
                                                        }
                                                        button {
                                                            class: "px-2 py-1 bg-blue-500 text-white rounded text-xs hover:bg-blue-600",
                                                            onclick: {
                                                                let id = sweet.id;
                                                                move |_| restock_id.set(Some(id))
                                                            },
                                                            "Restock"
                                                        }
                                                    }
                                                }
                                            }
                                            td {
                                                class: "px-6 py-4 whitespace-nowrap text-sm font-medium space-x-2",
                                                button {
                                                    class: "text-blue-600 hover:text-blue-900",
                                                    onclick: {
                                                        let sweet = sweet.clone();
                                                        move |_| {
                                                            editing.set(Some(sweet.clone()));
                                                            show_modal.set(true);
                                                        }
                                                    },
                                                    "Edit"
                                                }
                                                button {
                                                    class: "text-red-600 hover:text-red-900",
                                                    onclick: {
                                                        let sweet = sweet.clone();
                                                        move |_| handle_delete(sweet.clone())
                                                    },
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if show_modal() {
                SweetModal {
                    sweet: editing(),
                    on_close: move |_| close_modal(),
                }
            }
        }
    }
}

#[component]
fn StatCard(icon: String, label: String, value: String) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow-md p-6",
            div {
                class: "flex items-center",
                div {
                    class: "bg-purple-100 p-3 rounded-full",
                    span { class: "text-3xl", "{icon}" }
                }
                div {
                    class: "ml-4",
                    p { class: "text-sm text-gray-600", "{label}" }
                    p { class: "text-2xl font-bold text-gray-900", "{value}" }
                }
            }
        }
    }
}
