use dioxus::prelude::*;
use store::models::{Sweet, SweetDraft, SweetPatch};

use crate::auth::use_sweets;

/// Create/edit form for a sweet, shown as a modal overlay. With a `sweet`
/// prop the form edits it in place; without one it creates a new entry.
/// Field validation runs before any network call; server rejections show
/// their detail inside the modal.
#[component]
pub fn SweetModal(#[props(!optional)] sweet: Option<Sweet>, on_close: EventHandler<()>) -> Element {
    let mut sweets = use_sweets();

    let editing = sweet.clone();
    let mut name = use_signal(|| sweet.as_ref().map(|s| s.name.clone()).unwrap_or_default());
    let mut category =
        use_signal(|| sweet.as_ref().map(|s| s.category.clone()).unwrap_or_default());
    let mut price =
        use_signal(|| sweet.as_ref().map(|s| s.price.to_string()).unwrap_or_default());
    let mut quantity =
        use_signal(|| sweet.as_ref().map(|s| s.quantity.to_string()).unwrap_or_default());
    let mut description = use_signal(|| {
        sweet
            .as_ref()
            .and_then(|s| s.description.clone())
            .unwrap_or_default()
    });
    let mut image_url = use_signal(|| {
        sweet
            .as_ref()
            .and_then(|s| s.image_url.clone())
            .unwrap_or_default()
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let title = if sweet.is_some() { "Edit Sweet" } else { "Add New Sweet" };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let editing = editing.clone();
        spawn(async move {
            error.set(None);

            let name = name().trim().to_string();
            if name.is_empty() {
                error.set(Some("Name is required".to_string()));
                return;
            }
            let category = category().trim().to_string();
            if category.is_empty() {
                error.set(Some("Category is required".to_string()));
                return;
            }
            let Ok(price) = price().trim().parse::<f64>() else {
                error.set(Some("Enter a valid price".to_string()));
                return;
            };
            if price <= 0.0 {
                error.set(Some("Price must be greater than zero".to_string()));
                return;
            }
            let Ok(quantity) = quantity().trim().parse::<u32>() else {
                error.set(Some("Enter a valid quantity".to_string()));
                return;
            };
            let description = some_text(&description());
            let image_url = some_text(&image_url());

            saving.set(true);
            let mut store = sweets();
            let result = match &editing {
                Some(existing) => {
                    let patch = SweetPatch {
                        name: Some(name),
                        category: Some(category),
                        price: Some(price),
                        quantity: Some(quantity),
                        description,
                        image_url,
                    };
                    store.update(existing.id, &patch).await
                }
                None => {
                    let draft = SweetDraft {
                        name,
                        category,
                        price,
                        quantity,
                        description,
                        image_url,
                    };
                    store.create(&draft).await
                }
            };
            sweets.set(store);
            saving.set(false);
            match result {
                Ok(()) => on_close.call(()),
                Err(err) => {
                    tracing::warn!(error = %err, "saving sweet failed");
                    error.set(Some(err.detail_or("Failed to save sweet")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 p-4",
            div {
                class: "bg-white rounded-lg shadow-xl max-w-md w-full max-h-[90vh] overflow-y-auto",
                div {
                    class: "p-6",
                    div {
                        class: "flex justify-between items-center mb-6",
                        h2 { class: "text-2xl font-bold text-gray-900", "{title}" }
                        button {
                            class: "text-gray-400 hover:text-gray-600 text-2xl",
                            onclick: move |_| on_close.call(()),
                            "×"
                        }
                    }

                    if let Some(message) = error() {
                        div {
                            class: "mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded",
                            "{message}"
                        }
                    }

                    form {
                        onsubmit: handle_submit,
                        class: "space-y-4",

                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Name *" }
                            input {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-purple-500",
                                r#type: "text",
                                placeholder: "e.g., Chocolate Bar",
                                value: "{name}",
                                oninput: move |evt| name.set(evt.value()),
                            }
                        }

                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Category *" }
                            input {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-purple-500",
                                r#type: "text",
                                placeholder: "e.g., Chocolate, Gummies, Hard Candy",
                                value: "{category}",
                                oninput: move |evt| category.set(evt.value()),
                            }
                        }

                        div {
                            class: "grid grid-cols-2 gap-4",
                            div {
                                label { class: "block text-sm font-medium text-gray-700 mb-1", "Price ($) *" }
                                input {
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-purple-500",
                                    r#type: "number",
                                    min: "0.01",
                                    step: "0.01",
                                    value: "{price}",
                                    oninput: move |evt| price.set(evt.value()),
                                }
                            }
                            div {
                                label { class: "block text-sm font-medium text-gray-700 mb-1", "Quantity *" }
                                input {
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-purple-500",
                                    r#type: "number",
                                    min: "0",
                                    value: "{quantity}",
                                    oninput: move |evt| quantity.set(evt.value()),
                                }
                            }
                        }

                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Description" }
                            textarea {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-purple-500",
                                rows: "2",
                                placeholder: "Optional description",
                                value: "{description}",
                                oninput: move |evt| description.set(evt.value()),
                            }
                        }

                        div {
                            label { class: "block text-sm font-medium text-gray-700 mb-1", "Image URL" }
                            input {
                                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-purple-500",
                                r#type: "text",
                                placeholder: "Optional image URL",
                                value: "{image_url}",
                                oninput: move |evt| image_url.set(evt.value()),
                            }
                        }

                        div {
                            class: "flex space-x-3 pt-2",
                            button {
                                class: "flex-1 bg-gradient-to-r from-purple-500 to-pink-500 text-white py-2 px-4 rounded-md hover:from-purple-600 hover:to-pink-600 transition disabled:opacity-50 font-medium",
                                r#type: "submit",
                                disabled: saving(),
                                if saving() { "Saving..." } else if sweet.is_some() { "Save Changes" } else { "Add Sweet" }
                            }
                            button {
                                class: "flex-1 bg-gray-200 text-gray-700 py-2 px-4 rounded-md hover:bg-gray-300 transition font-medium",
                                r#type: "button",
                                onclick: move |_| on_close.call(()),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn some_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
