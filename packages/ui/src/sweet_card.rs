use dioxus::prelude::*;
use store::models::Sweet;

/// Storefront card for one sweet: image or placeholder, stock badge, and a
/// purchase form. The purchase button stays disabled when the shop is out
/// of stock or the requested quantity exceeds it — the server still has the
/// final say and rejects an oversized purchase outright.
#[component]
pub fn SweetCard(sweet: Sweet, on_purchase: EventHandler<(i64, u32)>, busy: bool) -> Element {
    let mut quantity = use_signal(|| 1u32);

    let out_of_stock = sweet.quantity == 0;
    let low_stock = sweet.quantity > 0 && sweet.quantity < 10;
    let stock_class = if out_of_stock {
        "text-red-500"
    } else if low_stock {
        "text-orange-500"
    } else {
        "text-green-500"
    };

    let id = sweet.id;
    let handle_purchase = move |_| {
        on_purchase.call((id, quantity()));
        quantity.set(1);
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-md overflow-hidden hover:shadow-xl transition-shadow duration-300",
            if let Some(image_url) = &sweet.image_url {
                div {
                    class: "relative h-48 overflow-hidden",
                    img {
                        class: "w-full h-full object-cover",
                        src: "{image_url}",
                        alt: "{sweet.name}",
                    }
                }
            } else {
                div {
                    class: "bg-gradient-to-br from-purple-400 to-pink-400 h-48 flex items-center justify-center",
                    span { class: "text-6xl", "🍬" }
                }
            }

            div {
                class: "p-6",
                div {
                    class: "flex justify-between items-start mb-2",
                    h3 { class: "text-xl font-bold text-gray-900", "{sweet.name}" }
                    span {
                        class: "px-2 py-1 bg-purple-100 text-purple-800 text-xs rounded-full font-semibold capitalize",
                        "{sweet.category}"
                    }
                }

                if let Some(description) = &sweet.description {
                    p { class: "text-gray-600 text-sm mb-4", "{description}" }
                }

                div {
                    class: "flex justify-between items-center mb-4",
                    span {
                        class: "text-2xl font-bold text-purple-600",
                        "${sweet.price:.2}"
                    }
                    span {
                        class: "text-sm font-semibold {stock_class}",
                        if out_of_stock { "Out of Stock" } else { "{sweet.quantity} in stock" }
                    }
                }

                div {
                    class: "flex items-center space-x-2",
                    input {
                        class: "w-20 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-purple-500 disabled:bg-gray-100",
                        r#type: "number",
                        min: "1",
                        max: "{sweet.quantity}",
                        value: "{quantity}",
                        disabled: out_of_stock,
                        oninput: move |evt| {
                            quantity.set(evt.value().parse::<u32>().unwrap_or(1).max(1));
                        },
                    }
                    button {
                        class: "flex-1 bg-gradient-to-r from-purple-500 to-pink-500 text-white py-2 px-4 rounded-md hover:from-purple-600 hover:to-pink-600 transition disabled:opacity-50 disabled:cursor-not-allowed font-medium",
                        disabled: out_of_stock || busy || quantity() > sweet.quantity,
                        onclick: handle_purchase,
                        if busy { "Purchasing..." } else if out_of_stock { "Out of Stock" } else { "Purchase" }
                    }
                }
            }
        }
    }
}
