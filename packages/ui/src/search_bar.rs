use dioxus::prelude::*;
use store::models::SearchFilter;

/// Inventory search form. Submits only the populated subset of the four
/// filters; Clear resets every field and submits an empty filter, which the
/// page maps back to a plain list fetch.
#[component]
pub fn SearchBar(on_search: EventHandler<SearchFilter>) -> Element {
    let mut name = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut min_price = use_signal(String::new);
    let mut max_price = use_signal(String::new);

    let handle_search = move |_| {
        let filter = SearchFilter {
            name: some_text(&name()),
            category: some_text(&category()),
            min_price: min_price().trim().parse().ok(),
            max_price: max_price().trim().parse().ok(),
        };
        on_search.call(filter);
    };

    let handle_clear = move |_| {
        name.set(String::new());
        category.set(String::new());
        min_price.set(String::new());
        max_price.set(String::new());
        on_search.call(SearchFilter::default());
    };

    rsx! {
        div {
            class: "bg-white rounded-lg shadow-md p-6 mb-8",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Search & Filter" }
            div {
                class: "grid grid-cols-1 md:grid-cols-4 gap-4",
                input {
                    class: "px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-purple-500",
                    r#type: "text",
                    placeholder: "Search by name...",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                input {
                    class: "px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-purple-500",
                    r#type: "text",
                    placeholder: "Category...",
                    value: "{category}",
                    oninput: move |evt| category.set(evt.value()),
                }
                input {
                    class: "px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-purple-500",
                    r#type: "number",
                    min: "0",
                    step: "0.01",
                    placeholder: "Min price...",
                    value: "{min_price}",
                    oninput: move |evt| min_price.set(evt.value()),
                }
                input {
                    class: "px-4 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-purple-500",
                    r#type: "number",
                    min: "0",
                    step: "0.01",
                    placeholder: "Max price...",
                    value: "{max_price}",
                    oninput: move |evt| max_price.set(evt.value()),
                }
            }
            div {
                class: "flex space-x-3 mt-4",
                button {
                    class: "px-6 py-2 bg-gradient-to-r from-purple-500 to-pink-500 text-white rounded-md hover:from-purple-600 hover:to-pink-600 transition font-medium",
                    onclick: handle_search,
                    "Search"
                }
                button {
                    class: "px-6 py-2 bg-gray-200 text-gray-700 rounded-md hover:bg-gray-300 transition font-medium",
                    onclick: handle_clear,
                    "Clear"
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
