use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

/// Top navigation bar: brand, page links, greeting, logout. The admin link
/// only renders for admin accounts.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let state = auth();

    rsx! {
        nav {
            class: "bg-white shadow-md",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex justify-between items-center h-16",
                    a {
                        class: "text-2xl font-bold bg-gradient-to-r from-purple-600 to-pink-600 bg-clip-text text-transparent",
                        href: "/dashboard",
                        "🍬 Sweet Shop"
                    }
                    div {
                        class: "flex items-center space-x-4",
                        a {
                            class: "text-gray-700 hover:text-purple-600 font-medium",
                            href: "/dashboard",
                            "Dashboard"
                        }
                        if state.is_admin() {
                            a {
                                class: "text-gray-700 hover:text-purple-600 font-medium",
                                href: "/admin",
                                "Admin"
                            }
                        }
                        if let Some(user) = &state.user {
                            span {
                                class: "text-gray-600 text-sm",
                                "Hi, {user.username}!"
                            }
                        }
                        LogoutButton {
                            class: "px-4 py-2 bg-gray-200 text-gray-700 rounded-md hover:bg-gray-300 transition font-medium",
                        }
                    }
                }
            }
        }
    }
}
