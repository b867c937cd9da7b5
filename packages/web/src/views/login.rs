//! Login page view with a username/password form.

use dioxus::prelude::*;
use store::models::Credentials;
use ui::use_auth;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already signed in, skip straight to the storefront
    if auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let p = password();

            if u.is_empty() {
                error.set(Some("Please enter your username".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            let mut store = auth();
            let result = store
                .login(&Credentials {
                    username: u,
                    password: p,
                })
                .await;
            auth.set(store);
            loading.set(false);
            match result {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    error.set(Some(err.detail_or("Login failed")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-br from-purple-400 via-pink-400 to-blue-400 flex items-center justify-center p-4",
            div {
                class: "bg-white rounded-2xl shadow-2xl w-full max-w-md p-8",
                div {
                    class: "text-center mb-8",
                    div { class: "text-6xl mb-4", "🍬" }
                    h1 {
                        class: "text-3xl font-bold bg-gradient-to-r from-purple-600 to-pink-600 bg-clip-text text-transparent",
                        "Sweet Shop"
                    }
                    p { class: "text-gray-600 mt-2", "Sign in to browse the shelves" }
                }

                if let Some(message) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded-lg",
                        "{message}"
                    }
                }

                form {
                    onsubmit: handle_login,
                    class: "space-y-5",

                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Username"
                        }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-purple-500 focus:border-transparent",
                            r#type: "text",
                            placeholder: "Your username",
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }

                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Password"
                        }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-purple-500 focus:border-transparent",
                            r#type: "password",
                            placeholder: "Your password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    button {
                        class: "w-full bg-gradient-to-r from-purple-500 to-pink-500 text-white py-3 px-4 rounded-lg hover:from-purple-600 hover:to-pink-600 transition disabled:opacity-50 disabled:cursor-not-allowed font-medium text-lg",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                }

                p {
                    class: "mt-6 text-center text-gray-600",
                    "Don't have an account? "
                    Link {
                        class: "text-purple-600 hover:text-purple-700 font-medium",
                        to: Route::Register {},
                        "Register here"
                    }
                }
            }
        }
    }
}
