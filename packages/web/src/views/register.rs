//! Registration page view. Validates locally before any network call and
//! routes to login on success — registration never signs the user in.

use dioxus::prelude::*;
use store::models::Registration;
use ui::use_auth;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if p != cp {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }
            if p.len() < 6 {
                error.set(Some("Password must be at least 6 characters".to_string()));
                return;
            }

            loading.set(true);
            let mut store = auth();
            let result = store
                .register(&Registration {
                    username: u,
                    email: e,
                    password: p,
                })
                .await;
            auth.set(store);
            loading.set(false);
            match result {
                Ok(()) => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    error.set(Some(err.detail_or("Registration failed")));
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
                    p { class: "text-gray-600 mt-2", "Create your account to get started" }
                }

                if let Some(message) = error() {
                    div {
                        class: "mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded-lg",
                        "{message}"
                    }
                }

                form {
                    onsubmit: handle_register,
                    class: "space-y-5",

                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Username"
                        }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-purple-500 focus:border-transparent",
                            r#type: "text",
                            placeholder: "Choose a username",
                            value: "{username}",
                            oninput: move |evt| username.set(evt.value()),
                        }
                    }

                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Email"
                        }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-purple-500 focus:border-transparent",
                            r#type: "email",
                            placeholder: "your.email@example.com",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
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
                            placeholder: "At least 6 characters",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    div {
                        label {
                            class: "block text-sm font-medium text-gray-700 mb-2",
                            "Confirm Password"
                        }
                        input {
                            class: "w-full px-4 py-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-purple-500 focus:border-transparent",
                            r#type: "password",
                            placeholder: "Re-enter your password",
                            value: "{confirm_password}",
                            oninput: move |evt| confirm_password.set(evt.value()),
                        }
                    }

                    button {
                        class: "w-full bg-gradient-to-r from-purple-500 to-pink-500 text-white py-3 px-4 rounded-lg hover:from-purple-600 hover:to-pink-600 transition disabled:opacity-50 disabled:cursor-not-allowed font-medium text-lg",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Register" }
                    }
                }

                p {
                    class: "mt-6 text-center text-gray-600",
                    "Already have an account? "
                    Link {
                        class: "text-purple-600 hover:text-purple-700 font-medium",
                        to: Route::Login {},
                        "Login here"
                    }
                }
            }
        }
    }
}
