use dioxus::prelude::*;
use views::{Admin, Dashboard, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    Admin {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }
        ui::ShopProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn Root() -> Element {
    let auth = ui::use_auth();
    let nav = use_navigator();

    // Redirect based on auth state
    if auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}
