use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, ChatWidget};
use ui::core::config::{self, AppConfig};
use ui::views::{Home, Predict};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/predict")]
    Predict {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));
const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_predict(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Predict {},
        "{label}"
    })
}

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus::logger::init(level).ok();

    config::install(AppConfig::from_environment());

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            home: nav_home,
            predict: nav_predict,
        });
    }

    rsx! {
        document::Title { "CardioCare" }
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Web layout: shared navbar, routed page, and the chat widget on every page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
        ChatWidget { }
    }
}
