use dioxus::prelude::*;

use crate::components::app_navbar::predict_link;
use crate::t;

#[component]
pub fn Home() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();
    let start = predict_link(&t!("home-start"));

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-home",
            div { class: "hero",
                h1 { {t!("home-title")} }
                p { class: "hero__tagline", {t!("home-tagline")} }
                p { {t!("home-intro")} }
            }

            ul { class: "page-home__features",
                li {
                    i { class: "fas fa-percentage" }
                    span { {t!("home-feature-risk")} }
                }
                li {
                    i { class: "fas fa-heartbeat" }
                    span { {t!("home-feature-heart-age")} }
                }
                li {
                    i { class: "fas fa-calendar-check" }
                    span { {t!("home-feature-plan")} }
                }
                li {
                    i { class: "fas fa-file-pdf" }
                    span { {t!("home-feature-passport")} }
                }
            }

            p { class: "page-home__cta", {t!("home-cta")} }
            if let Some(link) = start {
                div { class: "page-home__start", {link} }
            }
            p { class: "page-home__disclaimer", {t!("disclaimer")} }
        }
    }
}
