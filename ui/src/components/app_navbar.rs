use crate::core::config;
use crate::core::state::NavPanel;
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platform-supplied link constructors.
///
/// The `ui` crate does not know each platform's `Route` enum, so platforms
/// register a `NavBuilder` whose functions return a fully built `Link`
/// containing the localized label they are given.
///
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     predict: |label| rsx!( Link { class: "navbar__link", to: Route::Predict {}, "{label}" } ),
/// });
/// ```
///
/// Without a builder, `AppNavbar` renders whatever `children` it was given.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub predict: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Link to the assessment page, when a platform registered its routes.
pub fn predict_link(label: &str) -> Option<Element> {
    NAV_BUILDER.get().map(|b| (b.predict)(label))
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut panel = use_signal(NavPanel::default);
    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Re-render when the global language code changes.
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let predict = (b.predict)(&t!("nav-predict"));
        rsx! {
            {home}
            {predict}
        }
    });

    let doctors_url = config::get().doctors_url;
    let links_class = if panel().is_open() {
        "navbar__links navbar__links--open"
    } else {
        "navbar__links"
    };
    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        i { class: "fas fa-heart-pulse navbar__brand-mark", aria_hidden: "true" }
                        span { class: "navbar__brand-name", "CardioCare" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                button {
                    r#type: "button",
                    class: "hamburger",
                    aria_label: t!("nav-menu-label"),
                    aria_expanded: if panel().is_open() { "true" } else { "false" },
                    onclick: move |_| panel.set(panel().toggled()),
                    span {}
                    span {}
                    span {}
                }

                nav {
                    class: links_class,
                    // Following a link collapses the mobile panel.
                    onclick: move |_| panel.set(NavPanel::Hidden),
                    if let Some(links) = internal_nav {
                        {links}
                    } else {
                        {children}
                    }
                    a { class: "navbar__link", href: "{doctors_url}", {t!("nav-doctors")} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
