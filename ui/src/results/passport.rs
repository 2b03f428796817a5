use dioxus::prelude::*;

use crate::t;

/// Button that asks for the passport PDF.
///
/// The request itself belongs to the owner of `on_click`, which outlives the
/// modal, so dismissing the modal never cancels a download in progress.
#[component]
pub fn PassportButton(label: String, busy: bool, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            id: "downloadPassport",
            r#type: "button",
            class: "btn-modal-passport",
            disabled: busy,
            onclick: move |_| on_click.call(()),
            if busy {
                i { class: "fas fa-spinner fa-spin" }
                span { {t!("passport-busy")} }
            } else {
                i { class: "fas fa-file-pdf" }
                span { "{label}" }
            }
        }
    }
}
