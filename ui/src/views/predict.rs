use dioxus::prelude::*;

use crate::assessment::AssessmentView;
use crate::t;

#[component]
pub fn Predict() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-predict",
            h1 { {t!("page-predict-title")} }
            p { {t!("page-predict-intro")} }
            AssessmentView {}
        }
    }
}
