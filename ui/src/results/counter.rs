use dioxus::prelude::*;

use crate::core::animation::{use_ramp, Ramp};

/// Percentage text that climbs to its target once mounted.
///
/// The ticking task lives and dies with this component: closing the modal
/// (or presenting a new result) unmounts it and stops the counter.
#[component]
pub fn RampCounter(ramp: Ramp, id: &'static str, class: &'static str) -> Element {
    let label = use_ramp(ramp);

    rsx! {
        span { id: id, class: class, "{label}" }
    }
}
