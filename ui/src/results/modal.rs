use dioxus::prelude::*;

use crate::core::animation::Ramp;
use crate::core::state::{ModalState, Tab};
use crate::core::{config, platform};
use crate::t;

use super::counter::RampCounter;
use super::passport::PassportButton;
use super::view_model::{PlanRow, ResultView};

/// Circle of circumference 100 drawn from the top, for the risk arc.
const ARC_PATH: &str = "M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831";

/// Results modal. Renders nothing while closed.
#[component]
pub fn ResultModal(
    view: ResultView,
    modal: Signal<ModalState>,
    passport_busy: bool,
    on_passport: EventHandler<()>,
) -> Element {
    let mut modal = modal;
    let state = modal();
    if !state.open {
        return rsx! {};
    }

    rsx! {
        div {
            id: "predictionModal",
            class: "modal-overlay",
            // Only clicks on the backdrop itself get here; the box stops propagation.
            onclick: move |_| modal.set(modal().close()),

            ResultBox {
                key: "{state.epoch}",
                view,
                modal,
                passport_busy,
                on_passport,
            }
        }
    }
}

/// The modal box. Keyed by presentation epoch so every new result remounts
/// it: the entrance animation replays and old counters are dropped.
#[component]
fn ResultBox(
    view: ResultView,
    modal: Signal<ModalState>,
    passport_busy: bool,
    on_passport: EventHandler<()>,
) -> Element {
    let mut modal = modal;
    let state = modal();
    let high = view.is_high_risk();
    let theme_class = state.theme.css_class();

    let title = if high {
        t!("modal-title-high")
    } else {
        t!("modal-title-low")
    };
    let icon = if high {
        "fas fa-heart-pulse"
    } else {
        "fas fa-shield-heart"
    };
    let banner_icon = if high {
        "fas fa-exclamation-circle"
    } else {
        "fas fa-check-circle"
    };
    let banner = if high {
        t!("modal-banner-high")
    } else {
        t!("modal-banner-low")
    };

    rsx! {
        div {
            class: "modal-box modal-content-premium {theme_class}",
            role: "dialog",
            aria_modal: "true",
            aria_labelledby: "modalTitle",
            onclick: move |evt| evt.stop_propagation(),

            button {
                id: "closeModal",
                r#type: "button",
                class: "modal-close",
                aria_label: t!("modal-close-label"),
                onclick: move |_| modal.set(modal().close()),
                "×"
            }

            div { class: "premium-modal-header",
                div { id: "modalIconArea", class: "modal-icon", i { class: icon } }
                h2 { id: "modalTitle", "{title}" }
            }

            div { class: "risk-ring",
                svg { class: "risk-ring__chart", view_box: "0 0 36 36",
                    path { class: "risk-ring__track", d: ARC_PATH }
                    path {
                        id: "riskCirclePath",
                        class: "risk-ring__arc",
                        stroke_dasharray: view.arc_dasharray(),
                        d: ARC_PATH,
                    }
                }
                RampCounter {
                    ramp: Ramp::linear(view.probability),
                    id: "modalPercentage",
                    class: "risk-ring__value",
                }
            }

            div { id: "modalMessage",
                div { class: "risk-alert-banner",
                    i { class: banner_icon }
                    span { "{banner}" }
                }

                div { class: "modal-tabs", role: "tablist",
                    for tab in Tab::ALL {
                        button {
                            key: "{tab.key()}",
                            r#type: "button",
                            role: "tab",
                            class: if state.is_active(tab) { "modal-tab active" } else { "modal-tab" },
                            "data-tab": tab.key(),
                            onclick: move |_| modal.set(modal().select_tab(tab)),
                            {tab_label(tab)}
                        }
                    }
                }

                div {
                    id: "tab-summary",
                    class: if state.is_active(Tab::Summary) { "tab-pane active" } else { "tab-pane" },
                    MetricsGrid { view: view.clone() }
                    Advice { view: view.clone() }
                }

                div {
                    id: "tab-reboot",
                    class: if state.is_active(Tab::Reboot) { "tab-pane active" } else { "tab-pane" },
                    RebootTable { rows: view.rows.clone() }
                }
            }

            div { id: "modalActions", class: "modal-actions",
                if high {
                    a {
                        href: config::get().doctors_url,
                        class: "btn-modal-primary btn-find-doctor",
                        i { class: "fas fa-user-doctor" }
                        span { {t!("action-find-doctor")} }
                    }
                    PassportButton {
                        label: t!("action-get-passport"),
                        busy: passport_busy,
                        on_click: on_passport,
                    }
                    button {
                        r#type: "button",
                        class: "btn-modal-secondary",
                        onclick: move |_| platform::reload_page(),
                        {t!("action-reset")}
                    }
                } else {
                    PassportButton {
                        label: t!("action-download-passport"),
                        busy: passport_busy,
                        on_click: on_passport,
                    }
                    button {
                        r#type: "button",
                        class: "btn-modal-primary btn-awesome",
                        onclick: move |_| modal.set(modal().close()),
                        i { class: "fas fa-thumbs-up" }
                        span { {t!("action-dismiss")} }
                    }
                }
            }
        }
    }
}

fn tab_label(tab: Tab) -> String {
    match tab {
        Tab::Summary => t!("tab-summary"),
        Tab::Reboot => t!("tab-reboot"),
    }
}

#[component]
fn MetricsGrid(view: ResultView) -> Element {
    let gap_tone = view.gap.tone().css_class();
    let gap_label = view.gap.label();
    let heart_age = view.heart_age_display();
    let status_tone = view.status_tone();
    let (status_icon, status_text) = if view.is_high_risk() {
        ("fas fa-shield-virus", t!("status-caution"))
    } else {
        ("fas fa-shield-alt", t!("status-secure"))
    };

    rsx! {
        div { class: "modal-metrics-grid",
            div { class: "stat-card",
                div { class: "stat-icon orange", i { class: "fas fa-percentage" } }
                div { class: "stat-label", {t!("card-risk-label")} }
                if view.probability > 0.0 {
                    RampCounter {
                        ramp: Ramp::stepped(view.probability),
                        id: "modalPercentagePremium",
                        class: "stat-value",
                    }
                } else {
                    span { id: "modalPercentagePremium", class: "stat-value", "0%" }
                }
                div { class: "stat-caption", {t!("card-risk-caption")} }
            }

            div { class: "stat-card",
                div { class: "stat-icon {gap_tone}", i { class: "fas fa-heartbeat" } }
                div { class: "stat-label", {t!("card-heart-age-label")} }
                div { class: "stat-value",
                    "{heart_age} "
                    span { class: "stat-unit", {t!("card-heart-age-unit")} }
                }
                div { class: "vital-tag", {t!("card-gap", gap = gap_label)} }
            }

            div { class: "stat-card",
                div { class: "stat-icon {status_tone}", i { class: status_icon } }
                div { class: "stat-label", {t!("card-status-label")} }
                div { class: "stat-value stat-value--status", "{status_text}" }
                div { class: "stat-caption", {t!("card-status-caption")} }
            }
        }
    }
}

#[component]
fn Advice(view: ResultView) -> Element {
    if view.is_high_risk() {
        let age = view.heart_age_display();
        rsx! {
            p { id: "finalAdvice", class: "final-advice",
                {t!("advice-high-lead")}
                " "
                strong { {t!("advice-high-age", age = age)} }
                ". "
                {t!("advice-high-tail")}
            }
        }
    } else {
        rsx! {
            p { id: "finalAdvice", class: "final-advice",
                {t!("advice-low-lead")}
                " "
                strong { {t!("advice-low-strong")} }
                ". "
                {t!("advice-low-tail")}
            }
        }
    }
}

#[component]
fn RebootTable(rows: Vec<PlanRow>) -> Element {
    rsx! {
        div { class: "reboot-scroll-zone",
            table { class: "reboot-grid",
                thead {
                    tr {
                        th { {t!("plan-col-day")} }
                        th { {t!("plan-col-activity")} }
                        th { {t!("plan-col-diet")} }
                    }
                }
                tbody {
                    for (index, row) in rows.iter().enumerate() {
                        tr { key: "{index}",
                            td {
                                span { class: "day-label", "{row.day}" }
                                if let Some(vital) = row.vital.as_ref() {
                                    span { class: "reboot-vital", "{vital}" }
                                }
                            }
                            td { class: "reboot-desc", "{row.activity}" }
                            td { class: "reboot-desc", "{row.diet}" }
                        }
                    }
                }
            }
        }
    }
}
