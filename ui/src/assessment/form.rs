//! Patient assessment form: field model and inputs.

use api::FormPayload;
use dioxus::prelude::*;

use crate::t;

/// Current values of the assessment form, kept as entered.
///
/// Defaults mirror the backend's own fallbacks so an untouched form still
/// scores sensibly.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientForm {
    pub patient_name: String,
    pub age_years: String,
    /// `1` female, `2` male.
    pub gender: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub systolic: String,
    pub diastolic: String,
    /// `1` normal, `2` above normal, `3` high.
    pub cholesterol: String,
    pub glucose: String,
    pub smoker: bool,
    pub alcohol: bool,
    pub active: bool,
}

impl Default for PatientForm {
    fn default() -> Self {
        Self {
            patient_name: String::new(),
            age_years: "45".into(),
            gender: "1".into(),
            height_cm: "170".into(),
            weight_kg: "70".into(),
            systolic: "120".into(),
            diastolic: "80".into(),
            cholesterol: "1".into(),
            glucose: "1".into(),
            smoker: false,
            alcohol: false,
            active: true,
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

impl PatientForm {
    /// Multipart fields under the names the backend reads.
    pub fn to_payload(&self) -> FormPayload {
        FormPayload::new()
            .with("patient_name", self.patient_name.trim())
            .with("Age_Year", self.age_years.trim())
            .with("gender", self.gender.as_str())
            .with("height", self.height_cm.trim())
            .with("weight", self.weight_kg.trim())
            .with("ap_hi", self.systolic.trim())
            .with("ap_lo", self.diastolic.trim())
            .with("cholesterol", self.cholesterol.as_str())
            .with("gluc", self.glucose.as_str())
            .with("smoke", flag(self.smoker))
            .with("alco", flag(self.alcohol))
            .with("active", flag(self.active))
    }
}

#[component]
pub fn PredictionForm(form: Signal<PatientForm>, busy: bool, on_submit: EventHandler<()>) -> Element {
    let mut form = form;
    let values = form();

    let level_options = vec![
        ("1".to_string(), t!("form-level-normal")),
        ("2".to_string(), t!("form-level-above")),
        ("3".to_string(), t!("form-level-high")),
    ];

    rsx! {
        form {
            id: "predictionForm",
            class: "prediction-form",
            onsubmit: move |evt| {
                evt.prevent_default();
                on_submit.call(());
            },

            fieldset { class: "prediction-form__group",
                legend { {t!("form-section-patient")} }
                label { class: "prediction-form__field prediction-form__field--wide",
                    span { {t!("form-patient-name")} }
                    input {
                        r#type: "text",
                        name: "patient_name",
                        placeholder: t!("form-patient-name-placeholder"),
                        value: "{values.patient_name}",
                        oninput: move |evt| form.write().patient_name = evt.value(),
                    }
                }
                NumberField {
                    label: t!("form-age"),
                    name: "Age_Year",
                    value: values.age_years.clone(),
                    min: 18.0,
                    max: 100.0,
                    oninput: move |v| form.write().age_years = v,
                }
                SelectField {
                    label: t!("form-gender"),
                    name: "gender",
                    value: values.gender.clone(),
                    options: vec![
                        ("1".to_string(), t!("form-gender-female")),
                        ("2".to_string(), t!("form-gender-male")),
                    ],
                    onchange: move |v| form.write().gender = v,
                }
                NumberField {
                    label: t!("form-height"),
                    name: "height",
                    value: values.height_cm.clone(),
                    min: 100.0,
                    max: 230.0,
                    oninput: move |v| form.write().height_cm = v,
                }
                NumberField {
                    label: t!("form-weight"),
                    name: "weight",
                    value: values.weight_kg.clone(),
                    min: 30.0,
                    max: 250.0,
                    oninput: move |v| form.write().weight_kg = v,
                }
            }

            fieldset { class: "prediction-form__group",
                legend { {t!("form-section-vitals")} }
                NumberField {
                    label: t!("form-systolic"),
                    name: "ap_hi",
                    value: values.systolic.clone(),
                    min: 70.0,
                    max: 250.0,
                    oninput: move |v| form.write().systolic = v,
                }
                NumberField {
                    label: t!("form-diastolic"),
                    name: "ap_lo",
                    value: values.diastolic.clone(),
                    min: 40.0,
                    max: 160.0,
                    oninput: move |v| form.write().diastolic = v,
                }
                SelectField {
                    label: t!("form-cholesterol"),
                    name: "cholesterol",
                    value: values.cholesterol.clone(),
                    options: level_options.clone(),
                    onchange: move |v| form.write().cholesterol = v,
                }
                SelectField {
                    label: t!("form-glucose"),
                    name: "gluc",
                    value: values.glucose.clone(),
                    options: level_options,
                    onchange: move |v| form.write().glucose = v,
                }
            }

            fieldset { class: "prediction-form__group prediction-form__group--toggles",
                legend { {t!("form-section-lifestyle")} }
                label { class: "prediction-form__toggle",
                    input {
                        r#type: "checkbox",
                        name: "smoke",
                        checked: values.smoker,
                        onchange: move |evt| form.write().smoker = evt.checked(),
                    }
                    span { {t!("form-smoker")} }
                }
                label { class: "prediction-form__toggle",
                    input {
                        r#type: "checkbox",
                        name: "alco",
                        checked: values.alcohol,
                        onchange: move |evt| form.write().alcohol = evt.checked(),
                    }
                    span { {t!("form-alcohol")} }
                }
                label { class: "prediction-form__toggle",
                    input {
                        r#type: "checkbox",
                        name: "active",
                        checked: values.active,
                        onchange: move |evt| form.write().active = evt.checked(),
                    }
                    span { {t!("form-active")} }
                }
            }

            button {
                r#type: "submit",
                class: "button button--primary prediction-form__submit",
                disabled: busy,
                if busy {
                    i { class: "fas fa-spinner fa-spin" }
                    span { {t!("form-submit-busy")} }
                } else {
                    {t!("form-submit")}
                }
            }
        }
    }
}

#[component]
fn NumberField(
    label: String,
    name: &'static str,
    value: String,
    min: f64,
    max: f64,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "prediction-form__field",
            span { "{label}" }
            input {
                r#type: "number",
                name: name,
                min: "{min}",
                max: "{max}",
                step: "any",
                required: true,
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
fn SelectField(
    label: String,
    name: &'static str,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "prediction-form__field",
            span { "{label}" }
            select {
                name: name,
                value: "{value}",
                onchange: move |evt| onchange.call(evt.value()),
                for (code, text) in options.iter() {
                    option {
                        key: "{code}",
                        value: "{code}",
                        selected: *code == value,
                        "{text}"
                    }
                }
            }
        }
    }
}
