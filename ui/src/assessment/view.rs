use dioxus::prelude::*;

use crate::core::platform;
use crate::core::state::{InFlight, ModalState};
use crate::results::{request_passport, settle_download, ResultModal, ResultView};

use super::flow::{settle_submission, submit_prediction};
use super::form::{PatientForm, PredictionForm};

/// Assessment form plus the results modal it opens.
///
/// Both requests are spawned from this scope, which outlives the modal: a
/// passport download keeps going after the modal is dismissed.
#[component]
pub fn AssessmentView() -> Element {
    let form = use_signal(PatientForm::default);
    let mut modal = use_signal(ModalState::default);
    let mut result = use_signal(|| Option::<ResultView>::None);
    let mut submit_flight = use_signal(InFlight::default);
    let mut passport_flight = use_signal(InFlight::default);

    let on_submit = move |_: ()| {
        // A second submit while one is outstanding is dropped.
        if !submit_flight.write().try_begin() {
            return;
        }
        let payload = form.read().to_payload();

        spawn(async move {
            let outcome = submit_prediction(&payload).await;
            let alert = settle_submission(
                outcome,
                &mut modal.write(),
                &mut result.write(),
                &mut submit_flight.write(),
            );
            if let Some(message) = alert {
                platform::alert(&message);
            }
        });
    };

    let on_passport = move |_: ()| {
        if !passport_flight.write().try_begin() {
            return;
        }
        let payload = form.read().to_payload();

        spawn(async move {
            let outcome = request_passport(&payload).await;
            let alert = settle_download(&mut passport_flight.write(), outcome);
            if let Some(message) = alert {
                platform::alert(&message);
            }
        });
    };

    rsx! {
        article { class: "assessment",
            PredictionForm {
                form,
                busy: submit_flight().is_busy(),
                on_submit,
            }

            if let Some(view) = result() {
                ResultModal {
                    view,
                    modal,
                    passport_busy: passport_flight().is_busy(),
                    on_passport,
                }
            }
        }
    }
}
