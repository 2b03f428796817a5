mod flow;
pub use flow::{resolve_prediction, settle_submission, submit_prediction, SubmissionOutcome};

mod form;
pub use form::{PatientForm, PredictionForm};

mod view;
pub use view::AssessmentView;
