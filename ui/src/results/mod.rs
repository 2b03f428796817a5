mod counter;
pub use counter::RampCounter;

mod modal;
pub use modal::ResultModal;

mod passport;
pub use passport::PassportButton;

mod report;
pub use report::{
    download_passport, passport_filename, patient_slug, report_alert, request_passport,
    settle_download,
};

mod view_model;
pub use view_model::{AgeGap, AgeTone, PlanRow, ResultView};
