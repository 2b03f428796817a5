mod home;
pub use home::Home;

mod predict;
pub use predict::Predict;
