//! Shared UI crate for CardioCare. Views, widgets and the logic behind them
//! live here; platform crates only add routing and launch configuration.

pub mod assessment;
pub mod chat;
pub mod core;
pub mod i18n;
pub mod results;
pub mod views;

pub mod components {
    // Localized application navbar with the collapsible menu (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    pub use crate::chat::ChatWidget;
}
