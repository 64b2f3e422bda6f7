//! Shared UI crate for the presence dashboard. Everything except routing and
//! launching lives here.

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod directory;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
