//! UI Components
//!
//! Leptos components for the login screen and dashboard.

mod activity_log;
mod confirm_modal;
mod filter_bar;
mod item_form;
mod item_table;
mod login_screen;
mod navbar;
mod stat_cards;
mod toaster;

pub use activity_log::ActivityLog;
pub use confirm_modal::ConfirmModal;
pub use filter_bar::FilterBar;
pub use item_form::ItemFormPanel;
pub use item_table::ItemTable;
pub use login_screen::LoginScreen;
pub use navbar::Navbar;
pub use stat_cards::StatCards;
pub use toaster::Toaster;
