pub mod app;
pub mod dashboard;
pub mod details_modal;
pub mod filter_dropdown;
pub mod login_screen;
pub mod property_card;

pub use app::App;
pub use dashboard::Dashboard;
pub use details_modal::DetailsModal;
pub use filter_dropdown::FilterDropdown;
pub use login_screen::LoginScreen;
pub use property_card::PropertyCard;
