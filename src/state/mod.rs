pub mod captcha;
pub mod filter;
pub mod property_store;
pub mod session;
pub mod visit_editor;

pub use captcha::CaptchaChallenge;
pub use filter::{FilterOption, FilterSelection};
pub use property_store::{PropertyStore, StoreError};
pub use session::SessionGate;
pub use visit_editor::VisitEditor;
