//! Page objects for UiProbe
//!
//! Each page groups the locators and task/question factories for one
//! screen of a probed site. Pages hold no state; they compose screenplay
//! vocabulary and nothing else.

pub mod dynamic_content;
pub mod dynamic_properties;
pub mod login;
pub mod site;

pub use dynamic_content::DynamicContentPage;
pub use dynamic_properties::{DynamicPropertiesPage, LookupStrategy};
pub use login::LoginPage;
pub use site::Site;
