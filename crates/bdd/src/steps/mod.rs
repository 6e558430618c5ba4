//! Step definitions, one module per feature

pub mod dynamic_content;
pub mod dynamic_properties;
pub mod login;
