//! Styled Dioxus components shared by the LegalHub front end.

pub mod components;
pub mod theme;

pub use components::*;
