pub mod config;
pub mod error;
pub mod mock;
pub mod section;
pub mod text;
pub mod tone;

// Dashboard records
pub mod calendar;
pub mod client;
pub mod consultation;
pub mod document;
pub mod payment;
pub mod profile;
pub mod reference;

pub use config::*;
pub use error::*;
pub use section::*;
pub use text::*;
pub use tone::*;

pub use calendar::*;
pub use client::*;
pub use consultation::*;
pub use document::*;
pub use payment::*;
pub use profile::*;
pub use reference::*;
