#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod eligibility;
mod error;
mod exercise;
mod history;
mod profile;
mod program;
mod progression;
mod recipe;
mod selector;
mod service;
mod session;

pub use eligibility::*;
pub use error::*;
pub use exercise::*;
pub use history::*;
pub use profile::*;
pub use program::*;
pub use progression::*;
pub use recipe::*;
pub use selector::*;
pub use service::*;
pub use session::*;
