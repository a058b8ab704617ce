pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod links;
pub mod logging;
pub mod render;
pub mod schedule;
pub mod site;
pub mod speakers;

pub use domain::*;
pub use error::{Result, SiteError};
