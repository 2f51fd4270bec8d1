//! Admin authentication

mod errors;
pub mod pin;
mod service;

pub use errors::*;
pub use service::*;
