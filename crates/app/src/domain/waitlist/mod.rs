//! Waitlist lifecycle

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::WaitlistServiceError;
pub use service::*;
