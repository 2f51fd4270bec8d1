//! Settings key/value store

pub mod errors;
mod repository;
pub mod service;

pub(crate) use repository::SqliteSettingsRepository;

pub use errors::SettingsServiceError;
pub use service::*;

/// Setting key controlling whether the public view shows the "open" sign or
/// the live waitlist.
pub const DISPLAY_MODE_KEY: &str = "display_mode";

/// Setting key holding the salted hash of the admin PIN.
pub const ADMIN_PIN_HASH_KEY: &str = "admin_pin_hash";

/// `display_mode` value for the "open" sign.
pub const DISPLAY_MODE_OPEN: &str = "open";

/// `display_mode` value for the live waitlist view.
pub const DISPLAY_MODE_WAITLIST: &str = "waitlist";
