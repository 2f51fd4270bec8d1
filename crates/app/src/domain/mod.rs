//! Waitline Domain Concerns

pub mod settings;
pub mod waitlist;
