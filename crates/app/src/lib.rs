//! Waitline application domain and persistence modules.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod timestamps;

#[cfg(test)]
mod test;
