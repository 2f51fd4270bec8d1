//! Display mode handlers.

pub(crate) mod errors;
pub(crate) mod get;
pub(crate) mod start;
pub(crate) mod stop;
