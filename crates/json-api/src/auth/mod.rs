//! Admin session auth.

pub(crate) mod errors;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod middleware;
pub(crate) mod session;
