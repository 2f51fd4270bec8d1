//! Session-scoped admin capability.

use salvo::{
    prelude::{Depot, StatusError},
    session::SessionDepotExt,
};

use crate::extensions::ResultExt;

/// Session key holding the admin capability flag.
const IS_ADMIN_KEY: &str = "is_admin";

/// Whether the current session carries the admin capability.
pub(crate) fn is_admin(depot: &Depot) -> bool {
    depot
        .session()
        .and_then(|session| session.get::<bool>(IS_ADMIN_KEY))
        .unwrap_or(false)
}

/// Grant the admin capability to the current session.
pub(crate) fn grant_admin(depot: &mut Depot) -> Result<(), StatusError> {
    depot
        .session_mut()
        .ok_or_else(StatusError::internal_server_error)?
        .insert(IS_ADMIN_KEY, true)
        .or_500("failed to store admin flag in session")
}

/// Revoke the admin capability from the current session.
pub(crate) fn revoke_admin(depot: &mut Depot) {
    if let Some(session) = depot.session_mut() {
        session.remove(IS_ADMIN_KEY);
    }
}
