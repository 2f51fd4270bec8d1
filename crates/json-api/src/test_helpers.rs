//! Handler test helpers.
//!
//! Handler tests run against mocked services, so every state builder here
//! fills the services a test does not care about with strict mocks that fail
//! the test on any unexpected call.

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    prelude::*,
    session::{CookieStore, SessionHandler},
};

use waitline_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        settings::MockSettingsService,
        waitlist::{
            MockWaitlistService,
            models::{Entry, EntryStatus},
        },
    },
    timestamps,
};

use crate::{auth::session, state::State};

/// Fixed session key for tests, long enough for the cookie store.
const TEST_SESSION_SECRET: &[u8; 64] =
    b"0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Session handler backed by a fixed test key.
pub(crate) fn session_handler() -> SessionHandler<CookieStore> {
    SessionHandler::builder(CookieStore::new(), TEST_SESSION_SECRET)
        .build()
        .expect("failed to build test session handler")
}

/// Hoop that grants the admin capability before the handler runs.
#[salvo::handler]
pub(crate) async fn grant_admin_hoop(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if let Err(error) = session::grant_admin(depot) {
        res.render(error);

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

/// Waitlist entry fixture in the freshly created state.
pub(crate) fn make_entry(id: i64) -> Entry {
    let requesttime =
        timestamps::parse_utc("2026-08-29 12:00:00").expect("fixture timestamp must parse");

    Entry {
        id,
        name: "Alice".to_string(),
        phone: "+15551234".to_string(),
        seats: 2,
        notes: None,
        status: EntryStatus::Waiting,
        requesttime,
        requested_at: Some(requesttime),
        assigned_at: None,
        seated_at: None,
        deleted_at: None,
    }
}

fn strict_waitlist_mock() -> MockWaitlistService {
    let mut mock = MockWaitlistService::new();

    mock.expect_create_entry().never();
    mock.expect_assign().never();
    mock.expect_seat().never();
    mock.expect_soft_delete().never();
    mock.expect_list_active().never();
    mock.expect_list_all().never();
    mock.expect_count_entries().never();

    mock
}

fn strict_settings_mock() -> MockSettingsService {
    let mut mock = MockSettingsService::new();

    mock.expect_get_setting().never();
    mock.expect_set_setting().never();

    mock
}

fn strict_auth_mock() -> MockAuthService {
    let mut mock = MockAuthService::new();

    mock.expect_verify_pin().never();

    mock
}

fn build_state(
    waitlist: MockWaitlistService,
    settings: MockSettingsService,
    auth: MockAuthService,
) -> Arc<State> {
    State::from_app_context(AppContext {
        waitlist: Arc::new(waitlist),
        settings: Arc::new(settings),
        auth: Arc::new(auth),
    })
}

pub(crate) fn state_with_waitlist(waitlist: MockWaitlistService) -> Arc<State> {
    build_state(waitlist, strict_settings_mock(), strict_auth_mock())
}

pub(crate) fn state_with_settings(settings: MockSettingsService) -> Arc<State> {
    build_state(strict_waitlist_mock(), settings, strict_auth_mock())
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    build_state(strict_waitlist_mock(), strict_settings_mock(), auth)
}

pub(crate) fn state_with_services(
    waitlist: MockWaitlistService,
    settings: MockSettingsService,
) -> Arc<State> {
    build_state(waitlist, settings, strict_auth_mock())
}

/// Service routing `route` with `state` injected, no session layer.
pub(crate) fn waitlist_service(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}

/// Service routing `route` with `state` and a cookie session layer.
pub(crate) fn session_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(session_handler())
            .push(route),
    )
}

/// Like [`session_service`], with the admin capability pre-granted.
pub(crate) fn admin_service(state: Arc<State>, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state))
            .hoop(session_handler())
            .hoop(grant_admin_hoop)
            .push(route),
    )
}
