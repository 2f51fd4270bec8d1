//! Admin guard middleware.

use salvo::prelude::*;

use crate::auth::session;

/// Reject requests whose session does not carry the admin capability.
#[salvo::handler]
pub(crate) async fn require_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if !session::is_admin(depot) {
        res.render(StatusError::unauthorized().brief("Admin login required"));

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{grant_admin_hoop, session_handler};

    use super::*;

    #[salvo::handler]
    async fn echo_ok(res: &mut Response) {
        res.render("ok");
    }

    fn make_service(admin: bool) -> Service {
        let mut router = Router::new().hoop(session_handler());

        if admin {
            router = router.hoop(grant_admin_hoop);
        }

        Service::new(
            router
                .hoop(require_admin)
                .push(Router::with_path("guarded").get(echo_ok)),
        )
    }

    #[tokio::test]
    async fn test_request_without_admin_session_returns_401() -> TestResult {
        let res = TestClient::get("http://example.com/guarded")
            .send(&make_service(false))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_request_with_admin_session_passes_through() -> TestResult {
        let mut res = TestClient::get("http://example.com/guarded")
            .send(&make_service(true))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "ok");

        Ok(())
    }
}
