#[macro_use]
mod common;

use actix_web::test;

use gymdesk::api::Endpoint;
use gymdesk::api::mock::MockGymApi;

use common::body_text;

/// GET `$uri` with the session cookie, returning (status, body).
macro_rules! get_page {
    ($app:expr, $uri:expr, $cookie:expr) => {{
        let req = test::TestRequest::get().uri($uri).cookie($cookie.clone()).to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status().as_u16();
        (status, body_text(resp).await)
    }};
}

#[tokio::test]
async fn test_leads_board_for_front_desk() {
    let app = app!(MockGymApi::new());
    let cookie = sign_in!(app, common::STAFF_EMAIL);

    let (status, html) = get_page!(app, "/crm/leads", cookie);
    assert_eq!(status, 200);
    assert!(html.contains("Lead pipeline"));
    assert!(html.contains("6 leads"));
    assert!(!html.contains("could not be loaded"));
}

#[tokio::test]
async fn test_leads_forbidden_for_members() {
    let api = MockGymApi::new();
    let app = app!(api.clone());
    let cookie = sign_in!(app, common::MEMBER_EMAIL);

    let (status, _) = get_page!(app, "/crm/leads", cookie);
    assert_eq!(status, 403);
    assert!(!api.calls().contains(&Endpoint::Leads));
}

#[tokio::test]
async fn test_leads_failure_shows_alert() {
    let app = app!(MockGymApi::new().failing(Endpoint::Leads));
    let cookie = sign_in!(app, common::MANAGER_EMAIL);

    let (status, html) = get_page!(app, "/crm/leads", cookie);
    assert_eq!(status, 200);
    assert!(html.contains("Leads could not be loaded"));
    assert!(html.contains("0 leads"));
}

#[tokio::test]
async fn test_invoices_filter_and_outstanding_total() {
    let app = app!(MockGymApi::new());
    let cookie = sign_in!(app, common::MANAGER_EMAIL);

    let (status, html) = get_page!(app, "/billing/invoices", cookie);
    assert_eq!(status, 200);
    assert!(html.contains("INV-2026-0104"), "paid invoice listed under All");
    // 89 + 129.50 + 49, the paid one excluded
    assert!(html.contains("Outstanding $267.50"));

    let (status, html) = get_page!(app, "/billing/invoices?status=overdue", cookie);
    assert_eq!(status, 200);
    assert!(html.contains("INV-2026-0101"));
    assert!(html.contains("INV-2026-0102"));
    assert!(!html.contains("INV-2026-0103"));
    assert!(html.contains(r#"<a href="/billing/invoices?status=overdue" class="active">"#));
}

#[tokio::test]
async fn test_unknown_invoice_filter_lists_everything() {
    let app = app!(MockGymApi::new());
    let cookie = sign_in!(app, common::BRANCH_ADMIN_EMAIL);

    let (status, html) = get_page!(app, "/billing/invoices?status=refunded", cookie);
    assert_eq!(status, 200);
    assert!(html.contains("INV-2026-0101"));
    assert!(html.contains(r#"<a href="/billing/invoices" class="active">All</a>"#));
}

#[tokio::test]
async fn test_invoices_forbidden_for_staff() {
    let app = app!(MockGymApi::new());
    let cookie = sign_in!(app, common::STAFF_EMAIL);

    let (status, _) = get_page!(app, "/billing/invoices", cookie);
    assert_eq!(status, 403);
}

#[tokio::test]
async fn test_navigation_matches_role() {
    let app = app!(MockGymApi::new());

    let cookie = sign_in!(app, common::MANAGER_EMAIL);
    let (_, html) = get_page!(app, "/dashboard", cookie);
    assert!(html.contains(r#"href="/crm/leads""#));
    assert!(html.contains(r#"href="/billing/invoices""#));

    let cookie = sign_in!(app, common::MEMBER_EMAIL);
    let (_, html) = get_page!(app, "/dashboard", cookie);
    assert!(!html.contains(r#"href="/crm/leads""#));
    assert!(!html.contains(r#"href="/billing/invoices""#));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let app = app!(MockGymApi::new());
    let cookie = sign_in!(app, common::MEMBER_EMAIL);

    let (status, html) = get_page!(app, "/no-such-page", cookie);
    assert_eq!(status, 404);
    assert!(html.contains("Page not found"));
}
