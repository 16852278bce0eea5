//! End-to-end tests for the assembled application
//!
//! The catalog and login services are stood in for by wiremock; the session
//! token lives in a temporary on-disk store so restarts can be simulated.

use std::sync::Arc;
use std::time::Duration;

use app_state::{FetchOutcome, LoginOutcome, DEMO_TOKEN};
use app_ui::{sign_out, NavigationStack, ProductDetailBody, Route, ThemeState, ToastKind, ToastQueue};
use catalog_client::{HttpAuthClient, HttpCatalogClient, HttpClientConfig};
use serde_json::json;
use storage::{KvConfig, KvStore};
use storefront::{AppConfig, Storefront};
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UNREACHABLE: &str = "http://127.0.0.1:1";

fn product_json(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Product {}", id),
        "description": "A product",
        "category": if id % 2 == 0 { "laptops" } else { "smartphones" },
        "price": 10.0 + id as f64,
        "rating": 4.5,
        "thumbnail": "https://cdn.example.com/t.png",
        "stock": 5
    })
}

async fn mount_page(server: &MockServer, skip: u64, ids: std::ops::RangeInclusive<u64>, total: u64) {
    let products: Vec<_> = ids.map(product_json).collect();
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("limit", "10"))
        .and(query_param("skip", skip.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": products,
            "total": total,
            "skip": skip,
            "limit": 10
        })))
        .mount(server)
        .await;
}

/// Application over the given services with a store that can be reopened
fn app_at(data: &TempDir, catalog_url: &str, auth_url: &str) -> Storefront {
    let config = AppConfig::default()
        .with_catalog_url(catalog_url)
        .with_auth_url(auth_url)
        .with_timeout(Duration::from_secs(5))
        .with_data_path(data.path().join("kv"));

    let catalog = HttpCatalogClient::new(
        HttpClientConfig::new(catalog_url).with_timeout(config.timeout),
    )
    .unwrap();
    let auth = HttpAuthClient::new(HttpClientConfig::new(auth_url).with_timeout(config.timeout)).unwrap();
    let kv = KvStore::open(KvConfig::new(config.data_path.clone()).flush_every_ms(None)).unwrap();

    Storefront::with_services(config, Arc::new(catalog), Arc::new(auth), Arc::new(kv))
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_pages_through_whole_catalog() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 1..=10, 25).await;
    mount_page(&server, 10, 11..=20, 25).await;
    mount_page(&server, 20, 21..=25, 25).await;

    let data = TempDir::new().unwrap();
    let app = app_at(&data, &server.uri(), UNREACHABLE);
    let screen = app.product_list_screen();

    assert_eq!(screen.on_mount().await, FetchOutcome::Loaded { added: 10 });
    assert!(app.catalog().has_more());

    assert_eq!(screen.on_end_reached().await, Some(FetchOutcome::Loaded { added: 10 }));
    assert_eq!(screen.on_end_reached().await, Some(FetchOutcome::Loaded { added: 5 }));
    assert!(!app.catalog().has_more());
    assert_eq!(screen.on_end_reached().await, None);

    let ids: Vec<_> = app.catalog().items().iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=25).collect::<Vec<_>>());

    let view = screen.render(&ThemeState::default(), 400.0);
    assert_eq!(view.cards.len(), 25);
    assert_eq!(view.cards[0].price, "$11.00");
}

#[tokio::test]
async fn test_refresh_after_paging_starts_over() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 1..=10, 25).await;
    mount_page(&server, 10, 11..=20, 25).await;

    let data = TempDir::new().unwrap();
    let app = app_at(&data, &server.uri(), UNREACHABLE);
    let mut screen = app.product_list_screen();

    screen.on_mount().await;
    screen.on_end_reached().await;
    assert_eq!(app.catalog().len(), 20);

    assert_eq!(screen.on_refresh().await, FetchOutcome::Loaded { added: 10 });
    assert_eq!(app.catalog().len(), 10);
    assert_eq!(app.catalog().page_cursor(), 1);
}

#[tokio::test]
async fn test_search_filters_loaded_products_only() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 1..=10, 25).await;

    let data = TempDir::new().unwrap();
    let app = app_at(&data, &server.uri(), UNREACHABLE);
    let screen = app.product_list_screen();
    screen.on_mount().await;

    screen.on_search("LAPTOP");
    let view = screen.render(&ThemeState::default(), 400.0);
    assert_eq!(view.cards.len(), 5);
    assert!(view.cards.iter().all(|c| c.category_badge == "LAPTOPS"));

    // Infinite scroll is paused while a search is active
    assert_eq!(screen.on_end_reached().await, None);
    assert_eq!(app.catalog().len(), 10);
}

#[tokio::test]
async fn test_server_error_keeps_products_and_reports() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 1..=10, 25).await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("skip", "10"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let data = TempDir::new().unwrap();
    let app = app_at(&data, &server.uri(), UNREACHABLE);
    let screen = app.product_list_screen();
    screen.on_mount().await;

    assert_eq!(screen.on_end_reached().await, Some(FetchOutcome::Failed));
    assert_eq!(app.catalog().len(), 10);

    let view = screen.render(&ThemeState::default(), 400.0);
    assert_eq!(view.error.map(|b| b.message), Some("API error (500): HTTP 500".to_string()));
    assert_eq!(view.cards.len(), 10);
}

#[tokio::test]
async fn test_product_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_json(3)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Product with id '999' not found"
        })))
        .mount(&server)
        .await;

    let data = TempDir::new().unwrap();
    let app = app_at(&data, &server.uri(), UNREACHABLE);

    let mut detail = app.product_detail_screen(3);
    detail.load().await;
    match detail.render() {
        ProductDetailBody::Product(view) => {
            assert_eq!(view.title, "Product 3");
            assert_eq!(view.price, "$13");
            assert_eq!(view.category, "SMARTPHONES");
        }
        other => panic!("unexpected body: {:?}", other),
    }

    let mut missing = app.product_detail_screen(999);
    missing.load().await;
    assert_eq!(missing.render(), ProductDetailBody::NotFound("Product not found".to_string()));
}

// =============================================================================
// Session
// =============================================================================

#[tokio::test]
async fn test_login_gates_navigation_and_persists() {
    let auth = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "email": "eve.holt@reqres.in", "password": "cityslicka" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "QpwL5tke4Pnpja7X4" })))
        .expect(1)
        .mount(&auth)
        .await;

    let data = TempDir::new().unwrap();
    {
        let app = app_at(&data, UNREACHABLE, &auth.uri());
        let mut stack = NavigationStack::new(Route::Products);

        // Nothing happens until the stored session has been read
        assert!(app.session().is_loading());
        assert_eq!(stack.apply_gate(&app.session().state()), None);

        assert_eq!(app.session().restore_session().await.unwrap(), None);
        assert_eq!(stack.apply_gate(&app.session().state()), Some(Route::Login));

        let mut toasts = ToastQueue::new();
        let outcome = app.login_screen().submit(&mut toasts).await;
        assert_eq!(outcome, Some(LoginOutcome::Authenticated));
        assert_eq!(toasts.latest().map(|t| t.kind), Some(ToastKind::Success));
        assert_eq!(stack.apply_gate(&app.session().state()), Some(Route::Products));
    }

    let app = app_at(&data, UNREACHABLE, &auth.uri());
    assert_eq!(
        app.session().restore_session().await.unwrap(),
        Some("QpwL5tke4Pnpja7X4".to_string())
    );
    assert!(app.session().is_authenticated());
}

#[tokio::test]
async fn test_offline_demo_login_survives_restart() {
    let data = TempDir::new().unwrap();
    {
        let app = app_at(&data, UNREACHABLE, UNREACHABLE);
        app.session().restore_session().await.unwrap();

        let mut toasts = ToastQueue::new();
        let outcome = app.login_screen().submit(&mut toasts).await;
        assert_eq!(outcome, Some(LoginOutcome::OfflineDemo));

        let toast = toasts.latest().unwrap();
        assert_eq!(toast.title, "Login Successful (Offline Mode)");
        assert_eq!(toast.duration, 4000);
    }

    let app = app_at(&data, UNREACHABLE, UNREACHABLE);
    assert_eq!(app.session().restore_session().await.unwrap(), Some(DEMO_TOKEN.to_string()));
}

#[tokio::test]
async fn test_offline_login_with_other_credentials_fails() {
    let data = TempDir::new().unwrap();
    let app = app_at(&data, UNREACHABLE, UNREACHABLE);
    app.session().restore_session().await.unwrap();

    let mut screen = app.login_screen();
    screen.form.email = "someone@example.com".to_string();

    let mut toasts = ToastQueue::new();
    assert_eq!(screen.submit(&mut toasts).await, None);
    assert_eq!(toasts.latest().map(|t| t.kind), Some(ToastKind::Error));
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn test_rejected_login_is_not_downgraded() {
    let auth = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "user not found" })))
        .mount(&auth)
        .await;

    let data = TempDir::new().unwrap();
    let app = app_at(&data, UNREACHABLE, &auth.uri());
    app.session().restore_session().await.unwrap();

    let mut toasts = ToastQueue::new();
    assert_eq!(app.login_screen().submit(&mut toasts).await, None);

    let toast = toasts.latest().unwrap();
    assert_eq!(toast.title, "Login Failed");
    assert_eq!(toast.message.as_deref(), Some("user not found"));
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn test_demo_fallback_can_be_disabled() {
    let data = TempDir::new().unwrap();
    let config = AppConfig::default()
        .with_catalog_url(UNREACHABLE)
        .with_auth_url(UNREACHABLE)
        .with_data_path(data.path().join("kv"))
        .with_demo_login_fallback(false);
    let app = Storefront::open(config).unwrap();
    app.session().restore_session().await.unwrap();

    let mut toasts = ToastQueue::new();
    assert_eq!(app.login_screen().submit(&mut toasts).await, None);
    assert!(!app.session().is_authenticated());
}

#[tokio::test]
async fn test_logout_clears_stored_session() {
    let data = TempDir::new().unwrap();
    {
        let app = app_at(&data, UNREACHABLE, UNREACHABLE);
        app.session().restore_session().await.unwrap();
        app.login_screen().submit(&mut ToastQueue::new()).await;
        assert!(app.session().is_authenticated());

        let mut toasts = ToastQueue::new();
        assert!(sign_out(app.session(), &mut toasts).await);
        assert_eq!(toasts.latest().map(|t| t.title.as_str()), Some("Logged out"));

        let mut stack = NavigationStack::new(Route::ProductDetail { id: 1 });
        assert_eq!(stack.apply_gate(&app.session().state()), Some(Route::Login));
    }

    let app = app_at(&data, UNREACHABLE, UNREACHABLE);
    assert_eq!(app.session().restore_session().await.unwrap(), None);
}
