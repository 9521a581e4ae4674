// src/tests/router_tests/dashboard_tests.rs

use crate::dashboard::Dashboard;
use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::{load_dashboard, write_ranked_fixture, FakeSearch, TempXlsx};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

fn fixture_dashboard() -> Dashboard {
    // The table is read into memory, so the file can go right away.
    let fixture = TempXlsx::new("dashboard_fixture");
    write_ranked_fixture(fixture.path());
    load_dashboard(fixture.path(), FakeSearch::empty())
}

#[test]
fn home_renders_table_brands_and_chart() {
    let dashboard = fixture_dashboard();
    let resp = handle(get("/"), &dashboard).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    // Two models per brand in the fixture, whatever top_n is configured.
    assert!(body.contains("Top 2 Smartphone Models per Brand"));
    assert!(body.contains("4 models from"));
    assert!(body.contains(r#"<option value="Nothing" selected>Nothing</option>"#));
    assert!(body.contains(r#"<option value="Poco">Poco</option>"#));
    assert!(body.contains("Models of Nothing"));
    assert!(!body.contains("Models of Poco"));
    assert!(body.contains("Model: Phone (2)"));
    assert!(body.contains("/image?model=Phone+%282%29"));
    assert!(body.contains("Min Price Phone from Each Brand"));
    assert!(body.contains(r#"href="/download""#));
}

#[test]
fn brand_fragment_lists_only_that_brand() {
    let dashboard = fixture_dashboard();
    let resp = handle(get("/brand?brand=Poco"), &dashboard).unwrap();
    let body = body_string(resp);

    assert!(body.starts_with(r#"<div id="brand-details">"#));
    assert!(body.contains("Models of Poco"));
    assert!(body.contains("Model: C65"));
    assert!(body.contains("Model: M6"));
    assert!(body.contains("₹8,000.00"));
    assert!(!body.contains("Phone (2)"));
}

#[test]
fn unknown_or_missing_brand_is_a_bad_request() {
    let dashboard = fixture_dashboard();

    assert!(matches!(
        handle(get("/brand?brand=Samsung"), &dashboard),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(get("/brand"), &dashboard),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn chart_shows_extremal_model_per_brand() {
    let dashboard = fixture_dashboard();
    let resp = handle(get("/chart?criterion=Battery+Capacity&kind=max"), &dashboard).unwrap();
    let body = body_string(resp);

    assert!(body.starts_with(r#"<div id="chart">"#));
    assert!(body.contains("Max Battery Capacity Phone from Each Brand"));
    // Nothing: CMF Phone 1 (5000) beats Phone (2); Poco: M6 (5030) beats C65.
    assert!(body.contains(">CMF Phone 1<"));
    assert!(body.contains(">M6<"));
    assert!(body.contains("5030.00"));
    assert!(!body.contains(">C65<"));
}

#[test]
fn chart_defaults_to_min_and_rejects_bad_selectors() {
    let dashboard = fixture_dashboard();

    let body = body_string(handle(get("/chart?criterion=Price"), &dashboard).unwrap());
    assert!(body.contains("Min Price Phone from Each Brand"));
    assert!(body.contains(">C65<"));

    assert!(matches!(
        handle(get("/chart?criterion=Price&kind=median"), &dashboard),
        Err(ServerError::BadRequest(_))
    ));
    assert!(matches!(
        handle(get("/chart?criterion=Weight"), &dashboard),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn download_returns_the_ranked_workbook() {
    let dashboard = fixture_dashboard();
    let resp = handle(get("/download"), &dashboard).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp.headers()["Content-Disposition"].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=\"dashboard_fixture_"));

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"), "xlsx files are zip archives");
}

#[test]
fn load_failure_is_shown_on_every_page() {
    let missing = TempXlsx::new("never_written");
    let dashboard = load_dashboard(missing.path(), FakeSearch::empty());

    for uri in ["/", "/brand?brand=Nothing", "/chart?criterion=Price", "/download"] {
        match handle(get(uri), &dashboard) {
            Err(ServerError::DataLoad(_)) => {}
            other => panic!("{uri}: expected DataLoad, got {:?}", other.map(|r| r.status())),
        }
    }

    let Err(err) = handle(get("/"), &dashboard) else {
        panic!("expected an error");
    };
    let resp = html_error_response(err);
    assert_eq!(resp.status(), 500);
    assert!(body_string(resp).contains("Error loading data"));
}

#[test]
fn unknown_routes_are_not_found() {
    let dashboard = fixture_dashboard();

    assert!(matches!(handle(get("/admin"), &dashboard), Err(ServerError::NotFound)));

    let post = Request::builder()
        .method(Method::POST)
        .uri("/")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(post, &dashboard), Err(ServerError::NotFound)));

    let resp = html_error_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
}
