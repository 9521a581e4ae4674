// src/tests/router_tests/image_tests.rs

use crate::errors::ServerError;
use crate::images::{ImageLookup, ImageResolver};
use crate::router::handle;
use crate::tests::utils::{
    init_test_cache, load_dashboard, resolver, write_ranked_fixture, FakeSearch, TempXlsx,
};
use astra::Body;
use http::{Method, Request};
use std::io::Read;
use std::sync::atomic::Ordering;

fn image_fragment(uri: &str, search: FakeSearch) -> (String, usize) {
    let fixture = TempXlsx::new("image_fixture");
    write_ranked_fixture(fixture.path());
    let calls = search.calls.clone();
    let dashboard = load_dashboard(fixture.path(), search);

    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let resp = handle(req, &dashboard).unwrap();
    assert_eq!(resp.status(), 200);

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    (body, calls.load(Ordering::SeqCst))
}

#[test]
fn found_image_is_rendered_with_caption() {
    let (body, calls) = image_fragment(
        "/image?model=Phone+%282%29",
        FakeSearch::found("https://img.example/phone-2.jpg"),
    );

    assert_eq!(calls, 1);
    assert!(body.contains(r#"src="https://img.example/phone-2.jpg""#));
    assert!(body.contains(r#"alt="Phone (2)""#));
    assert!(body.contains("<figcaption>Phone (2)</figcaption>"));
}

#[test]
fn missing_image_shows_placeholder() {
    let (body, _) = image_fragment("/image?model=C65", FakeSearch::empty());
    assert!(body.contains("Image not found."));
    assert!(!body.contains("<img"));
}

#[test]
fn failed_search_degrades_to_placeholder() {
    let (body, calls) = image_fragment("/image?model=C65", FakeSearch::failing(429));
    assert_eq!(calls, 1);
    assert!(body.contains("Image not found."));
}

#[test]
fn blank_model_is_a_bad_request() {
    let fixture = TempXlsx::new("image_fixture");
    write_ranked_fixture(fixture.path());
    let dashboard = load_dashboard(fixture.path(), FakeSearch::empty());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/image?model=+")
        .body(Body::empty())
        .unwrap();
    assert!(matches!(handle(req, &dashboard), Err(ServerError::BadRequest(_))));
}

#[test]
fn answers_are_cached_per_model() {
    let search = FakeSearch::found("https://img.example/m6.jpg");
    let calls = search.calls.clone();
    let images = resolver(search);

    let expected = ImageLookup::Found("https://img.example/m6.jpg".to_string());
    assert_eq!(images.resolve("M6"), expected);
    assert_eq!(images.resolve(" M6 "), expected);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    images.resolve("C65");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn not_found_is_cached_but_errors_are_retried() {
    let empty = FakeSearch::empty();
    let empty_calls = empty.calls.clone();
    let images = resolver(empty);
    assert_eq!(images.resolve("Hot 40"), ImageLookup::NotFound);
    assert_eq!(images.resolve("Hot 40"), ImageLookup::NotFound);
    assert_eq!(empty_calls.load(Ordering::SeqCst), 1);

    let failing = FakeSearch::failing(500);
    let failing_calls = failing.calls.clone();
    let images = resolver(failing);
    assert_eq!(images.resolve("Hot 40"), ImageLookup::NotFound);
    assert_eq!(images.resolve("Hot 40"), ImageLookup::NotFound);
    assert_eq!(failing_calls.load(Ordering::SeqCst), 2);
}

#[test]
fn cache_is_shared_between_resolvers() {
    let cache = init_test_cache();

    let first = FakeSearch::found("https://img.example/f6.jpg");
    ImageResolver::new(Box::new(first), cache.clone()).resolve("F6");

    let second = FakeSearch::found("https://img.example/other.jpg");
    let second_calls = second.calls.clone();
    let lookup = ImageResolver::new(Box::new(second), cache).resolve("F6");

    assert_eq!(lookup, ImageLookup::Found("https://img.example/f6.jpg".to_string()));
    assert_eq!(second_calls.load(Ordering::SeqCst), 0);
}
