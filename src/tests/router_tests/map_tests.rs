use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{lease, sample_layout, test_app, FailingLeases, FixtureLeases};
use astra::Body;
use http::Method;
use std::io::Read;
use std::path::PathBuf;

fn get(path: &str) -> astra::Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

fn body_string(resp: &mut astra::Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn map_page_renders_the_full_pipeline() {
    // Shared tenant owing 50 over "S24 P10", a kitchen tenant in credit,
    // and an office booth nobody references.
    let leases = FixtureLeases(vec![
        lease(1, "Ana's Arepas", "S24 P10", 50.0),
        lease(2, "Bo's Bowls", "K1", -5.0),
    ]);
    let app = test_app(leases, sample_layout("pipeline"));

    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);

    // Booths 24 and 10 share the delinquent tenant; K1 is Kitchen; OF9 vacant.
    assert!(body.contains("\"label\":\"24\""));
    assert!(body.contains("\"color\":\"#ff8a8a\""), "expected the past-due color");
    assert!(body.contains("\"color\":\"#72f0d5\""), "expected the kitchen color");
    assert!(body.contains("\"color\":\"#bdbdbd\""), "expected the vacant color");
    assert!(body.contains("\"past_due\":true"));

    // 3 of 4 booths occupied; 1 of 3 occupant entries current on rent.
    assert!(body.contains("Occupancy: 75.0%"), "missing occupancy stat");
    assert!(
        body.contains("Rent Collection: 33.3%"),
        "missing rent collection stat"
    );

    // Popup fields ride along in the payload verbatim.
    assert!(body.contains("\"occupant_name\":\"Ana's Arepas\""));
}

#[test]
fn missing_layout_renders_the_empty_state() {
    let app = test_app(
        FixtureLeases(vec![lease(1, "Ana", "K1", 0.0)]),
        PathBuf::from("no_such_layout_file.json"),
    );

    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("No map layout or no booths found."));
}

#[test]
fn other_properties_never_reach_the_map() {
    let mut foreign = lease(3, "Wandering Wok", "K1", 120.0);
    foreign.property_name = "World Food Trucks".to_string();

    let app = test_app(FixtureLeases(vec![foreign]), sample_layout("filtered"));

    let mut resp = handle(get("/"), &app).unwrap();
    let body = body_string(&mut resp);

    // K1 stays vacant because its only lease belongs to another property.
    assert!(!body.contains("Wandering Wok"));
    assert!(!body.contains("\"color\":\"#ff8a8a\""));
    assert!(body.contains("Occupancy: 0.0%"));
}

#[test]
fn unknown_routes_are_not_found() {
    let app = test_app(FixtureLeases(vec![]), sample_layout("notfound"));

    match handle(get("/nope"), &app) {
        Err(ServerError::NotFound) => {}
        Err(e) => panic!("expected NotFound, got: {e}"),
        Ok(_) => panic!("expected NotFound, got a response"),
    }
}

#[test]
fn upstream_failure_surfaces_as_upstream_error() {
    let app = test_app(FailingLeases, sample_layout("failing"));

    match handle(get("/"), &app) {
        Err(ServerError::Upstream(msg)) => {
            assert!(msg.contains("connection refused"));
        }
        Err(e) => panic!("expected Upstream, got: {e}"),
        Ok(_) => panic!("expected Upstream, got a response"),
    }
}
