use crate::domain::LeaseRecord;
use crate::router::handle;
use crate::tests::utils::{lease, sample_layout, test_app, FixtureLeases};
use astra::Body;
use chrono::NaiveDate;
use http::Method;
use std::io::Read;

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
fn lease_table_lists_every_record() {
    let mut dated: LeaseRecord = lease(1, "Ana's Arepas", "S24 P10", 50.0);
    dated.lease_end = NaiveDate::from_ymd_opt(2026, 1, 31);

    let leases = FixtureLeases(vec![dated, lease(2, "Bo's Bowls", "N/A", -5.0)]);
    let app = test_app(leases, sample_layout("leases_table"));

    let mut resp = handle(get("/leases"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);

    // Both rows appear, even the one whose location maps to no booth.
    assert!(body.contains("Ana&#39;s Arepas") || body.contains("Ana's Arepas"));
    assert!(body.contains("Bo&#39;s Bowls") || body.contains("Bo's Bowls"));
    assert!(body.contains("S24 P10"));
    assert!(body.contains("N/A"));
    assert!(body.contains("2026-01-31"));
    assert!(body.contains("$50.00"));
    assert!(body.contains("$-5.00"));
}

#[test]
fn lease_table_is_scoped_to_the_configured_property() {
    let mut foreign = lease(3, "Wandering Wok", "K1", 0.0);
    foreign.property_name = "World Food Trucks".to_string();

    let leases = FixtureLeases(vec![lease(1, "Ana", "K1", 0.0), foreign]);
    let app = test_app(leases, sample_layout("leases_scope"));

    let mut resp = handle(get("/leases"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Ana"));
    assert!(!body.contains("Wandering Wok"));
}

#[test]
fn empty_roster_shows_a_message() {
    let app = test_app(FixtureLeases(vec![]), sample_layout("leases_empty"));

    let mut resp = handle(get("/leases"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("No active leases found."));
}
