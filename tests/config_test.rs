mod common;

use common::{date, table};
use farescan::config::{DateWindow, SearchRequest, parse_codes, parse_date};
use farescan::error::FareError;
use farescan::query::WeekdaySet;

fn make_valid_request() -> SearchRequest {
    SearchRequest {
        departures: vec!["STN".into()],
        arrivals: vec!["BCN".into()],
        duration_from: 2,
        duration_to: 5,
        travel_window: DateWindow {
            start: date("2026-06-01"),
            end: date("2026-06-10"),
        },
        departure_weekdays: WeekdaySet::new(),
        return_weekdays: WeekdaySet::new(),
        categories: Vec::new(),
    }
}

#[test]
fn valid_request_passes() {
    assert!(make_valid_request().validate().is_ok());
}

#[test]
fn one_sided_requests_pass() {
    let mut r = make_valid_request();
    r.arrivals.clear();
    assert!(r.validate().is_ok());

    let mut r = make_valid_request();
    r.departures.clear();
    assert!(r.validate().is_ok());
}

#[test]
fn rejects_no_airports_at_all() {
    let mut r = make_valid_request();
    r.departures.clear();
    r.arrivals.clear();
    assert!(matches!(r.validate(), Err(FareError::Validation(_))));
}

#[test]
fn rejects_malformed_codes() {
    for bad in ["st", "STNX", "S1N", "stn"] {
        let mut r = make_valid_request();
        r.arrivals = vec![bad.into()];
        assert!(matches!(r.validate(), Err(FareError::InvalidAirport(_))), "{bad}");
    }
}

#[test]
fn rejects_inverted_stay() {
    let mut r = make_valid_request();
    r.duration_from = 6;
    assert!(r.validate().is_err());
}

#[test]
fn equal_stay_bounds_pass() {
    let mut r = make_valid_request();
    r.duration_from = 5;
    assert!(r.validate().is_ok());
}

#[test]
fn rejects_inverted_window() {
    let mut r = make_valid_request();
    r.travel_window.end = date("2026-05-31");
    assert!(r.validate().is_err());
}

#[test]
fn resolve_looks_up_airports_and_drops_repeats() {
    let airports = table(&["STN", "BCN", "DUB"]);
    let mut r = make_valid_request();
    r.departures = vec!["STN".into(), "DUB".into(), "STN".into()];

    let config = r.resolve(&airports).unwrap();
    let codes: Vec<&str> = config.departures.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, ["STN", "DUB"]);
    assert_eq!(config.arrivals[0].code, "BCN");
    assert_eq!(config.duration_to, 5);
}

#[test]
fn resolve_rejects_unknown_airport() {
    let airports = table(&["STN"]);
    let err = make_valid_request().resolve(&airports).unwrap_err();
    assert!(matches!(err, FareError::UnknownAirport(ref c) if c == "BCN"));
}

#[test]
fn parses_dates() {
    assert_eq!(parse_date("2024-02-29").unwrap(), date("2024-02-29"));
    assert!(parse_date("2023-02-29").is_err());
    assert!(parse_date("01-06-2024").is_err());
    assert!(parse_date("2024-6-1x").is_err());
}

#[test]
fn parses_code_lists() {
    assert_eq!(parse_codes("stn, DUB,,bcn "), ["STN", "DUB", "BCN"]);
    assert!(parse_codes(" , ").is_empty());
}

#[test]
fn shifted_window_moves_both_bounds() {
    let window = DateWindow {
        start: date("2024-12-30"),
        end: date("2024-12-31"),
    };
    let shifted = window.shifted(2);
    assert_eq!(shifted.start, date("2025-01-01"));
    assert_eq!(shifted.end, date("2025-01-02"));
}
