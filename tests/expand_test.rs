mod common;

use common::{config, date, table};
use farescan::expand::expand;
use farescan::query::{Market, Weekday, WeekdaySet};
use proptest::prelude::*;

#[test]
fn arrival_only_pairs_every_other_airport() {
    let airports = table(&["STN", "DUB", "BCN", "PMI", "BGY"]);
    let queries = expand(&config(&[], &["BCN"]), &airports, Market::English);

    assert_eq!(queries.len(), 4);
    let origins: Vec<&str> = queries.iter().map(|q| q.origin.as_str()).collect();
    assert_eq!(origins, ["STN", "DUB", "PMI", "BGY"]);
    assert!(queries.iter().all(|q| q.destination.as_deref() == Some("BCN")));
}

#[test]
fn arrival_only_iterates_arrivals_outer() {
    let airports = table(&["STN", "DUB", "BCN"]);
    let queries = expand(&config(&[], &["BCN", "DUB"]), &airports, Market::English);

    let routes: Vec<String> = queries.iter().map(|q| q.route()).collect();
    assert_eq!(routes, ["STN→BCN", "DUB→BCN", "STN→DUB", "BCN→DUB"]);
}

#[test]
fn departures_without_arrivals_leave_destination_open() {
    let airports = table(&["STN", "DUB", "BCN"]);
    let queries = expand(&config(&["STN", "DUB"], &[]), &airports, Market::English);

    assert_eq!(queries.len(), 2);
    assert!(queries.iter().all(|q| q.destination.is_none()));
    assert!(queries.iter().all(|q| q
        .to_url_params()
        .iter()
        .all(|(k, _)| k != "arrivalAirportIataCode")));
}

#[test]
fn departures_cross_arrivals_skipping_self_pairs() {
    let airports = table(&["STN", "DUB", "BCN"]);
    let queries = expand(
        &config(&["STN", "DUB"], &["DUB", "BCN"]),
        &airports,
        Market::English,
    );

    let routes: Vec<String> = queries.iter().map(|q| q.route()).collect();
    assert_eq!(routes, ["STN→DUB", "STN→BCN", "DUB→BCN"]);
}

#[test]
fn nothing_selected_and_empty_table_yields_nothing() {
    let queries = expand(&config(&[], &[]), &table(&[]), Market::English);
    assert!(queries.is_empty());
}

#[test]
fn nothing_selected_falls_back_to_every_departure() {
    let airports = table(&["STN", "DUB"]);
    let queries = expand(&config(&[], &[]), &airports, Market::English);

    let routes: Vec<String> = queries.iter().map(|q| q.route()).collect();
    assert_eq!(routes, ["STN→*", "DUB→*"]);
}

#[test]
fn inbound_window_shifts_by_minimum_stay() {
    let airports = table(&["STN", "BCN"]);
    let mut cfg = config(&["STN"], &["BCN"]);
    cfg.duration_from = 3;
    cfg.duration_to = 14;

    let queries = expand(&cfg, &airports, Market::English);
    let q = &queries[0];

    assert_eq!(q.outbound.from, date("2024-06-01"));
    assert_eq!(q.outbound.to, date("2024-06-10"));
    assert_eq!(q.inbound.from, date("2024-06-04"));
    assert_eq!(q.inbound.to, date("2024-06-13"));
}

#[test]
fn inbound_window_crosses_month_end() {
    let airports = table(&["STN", "BCN"]);
    let mut cfg = config(&["STN"], &["BCN"]);
    cfg.travel_window.start = date("2024-02-27");
    cfg.travel_window.end = date("2024-02-28");
    cfg.duration_from = 3;

    let q = &expand(&cfg, &airports, Market::English)[0];
    assert_eq!(q.inbound.from, date("2024-03-01"));
    assert_eq!(q.inbound.to, date("2024-03-02"));
}

#[test]
fn url_params_carry_dates_weekdays_and_market() {
    let airports = table(&["STN", "BCN"]);
    let mut cfg = config(&["STN"], &["BCN"]);
    cfg.departure_weekdays = [Weekday::Friday, Weekday::Saturday].into_iter().collect();

    let q = &expand(&cfg, &airports, Market::German)[0];
    let params = q.to_url_params();
    let get = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    assert_eq!(get("departureAirportIataCode"), Some("STN"));
    assert_eq!(get("arrivalAirportIataCode"), Some("BCN"));
    assert_eq!(get("durationFrom"), Some("3"));
    assert_eq!(get("durationTo"), Some("7"));
    assert_eq!(get("outboundDepartureDateFrom"), Some("2024-06-01"));
    assert_eq!(get("outboundDepartureDateTo"), Some("2024-06-10"));
    assert_eq!(get("inboundDepartureDateFrom"), Some("2024-06-04"));
    assert_eq!(get("inboundDepartureDateTo"), Some("2024-06-13"));
    assert_eq!(get("outboundDepartureDaysOfWeek"), Some("FRIDAY,SATURDAY"));
    assert_eq!(get("inboundDepartureDaysOfWeek"), Some(""));
    assert_eq!(get("market"), Some("de-DE"));
    assert_eq!(get("arrivalAirportCategoryCodes"), None);
}

#[test]
fn weekday_param_keeps_insertion_order() {
    let mut set = WeekdaySet::new();
    set.insert(Weekday::Sunday);
    set.insert(Weekday::Monday);
    assert!(!set.insert(Weekday::Sunday));
    assert_eq!(set.to_param(), "SUNDAY,MONDAY");
    assert_eq!(WeekdaySet::new().to_param(), "");
}

#[test]
fn weekday_list_parses_loosely() {
    let set = WeekdaySet::parse_list("fri, SAT,Sunday,fri").unwrap();
    assert_eq!(set.to_param(), "FRIDAY,SATURDAY,SUNDAY");
    assert!(WeekdaySet::parse_list("fri,someday").is_err());
}

#[test]
fn market_follows_locale_prefix() {
    assert_eq!(Market::from_locale("de-AT"), Market::German);
    assert_eq!(Market::from_locale("de_DE.UTF-8"), Market::German);
    assert_eq!(Market::from_locale("en-US"), Market::English);
    assert_eq!(Market::from_locale("fr-FR"), Market::English);
    assert_eq!(Market::from_locale(""), Market::English);
}

fn codes() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(
        vec!["STN", "DUB", "BCN", "PMI", "BGY", "KRK", "LIS"],
        0..=7,
    )
    .prop_map(|v| v.into_iter().map(String::from).collect())
}

proptest! {
    /// No query ever flies an airport to itself.
    #[test]
    fn never_emits_self_pairs(deps in codes(), arrs in codes()) {
        let airports = table(&["STN", "DUB", "BCN", "PMI", "BGY", "KRK", "LIS"]);
        let d: Vec<&str> = deps.iter().map(String::as_str).collect();
        let a: Vec<&str> = arrs.iter().map(String::as_str).collect();
        for q in expand(&config(&d, &a), &airports, Market::English) {
            prop_assert_ne!(Some(q.origin.as_str()), q.destination.as_deref());
        }
    }

    /// Arrival-only searches ask once per arrival per other airport.
    #[test]
    fn arrival_only_cardinality(arrs in codes().prop_filter("non-empty", |v| !v.is_empty())) {
        let airports = table(&["STN", "DUB", "BCN", "PMI", "BGY", "KRK", "LIS"]);
        let a: Vec<&str> = arrs.iter().map(String::as_str).collect();
        let queries = expand(&config(&[], &a), &airports, Market::English);
        prop_assert_eq!(queries.len(), a.len() * (airports.len() - 1));
    }

    /// Same input, same queries, same order.
    #[test]
    fn expansion_is_repeatable(deps in codes(), arrs in codes()) {
        let airports = table(&["STN", "DUB", "BCN", "PMI", "BGY", "KRK", "LIS"]);
        let d: Vec<&str> = deps.iter().map(String::as_str).collect();
        let a: Vec<&str> = arrs.iter().map(String::as_str).collect();
        let cfg = config(&d, &a);
        prop_assert_eq!(
            expand(&cfg, &airports, Market::English),
            expand(&cfg, &airports, Market::English)
        );
    }
}
