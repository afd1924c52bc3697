#![allow(dead_code)]

use chrono::NaiveDate;
use serde_json::json;

use farescan::config::{DateWindow, SearchConfig};
use farescan::model::{Airport, AirportTable, Fare, RoundTripFares};
use farescan::query::WeekdaySet;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn airport(code: &str) -> Airport {
    Airport::new(code, format!("{code} Airport"))
}

pub fn table(codes: &[&str]) -> AirportTable {
    AirportTable::new(codes.iter().map(|c| airport(c)).collect())
}

pub fn config(departures: &[&str], arrivals: &[&str]) -> SearchConfig {
    SearchConfig {
        departures: departures.iter().map(|c| airport(c)).collect(),
        arrivals: arrivals.iter().map(|c| airport(c)).collect(),
        duration_from: 3,
        duration_to: 7,
        travel_window: DateWindow {
            start: date("2024-06-01"),
            end: date("2024-06-10"),
        },
        departure_weekdays: WeekdaySet::new(),
        return_weekdays: WeekdaySet::new(),
        categories: Vec::new(),
    }
}

// A fare as the service returns it, priced at `price` EUR.
pub fn fare(from: &str, to: &str, price: f64) -> Fare {
    serde_json::from_value(json!({
        "outbound": {
            "departureAirport": { "iataCode": from, "name": from, "countryName": "Ireland",
                                  "city": { "name": from, "code": from, "countryCode": "ie" } },
            "arrivalAirport":   { "iataCode": to, "name": to, "countryName": "Spain",
                                  "city": { "name": to, "code": to, "countryCode": "es" } },
            "departureDate": "2024-06-02T06:30:00",
            "arrivalDate": "2024-06-02T10:15:00",
            "price": { "value": price / 2.0, "currencyCode": "EUR", "currencySymbol": "€" },
            "flightKey": format!("FR~1234~ ~~{from}~06/02/2024 06:30~{to}~06/02/2024 10:15~~"),
            "flightNumber": "FR1234",
            "previousPrice": null,
            "priceUpdated": 1717000000000u64
        },
        "inbound": {
            "departureAirport": { "iataCode": to, "name": to, "countryName": "Spain" },
            "arrivalAirport":   { "iataCode": from, "name": from, "countryName": "Ireland" },
            "departureDate": "2024-06-06T11:00:00",
            "arrivalDate": "2024-06-06T12:45:00",
            "price": { "value": price / 2.0, "currencyCode": "EUR", "currencySymbol": "€" },
            "flightKey": "FR~1235",
            "flightNumber": "FR1235"
        },
        "summary": {
            "price": { "value": price, "currencyCode": "EUR", "currencySymbol": "€" },
            "previousPrice": null,
            "newRoute": false,
            "tripDurationDays": 4
        }
    }))
    .unwrap()
}

pub fn response(fares: Vec<Fare>) -> RoundTripFares {
    RoundTripFares {
        size: fares.len() as u32,
        fares,
        next_page: None,
    }
}
