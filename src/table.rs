use std::cmp::Ordering;

use comfy_table::{CellAlignment, Column, ContentArrangement, Table, presets::UTF8_FULL};

use crate::error::FareError;
use crate::model::{Airport, Fare, FareAirport};

const TIMESTAMP_FORMAT: &str = "%a %d %b %Y %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Price,
    Duration,
    Departure,
    Return,
    Origin,
    Destination,
}

impl SortKey {
    pub fn from_str_loose(s: &str) -> Result<Self, FareError> {
        match s.trim().to_lowercase().as_str() {
            "price" => Ok(Self::Price),
            "duration" | "days" => Ok(Self::Duration),
            "departure" | "out" => Ok(Self::Departure),
            "return" | "back" => Ok(Self::Return),
            "origin" | "from" => Ok(Self::Origin),
            "destination" | "to" => Ok(Self::Destination),
            _ => Err(FareError::Validation(format!("invalid sort key: {s}"))),
        }
    }
}

fn place_key(airport: &FareAirport) -> (&str, &str, &str) {
    (
        airport.country_name.as_str(),
        airport.city.name.as_str(),
        airport.iata_code.as_str(),
    )
}

fn compare(a: &Fare, b: &Fare, key: SortKey) -> Ordering {
    match key {
        SortKey::Price => a.summary.price.value.total_cmp(&b.summary.price.value),
        SortKey::Duration => a.summary.trip_duration_days.cmp(&b.summary.trip_duration_days),
        SortKey::Departure => a.outbound.departure_date.cmp(&b.outbound.departure_date),
        SortKey::Return => a.inbound.arrival_date.cmp(&b.inbound.arrival_date),
        SortKey::Origin => {
            place_key(&a.outbound.departure_airport).cmp(&place_key(&b.outbound.departure_airport))
        }
        SortKey::Destination => {
            place_key(&a.outbound.arrival_airport).cmp(&place_key(&b.outbound.arrival_airport))
        }
    }
}

pub fn sort_fares(fares: &mut [Fare], key: SortKey, descending: bool) {
    fares.sort_by(|a, b| {
        let ord = compare(a, b, key);
        if descending { ord.reverse() } else { ord }
    });
}

pub fn format_price(value: f64, currency: &str) -> String {
    match currency {
        "EUR" => format!("€{value:.2}"),
        "GBP" => format!("£{value:.2}"),
        "USD" => format!("${value:.2}"),
        "PLN" => format!("{value:.2} zł"),
        "CHF" => format!("CHF {value:.2}"),
        "SEK" | "NOK" | "DKK" => format!("{value:.2} kr"),
        "CZK" => format!("{value:.2} Kč"),
        "HUF" => format!("{value:.2} Ft"),
        _ => format!("{value:.2} {currency}"),
    }
}

fn place(airport: &FareAirport) -> String {
    if airport.city.name.is_empty() {
        return format!("{} ({})", airport.name, airport.iata_code);
    }
    format!(
        "{}, {} ({})",
        airport.country_name, airport.city.name, airport.iata_code
    )
}

pub fn render_fares(fares: &[Fare]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["From", "To", "Out", "Back", "Days", "Price"]);

    for fare in fares {
        let price = format_price(fare.summary.price.value, &fare.summary.price.currency_code);
        table.add_row(vec![
            place(&fare.outbound.departure_airport),
            place(&fare.outbound.arrival_airport),
            fare.outbound.departure_date.format(TIMESTAMP_FORMAT).to_string(),
            fare.inbound.arrival_date.format(TIMESTAMP_FORMAT).to_string(),
            fare.summary.trip_duration_days.to_string(),
            price,
        ]);
    }

    if let Some(column) = table.column_mut(5) {
        align_right(column);
    }

    table.to_string()
}

pub fn render_airports(airports: &[Airport]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Code", "Airport", "City", "Country", "Lat", "Lon"]);

    for airport in airports {
        table.add_row(vec![
            airport.code.clone(),
            airport.name.clone(),
            airport.city.name.clone(),
            airport.country.name.clone(),
            format!("{:.4}", airport.coordinates.latitude),
            format!("{:.4}", airport.coordinates.longitude),
        ]);
    }

    for index in [4, 5] {
        if let Some(column) = table.column_mut(index) {
            align_right(column);
        }
    }

    table.to_string()
}

fn align_right(column: &mut Column) {
    column.set_cell_alignment(CellAlignment::Right);
}
