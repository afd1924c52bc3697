use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub iso3code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub default_airport_code: String,
    #[serde(default)]
    pub schengen: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub seo_name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub base: bool,
    #[serde(default)]
    pub city: City,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub country: Country,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub time_zone: String,
}

impl Airport {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            seo_name: String::new(),
            aliases: Vec::new(),
            base: false,
            city: City::default(),
            region: Region::default(),
            country: Country::default(),
            coordinates: Coordinates::default(),
            time_zone: String::new(),
        }
    }
}

// Identity is the code alone.
impl PartialEq for Airport {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Airport {}

#[derive(Debug, Clone, Default)]
pub struct AirportTable {
    airports: Vec<Airport>,
    by_code: HashMap<String, usize>,
}

impl AirportTable {
    pub fn new(airports: Vec<Airport>) -> Self {
        let mut table = Self::default();
        for airport in airports {
            if table.by_code.contains_key(&airport.code) {
                continue;
            }
            table
                .by_code
                .insert(airport.code.clone(), table.airports.len());
            table.airports.push(airport);
        }
        table
    }

    pub fn get(&self, code: &str) -> Option<&Airport> {
        self.by_code.get(code).map(|&i| &self.airports[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Airport> {
        self.airports.iter()
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

impl<'a> IntoIterator for &'a AirportTable {
    type Item = &'a Airport;
    type IntoIter = std::slice::Iter<'a, Airport>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareCity {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareAirport {
    pub iata_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub seo_name: String,
    #[serde(default)]
    pub city: FareCity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub value: f64,
    pub currency_code: String,
    #[serde(default)]
    pub currency_symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bound {
    pub departure_airport: FareAirport,
    pub arrival_airport: FareAirport,
    pub departure_date: NaiveDateTime,
    pub arrival_date: NaiveDateTime,
    pub price: Price,
    #[serde(default)]
    pub flight_key: String,
    #[serde(default)]
    pub flight_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub price: Price,
    pub trip_duration_days: u32,
    #[serde(default)]
    pub new_route: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fare {
    pub outbound: Bound,
    pub inbound: Bound,
    pub summary: Summary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundTripFares {
    #[serde(default)]
    pub fares: Vec<Fare>,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub size: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregatedResult {
    pub fares: Vec<Fare>,
    pub airports: Vec<Airport>,
}
