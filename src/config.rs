use chrono::{Days, NaiveDate};

use crate::error::FareError;
use crate::model::{Airport, AirportTable};
use crate::query::{ArrivalCategory, DATE_FORMAT, WeekdaySet};

pub const MIN_TRIP_DAYS: u32 = 1;
pub const MAX_TRIP_DAYS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn shifted(&self, days: u32) -> Self {
        let shift = |d: NaiveDate| {
            d.checked_add_days(Days::new(u64::from(days)))
                .unwrap_or(NaiveDate::MAX)
        };
        Self {
            start: shift(self.start),
            end: shift(self.end),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub departures: Vec<Airport>,
    pub arrivals: Vec<Airport>,
    pub duration_from: u32,
    pub duration_to: u32,
    pub travel_window: DateWindow,
    pub departure_weekdays: WeekdaySet,
    pub return_weekdays: WeekdaySet,
    pub categories: Vec<ArrivalCategory>,
}

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub departures: Vec<String>,
    pub arrivals: Vec<String>,
    pub duration_from: u32,
    pub duration_to: u32,
    pub travel_window: DateWindow,
    pub departure_weekdays: WeekdaySet,
    pub return_weekdays: WeekdaySet,
    pub categories: Vec<ArrivalCategory>,
}

pub fn validate_airport(code: &str) -> Result<(), FareError> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(FareError::InvalidAirport(code.to_string()));
    }
    Ok(())
}

pub fn parse_date(date: &str) -> Result<NaiveDate, FareError> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| FareError::InvalidDate(date.to_string()))
}

pub fn parse_codes(s: &str) -> Vec<String> {
    s.split(',')
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
        .collect()
}

fn resolve_side(codes: &[String], airports: &AirportTable) -> Result<Vec<Airport>, FareError> {
    let mut resolved: Vec<Airport> = Vec::with_capacity(codes.len());
    for code in codes {
        let airport = airports
            .get(code)
            .ok_or_else(|| FareError::UnknownAirport(code.clone()))?;
        if !resolved.contains(airport) {
            resolved.push(airport.clone());
        }
    }
    Ok(resolved)
}

impl SearchRequest {
    pub fn validate(&self) -> Result<(), FareError> {
        if self.departures.is_empty() && self.arrivals.is_empty() {
            return Err(FareError::Validation(
                "at least one departure (--from) or arrival (--to) airport required".into(),
            ));
        }

        for code in self.departures.iter().chain(&self.arrivals) {
            validate_airport(code)?;
        }

        if self.duration_from > self.duration_to {
            return Err(FareError::Validation(format!(
                "minimum trip length ({}) exceeds maximum ({})",
                self.duration_from, self.duration_to
            )));
        }

        if self.travel_window.start > self.travel_window.end {
            return Err(FareError::Validation(format!(
                "travel window starts ({}) after it ends ({})",
                self.travel_window.start, self.travel_window.end
            )));
        }

        Ok(())
    }

    pub fn resolve(&self, airports: &AirportTable) -> Result<SearchConfig, FareError> {
        Ok(SearchConfig {
            departures: resolve_side(&self.departures, airports)?,
            arrivals: resolve_side(&self.arrivals, airports)?,
            duration_from: self.duration_from,
            duration_to: self.duration_to,
            travel_window: self.travel_window,
            departure_weekdays: self.departure_weekdays.clone(),
            return_weekdays: self.return_weekdays.clone(),
            categories: self.categories.clone(),
        })
    }
}
