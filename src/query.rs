use chrono::NaiveDate;

use crate::error::FareError;
use crate::model::Airport;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }

    pub fn from_str_loose(s: &str) -> Result<Self, FareError> {
        match s.trim().to_lowercase().as_str() {
            "mon" | "monday" => Ok(Self::Monday),
            "tue" | "tuesday" => Ok(Self::Tuesday),
            "wed" | "wednesday" => Ok(Self::Wednesday),
            "thu" | "thursday" => Ok(Self::Thursday),
            "fri" | "friday" => Ok(Self::Friday),
            "sat" | "saturday" => Ok(Self::Saturday),
            "sun" | "sunday" => Ok(Self::Sunday),
            _ => Err(FareError::InvalidWeekday(s.to_string())),
        }
    }
}

// Insertion-ordered, no repeats. Empty means any day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdaySet(Vec<Weekday>);

impl WeekdaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: Weekday) -> bool {
        if self.0.contains(&day) {
            return false;
        }
        self.0.push(day);
        true
    }

    pub fn parse_list(s: &str) -> Result<Self, FareError> {
        let mut set = Self::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            set.insert(Weekday::from_str_loose(part)?);
        }
        Ok(set)
    }

    pub fn to_param(&self) -> String {
        self.0
            .iter()
            .map(Weekday::as_param)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = Self::new();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Market {
    German,
    #[default]
    English,
}

// First matching prefix wins.
const MARKET_PREFIXES: &[(&str, Market)] = &[("de", Market::German), ("en", Market::English)];

impl Market {
    pub fn from_locale(locale: &str) -> Self {
        let locale = locale.trim().to_lowercase();
        MARKET_PREFIXES
            .iter()
            .find(|(prefix, _)| locale.starts_with(*prefix))
            .map(|&(_, market)| market)
            .unwrap_or(Market::English)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::German => "de-DE",
            Self::English => "en-GB",
        }
    }

    pub fn language(&self) -> &'static str {
        match self {
            Self::German => "de",
            Self::English => "en",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalCategory {
    City,
    Beach,
    Nightlife,
    Family,
    Outdoor,
    Golf,
}

impl ArrivalCategory {
    pub fn code(&self) -> &'static str {
        match self {
            Self::City => "CTY",
            Self::Beach => "SEA",
            Self::Nightlife => "NIT",
            Self::Family => "FAM",
            Self::Outdoor => "OUT",
            Self::Golf => "GOLF",
        }
    }

    pub fn from_str_loose(s: &str) -> Result<Self, FareError> {
        match s.trim().to_lowercase().as_str() {
            "city" | "cty" => Ok(Self::City),
            "beach" | "sea" => Ok(Self::Beach),
            "nightlife" | "nit" => Ok(Self::Nightlife),
            "family" | "fam" => Ok(Self::Family),
            "outdoor" | "out" => Ok(Self::Outdoor),
            "golf" => Ok(Self::Golf),
            _ => Err(FareError::Validation(format!("invalid category: {s}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    Specific(Airport),
    Unconstrained,
}

impl Destination {
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Specific(airport) => Some(airport.code.as_str()),
            Self::Unconstrained => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FareQuery {
    pub origin: String,
    pub destination: Option<String>,
    pub duration_from: u32,
    pub duration_to: u32,
    pub outbound: DateRange,
    pub inbound: DateRange,
    pub outbound_weekdays: String,
    pub inbound_weekdays: String,
    pub market: Market,
    pub categories: Vec<ArrivalCategory>,
}

impl FareQuery {
    pub fn to_url_params(&self) -> Vec<(String, String)> {
        let mut params = vec![(
            "departureAirportIataCode".to_string(),
            self.origin.clone(),
        )];

        if let Some(ref dest) = self.destination {
            params.push(("arrivalAirportIataCode".to_string(), dest.clone()));
        }

        params.extend([
            ("durationFrom".to_string(), self.duration_from.to_string()),
            ("durationTo".to_string(), self.duration_to.to_string()),
            (
                "outboundDepartureDateFrom".to_string(),
                self.outbound.from.format(DATE_FORMAT).to_string(),
            ),
            (
                "outboundDepartureDateTo".to_string(),
                self.outbound.to.format(DATE_FORMAT).to_string(),
            ),
            (
                "inboundDepartureDateFrom".to_string(),
                self.inbound.from.format(DATE_FORMAT).to_string(),
            ),
            (
                "inboundDepartureDateTo".to_string(),
                self.inbound.to.format(DATE_FORMAT).to_string(),
            ),
            (
                "outboundDepartureDaysOfWeek".to_string(),
                self.outbound_weekdays.clone(),
            ),
            (
                "inboundDepartureDaysOfWeek".to_string(),
                self.inbound_weekdays.clone(),
            ),
            ("market".to_string(), self.market.code().to_string()),
        ]);

        if !self.categories.is_empty() {
            let codes: Vec<&str> = self.categories.iter().map(ArrivalCategory::code).collect();
            params.push(("arrivalAirportCategoryCodes".to_string(), codes.join(",")));
        }

        params
    }

    pub fn route(&self) -> String {
        format!(
            "{}→{}",
            self.origin,
            self.destination.as_deref().unwrap_or("*")
        )
    }
}
