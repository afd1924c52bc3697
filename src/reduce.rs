use std::collections::HashSet;

use crate::dispatch::Outcome;
use crate::model::{AggregatedResult, AirportTable};

/// Folds settled outcomes into one result.
///
/// Fares keep query order, then response order, and are not deduplicated.
/// Airports are the distinct arrival airports of those fares that the table
/// knows about, in order of first appearance. Failed outcomes are skipped.
pub fn reduce(outcomes: Vec<Outcome>, airports: &AirportTable) -> AggregatedResult {
    let mut result = AggregatedResult::default();
    let mut seen: HashSet<String> = HashSet::new();

    for response in outcomes.into_iter().flatten() {
        for fare in response.fares {
            let code = &fare.outbound.arrival_airport.iata_code;
            if let Some(airport) = airports.get(code) {
                if seen.insert(airport.code.clone()) {
                    result.airports.push(airport.clone());
                }
            }
            result.fares.push(fare);
        }
    }

    result
}
