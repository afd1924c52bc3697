use crate::config::SearchConfig;
use crate::model::{Airport, AirportTable};
use crate::query::{DateRange, Destination, FareQuery, Market};

pub fn expand(config: &SearchConfig, airports: &AirportTable, market: Market) -> Vec<FareQuery> {
    let mut queries = Vec::new();

    // Arrivals only: every other known airport is a candidate origin.
    if config.departures.is_empty() && !config.arrivals.is_empty() {
        for arrival in &config.arrivals {
            for departure in airports {
                if departure.code == arrival.code {
                    continue;
                }
                queries.push(build_query(
                    config,
                    departure,
                    &Destination::Specific(arrival.clone()),
                    market,
                ));
            }
        }
        return queries;
    }

    let departures: Vec<&Airport> = if config.departures.is_empty() {
        airports.iter().collect()
    } else {
        config.departures.iter().collect()
    };
    let destinations: Vec<Destination> = if config.arrivals.is_empty() {
        vec![Destination::Unconstrained]
    } else {
        config
            .arrivals
            .iter()
            .cloned()
            .map(Destination::Specific)
            .collect()
    };

    for departure in departures {
        for destination in &destinations {
            if destination.code() == Some(departure.code.as_str()) {
                continue;
            }
            queries.push(build_query(config, departure, destination, market));
        }
    }

    queries
}

fn build_query(
    config: &SearchConfig,
    departure: &Airport,
    destination: &Destination,
    market: Market,
) -> FareQuery {
    let outbound = config.travel_window;
    // The return window keeps the outbound width; only the minimum stay shifts it.
    let inbound = outbound.shifted(config.duration_from);

    FareQuery {
        origin: departure.code.clone(),
        destination: destination.code().map(str::to_string),
        duration_from: config.duration_from,
        duration_to: config.duration_to,
        outbound: DateRange {
            from: outbound.start,
            to: outbound.end,
        },
        inbound: DateRange {
            from: inbound.start,
            to: inbound.end,
        },
        outbound_weekdays: config.departure_weekdays.to_param(),
        inbound_weekdays: config.return_weekdays.to_param(),
        market,
        categories: config.categories.clone(),
    }
}
