pub mod booking;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod expand;
pub mod fetch;
pub mod model;
pub mod query;
pub mod reduce;
pub mod table;

use std::sync::Arc;

use config::SearchConfig;
use dispatch::FareSource;
use model::{AggregatedResult, AirportTable};
use query::Market;

pub async fn search<S: FareSource>(
    source: Arc<S>,
    config: &SearchConfig,
    airports: &AirportTable,
    market: Market,
) -> AggregatedResult {
    let queries = expand::expand(config, airports, market);
    tracing::info!(queries = queries.len(), market = market.code(), "expanded search");
    let outcomes = dispatch::dispatch(source, queries).await;
    reduce::reduce(outcomes, airports)
}
