use std::future::Future;
use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::error::FareError;
use crate::model::RoundTripFares;
use crate::query::FareQuery;

pub type Outcome = Result<RoundTripFares, FareError>;

pub trait FareSource: Send + Sync + 'static {
    fn round_trip_fares(&self, query: &FareQuery) -> impl Future<Output = Outcome> + Send;
}

/// Runs every query at once and waits for all of them to settle.
///
/// The returned outcomes line up with `queries`: outcome `i` belongs to query
/// `i` whatever order the requests finished in. A failed or panicked query
/// yields an `Err` in its slot and never stops the others.
pub async fn dispatch<S: FareSource>(source: Arc<S>, queries: Vec<FareQuery>) -> Vec<Outcome> {
    let total = queries.len();
    let mut join_set = JoinSet::new();

    for (index, query) in queries.into_iter().enumerate() {
        let source = Arc::clone(&source);
        debug!(index, route = %query.route(), "dispatching fare query");
        join_set.spawn(async move {
            let outcome = source.round_trip_fares(&query).await;
            (index, query, outcome)
        });
    }

    let mut slots: Vec<Option<Outcome>> = (0..total).map(|_| None).collect();

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((index, query, outcome)) => {
                let route = query.route();
                match &outcome {
                    Ok(response) => {
                        debug!(index, %route, fares = response.fares.len(), "fare query settled");
                    }
                    Err(e) => warn!(index, %route, error = %e, "fare query failed"),
                }
                slots[index] = Some(outcome);
            }
            Err(e) => warn!(error = %e, "fare query task did not complete"),
        }
    }

    let outcomes: Vec<Outcome> = slots
        .into_iter()
        .map(|slot| {
            slot.unwrap_or_else(|| {
                Err(FareError::TaskFailed("task panicked or was aborted".into()))
            })
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.is_err()).count();
    info!(total, failed, "fare queries settled");

    outcomes
}
