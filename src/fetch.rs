use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use wreq::Client;
use wreq_util::Emulation;

use crate::dispatch::{FareSource, Outcome};
use crate::error::{self, FareError};
use crate::model::{Airport, RoundTripFares};
use crate::query::{FareQuery, Market};

pub const BASE_URL: &str = "https://www.ryanair.com";

const AIRPORTS_PATH: &str = "/api/views/locate/5/airports";
const FARES_PATH: &str = "/api/farfnd/v4/roundTripFares";

const FIXED_FARE_PARAMS: &[(&str, &str)] = &[
    ("adultPaxCount", "1"),
    ("outboundDepartureTimeFrom", "00:00"),
    ("outboundDepartureTimeTo", "23:59"),
    ("inboundDepartureTimeFrom", "00:00"),
    ("inboundDepartureTimeTo", "23:59"),
];

#[derive(Clone)]
pub struct FetchOptions {
    pub base_url: String,
    pub proxy: Option<String>,
    pub timeout: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            proxy: None,
            timeout: 30,
        }
    }
}

#[derive(Clone)]
pub struct FareClient {
    http: Client,
    base_url: String,
}

impl FareClient {
    pub fn new(options: &FetchOptions) -> Result<Self, FareError> {
        let mut builder = Client::builder()
            .emulation(Emulation::Chrome137)
            .timeout(Duration::from_secs(options.timeout));

        if let Some(ref proxy) = options.proxy {
            builder = builder.proxy(wreq::Proxy::all(proxy).map_err(error::from_http_error)?);
        }

        let http = builder.build().map_err(error::from_http_error)?;

        Ok(Self {
            http,
            base_url: options.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn active_airports(&self, market: Market) -> Result<Vec<Airport>, FareError> {
        let url = format!(
            "{}{AIRPORTS_PATH}/{}/active",
            self.base_url,
            market.language()
        );
        self.get_json(&url, &[]).await
    }

    pub async fn fetch_round_trip_fares(
        &self,
        query: &FareQuery,
    ) -> Result<RoundTripFares, FareError> {
        let url = format!("{}{FARES_PATH}", self.base_url);
        let mut params: Vec<(String, String)> = FIXED_FARE_PARAMS
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        params.extend(query.to_url_params());
        self.get_json(&url, &params).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<T, FareError> {
        debug!(url, params = params.len(), "GET");

        let response = self
            .http
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(error::from_http_error)?;

        let status = response.status().as_u16();
        match status {
            200 => {}
            429 => return Err(FareError::RateLimited),
            403 | 503 => return Err(FareError::Blocked(status)),
            _ if status >= 400 => return Err(FareError::HttpStatus(status)),
            _ => {}
        }

        let body = response.text().await.map_err(error::from_http_error)?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl FareSource for FareClient {
    async fn round_trip_fares(&self, query: &FareQuery) -> Outcome {
        self.fetch_round_trip_fares(query).await
    }
}
