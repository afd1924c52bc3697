use thiserror::Error;

#[derive(Debug, Error)]
pub enum FareError {
    #[error("request timed out — the fare service may be slow or unreachable. Try increasing --timeout")]
    Timeout,

    #[error("connection failed — check your internet connection ({0})")]
    ConnectionFailed(String),

    #[error("DNS resolution failed ({0}) — check your internet connection")]
    DnsResolution(String),

    #[error("proxy error — check your --proxy URL is correct ({0})")]
    ProxyError(String),

    #[error("TLS/SSL error — connection to the fare service failed ({0})")]
    TlsError(String),

    #[error("rate limited by the fare service (HTTP 429) — wait a few minutes before retrying")]
    RateLimited,

    #[error("request blocked by the fare service (HTTP {0}) — try again later or use --proxy")]
    Blocked(u16),

    #[error("unexpected HTTP status {0} from the fare service")]
    HttpStatus(u16),

    #[error("failed to decode fare service response — {0}")]
    Decode(String),

    #[error("invalid airport code \"{0}\" — must be exactly 3 letters (e.g. STN, DUB, BCN)")]
    InvalidAirport(String),

    #[error("unknown airport \"{0}\" — not served by the airline (see `farescan airports`)")]
    UnknownAirport(String),

    #[error("invalid date \"{0}\" — must be YYYY-MM-DD format (e.g. 2026-06-01)")]
    InvalidDate(String),

    #[error("invalid weekday \"{0}\" — use names like mon, friday, SAT")]
    InvalidWeekday(String),

    #[error("{0}")]
    Validation(String),

    #[error("fare query task failed — {0}")]
    TaskFailed(String),
}

pub fn from_http_error(err: wreq::Error) -> FareError {
    let msg = err.to_string();
    let lower = msg.to_lowercase();

    if err.is_timeout() {
        return FareError::Timeout;
    }

    if err.is_connect() {
        if lower.contains("dns") || lower.contains("resolve") || lower.contains("getaddrinfo") {
            return FareError::DnsResolution(msg);
        }
        return FareError::ConnectionFailed(msg);
    }

    if lower.contains("proxy") || lower.contains("socks") {
        return FareError::ProxyError(msg);
    }

    if lower.contains("tls") || lower.contains("ssl") || lower.contains("certificate") {
        return FareError::TlsError(msg);
    }

    FareError::ConnectionFailed(msg)
}

impl From<serde_json::Error> for FareError {
    fn from(err: serde_json::Error) -> Self {
        FareError::Decode(err.to_string())
    }
}
