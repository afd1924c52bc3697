use std::process;
use std::sync::Arc;

use chrono::{Days, Local};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use farescan::booking::booking_url;
use farescan::config::{
    DateWindow, MAX_TRIP_DAYS, MIN_TRIP_DAYS, SearchRequest, parse_codes, parse_date,
};
use farescan::error::FareError;
use farescan::fetch::{self, FareClient, FetchOptions};
use farescan::model::{AggregatedResult, Airport, AirportTable};
use farescan::query::{ArrivalCategory, DATE_FORMAT, Market, WeekdaySet};
use farescan::table::{self, SortKey};

const DEFAULT_WINDOW_DAYS: u64 = 30;

#[derive(Parser)]
#[command(
    name = "farescan",
    about = "Scan low-cost round-trip fares across many routes at once",
    version,
    after_help = "\
Examples:
  farescan search -f STN -t BCN --start 2026-06-01 --end 2026-06-10
  farescan search -f STN,LTN --min-days 3 --max-days 5 --depart-days fri --return-days sun
  farescan search -t PMI --start 2026-07-01 --end 2026-07-07 --top 10
  farescan airports --country ireland"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    #[command(
        about = "Search round-trip fares",
        long_about = "Search round-trip fares for every route between the chosen airports.\n\
            Give departures (-f), arrivals (-t), or both. With departures only, every\n\
            destination served from them is searched; with arrivals only, every airport\n\
            flying there is searched.",
        after_help = "\
Examples:
  Route:         farescan search -f STN -t BCN --start 2026-06-01 --end 2026-06-10
  Anywhere:      farescan search -f DUB --min-days 2 --max-days 4
  Weekends:      farescan search -f STN --depart-days fri,sat --return-days sun,mon
  Inbound only:  farescan search -t PMI --top 10 --sort price
  Beaches:       farescan search -f BER --category beach --destinations
  JSON output:   farescan search -f STN -t BCN --json --pretty"
    )]
    Search(SearchArgs),
    #[command(about = "List every airport the airline serves")]
    Airports(AirportsArgs),
}

#[derive(clap::Args)]
struct NetArgs {
    #[arg(long, value_name = "LOCALE", help = "Locale for market selection (default: $LC_ALL / $LANG)")]
    locale: Option<String>,

    #[arg(long, value_name = "URL", help = "HTTP or SOCKS5 proxy")]
    proxy: Option<String>,

    #[arg(long, default_value = "30", value_name = "SECS", help = "Request timeout")]
    timeout: u64,

    #[arg(
        long,
        env = "FARESCAN_BASE_URL",
        default_value = fetch::BASE_URL,
        value_name = "URL",
        hide = true
    )]
    base_url: String,
}

#[derive(clap::Args)]
struct SearchArgs {
    #[arg(
        short, long,
        value_name = "IATA,...",
        help = "Departure airport codes (comma-separated)"
    )]
    from: Option<String>,

    #[arg(
        short, long,
        value_name = "IATA,...",
        help = "Arrival airport codes (comma-separated)"
    )]
    to: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Earliest outbound date [default: today]")]
    start: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Latest outbound date [default: start + 30 days]")]
    end: Option<String>,

    #[arg(long, default_value_t = MIN_TRIP_DAYS, value_name = "N", help = "Shortest stay in days")]
    min_days: u32,

    #[arg(long, default_value_t = MAX_TRIP_DAYS, value_name = "N", help = "Longest stay in days")]
    max_days: u32,

    #[arg(long, value_name = "DAYS", help = "Allowed outbound weekdays (e.g. fri,sat)")]
    depart_days: Option<String>,

    #[arg(long, value_name = "DAYS", help = "Allowed return weekdays (e.g. sun,mon)")]
    return_days: Option<String>,

    #[arg(
        long,
        value_name = "KIND,...",
        help = "Destination themes [city, beach, nightlife, family, outdoor, golf]"
    )]
    category: Option<String>,

    #[arg(
        long,
        default_value = "price",
        value_name = "KEY",
        help = "Sort by [price, duration, departure, return, origin, destination]"
    )]
    sort: String,

    #[arg(long, help = "Sort descending")]
    desc: bool,

    #[arg(long, value_name = "N", help = "Show only the first N fares after sorting")]
    top: Option<usize>,

    #[arg(long, help = "List the airports the fares fly to")]
    destinations: bool,

    #[arg(long, help = "One-line-per-fare output with booking links")]
    compact: bool,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Output as pretty-printed JSON")]
    pretty: bool,

    #[command(flatten)]
    net: NetArgs,
}

#[derive(clap::Args)]
struct AirportsArgs {
    #[arg(long, value_name = "NAME", help = "Only airports in this country (name or code)")]
    country: Option<String>,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Output as pretty-printed JSON")]
    pretty: bool,

    #[command(flatten)]
    net: NetArgs,
}

fn error_code(err: &FareError) -> i32 {
    match err {
        FareError::InvalidAirport(_)
        | FareError::UnknownAirport(_)
        | FareError::InvalidDate(_)
        | FareError::InvalidWeekday(_)
        | FareError::Validation(_) => 2,
        FareError::Timeout
        | FareError::ConnectionFailed(_)
        | FareError::DnsResolution(_)
        | FareError::TlsError(_)
        | FareError::ProxyError(_) => 3,
        FareError::RateLimited | FareError::Blocked(_) => 4,
        FareError::HttpStatus(_) => 5,
        FareError::Decode(_) => 6,
        FareError::TaskFailed(_) => 1,
    }
}

fn error_kind(err: &FareError) -> &'static str {
    match err {
        FareError::InvalidAirport(_) => "invalid_airport",
        FareError::UnknownAirport(_) => "unknown_airport",
        FareError::InvalidDate(_) => "invalid_date",
        FareError::InvalidWeekday(_) => "invalid_weekday",
        FareError::Validation(_) => "validation_error",
        FareError::Timeout => "timeout",
        FareError::ConnectionFailed(_) => "connection_failed",
        FareError::DnsResolution(_) => "dns_error",
        FareError::TlsError(_) => "tls_error",
        FareError::ProxyError(_) => "proxy_error",
        FareError::RateLimited => "rate_limited",
        FareError::Blocked(_) => "blocked",
        FareError::HttpStatus(_) => "http_error",
        FareError::Decode(_) => "decode_error",
        FareError::TaskFailed(_) => "task_failed",
    }
}

fn die(err: &FareError, json_mode: bool) -> ! {
    if json_mode {
        let json = serde_json::json!({
            "error": {
                "kind": error_kind(err),
                "message": err.to_string(),
            }
        });
        println!("{json}");
    } else {
        eprintln!("error: {err}");
    }
    process::exit(error_code(err));
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn env_locale() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|v| !v.is_empty() && v != "C" && v != "POSIX")
        .unwrap_or_else(|| "en-GB".to_string())
}

fn locale(net: &NetArgs) -> String {
    net.locale.clone().unwrap_or_else(env_locale)
}

fn fetch_options(net: &NetArgs) -> FetchOptions {
    FetchOptions {
        base_url: net.base_url.clone(),
        proxy: net.proxy.clone(),
        timeout: net.timeout,
    }
}

fn build_request(args: &SearchArgs) -> Result<SearchRequest, FareError> {
    let start = match args.start {
        Some(ref s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };
    let end = match args.end {
        Some(ref s) => parse_date(s)?,
        None => start
            .checked_add_days(Days::new(DEFAULT_WINDOW_DAYS))
            .ok_or_else(|| FareError::InvalidDate(start.format(DATE_FORMAT).to_string()))?,
    };

    let categories = args
        .category
        .as_deref()
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(ArrivalCategory::from_str_loose)
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?
        .unwrap_or_default();

    let request = SearchRequest {
        departures: args.from.as_deref().map(parse_codes).unwrap_or_default(),
        arrivals: args.to.as_deref().map(parse_codes).unwrap_or_default(),
        duration_from: args.min_days,
        duration_to: args.max_days,
        travel_window: DateWindow { start, end },
        departure_weekdays: args
            .depart_days
            .as_deref()
            .map(WeekdaySet::parse_list)
            .transpose()?
            .unwrap_or_default(),
        return_weekdays: args
            .return_days
            .as_deref()
            .map(WeekdaySet::parse_list)
            .transpose()?
            .unwrap_or_default(),
        categories,
    };
    request.validate()?;
    Ok(request)
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match output {
        Ok(s) => println!("{s}"),
        Err(e) => die(&FareError::from(e), true),
    }
}

fn print_compact(result: &AggregatedResult, locale: &str) {
    for fare in &result.fares {
        println!(
            "{} | {}>{} | {}>{} | {}d | {}",
            table::format_price(fare.summary.price.value, &fare.summary.price.currency_code),
            fare.outbound.departure_airport.iata_code,
            fare.outbound.arrival_airport.iata_code,
            fare.outbound.departure_date.format("%Y-%m-%d %H:%M"),
            fare.inbound.departure_date.format("%Y-%m-%d %H:%M"),
            fare.summary.trip_duration_days,
            booking_url(fare, locale),
        );
    }
}

fn print_result(result: &AggregatedResult, args: &SearchArgs, locale: &str) {
    if args.json || args.pretty {
        print_json(result, args.pretty);
        return;
    }

    if result.fares.is_empty() {
        println!("No flights found.");
        return;
    }

    if args.compact {
        print_compact(result, locale);
    } else {
        println!("{}", table::render_fares(&result.fares));
    }

    if args.destinations && !result.airports.is_empty() {
        println!();
        println!("Reachable airports ({}):", result.airports.len());
        println!("{}", table::render_airports(&result.airports));
    }
}

async fn load_airports(client: &FareClient, market: Market) -> Result<AirportTable, FareError> {
    let airports = client.active_airports(market).await?;
    tracing::info!(count = airports.len(), "loaded active airports");
    Ok(AirportTable::new(airports))
}

async fn run_search(args: SearchArgs) -> Result<(), FareError> {
    let request = build_request(&args)?;
    let sort = SortKey::from_str_loose(&args.sort)?;
    let locale = locale(&args.net);
    let market = Market::from_locale(&locale);

    let client = FareClient::new(&fetch_options(&args.net))?;
    let airports = load_airports(&client, market).await?;
    let search_config = request.resolve(&airports)?;

    let mut result = farescan::search(Arc::new(client), &search_config, &airports, market).await;

    table::sort_fares(&mut result.fares, sort, args.desc);
    if let Some(n) = args.top {
        result.fares.truncate(n);
    }

    print_result(&result, &args, &locale);
    Ok(())
}

fn matches_country(airport: &Airport, filter: &str) -> bool {
    let filter = filter.trim().to_lowercase();
    airport.country.code.to_lowercase() == filter
        || airport.country.iso3code.to_lowercase() == filter
        || airport.country.name.to_lowercase() == filter
}

async fn run_airports(args: AirportsArgs) -> Result<(), FareError> {
    let market = Market::from_locale(&locale(&args.net));
    let client = FareClient::new(&fetch_options(&args.net))?;
    let mut airports = client.active_airports(market).await?;

    if let Some(ref country) = args.country {
        airports.retain(|a| matches_country(a, country));
    }
    airports.sort_by(|a, b| a.code.cmp(&b.code));

    if args.json || args.pretty {
        print_json(&airports, args.pretty);
    } else if airports.is_empty() {
        println!("No airports found.");
    } else {
        println!("{}", table::render_airports(&airports));
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => {
            let json_mode = args.json || args.pretty;
            if let Err(e) = run_search(args).await {
                die(&e, json_mode);
            }
        }
        Commands::Airports(args) => {
            let json_mode = args.json || args.pretty;
            if let Err(e) = run_airports(args).await {
                die(&e, json_mode);
            }
        }
    }
}
