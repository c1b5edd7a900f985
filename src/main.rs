use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use travelplanner::config::LoggingConfig;
use travelplanner::{
    Entity, Itinerary, ItineraryPlanner, Network, NetworkQuery, TravelPlannerConfig,
    TravelPlannerError,
};

const ABOUT: &str = r#"Plans day-by-day flight itineraries across a network of cities.

Every day the traveller moves on to one more city, provided the departure
airport is open (no grounding weather) and an operator flies an airplane that
can make the leg. Two itineraries are printed, "Lincoln or bust" and "The
scenic route".
"#;

#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan both itineraries starting from a city
    Plan {
        /// The start city as "Name, Region"
        #[arg(short, long)]
        from: String,
        /// Days already spent travelling
        #[arg(short, long, default_value_t = 0)]
        day: u32,
        /// The first day of the itinerary in format `yyyy-mm-dd` (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// JSON network document (default: configured path or the starter network)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Print the itineraries as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the cities of the network
    Cities {
        /// JSON network document (default: configured path or the starter network)
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Print the starter network as a JSON document
    Starter,
}

fn parse_date(arg: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(arg, "%Y-%m-%d")
}

fn init_tracing(logging: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn load_network(data: Option<PathBuf>, config: &TravelPlannerConfig) -> Result<Network> {
    let path = data.or_else(|| config.data.network_path.as_ref().map(PathBuf::from));
    match path {
        Some(path) => Network::load(&path)
            .with_context(|| format!("Failed to load network from {}", path.display())),
        None => {
            debug!("No network file configured, using the starter network");
            Network::starter().context("Failed to build the starter network")
        }
    }
}

fn print_itinerary(itinerary: &Itinerary) {
    println!("{}:", itinerary.mode);
    for stop in itinerary.stops() {
        println!("  day {:>2}  {}  {}", stop.day_index, stop.date, stop.label);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            if let Some(cause) = error
                .chain()
                .find_map(|cause| cause.downcast_ref::<TravelPlannerError>())
            {
                eprintln!("{}", cause.user_message());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {

    let config = TravelPlannerConfig::load_from_path(cli.config.clone())?;
    init_tracing(&config.logging, cli.verbose);
    debug!("Configuration loaded: {:?}", config);

    match cli.command {
        Command::Plan {
            from,
            day,
            date,
            data,
            json,
        } => {
            let network = load_network(data, &config)?;
            let mut planner = ItineraryPlanner::new(&network, &config.planner);
            if let Some(date) = date {
                planner = planner.starting_on(date);
            }
            info!("Planning from {} on {}", from, planner.start_date());

            let itineraries = planner
                .request(&from, day)
                .with_context(|| format!("Could not plan an itinerary from '{from}'"))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&itineraries)?);
            } else {
                print_itinerary(&itineraries.lincoln_or_bust);
                println!();
                print_itinerary(&itineraries.scenic_route);
            }
        }
        Command::Cities { data } => {
            let network = load_network(data, &config)?;
            for city in network.cities() {
                println!(
                    "{} ({}) - {} airport(s)",
                    city.label(),
                    city.location.format_coordinates(),
                    network.airports_of_city(city.id()).len()
                );
            }
        }
        Command::Starter => {
            let document = Network::starter()?.to_document();
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }

    Ok(())
}
