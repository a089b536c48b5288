use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use trip_budget::budget::{
    Amount, BudgetAmount, BudgetBreakdown, BudgetChoice, BudgetEngine, BudgetEstimate,
    BudgetReport, Tier, TravelerDescriptor, TripDuration, TripParameters, ValidationResult,
    CUSTOM_BUDGET_MINIMUM,
};
use trip_budget::logging::init_logging;
use trip_budget::offers::{self, OfferKind, OfferSet};
use trip_budget::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "tripbudget", version, about = "Trip budget estimates, breakdowns and checks")]
struct Cli {
    /// Settings file (TOML); defaults to $TRIPBUDGET_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log level directive, overrides the settings file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct TripArgs {
    /// Destination label, e.g. "Goa, India"
    destination: String,

    /// Trip length in days
    #[arg(long, default_value = "1")]
    days: String,

    /// Traveler descriptor, e.g. "2 People", "Family"
    #[arg(long, default_value = "Solo Traveler")]
    travelers: String,
}

impl TripArgs {
    fn trip(&self) -> TripParameters {
        TripParameters::from_raw(&self.destination, &self.days, &self.travelers)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Economy, standard and premium totals for a trip
    Estimate(TripArgs),

    /// Split a total budget into spend categories
    Breakdown {
        /// Total budget
        total: String,
    },

    /// Check a budget against the destination minimum
    Validate {
        #[command(flatten)]
        trip: TripArgs,

        /// Proposed budget
        #[arg(long, allow_hyphen_values = true)]
        budget: String,
    },

    /// Full budget summary for a trip
    Report {
        #[command(flatten)]
        trip: TripArgs,

        /// Tier to report on (economy/standard/premium)
        #[arg(long, conflicts_with = "amount")]
        tier: Option<Tier>,

        /// Custom budget amount
        #[arg(long)]
        amount: Option<Amount>,
    },

    /// Read an assistant reply from stdin and extract tier figures
    ParseEstimate(TripArgs),

    /// Generate sample offers
    Offers {
        /// hotels, flights or transport
        kind: OfferKind,

        destination: String,

        #[arg(long, conflicts_with = "amount")]
        tier: Option<Tier>,

        /// Trip budget; picks the tier for this kind of offer
        #[arg(long)]
        amount: Option<Amount>,

        #[arg(long, default_value_t = offers::DEFAULT_TRIP_DAYS)]
        days: u32,

        /// Seed for reproducible offers
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the effective reference tables as TOML
    Tables,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(level) = &cli.log_level {
        settings = settings.with_log_level(level.clone());
    }
    init_logging(&settings.logging);

    let engine = BudgetEngine::new(settings.tables.clone())?;
    run(&cli, &engine)
}

fn run(cli: &Cli, engine: &BudgetEngine) -> Result<()> {
    match &cli.command {
        Command::Estimate(args) => {
            let estimate = engine.estimate(&args.destination, &args.days, &args.travelers);
            emit(cli.json, &estimate, || render_estimate(&args.trip(), &estimate))
        }
        Command::Breakdown { total } => {
            let total: f64 = total.trim().parse().unwrap_or(0.0);
            let breakdown = engine.allocate(total);
            emit(cli.json, &breakdown, || render_breakdown(&breakdown))
        }
        Command::Validate { trip, budget } => {
            let proposed = BudgetAmount::parse(budget).amount();
            let result = engine.validate(&trip.destination, &trip.days, &trip.travelers, proposed);
            emit(cli.json, &result, || render_validation(&result))
        }
        Command::Report { trip, tier, amount } => {
            let mut params = trip.trip();
            if let Some(tier) = tier {
                params = params.with_budget(BudgetChoice::Tier(*tier));
            } else if let Some(amount) = amount {
                match BudgetChoice::custom(*amount) {
                    Some(choice) => params = params.with_budget(choice),
                    None => bail!("custom budget must be at least {}", CUSTOM_BUDGET_MINIMUM),
                }
            }
            let report = engine.report(&params);
            emit(cli.json, &report, || render_report(&report))
        }
        Command::ParseEstimate(args) => {
            let mut response = String::new();
            std::io::stdin()
                .read_to_string(&mut response)
                .context("failed to read reply from stdin")?;
            let parsed = engine.parse_estimate(&response, &args.trip());
            emit(cli.json, &parsed, || {
                format!(
                    "source: {}\n{}",
                    parsed.source,
                    render_estimate(&args.trip(), &parsed.estimate)
                )
            })
        }
        Command::Offers {
            kind,
            destination,
            tier,
            amount,
            days,
            seed,
        } => {
            let tier = offers::resolve_tier(*kind, *tier, *amount, *days);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            let set = offers::generate(&mut rng, *kind, destination, tier);
            emit(cli.json, &set, || render_offers(*kind, tier, &set))
        }
        Command::Tables => {
            print!("{}", engine.tables().to_toml_string()?);
            Ok(())
        }
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

fn render_estimate(trip: &TripParameters, estimate: &BudgetEstimate) -> String {
    let mut out = format!(
        "{} for {} days, {} travelers\n",
        trip.destination,
        trip.duration.days(),
        trip.headcount()
    );
    for (tier, total) in estimate.iter() {
        let marker = if tier.is_recommended() { " (recommended)" } else { "" };
        out.push_str(&format!("  {:<14} ${}{}\n", tier.title(), total, marker));
    }
    out.trim_end().to_string()
}

fn render_breakdown(breakdown: &BudgetBreakdown) -> String {
    breakdown
        .entries()
        .iter()
        .map(|(category, amount)| format!("  {:<12} ${}", category, amount))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_validation(result: &ValidationResult) -> String {
    if result.is_valid {
        return format!(
            "Budget looks good: ${} covers the ${} minimum",
            result.current_budget, result.minimum_required
        );
    }

    let mut out = format!(
        "Budget alert: ${} is ${} short of the ${} minimum\n",
        result.current_budget, result.shortfall, result.minimum_required
    );
    for suggestion in &result.suggestions {
        out.push_str(&format!("  - {}: {}", suggestion.title, suggestion.description));
        if suggestion.estimated_savings > 0 {
            out.push_str(&format!(" (save ${})", suggestion.estimated_savings));
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

fn render_report(report: &BudgetReport) -> String {
    let trip = TripParameters::new(report.destination.clone())
        .with_duration(TripDuration::from_days(i64::from(report.days)))
        .with_travelers(TravelerDescriptor::Count(report.headcount));

    format!(
        "{}\n\nSelected ${} (${} per person per day)\n{}\n\n{}",
        render_estimate(&trip, &report.estimate),
        report.selected_amount,
        report.per_person_per_day,
        render_breakdown(&report.breakdown),
        render_validation(&report.validation)
    )
}

fn render_offers(kind: OfferKind, tier: Tier, set: &OfferSet) -> String {
    let mut out = format!("{} {} ({} tier)\n", set.len(), kind, tier);
    match set {
        OfferSet::Hotels(hotels) => {
            for hotel in hotels {
                out.push_str(&format!(
                    "  {} - ${}/night, {} stars\n",
                    hotel.name, hotel.price_per_night, hotel.rating
                ));
            }
        }
        OfferSet::Flights(flights) => {
            for flight in flights {
                out.push_str(&format!(
                    "  {} {} {}-{} ${}\n",
                    flight.airline, flight.flight_number, flight.departure, flight.arrival, flight.price
                ));
            }
        }
        OfferSet::Transport(modes) => {
            for mode in modes {
                out.push_str(&format!("  {} - ${} ({})\n", mode.mode, mode.price, mode.comfort));
            }
        }
    }
    out.trim_end().to_string()
}
