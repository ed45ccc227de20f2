use std::num::NonZeroUsize;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, ValueEnum};
use dateo_solver::seed::{goal_for_date, numbers_for_date};
use dateo_solver::solver::SearchOutcome;
use dateo_solver::solver::constants::OPERAND_COUNT;
use dateo_solver::utils::{parse_date, parse_numbers, validate_date};
use dateo_solver::{Notification, Request, Solver, SolverConfig};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Dateo - combine five numbers with + - * / to reach a goal
#[derive(Parser, Debug)]
#[command(name = "dateo")]
#[command(about = "Find every way to combine five numbers with + - * / into a goal value")]
#[command(version)]
pub struct CliArgs {
    /// Goal value (overrides the goal taken from the date)
    #[arg(short, long, allow_hyphen_values = true)]
    pub goal: Option<i64>,

    /// Five numbers separated by spaces or commas (overrides the date's numbers)
    #[arg(short, long, allow_hyphen_values = true)]
    pub nums: Option<String>,

    /// Date to take the puzzle from, as YYYY-MM-DD
    #[arg(long, conflicts_with_all = ["year", "month", "day"])]
    pub date: Option<String>,

    /// Year of the puzzle date
    #[arg(short, long, requires_all = ["month", "day"])]
    pub year: Option<u32>,

    /// Month of the puzzle date (1-12)
    #[arg(short, long, requires_all = ["year", "day"])]
    pub month: Option<u32>,

    /// Day of the puzzle date
    #[arg(short, long, requires_all = ["year", "month"])]
    pub day: Option<u32>,

    /// Only divide when the quotient is an integer
    #[arg(short, long)]
    pub integer_only: bool,

    /// Stop after this many solutions
    #[arg(long)]
    pub limit: Option<NonZeroUsize>,

    /// Print each notification as a JSON line
    #[arg(long)]
    pub json: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub request: Request,
    pub solver: SolverConfig,
    pub json: bool,
    pub log_level: LogLevel,
}

type YearMonthDay = (u32, u32, u32);

/// Where the puzzle date came from
enum PuzzleDate {
    /// Typed on the command line, month 1-based
    Given(YearMonthDay),
    /// Today, already in the form the daily web puzzle seeds with
    Today(YearMonthDay),
}

/// The daily web puzzle seeds with a zero-based month, so January is 0.
/// Only today's puzzle uses this form; typed dates are passed through as given.
fn daily_seed_date(date: NaiveDate) -> YearMonthDay {
    (date.year().unsigned_abs(), date.month0(), date.day())
}

fn resolve_date(args: &CliArgs) -> Result<PuzzleDate> {
    if let Some(date) = &args.date {
        return parse_date(date)
            .map(PuzzleDate::Given)
            .context("Invalid --date");
    }
    match (args.year, args.month, args.day) {
        (Some(year), Some(month), Some(day)) => Ok(PuzzleDate::Given((year, month, day))),
        _ => {
            let today = chrono::Local::now().date_naive();
            Ok(PuzzleDate::Today(daily_seed_date(today)))
        }
    }
}

fn seeded_request(
    goal: Option<i64>,
    numbers: Option<[i64; OPERAND_COUNT]>,
    (year, month, day): YearMonthDay,
) -> Result<Request> {
    let goal = goal.unwrap_or_else(|| goal_for_date(year, month, day));
    let numbers = match numbers {
        Some(numbers) => numbers,
        None => numbers_for_date(year, month, day).context("Could not seed numbers")?,
    };
    Ok(Request::Goal { goal, numbers })
}

/// Turn the arguments into one request. Explicit goal and numbers win; whatever
/// is missing comes from the date.
pub fn build_request(args: &CliArgs) -> Result<Request> {
    let numbers = args
        .nums
        .as_deref()
        .map(parse_numbers)
        .transpose()
        .context("Invalid --nums")?;

    if let (Some(goal), Some(numbers)) = (args.goal, numbers) {
        return Ok(Request::Goal { goal, numbers });
    }

    match resolve_date(args)? {
        PuzzleDate::Given((year, month, day)) => {
            if args.goal.is_none() && numbers.is_none() {
                return Ok(Request::Date { year, month, day });
            }
            validate_date(year, month, day).context("Invalid puzzle date")?;
            seeded_request(args.goal, numbers, (year, month, day))
        }
        PuzzleDate::Today(date) => seeded_request(args.goal, numbers, date),
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    Ok(CliConfig {
        request: build_request(&args)?,
        solver: SolverConfig {
            integer_only: args.integer_only,
            limit: args.limit,
        },
        json: args.json,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn format_notification(notification: &Notification, json: bool) -> Result<Option<String>> {
    if json {
        return Ok(Some(
            serde_json::to_string(notification).context("Could not encode notification")?,
        ));
    }
    Ok(match notification {
        Notification::Solution { text, score } => Some(format!("{} {}", score, text)),
        Notification::Done => None,
    })
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = Solver::new(config.solver);
    let handle = solver
        .spawn(config.request)
        .context("Could not start the search")?;

    let numbers = handle
        .numbers()
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    info!("Searching for {} using {}", handle.goal(), numbers);
    if !config.json {
        println!("goal: {}", handle.goal());
        println!("nums: {}", numbers);
    }

    let mut found = 0;
    for notification in handle.notifications() {
        if let Some(line) = format_notification(&notification, config.json)? {
            println!("{}", line);
        }
        if matches!(notification, Notification::Solution { .. }) {
            found += 1;
        }
    }

    let report = handle.join().context("Search worker failed")?;
    match report.outcome {
        SearchOutcome::Exhausted if found == 0 => {
            warn!("No matching expression found");
            if !config.json {
                println!("No solutions.");
            }
        }
        SearchOutcome::Cancelled => info!("Stopped after {} solutions", found),
        _ => {}
    }
    Ok(())
}
