use clap::{Parser, ValueEnum};
use forecast_math::{MapeAggregation, Series, ZeroActualPolicy};
use forecast_report::{run, DataLoader, ForecastConfig, ReportError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fore")]
#[command(version, about = "Trailing moving-average forecast with MAPE evaluation")]
struct Cli {
    /// Number of trailing observations averaged per forecast
    #[arg(short = 'p', long)]
    window: Option<usize>,

    /// Comma-separated series values
    #[arg(long, conflicts_with = "csv", allow_hyphen_values = true)]
    values: Option<String>,

    /// CSV file whose first column holds the series
    #[arg(long)]
    csv: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Handling of zero actual values
    #[arg(long, value_enum)]
    zero_actual: Option<ZeroActualArg>,

    /// MAPE denominator
    #[arg(long, value_enum)]
    aggregation: Option<AggregationArg>,

    /// Decimal places in the table
    #[arg(long)]
    precision: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ZeroActualArg {
    Reject,
    Undefined,
}

impl From<ZeroActualArg> for ZeroActualPolicy {
    fn from(arg: ZeroActualArg) -> Self {
        match arg {
            ZeroActualArg::Reject => ZeroActualPolicy::Reject,
            ZeroActualArg::Undefined => ZeroActualPolicy::Undefined,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AggregationArg {
    EvaluatedPeriods,
    ReferenceSlots,
}

impl From<AggregationArg> for MapeAggregation {
    fn from(arg: AggregationArg) -> Self {
        match arg {
            AggregationArg::EvaluatedPeriods => MapeAggregation::EvaluatedPeriods,
            AggregationArg::ReferenceSlots => MapeAggregation::ReferenceSlots,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<ForecastConfig, ReportError> {
    let mut config = match &cli.config {
        Some(path) => ForecastConfig::from_file(path)?,
        None => ForecastConfig::default(),
    };

    // Command line flags win over the file
    if let Some(window) = cli.window {
        config.window = window;
    }
    if let Some(zero_actual) = cli.zero_actual {
        config.zero_actual = zero_actual.into();
    }
    if let Some(aggregation) = cli.aggregation {
        config.aggregation = aggregation.into();
    }
    if cli.precision.is_some() {
        config.precision = cli.precision;
    }

    config.validate()?;
    Ok(config)
}

fn load_series(cli: &Cli) -> Result<Series, ReportError> {
    match (&cli.values, &cli.csv) {
        (Some(values), _) => DataLoader::from_list(values),
        (None, Some(path)) => DataLoader::from_csv(path),
        (None, None) => DataLoader::demo(),
    }
}

fn execute(cli: &Cli) -> Result<(), ReportError> {
    let config = load_config(cli)?;
    tracing::debug!(?config, "effective configuration");

    if cli.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let series = load_series(cli)?;
    let report = run(&series, &config)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "forecast run failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
