//! PRNG Validation CLI
//!
//! Reads a sequence of numbers in [0, 1], runs the mean, variance,
//! Kolmogorov-Smirnov and runs tests, and prints the report.
//!
//! Exit status: 0 when every applicable test passed, 2 when at least
//! one failed, 1 on any error.

use clap::{Parser, Subcommand};
use prng_validation::{
    config::{ConfigError, FileConfig, OutputFormat, SuppliedCriticalValues},
    metrics::{MetricsError, MetricsRegistry, MetricsSnapshot},
    parse_sequence,
    sequence::ParseError,
    CriticalValueProvider, KsMethod, SampleGenerator, TestReport, ValidationEngine,
    ValidationError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;

#[derive(Parser)]
#[command(name = "prng-validate")]
#[command(about = "Statistical acceptance tests for Uniform(0,1) pseudorandom sequences")]
#[command(version = prng_validation::VERSION)]
struct Cli {
    /// TOML configuration file. Command-line flags take precedence.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the four tests over numbers read from a file or stdin
    Check {
        /// Input file with comma/whitespace separated numbers ("-" or none reads stdin)
        input: Option<PathBuf>,

        #[command(flatten)]
        thresholds: ThresholdArgs,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Decimal places in the table output
        #[arg(long)]
        decimals: Option<usize>,

        /// Print Prometheus metrics after the report
        #[arg(long)]
        metrics: bool,
    },

    /// Print the critical values for a significance level and sample size
    Critical {
        /// Sample size
        #[arg(short, long)]
        n: usize,

        /// Significance level
        #[arg(long)]
        alpha: Option<f64>,

        /// Kolmogorov-Smirnov critical value method
        #[arg(long, value_enum)]
        ks_method: Option<KsMethod>,
    },

    /// Generate a demonstration sample from a ChaCha20 stream
    Generate {
        /// Number of values
        #[arg(long)]
        count: Option<usize>,

        /// Fixed seed (OS entropy when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Validate the generated sample instead of printing it
        #[arg(long)]
        check: bool,
    },
}

#[derive(clap::Args)]
struct ThresholdArgs {
    /// Significance level used to compute critical values
    #[arg(long)]
    alpha: Option<f64>,

    /// Kolmogorov-Smirnov critical value method
    #[arg(long, value_enum)]
    ks_method: Option<KsMethod>,

    /// Supplied Z critical value (requires --d, --chi-low, --chi-high)
    #[arg(long, requires_all = ["d", "chi_low", "chi_high"])]
    z: Option<f64>,

    /// Supplied Kolmogorov-Smirnov critical value
    #[arg(long, requires_all = ["z", "chi_low", "chi_high"])]
    d: Option<f64>,

    /// Supplied lower chi-square bound
    #[arg(long, requires_all = ["z", "d", "chi_high"])]
    chi_low: Option<f64>,

    /// Supplied upper chi-square bound
    #[arg(long, requires_all = ["z", "d", "chi_low"])]
    chi_high: Option<f64>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Metrics(#[from] MetricsError),
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Applies command-line overrides on top of the file configuration.
fn apply_threshold_args(config: &mut FileConfig, args: &ThresholdArgs) -> Result<(), CliError> {
    if let Some(alpha) = args.alpha {
        config.significance.alpha = alpha;
        // An explicit alpha means computed values.
        config.critical_values = None;
    }
    if let Some(method) = args.ks_method {
        config.significance.ks_method = method;
    }
    if let (Some(z), Some(d), Some(chi_low), Some(chi_high)) =
        (args.z, args.d, args.chi_low, args.chi_high)
    {
        config.critical_values = Some(SuppliedCriticalValues {
            z,
            d,
            chi_low,
            chi_high,
        });
    }
    config.validate()?;
    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> Result<String, CliError> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}

fn validate(config: &FileConfig, values: Vec<f64>) -> Result<TestReport, CliError> {
    let engine = ValidationEngine::new(config.engine());
    let report = engine.run(values, &config.thresholds()?)?;
    Ok(report)
}

fn emit(config: &FileConfig, report: &TestReport) -> Result<ExitCode, CliError> {
    match config.output.format {
        OutputFormat::Table => println!("{report:.prec$}", prec = config.output.decimals),
        OutputFormat::Toml => print!("{}", toml::to_string_pretty(report)?),
    }

    if config.output.metrics {
        let registry = MetricsRegistry::new()?;
        registry.update(&MetricsSnapshot::from_report(report));
        println!();
        print!("{}", registry.encode()?);
    }

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn execute(cli: Cli) -> Result<ExitCode, CliError> {
    let mut config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    match cli.command {
        Commands::Check {
            input,
            thresholds,
            format,
            decimals,
            metrics,
        } => {
            apply_threshold_args(&mut config, &thresholds)?;
            if let Some(format) = format {
                config.output.format = format;
            }
            if let Some(decimals) = decimals {
                config.output.decimals = decimals;
            }
            config.output.metrics |= metrics;

            let text = read_input(input.as_ref())?;
            let values = parse_sequence(&text)?;
            info!(n = values.len(), "Read input sequence");

            let report = validate(&config, values)?;
            emit(&config, &report)
        }

        Commands::Critical {
            n,
            alpha,
            ks_method,
        } => {
            let method = ks_method.unwrap_or(config.significance.ks_method);
            let alpha = alpha.unwrap_or(config.significance.alpha);
            let values = CriticalValueProvider::new(method).compute(alpha, n)?;

            println!("alpha    = {alpha}");
            println!("n        = {n}");
            println!("Z        = {:.4}", values.z());
            println!("D        = {:.4}", values.d());
            println!("ChiLow   = {:.4}", values.chi_low());
            println!("ChiHigh  = {:.4}", values.chi_high());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Generate { count, seed, check } => {
            let count = count.unwrap_or(config.generate.count);
            let mut generator = match seed.or(config.generate.seed) {
                Some(seed) => SampleGenerator::from_seed(seed),
                None => SampleGenerator::from_os_entropy(),
            };
            let values = generator.sample(count);

            if check {
                let report = validate(&config, values)?;
                return emit(&config, &report);
            }

            let line = values
                .iter()
                .map(|v| format!("{v:.6}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("{line}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    match execute(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
