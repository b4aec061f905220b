//! pulsar-prior CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use pp_core::Prior;
use pp_prior::{CustomPrior, DRAWS_FROM_SUPPORT, PriorConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pulsar-prior")]
#[command(about = "Joint prior for the PSR J0740+6620 ST-U pulse-profile model")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw samples from the prior support (inverse sampling + rejection)
    Sample {
        /// Number of accepted samples
        #[arg(short, long, default_value = "100")]
        n: usize,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Prior configuration (JSON). Defaults to the full ST-U model.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Evaluate the support test and density at a point
    Evaluate {
        /// Comma-separated parameter vector
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        point: Vec<f64>,

        /// Prior configuration (JSON). Defaults to the full ST-U model.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Map a unit-hypercube point to parameter space
    InverseSample {
        /// Comma-separated hypercube coordinates in [0, 1]
        #[arg(long, value_delimiter = ',', required = true)]
        hypercube: Vec<f64>,

        /// Prior configuration (JSON). Defaults to the full ST-U model.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Append derived quantities (compactness, wrapped phase shifts) to a point
    Transform {
        /// Comma-separated parameter vector
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required = true)]
        point: Vec<f64>,

        /// Prior configuration (JSON). Defaults to the full ST-U model.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Estimate the fraction of the unit hypercube that maps into the support
    SupportFraction {
        /// Number of draws (default 10^4)
        #[arg(short, long)]
        n: Option<usize>,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Prior configuration (JSON). Defaults to the full ST-U model.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List parameters with their bounds
    Parameters {
        /// Prior configuration (JSON). Defaults to the full ST-U model.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output file for results (pretty JSON). Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Sample { n, seed, config, output } => {
            cmd_sample(n, seed, config.as_ref(), output.as_ref())
        }
        Commands::Evaluate { point, config, output } => {
            cmd_evaluate(&point, config.as_ref(), output.as_ref())
        }
        Commands::InverseSample { hypercube, config, output } => {
            cmd_inverse_sample(&hypercube, config.as_ref(), output.as_ref())
        }
        Commands::Transform { point, config, output } => {
            cmd_transform(&point, config.as_ref(), output.as_ref())
        }
        Commands::SupportFraction { n, seed, config, output } => {
            cmd_support_fraction(n, seed, config.as_ref(), output.as_ref())
        }
        Commands::Parameters { config, output } => cmd_parameters(config.as_ref(), output.as_ref()),
        Commands::Version => {
            println!("pulsar-prior {}", pp_core::VERSION);
            Ok(())
        }
    }
}

fn load_prior(config: Option<&PathBuf>) -> Result<CustomPrior> {
    let cfg = match config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading prior config");
            PriorConfig::from_json_path(path)?
        }
        None => PriorConfig::default(),
    };
    let prior = cfg.build()?;
    tracing::info!(
        parameters = prior.dim(),
        spin_frequency_hz = prior.spin_frequency(),
        "prior ready"
    );
    Ok(prior)
}

fn cmd_sample(
    n: usize,
    seed: u64,
    config: Option<&PathBuf>,
    output: Option<&PathBuf>,
) -> Result<()> {
    let prior = load_prior(config)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let res = pp_prior::draw(&prior, n, &mut rng)?;
    tracing::info!(n, attempts = res.n_attempts, acceptance = res.acceptance, "sampling complete");

    let transformed =
        res.samples.iter().map(|s| prior.transform(s)).collect::<pp_core::Result<Vec<_>>>()?;

    let output_json = serde_json::json!({
        "parameter_names": prior.parameter_names(),
        "derived_names": prior.derived_names(),
        "seed": seed,
        "samples": res.samples,
        "transformed": transformed,
        "n_attempts": res.n_attempts,
        "acceptance": res.acceptance,
    });

    write_json(output, output_json)
}

fn cmd_evaluate(point: &[f64], config: Option<&PathBuf>, output: Option<&PathBuf>) -> Result<()> {
    let prior = load_prior(config)?;
    let rejection = prior.support_check(point)?;
    let log_prior = prior.evaluate(point)?;
    let density = prior.density(point)?;
    tracing::debug!(log_prior, density, "evaluated point");

    // -inf is not representable in JSON: `log_prior` is null outside the support.
    let output_json = serde_json::json!({
        "parameter_names": prior.parameter_names(),
        "point": point,
        "admissible": log_prior.is_finite(),
        "log_prior": log_prior,
        "density": density,
        "rejection": rejection,
    });

    write_json(output, output_json)
}

fn cmd_inverse_sample(
    hypercube: &[f64],
    config: Option<&PathBuf>,
    output: Option<&PathBuf>,
) -> Result<()> {
    let prior = load_prior(config)?;
    let theta = prior.inverse_sample(hypercube)?;
    let admissible = prior.evaluate(&theta)?.is_finite();

    let output_json = serde_json::json!({
        "parameter_names": prior.parameter_names(),
        "hypercube": hypercube,
        "values": theta,
        "admissible": admissible,
    });

    write_json(output, output_json)
}

fn cmd_transform(point: &[f64], config: Option<&PathBuf>, output: Option<&PathBuf>) -> Result<()> {
    let prior = load_prior(config)?;
    let values = prior.transform(point)?;
    let mut names = prior.parameter_names();
    names.extend(prior.derived_names());

    let output_json = serde_json::json!({
        "names": names,
        "values": values,
    });

    write_json(output, output_json)
}

fn cmd_support_fraction(
    n: Option<usize>,
    seed: u64,
    config: Option<&PathBuf>,
    output: Option<&PathBuf>,
) -> Result<()> {
    let prior = load_prior(config)?;
    let n_draws = n.unwrap_or_else(|| 10usize.pow(DRAWS_FROM_SUPPORT));
    let mut rng = StdRng::seed_from_u64(seed);
    let fraction = pp_prior::estimate_hypercube_fraction(&prior, n_draws, &mut rng)?;
    tracing::info!(n_draws, fraction, "support fraction estimated");

    let output_json = serde_json::json!({
        "n_draws": n_draws,
        "seed": seed,
        "fraction": fraction,
        "log_fraction": fraction.ln(),
    });

    write_json(output, output_json)
}

fn cmd_parameters(config: Option<&PathBuf>, output: Option<&PathBuf>) -> Result<()> {
    let prior = load_prior(config)?;
    let output_json = serde_json::json!({
        "spin_frequency_hz": prior.spin_frequency(),
        "parameters": prior.space().parameters(),
        "derived_names": prior.derived_names(),
    });

    write_json(output, output_json)
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
