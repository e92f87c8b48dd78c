use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "inspiral - A command-line interface for simulating the inspiral, merger, and ringdown of binary black holes with post-Newtonian dynamics.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a full inspiral-merger-ringdown simulation and export the results.
    Run(RunArgs),
    /// Print analytic estimates for a binary without running the integrator.
    Estimate(EstimateArgs),
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    // --- Core Arguments ---
    /// Path to the simulation configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path for the output JSON results file.
    #[arg(short, long, value_name = "PATH", default_value = "merger.json")]
    pub output: PathBuf,

    /// Also write the waveform as a CSV table to this path.
    #[arg(long, value_name = "PATH")]
    pub strain_csv: Option<PathBuf>,

    // --- Binary Overrides ---
    /// Override the mass of the first black hole from the config file.
    #[arg(long, value_name = "FLOAT")]
    pub mass1: Option<f64>,

    /// Override the mass of the second black hole from the config file.
    #[arg(long, value_name = "FLOAT")]
    pub mass2: Option<f64>,

    /// Override the dimensionless spin of the first black hole.
    #[arg(long, value_name = "FLOAT")]
    pub spin1: Option<f64>,

    /// Override the dimensionless spin of the second black hole.
    #[arg(long, value_name = "FLOAT")]
    pub spin2: Option<f64>,

    /// Override the initial separation, in units of total mass.
    #[arg(short = 'r', long, value_name = "FLOAT")]
    pub separation: Option<f64>,

    /// Override the orbital eccentricity.
    #[arg(short, long, value_name = "FLOAT")]
    pub eccentricity: Option<f64>,

    // --- Run Overrides ---
    /// Override the maximum simulation time, in units of M.
    #[arg(long, value_name = "FLOAT")]
    pub max_time: Option<f64>,

    /// Override the frame recording interval, in units of M.
    #[arg(long, value_name = "FLOAT")]
    pub record_interval: Option<f64>,

    /// Override the synthesized ringdown duration, in units of M.
    #[arg(long, value_name = "FLOAT")]
    pub ringdown_duration: Option<f64>,

    /// Override the number of ringdown samples.
    #[arg(long, value_name = "INT")]
    pub ringdown_samples: Option<usize>,

    /// Override the observer distance, in units of M.
    #[arg(long, value_name = "FLOAT")]
    pub distance: Option<f64>,

    /// Override the observer inclination, in radians.
    #[arg(long, value_name = "FLOAT")]
    pub inclination: Option<f64>,

    // --- Physics Toggles ---
    /// Disable the 1PN conservative correction.
    #[arg(long = "no-1pn")]
    pub no_pn1: bool,

    /// Disable the 2PN conservative correction.
    #[arg(long = "no-2pn")]
    pub no_pn2: bool,

    /// Disable the 2.5PN radiation reaction (the orbit will not decay).
    #[arg(long)]
    pub no_radiation: bool,

    // --- Reporting ---
    /// Total system mass in solar masses, used to print SI conversions.
    #[arg(long, value_name = "FLOAT")]
    pub solar_masses: Option<f64>,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

/// Arguments for the `estimate` subcommand.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// The mass of the first black hole, as a fraction of the total mass.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.5)]
    pub mass1: f64,

    /// The mass of the second black hole, as a fraction of the total mass.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.5)]
    pub mass2: f64,

    /// The dimensionless spin of the first black hole.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.0)]
    pub spin1: f64,

    /// The dimensionless spin of the second black hole.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.0)]
    pub spin2: f64,

    /// The initial separation, in units of total mass.
    #[arg(short = 'r', long, value_name = "FLOAT", default_value_t = 20.0)]
    pub separation: f64,

    /// Total system mass in solar masses, used for SI conversions.
    #[arg(long, value_name = "FLOAT", default_value_t = 60.0)]
    pub solar_masses: f64,
}
