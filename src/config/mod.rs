use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "geobatch")]
#[command(version)]
#[command(about = "Command line batch client for mapping web service APIs")]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Geocode street addresses to coordinates
    Geocode(GeoArgs),
    /// Reverse geocode coordinates to street addresses
    ReverseGeocode(GeoArgs),
    /// Look up elevation and resolution for coordinates
    Elevation(CommonArgs),
    /// Search for the nearest place around coordinates
    PlaceNearby(CommonArgs),
    /// Fetch place details for place identifiers
    PlaceDetail(CommonArgs),
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Mapping service API key
    #[arg(short, long, env = "GEOBATCH_API_KEY", hide_env_values = true)]
    pub key: String,

    /// Input CSV filepath; reads piped stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output CSV filepath or directory; writes stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct GeoArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Region code to bias results toward, e.g. "us"
    #[arg(short, long)]
    pub region: Option<String>,
}

/// Immutable per-invocation configuration, built once from the parsed
/// arguments and passed down unchanged.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub key: String,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub region: Option<String>,
}

impl Command {
    pub fn run_config(&self) -> RunConfig {
        match self {
            Command::Geocode(args) | Command::ReverseGeocode(args) => RunConfig {
                key: args.common.key.clone(),
                input: args.common.input.clone(),
                output: args.common.output.clone(),
                region: args.region.clone(),
            },
            Command::Elevation(args) | Command::PlaceNearby(args) | Command::PlaceDetail(args) => {
                RunConfig {
                    key: args.key.clone(),
                    input: args.input.clone(),
                    output: args.output.clone(),
                    region: None,
                }
            }
        }
    }
}
