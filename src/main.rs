use clap::Parser;
use geobatch::config::{Cli, Command};
use geobatch::core::ops::{
    ElevationOp, GeocodeOp, PlaceDetailOp, PlaceNearbyOp, ReverseGeocodeOp,
};
use geobatch::core::pipeline;
use geobatch::utils::{logger, validation};
use geobatch::MapsClient;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("starting geobatch");

    let cfg = cli.command.run_config();
    if let Err(e) = validation::check_args(&cfg) {
        tracing::error!(code = e.code(), "argument validation failed: {}", e);
        eprintln!("ERROR: {e}");
        std::process::exit(2);
    }

    let client = MapsClient::new(cfg.key.clone());
    let result = match &cli.command {
        Command::Geocode(args) => {
            pipeline::run(&GeocodeOp::new(args.region.clone()), &client, &cfg).await
        }
        Command::ReverseGeocode(args) => {
            pipeline::run(&ReverseGeocodeOp::new(args.region.clone()), &client, &cfg).await
        }
        Command::Elevation(_) => pipeline::run(&ElevationOp, &client, &cfg).await,
        Command::PlaceNearby(_) => pipeline::run(&PlaceNearbyOp, &client, &cfg).await,
        Command::PlaceDetail(_) => pipeline::run(&PlaceDetailOp, &client, &cfg).await,
    };

    if let Err(e) = result {
        tracing::error!(code = e.code(), "run failed: {}", e);
        eprintln!("ERROR: {e}");
        std::process::exit(2);
    }
}
