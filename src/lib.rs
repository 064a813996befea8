pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{Cli, Command, RunConfig};
pub use crate::core::client::MapsClient;
pub use crate::core::ops::{ElevationOp, GeocodeOp, PlaceDetailOp, PlaceNearbyOp, ReverseGeocodeOp};
pub use crate::core::pipeline::{process, run, Operation, Outcome};
pub use crate::utils::error::{GeoError, Result};
