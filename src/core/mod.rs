pub mod client;
pub mod input;
pub mod ops;
pub mod output;
pub mod pipeline;
pub mod request;

pub use client::MapsClient;
pub use pipeline::{Operation, Outcome};
