use crate::config::RunConfig;
use crate::core::client::MapsClient;
use crate::core::{input, output};
use crate::domain::model::Annotate;
use crate::utils::error::Result;
use crate::utils::progress::Progress;
use async_trait::async_trait;

pub const NOTE_SUCCESS: &str = "Success";
pub const NOTE_MULTIPLE: &str = "Success: Multiple Place Results Found - First Retrieved";
pub const NOTE_REQUEST_FAILED: &str = "Request Failed";

/// Terminal state of one remote call. The batch loop turns it into the
/// record's note; `submit` has already copied any output fields.
pub enum Outcome {
    /// At least one result; the first was copied into the record.
    Hit,
    /// More than one nearby-search candidate; only the first was kept.
    Multiple,
    /// The service answered with zero results.
    Empty,
}

/// Descriptor for one mapping API operation: row mapping in, row mapping
/// out, required-input rule, and the remote call. The batch pipeline is
/// written once against this trait.
#[async_trait]
pub trait Operation: Send + Sync {
    type Record: Annotate + Send + Sync;

    fn name(&self) -> &'static str;

    /// Fixed CSV column order, id first and note last.
    fn headers(&self) -> &'static [&'static str];

    fn parse_row(&self, row_number: usize, row: &csv::StringRecord) -> Result<Self::Record>;

    fn to_row(&self, rec: &Self::Record) -> Vec<String>;

    /// The skip note when a required input field is absent or zero,
    /// `None` when the record can be submitted.
    fn missing_input(&self, rec: &Self::Record) -> Option<&'static str>;

    fn empty_note(&self) -> &'static str;

    /// Issue the remote call and copy the first result's fields into the
    /// record. Output fields stay untouched on `Empty` or error.
    async fn submit(&self, client: &MapsClient, rec: &mut Self::Record) -> Result<Outcome>;

    /// Canned pre-batch probe verifying key and client access. A failure
    /// here is fatal before any record is processed.
    async fn verify_access(&self, client: &MapsClient) -> Result<()>;
}

/// Sequential batch loop: one awaited remote call per record, input order,
/// exactly one note per record, progress advanced on every outcome.
pub async fn process<O: Operation>(op: &O, client: &MapsClient, records: &mut [O::Record]) {
    let mut bar = Progress::start(records.len());
    for rec in records.iter_mut() {
        match op.missing_input(rec) {
            Some(note) => rec.set_note(note),
            None => match op.submit(client, rec).await {
                Ok(Outcome::Hit) => rec.set_note(NOTE_SUCCESS),
                Ok(Outcome::Multiple) => rec.set_note(NOTE_MULTIPLE),
                Ok(Outcome::Empty) => rec.set_note(op.empty_note()),
                Err(err) => {
                    tracing::warn!("{} request failed: {}", op.name(), err);
                    rec.set_note(NOTE_REQUEST_FAILED);
                }
            },
        }
        bar.tick();
    }
    bar.finish();
}

/// Full run for one subcommand: probe, ingest, process, emit.
pub async fn run<O: Operation>(op: &O, client: &MapsClient, cfg: &RunConfig) -> Result<()> {
    op.verify_access(client).await?;
    tracing::info!("client access verified");

    let source = input::InputSource::resolve(cfg.input.as_deref());
    let rows = input::read_rows(&source)?;
    let mut records = input::parse_records(op, &rows)?;
    tracing::info!("loaded {} {} records", records.len(), op.name());

    process(op, client, &mut records).await;

    let target = output::resolve_target(cfg.output.as_deref())?;
    output::write_records(op, &target, &records)?;
    if let output::OutputTarget::File(path) = &target {
        tracing::info!("results written to {}", path.display());
    }

    Ok(())
}
