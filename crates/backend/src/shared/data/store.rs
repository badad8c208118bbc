use contracts::records::SalesRecord;
use once_cell::sync::OnceCell;

static DATASET: OnceCell<Vec<SalesRecord>> = OnceCell::new();

/// Install the loaded dataset for the lifetime of the process.
pub fn init_dataset(records: Vec<SalesRecord>) {
    if DATASET.set(records).is_err() {
        tracing::warn!("Dataset already initialized, ignoring reload");
    }
}

/// The immutable record slice every aggregator reads. Empty until
/// `init_dataset` has run.
pub fn get_dataset() -> &'static [SalesRecord] {
    DATASET.get().map(Vec::as_slice).unwrap_or(&[])
}
