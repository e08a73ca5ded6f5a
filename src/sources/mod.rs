mod curated;
mod json_file;
mod models;
mod source_error;

pub use curated::CuratedSource;
pub use json_file::JsonFileSource;
pub use models::RawListing;
pub use source_error::SourceError;

use tracing::{error, info};

/// Anything that can hand the pipeline a batch of raw listings.
/// Fetching, retries and pacing are the implementor's business; the
/// pipeline only ever sees the finished list.
pub trait ListingSource {
    fn name(&self) -> &str;
    fn fetch(&self) -> Result<Vec<RawListing>, SourceError>;
}

/// Runs every source in order and concatenates what they return.
/// A source that fails is logged and skipped so the rest still count.
pub fn collect_listings(sources: &[Box<dyn ListingSource>]) -> Vec<RawListing> {
    let mut all = Vec::new();

    for source in sources {
        info!(source = source.name(), "running source");
        match source.fetch() {
            Ok(listings) => {
                info!(source = source.name(), found = listings.len(), "source finished");
                all.extend(listings);
            }
            Err(e) => {
                error!(source = source.name(), error = %e, "source failed, skipping");
            }
        }
    }

    all
}
