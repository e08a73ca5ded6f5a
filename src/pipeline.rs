// pipeline.rs
use crate::config::Config;
use crate::domain::filter::{self, FilterRejection};
use crate::domain::normalize::normalize;
use crate::domain::scoring::{self, ScoreBreakdown};
use crate::domain::NormalizedLead;
use crate::errors::NormalizeError;
use crate::sources::RawListing;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum DropReason {
    Malformed(NormalizeError),
    Filtered(FilterRejection),
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Malformed(e) => write!(f, "malformed: {e}"),
            DropReason::Filtered(r) => write!(f, "filtered: {r}"),
        }
    }
}

/// A listing that didn't make it, by its position in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedListing {
    pub index: usize,
    pub reason: DropReason,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub leads: Vec<NormalizedLead>,
    /// Raw listings handed in.
    pub total_found: usize,
    /// Leads that survived normalization and filtering, before the cap.
    pub total_filtered: usize,
    /// `leads.len()`
    pub total_returned: usize,
    #[serde(skip)]
    pub dropped: Vec<DroppedListing>,
}

/// Normalize, filter, score, rank and cap a batch of raw listings.
///
/// One bad listing never sinks the batch: it is recorded in `dropped` and
/// the rest carry on. Leads with equal scores keep their input order.
pub fn run(raw_listings: &[RawListing], config: &Config) -> RunReport {
    info!(listings = raw_listings.len(), "starting lead pipeline");

    let mut leads = Vec::new();
    let mut dropped = Vec::new();

    for (index, raw) in raw_listings.iter().enumerate() {
        let mut lead = match normalize(raw, &config.geo_targets) {
            Ok(lead) => lead,
            Err(e) => {
                warn!(index, url = %raw.url, error = %e, "dropping malformed listing");
                dropped.push(DroppedListing {
                    index,
                    reason: DropReason::Malformed(e),
                });
                continue;
            }
        };

        if let Err(rejection) = filter::check(&lead, &config.filters) {
            debug!(index, title = %lead.listing_title, %rejection, "filtered out");
            dropped.push(DroppedListing {
                index,
                reason: DropReason::Filtered(rejection),
            });
            continue;
        }

        lead.score = scoring::score(&lead, &config.lead_scoring);
        leads.push(lead);
    }

    // sort_by is stable, so ties stay in input order
    leads.sort_by(|a, b| b.score.total_cmp(&a.score));

    let total_filtered = leads.len();
    leads.truncate(config.scraper_settings.max_leads_per_run);

    info!(
        found = raw_listings.len(),
        filtered = total_filtered,
        returned = leads.len(),
        dropped = dropped.len(),
        "lead pipeline finished"
    );

    RunReport {
        total_found: raw_listings.len(),
        total_filtered,
        total_returned: leads.len(),
        leads,
        dropped,
    }
}

/// Per-listing account of what the pipeline would do with it.
#[derive(Debug, Clone, Serialize)]
pub struct ListingExplanation {
    pub index: usize,
    pub title: String,
    pub passes_filters: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub malformed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreBreakdown>,
}

/// Like `run`, but nothing is dropped, sorted or capped. Every listing gets
/// an entry in input order; malformed ones carry only the fault.
pub fn explain(raw_listings: &[RawListing], config: &Config) -> Vec<ListingExplanation> {
    raw_listings
        .iter()
        .enumerate()
        .map(|(index, raw)| match normalize(raw, &config.geo_targets) {
            Ok(lead) => ListingExplanation {
                index,
                title: lead.listing_title.clone(),
                passes_filters: filter::passes(&lead, &config.filters),
                rejection: filter::check(&lead, &config.filters)
                    .err()
                    .map(|r| r.to_string()),
                malformed: None,
                score: Some(scoring::explain(&lead, &config.lead_scoring)),
            },
            Err(e) => ListingExplanation {
                index,
                title: raw.title.clone(),
                passes_filters: false,
                rejection: None,
                malformed: Some(e.to_string()),
                score: None,
            },
        })
        .collect()
}
