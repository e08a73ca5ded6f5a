// src/domain/listing.rs
use serde::{Deserialize, Serialize};

/// A listing after normalization: typed money fields, a guessed name and
/// industry, and whatever contact details the text gave away.
///
/// Built once by the normalizer. `score` starts at 0 and is the only field
/// written afterwards, by the scorer.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NormalizedLead {
    pub business_name: String,
    pub listing_title: String,
    pub platform: String,
    pub industry: String,

    // Whole US dollars
    pub price: Option<u64>,
    pub revenue: Option<u64>,
    pub cash_flow: Option<u64>,

    pub city: String,
    pub state: String,
    pub location: String,

    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,

    pub url: String,
    pub description: String,
    pub date_posted: String,

    pub score: f64,
}

impl NormalizedLead {
    pub fn has_contact(&self) -> bool {
        self.contact_email.is_some() || self.contact_phone.is_some()
    }
}

/// "city, state", dropping the separator when either side is empty.
pub fn format_location(city: &str, state: &str) -> String {
    format!("{city}, {state}")
        .trim_start_matches(", ")
        .trim_end_matches(", ")
        .to_string()
}
