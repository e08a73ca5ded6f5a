// src/domain/scoring.rs

use crate::config::ScoringTable;
use crate::domain::listing::NormalizedLead;
use serde::Serialize;

pub const BASE_SCORE: f64 = 5.0;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;

pub const CONTACT_BONUS: f64 = 0.5;

/// Phrases that mark a direct owner sale. These earn a bonus of their own
/// even when the same phrase is also a weighted keyword, so "no broker" can
/// count twice.
// TODO: product owners to decide whether the owner-direct bonus should skip phrases already weighted in lead_scoring.
pub const OWNER_DIRECT_PHRASES: &[&str] = &["by owner", "fsbo", "no broker", "owner direct"];
pub const OWNER_DIRECT_BONUS: f64 = 1.5;

/// Asking prices above this are treated as suspicious for a small business.
pub const PRICE_SANITY_MAX: u64 = 1_000_000;
pub const PRICE_PENALTY: f64 = 2.0;

/// Where a lead's score came from, step by step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub keyword_hits: Vec<(String, f64)>,
    pub contact_bonus: f64,
    pub owner_direct_bonus: f64,
    pub price_penalty: f64,
    pub total: f64,
}

pub fn explain(lead: &NormalizedLead, table: &ScoringTable) -> ScoreBreakdown {
    let haystack = format!("{} {}", lead.description, lead.listing_title).to_lowercase();

    let keyword_hits: Vec<(String, f64)> = table
        .iter()
        .filter_map(|(keyword, &weight)| {
            // Keys are matched as written against lowercased text, so
            // "Must Sell" never matches.
            let phrase = keyword.replace('_', " ");
            (!phrase.trim().is_empty() && haystack.contains(&phrase))
                .then(|| (keyword.clone(), weight))
        })
        .collect();

    let contact_bonus = if lead.has_contact() { CONTACT_BONUS } else { 0.0 };

    let owner_direct_bonus = if OWNER_DIRECT_PHRASES.iter().any(|p| haystack.contains(p)) {
        OWNER_DIRECT_BONUS
    } else {
        0.0
    };

    let price_penalty = match lead.price {
        Some(price) if price > PRICE_SANITY_MAX => PRICE_PENALTY,
        _ => 0.0,
    };

    let raw = BASE_SCORE + keyword_hits.iter().map(|(_, w)| w).sum::<f64>() + contact_bonus
        + owner_direct_bonus
        - price_penalty;

    ScoreBreakdown {
        base: BASE_SCORE,
        keyword_hits,
        contact_bonus,
        owner_direct_bonus,
        price_penalty,
        total: round_one_decimal(raw.clamp(MIN_SCORE, MAX_SCORE)),
    }
}

/// Lead quality in [0, 10], one decimal. Pure: same lead, same table,
/// same answer.
pub fn score(lead: &NormalizedLead, table: &ScoringTable) -> f64 {
    explain(lead, table).total
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
