// src/domain/normalize.rs

use crate::config::GeoTargets;
use crate::domain::extract::{
    clean_text, extract_business_name, extract_email, extract_financial, extract_phone,
    extract_price, AmountOverflow, FinancialKind,
};
use crate::domain::industry::detect_industry;
use crate::domain::listing::{format_location, NormalizedLead};
use crate::errors::NormalizeError;
use crate::geos::state_abbr;
use crate::sources::RawListing;

/// Turns a raw listing into a lead. This is the anti-corruption layer
/// between whatever a site printed and the typed record the rest of the
/// pipeline works with.
///
/// Only an amount too large to hold fails. Text that simply lacks a price,
/// a phone number or a location still produces a lead, with those fields
/// empty.
pub fn normalize(raw: &RawListing, geo: &GeoTargets) -> Result<NormalizedLead, NormalizeError> {
    let title = clean_text(&raw.title);
    let description = clean_text(&raw.description);
    let price_text = clean_text(&raw.price_text);

    let price = if price_text.is_empty() {
        extract_price(&description)
    } else {
        extract_price(&price_text)
    }
    .map_err(overflow("price"))?;
    let revenue =
        extract_financial(&description, FinancialKind::Revenue).map_err(overflow("revenue"))?;
    let cash_flow =
        extract_financial(&description, FinancialKind::CashFlow).map_err(overflow("cash_flow"))?;

    let mut city = clean_text(&raw.city);
    let mut state = normalize_state(&clean_text(&raw.state));

    if state.is_empty() {
        state = infer_state(&description, geo).unwrap_or_default();
    }
    if city.is_empty() {
        city = infer_city(&description, geo).unwrap_or_default();
    }

    let industry = detect_industry(&format!("{title} {description}")).to_string();

    Ok(NormalizedLead {
        business_name: extract_business_name(&title),
        listing_title: title,
        platform: clean_text(&raw.platform),
        industry,
        price,
        revenue,
        cash_flow,
        location: format_location(&city, &state),
        city,
        state,
        contact_email: extract_email(&description),
        contact_phone: extract_phone(&description),
        url: clean_text(&raw.url),
        description,
        date_posted: clean_text(&raw.date_posted),
        score: 0.0,
    })
}

fn overflow(field: &'static str) -> impl Fn(AmountOverflow) -> NormalizeError {
    move |e| NormalizeError::AmountOverflow {
        field,
        digits: e.digits,
    }
}

/// "Florida" / "fl" -> "FL". Anything we don't recognise is kept as written.
fn normalize_state(state: &str) -> String {
    match state_abbr(state) {
        Some(abbr) => abbr.to_string(),
        None => state.to_string(),
    }
}

/// First target state named in the text, by full name or by its code.
fn infer_state(text: &str, geo: &GeoTargets) -> Option<String> {
    let lower = text.to_lowercase();

    geo.states.iter().find_map(|target| {
        let abbr = state_abbr(target);
        let by_name = contains_word(&lower, &target.to_lowercase());
        // Codes are only trusted in capitals; "in" or "me" are ordinary words.
        let by_code = abbr.is_some_and(|a| contains_word(text, a));

        if by_name || by_code {
            Some(abbr.map(str::to_string).unwrap_or_else(|| target.clone()))
        } else {
            None
        }
    })
}

fn infer_city(text: &str, geo: &GeoTargets) -> Option<String> {
    let lower = text.to_lowercase();
    geo.cities
        .iter()
        .find(|city| contains_word(&lower, &city.to_lowercase()))
        .cloned()
}

/// `needle` occurs in `haystack` with no letters or digits glued to either side.
fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
