//! Field extractors: free listing text in, typed values out.
//!
//! A pattern that isn't in the text gives `None`. The money extractors can
//! also find digits that don't fit in a dollar figure, which is reported as
//! an `AmountOverflow` rather than passed off as a miss.

use regex::Regex;
use std::sync::LazyLock;

// Tried in order; the first pattern that matches anywhere wins.
static PRICE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\$\s?(?P<amount>\d[\d,]*(?:k\b)?)",
        r"(?i)\b(?P<amount>\d[\d,]*\s*(?:dollars|thousand|k)\b)",
        r"(?i)\basking\s*(?:price)?\s*:?\s*\$?\s?(?P<amount>\d[\d,]*(?:k\b)?)",
        r"(?i)\bprice\s*:?\s*\$?\s?(?P<amount>\d[\d,]*(?:k\b)?)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static REVENUE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    ["revenues?", "sales", "gross"]
        .iter()
        .map(|label| money_after(label))
        .collect()
});

static CASH_FLOW_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"cash\s*flow", "profits?", "net"]
        .iter()
        .map(|label| money_after(label))
        .collect()
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap());

// "for sale" must come before "sale" so the longer phrase is removed whole.
static NAME_NOISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:for\s+sale|business|sale|selling|opportunity|established)\b").unwrap()
});

const NAME_TOKENS: usize = 3;
const NAME_FALLBACK: &str = "Business";

/// "<label> $N", allowing "of" or a colon between label and amount.
fn money_after(label: &str) -> Regex {
    Regex::new(&format!(
        r"(?i)\b{label}\s*(?:of|:)?\s*\$\s?(?P<amount>\d[\d,]*)"
    ))
    .unwrap()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinancialKind {
    Revenue,
    CashFlow,
}

/// First `amount` capture of the first pattern that matches at all.
fn first_amount<'t>(patterns: &[Regex], text: &'t str) -> Option<&'t str> {
    patterns
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps.name("amount"))
        .map(|m| m.as_str())
}

/// A matched amount whose digits don't fit in a `u64`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountOverflow {
    pub digits: String,
}

fn parse_digits(token: &str) -> Result<Option<u64>, AmountOverflow> {
    let digits: String = token.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Ok(None);
    }
    // Only digits are left, so the one way to fail is overflow.
    digits
        .parse()
        .map(Some)
        .map_err(|_| AmountOverflow { digits })
}

/// Asking price in whole dollars. "45k" style shorthand is scaled up when
/// the number on its own would be implausibly small.
pub fn extract_price(text: &str) -> Result<Option<u64>, AmountOverflow> {
    let Some(token) = first_amount(&PRICE_RES, text) else {
        return Ok(None);
    };
    let Some(value) = parse_digits(token)? else {
        return Ok(None);
    };

    if token.to_ascii_lowercase().contains('k') && value < 1000 {
        Ok(Some(value * 1000))
    } else {
        Ok(Some(value))
    }
}

/// Revenue or cash flow quoted next to its label. No "k" scaling here.
pub fn extract_financial(text: &str, kind: FinancialKind) -> Result<Option<u64>, AmountOverflow> {
    let patterns = match kind {
        FinancialKind::Revenue => &*REVENUE_RES,
        FinancialKind::CashFlow => &*CASH_FLOW_RES,
    };
    match first_amount(patterns, text) {
        Some(token) => parse_digits(token),
        None => Ok(None),
    }
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// First North-American number, exactly as written.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

/// Best guess at a business name from a listing title: drop the sales
/// boilerplate and keep the first few real words.
pub fn extract_business_name(title: &str) -> String {
    let stripped = NAME_NOISE_RE.replace_all(title, " ");

    let name = stripped
        .split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .take(NAME_TOKENS)
        .collect::<Vec<_>>()
        .join(" ");

    let name = name.trim();
    if name.is_empty() {
        NAME_FALLBACK.to_string()
    } else {
        name.to_string()
    }
}

/// Collapse runs of whitespace to single spaces and trim. Stray control
/// characters (DEL, ESC, NUL from scraped pages) count as whitespace.
pub fn clean_text(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c.is_control())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
