// src/domain/filter.rs

use crate::config::FilterThresholds;
use crate::domain::listing::NormalizedLead;
use std::fmt;

/// Which bound a lead fell outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRejection {
    PriceBelowMin { price: u64, min: u64 },
    PriceAboveMax { price: u64, max: u64 },
    RevenueBelowMin { revenue: u64, min: u64 },
    CashFlowBelowMin { cash_flow: u64, min: u64 },
}

impl fmt::Display for FilterRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterRejection::PriceBelowMin { price, min } => {
                write!(f, "price {price} below minimum {min}")
            }
            FilterRejection::PriceAboveMax { price, max } => {
                write!(f, "price {price} above maximum {max}")
            }
            FilterRejection::RevenueBelowMin { revenue, min } => {
                write!(f, "revenue {revenue} below minimum {min}")
            }
            FilterRejection::CashFlowBelowMin { cash_flow, min } => {
                write!(f, "cash flow {cash_flow} below minimum {min}")
            }
        }
    }
}

/// Checks a lead against the configured money bounds.
///
/// Only values that are present can fail. A listing that doesn't state its
/// revenue is not punished here; scoring is where missing data costs.
pub fn check(lead: &NormalizedLead, thresholds: &FilterThresholds) -> Result<(), FilterRejection> {
    if let Some(price) = lead.price {
        if let Some(min) = thresholds.price.min.filter(|&min| price < min) {
            return Err(FilterRejection::PriceBelowMin { price, min });
        }
        if let Some(max) = thresholds.price.max.filter(|&max| price > max) {
            return Err(FilterRejection::PriceAboveMax { price, max });
        }
    }

    if let Some(revenue) = lead.revenue {
        if let Some(min) = thresholds.revenue.min.filter(|&min| revenue < min) {
            return Err(FilterRejection::RevenueBelowMin { revenue, min });
        }
    }

    if let Some(cash_flow) = lead.cash_flow {
        if let Some(min) = thresholds.cash_flow.min.filter(|&min| cash_flow < min) {
            return Err(FilterRejection::CashFlowBelowMin { cash_flow, min });
        }
    }

    Ok(())
}

pub fn passes(lead: &NormalizedLead, thresholds: &FilterThresholds) -> bool {
    check(lead, thresholds).is_ok()
}
