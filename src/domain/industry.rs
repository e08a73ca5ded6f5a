// src/domain/industry.rs

pub const GENERAL_BUSINESS: &str = "General Business";

/// Industry label -> substring keywords, checked top to bottom.
///
/// The order is the precedence. A listing can hit several rows ("pizza
/// restaurant", "dry cleaning laundromat", "gas station and convenience
/// store"), so the more specific category always sits above the generic one.
pub const INDUSTRY_TABLE: &[(&str, &[&str])] = &[
    ("Car Wash", &["car wash", "carwash", "auto detailing", "detailing"]),
    ("Food Truck", &["food truck", "food trailer", "concession trailer"]),
    ("Pizza", &["pizza", "pizzeria"]),
    ("Restaurant", &["restaurant", "cafe", "diner", "bistro", "grill", "eatery"]),
    ("Laundromat", &["laundromat", "laundry", "dry clean", "coin wash"]),
    ("Cleaning", &["cleaning", "janitorial", "maid service", "pressure washing"]),
    ("Landscaping", &["landscaping", "landscape", "lawn care", "lawn service"]),
    ("HVAC", &["hvac", "heating", "air conditioning", "a/c repair"]),
    ("Plumbing", &["plumbing", "plumber", "rooter"]),
    ("Gas Station", &["gas station", "fuel station", "service station"]),
    ("Convenience Store", &["convenience store", "corner store", "mini mart", "minimart"]),
    ("Ecommerce", &["ecommerce", "e-commerce", "online store", "shopify", "amazon fba"]),
    ("Mobile Business", &["mobile business", "mobile service", "mobile repair"]),
];

/// First industry in `INDUSTRY_TABLE` with any keyword in `text`.
pub fn detect_industry(text: &str) -> &'static str {
    let text = text.to_lowercase();

    INDUSTRY_TABLE
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(label, _)| *label)
        .unwrap_or(GENERAL_BUSINESS)
}
