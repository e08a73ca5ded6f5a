use serde::{Deserialize, Serialize};

// listing
//  ├── title         "Pizza Restaurant - Must Sell"
//  ├── price_text    "$135,000" | "Asking 90k" | ""
//  ├── description   free text, carries financials and contacts
//  ├── platform      "BizBuySell", "Craigslist", ...
//  ├── city / state  whatever the site showed, possibly empty
//  ├── url
//  └── date_posted   "YYYY-MM-DD" or site-specific text

/// A listing exactly as a source handed it over. Every field is text and any
/// of them may be empty; a field missing from the JSON reads as "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RawListing {
    pub title: String,
    pub price_text: String,
    pub description: String,
    pub platform: String,
    pub city: String,
    pub state: String,
    pub url: String,
    pub date_posted: String,
}
