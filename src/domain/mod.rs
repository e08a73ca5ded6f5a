pub mod extract;
pub mod filter;
pub mod industry;
pub mod listing;
pub mod normalize;
pub mod scoring;

pub use filter::FilterRejection;
pub use listing::NormalizedLead;
