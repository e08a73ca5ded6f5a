// src/tests/pipeline_tests/ranking_tests.rs

use crate::config::Config;
use crate::pipeline::run;
use crate::sources::{CuratedSource, ListingSource};
use crate::tests::utils::raw;
use chrono::NaiveDate;

fn pizza() -> crate::sources::RawListing {
    raw(
        "Pizza Restaurant - Must Sell Due to Health",
        "$135,000",
        "Family-owned pizza restaurant, must sell due to health issues. \
         Contact owner directly. Revenue $210,000 annually.",
    )
}

fn titles(report: &crate::pipeline::RunReport) -> Vec<&str> {
    report
        .leads
        .iter()
        .map(|l| l.listing_title.as_str())
        .collect()
}

#[test]
fn empty_input_gives_empty_report() {
    let report = run(&[], &Config::default());

    assert!(report.leads.is_empty());
    assert_eq!(report.total_found, 0);
    assert_eq!(report.total_filtered, 0);
    assert_eq!(report.total_returned, 0);
    assert!(report.dropped.is_empty());
}

#[test]
fn motivated_seller_outranks_plain_listing() {
    let plain = raw(
        "Bookkeeping Practice",
        "$80,000",
        "Client list in a quiet office.",
    );

    // Plain listing first, so the order has to come from scoring.
    let report = run(&[plain, pizza()], &Config::default());

    assert_eq!(report.total_returned, 2);
    assert_eq!(
        titles(&report),
        vec!["Pizza Restaurant - Must Sell Due to Health", "Bookkeeping Practice"]
    );

    let top = &report.leads[0];
    assert_eq!(top.industry, "Pizza");
    assert_eq!(top.revenue, Some(210_000));
    // base 5 + "must sell" 2 + owner-direct 1.5
    assert_eq!(top.score, 8.5);
    assert_eq!(report.leads[1].score, 5.0);
}

#[test]
fn ties_keep_input_order() {
    let listings = vec![
        raw("Alpha Bakery", "$50,000", "Bread."),
        raw("Bravo Bakery", "$50,000", "Cakes."),
        raw("Turnkey Gym", "$50,000", "Equipment included."),
        raw("Charlie Bakery", "$50,000", "Pies."),
    ];

    let report = run(&listings, &Config::default());

    assert_eq!(
        titles(&report),
        vec!["Turnkey Gym", "Alpha Bakery", "Bravo Bakery", "Charlie Bakery"]
    );
}

#[test]
fn truncates_after_counting_survivors() {
    let mut config = Config::default();
    config.scraper_settings.max_leads_per_run = 2;

    let listings = vec![
        raw("One Shop", "$20,000", ""),
        raw("Two Shop", "$20,000", "Owner retiring."),
        raw("Three Shop", "$20,000", ""),
        raw("Four Shop", "$20,000", "Turnkey."),
    ];

    let report = run(&listings, &config);

    assert_eq!(report.total_found, 4);
    assert_eq!(report.total_filtered, 4);
    assert_eq!(report.total_returned, 2);
    assert_eq!(titles(&report), vec!["Two Shop", "Four Shop"]);
}

#[test]
fn duplicates_are_kept() {
    let report = run(&[pizza(), pizza()], &Config::default());
    assert_eq!(report.total_returned, 2);
    assert_eq!(report.leads[0], report.leads[1]);
}

#[test]
fn curated_listings_rank_as_expected() {
    let posted = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let listings = CuratedSource::posted_on(posted).fetch().unwrap();

    let report = run(&listings, &Config::default());

    assert_eq!(report.total_found, 5);
    assert_eq!(report.total_filtered, 5);

    let ranked: Vec<(&str, f64)> = report
        .leads
        .iter()
        .map(|l| (l.industry.as_str(), l.score))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("Car Wash", 10.0),
            ("Cleaning", 10.0),
            ("Convenience Store", 10.0),
            ("Pizza", 8.5),
            ("Landscaping", 8.5),
        ]
    );

    let car_wash = &report.leads[0];
    assert_eq!(car_wash.business_name, "Car Wash Owner");
    assert_eq!(car_wash.price, Some(89_000));
    assert_eq!(car_wash.cash_flow, Some(42_000));
    assert_eq!(car_wash.location, "Orlando, FL");
    assert_eq!(car_wash.date_posted, "2024-03-15");
}

#[test]
fn every_returned_score_is_in_range() {
    let listings = vec![
        raw("Hotel", "$9,500,000", "Huge resort."),
        raw("Retiring Owner Turnkey Shop", "$40,000", "Must sell, no broker, fsbo, turnkey, retiring. Call 305-555-0100."),
        raw("Plain", "", ""),
    ];

    let mut config = Config::default();
    config.filters.price.max = None;

    for lead in run(&listings, &config).leads {
        assert!((0.0..=10.0).contains(&lead.score), "{} out of range", lead.score);
        assert_eq!(lead.score, (lead.score * 10.0).round() / 10.0);
    }
}

#[test]
fn sample_listing_file_end_to_end() {
    use crate::sources::JsonFileSource;

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/raw_listings.json");
    let listings = JsonFileSource::new(path).fetch().unwrap();

    let report = run(&listings, &Config::default());

    assert_eq!(report.total_found, 3);
    assert_eq!(report.total_filtered, 2);

    let hvac = &report.leads[0];
    assert_eq!(hvac.industry, "HVAC");
    assert_eq!(hvac.price, Some(240_000));
    assert_eq!(hvac.revenue, Some(610_000));
    assert_eq!(hvac.cash_flow, Some(150_000));
    assert_eq!(hvac.location, "Lansing, MI");
    assert_eq!(hvac.contact_email.as_deref(), Some("hvac.owner@example.com"));
    assert_eq!(hvac.score, 10.0);

    let truck = &report.leads[1];
    assert_eq!(truck.industry, "Food Truck");
    assert_eq!(truck.price, Some(48_000));
    assert_eq!(truck.cash_flow, Some(31_000));
    assert_eq!(truck.contact_phone.as_deref(), Some("(813) 555-0142"));
    assert_eq!(truck.location, "");
    assert_eq!(truck.score, 8.5);

    // The ecommerce listing reports $40,000 in sales, under the revenue floor.
    assert_eq!(report.dropped.len(), 1);
    assert_eq!(report.dropped[0].index, 2);
}
