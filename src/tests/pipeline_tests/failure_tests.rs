// src/tests/pipeline_tests/failure_tests.rs

use crate::config::Config;
use crate::domain::FilterRejection;
use crate::errors::NormalizeError;
use crate::pipeline::{explain, run, DropReason, DroppedListing};
use crate::tests::utils::raw;

#[test]
fn malformed_listing_is_dropped_and_the_rest_continue() {
    let broken = raw("Broken Listing", "$50,000", "Revenue $99,999,999,999,999,999,999,999.");

    let listings = vec![
        raw("First Shop", "$50,000", "Turnkey."),
        broken,
        raw("Last Shop", "$50,000", ""),
    ];

    let report = run(&listings, &Config::default());

    assert_eq!(report.total_found, 3);
    assert_eq!(report.total_filtered, 2);
    assert_eq!(report.total_returned, 2);
    assert_eq!(
        report.dropped,
        vec![DroppedListing {
            index: 1,
            reason: DropReason::Malformed(NormalizeError::AmountOverflow {
                field: "revenue",
                digits: "99999999999999999999999".into(),
            }),
        }]
    );
}

#[test]
fn scraped_junk_still_becomes_a_lead() {
    let mut junk = raw("Corner Deli", "$50,000", "");
    junk.description = format!(
        "{}Great spot.\u{7f} Call 305-555-1234\u{1b}",
        "lorem ipsum ".repeat(6_000)
    );

    let report = run(&[junk], &Config::default());

    assert_eq!(report.total_filtered, 1);
    assert!(report.dropped.is_empty());
    assert_eq!(report.leads[0].contact_phone.as_deref(), Some("305-555-1234"));
}

#[test]
fn filter_rejections_are_recorded() {
    let listings = vec![
        raw("Too Cheap", "$5,000", ""),
        raw("Too Dear", "$2,500,000", ""),
        raw("Thin Margins", "$60,000", "Cash flow $1,000 a year."),
        raw("Just Right", "$60,000", "Revenue $120,000."),
    ];

    let report = run(&listings, &Config::default());

    assert_eq!(report.total_filtered, 1);
    assert_eq!(report.leads[0].listing_title, "Just Right");

    let reasons: Vec<&DropReason> = report.dropped.iter().map(|d| &d.reason).collect();
    assert_eq!(
        reasons,
        vec![
            &DropReason::Filtered(FilterRejection::PriceBelowMin {
                price: 5_000,
                min: 10_000
            }),
            &DropReason::Filtered(FilterRejection::PriceAboveMax {
                price: 2_500_000,
                max: 1_000_000
            }),
            &DropReason::Filtered(FilterRejection::CashFlowBelowMin {
                cash_flow: 1_000,
                min: 25_000
            }),
        ]
    );
}

#[test]
fn missing_numbers_are_never_filtered() {
    let report = run(&[raw("Mystery Business", "", "Ask for details.")], &Config::default());

    assert_eq!(report.total_returned, 1);
    let lead = &report.leads[0];
    assert_eq!(lead.price, None);
    assert_eq!(lead.revenue, None);
    assert_eq!(lead.cash_flow, None);
}

#[test]
fn drop_reasons_read_well_in_logs() {
    let reason = DropReason::Filtered(FilterRejection::RevenueBelowMin {
        revenue: 10,
        min: 50_000,
    });
    assert_eq!(reason.to_string(), "filtered: revenue 10 below minimum 50000");

    let reason = DropReason::Malformed(NormalizeError::AmountOverflow {
        field: "price",
        digits: "123456789012345678901".into(),
    });
    assert_eq!(
        reason.to_string(),
        "malformed: price amount 123456789012345678901 is too large to represent"
    );
}

#[test]
fn explain_accounts_for_every_listing_in_order() {
    let broken = raw("Broken Listing", "$123,456,789,012,345,678,901", "");

    let listings = vec![
        raw("Too Cheap", "$5,000", "No broker."),
        broken,
        raw("Turnkey Gym", "$50,000", ""),
    ];

    let explanations = explain(&listings, &Config::default());

    assert_eq!(explanations.len(), 3);

    let cheap = &explanations[0];
    assert!(!cheap.passes_filters);
    assert_eq!(cheap.rejection.as_deref(), Some("price 5000 below minimum 10000"));
    // Rejected leads are still scored: base 5 + "no broker" 2 + owner-direct 1.5
    let breakdown = cheap.score.as_ref().unwrap();
    assert_eq!(breakdown.keyword_hits, vec![("no broker".to_string(), 2.0)]);
    assert_eq!(breakdown.total, 8.5);

    let bad = &explanations[1];
    assert!(!bad.passes_filters);
    assert!(bad.score.is_none());
    assert_eq!(
        bad.malformed.as_deref(),
        Some("price amount 123456789012345678901 is too large to represent")
    );

    let gym = &explanations[2];
    assert!(gym.passes_filters);
    assert!(gym.rejection.is_none());
    assert_eq!(gym.score.as_ref().unwrap().total, 6.5);
}
