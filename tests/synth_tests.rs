use std::collections::HashSet;

use chrono::NaiveDate;
use receipts::synth::catalog::{AD_PLATFORMS, MARKETS, PRICING_TABLE_TYPES, SERVICES};
use receipts::synth::{round2, ContentTypes, Record, RecordKind, Synthesizer};
use receipts::ReceiptError;

const TOLERANCE: f64 = 1e-9;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{what}: {actual} != {expected}"
    );
}

#[test]
fn test_totals_are_rounded_sums() {
    for seed in 0..200 {
        let receipt = Synthesizer::seeded(seed, today()).receipt();
        let t = receipt.totals;

        assert_close(t.tax, round2(t.subtotal * t.tax_rate), "tax");
        assert_close(t.total, round2(t.subtotal + t.tax), "total");
    }
}

#[test]
fn test_subtotal_matches_line_items() {
    for seed in 0..200 {
        let receipt = Synthesizer::seeded(seed, today()).receipt();

        for item in &receipt.line_items {
            assert!(item.quantity > 0);
            assert_close(
                item.total,
                round2(item.quantity as f64 * item.unit_price),
                "item total",
            );
        }
        let sum: f64 = receipt.line_items.iter().map(|i| i.total).sum();
        assert_close(receipt.totals.subtotal, round2(sum), "subtotal");
    }
}

#[test]
fn test_campaign_always_has_content() {
    for seed in 0..500 {
        let details = Synthesizer::seeded(seed, today()).receipt().campaign_details;

        assert!(details.content.has_display() || details.content.has_video());
        assert_eq!(details.content.has_display(), !details.display_formats.is_empty());
        assert_eq!(details.content.has_video(), !details.video_formats.is_empty());
    }
}

#[test]
fn test_total_budget_is_daily_times_duration() {
    for seed in 0..200 {
        let details = Synthesizer::seeded(seed, today()).receipt().campaign_details;

        assert_close(
            details.total_budget,
            round2(details.daily_budget * details.duration_days as f64),
            "total budget",
        );
        assert!((30..=180).contains(&details.duration_days));
        assert!(details.start_date > today());
    }
}

#[test]
fn test_no_duplicate_catalog_entries() {
    for seed in 0..200 {
        let receipt = Synthesizer::seeded(seed, today()).receipt();

        let services: HashSet<_> = receipt.line_items.iter().map(|i| &i.description).collect();
        assert_eq!(services.len(), receipt.line_items.len());
        assert!(receipt
            .line_items
            .iter()
            .all(|i| SERVICES.contains(&i.description.as_str())));

        let platforms: HashSet<_> = receipt.ad_platforms.iter().map(|p| &p.platform).collect();
        assert_eq!(platforms.len(), receipt.ad_platforms.len());
        assert!(receipt
            .ad_platforms
            .iter()
            .all(|p| AD_PLATFORMS.contains(&p.platform.as_str())));
    }
}

#[test]
fn test_pricing_receipt_shape() {
    for seed in 0..100 {
        let receipt = Synthesizer::seeded(seed, today()).pricing_receipt();

        assert!((2..=4).contains(&receipt.pricing_tables.len()));
        let names: HashSet<_> = receipt.pricing_tables.iter().map(|t| &t.name).collect();
        assert_eq!(names.len(), receipt.pricing_tables.len());

        for table in &receipt.pricing_tables {
            assert!(PRICING_TABLE_TYPES.contains(&table.name.as_str()));
            assert!((3..=8).contains(&table.markets.len()));
            let markets: HashSet<_> = table.markets.iter().map(|m| &m.market).collect();
            assert_eq!(markets.len(), table.markets.len());
            assert!(table
                .markets
                .iter()
                .all(|m| MARKETS.contains(&m.market.as_str())));
        }

        let minimums: u64 = receipt.pricing_tables.iter().map(|t| t.minimum_sum()).sum();
        let t = receipt.totals;
        assert_close(t.subtotal, minimums as f64, "pricing subtotal");
        assert_close(t.tax_rate, 0.08, "pricing tax rate");
        assert_close(t.tax, round2(t.subtotal * 0.08), "pricing tax");
        assert_close(t.total, round2(t.subtotal + t.tax), "pricing total");
    }
}

#[test]
fn test_generated_records_validate() {
    for seed in 0..100 {
        let mut synth = Synthesizer::seeded(seed, today());
        synth.record(RecordKind::Campaign).validate().unwrap();
        synth.record(RecordKind::Pricing).validate().unwrap();
    }
}

#[test]
fn test_same_seed_same_record() {
    let a = Synthesizer::seeded(42, today()).record(RecordKind::Campaign);
    let b = Synthesizer::seeded(42, today()).record(RecordKind::Campaign);
    let c = Synthesizer::seeded(43, today()).record(RecordKind::Campaign);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_content_types_rejects_neither() {
    assert!(matches!(
        ContentTypes::new(false, false),
        Err(ReceiptError::InvalidContentTypes)
    ));

    let both = ContentTypes::new(true, true).unwrap();
    assert_eq!(both.label(), "Display & Video");
    assert_eq!(ContentTypes::new(false, true).unwrap().label(), "Video");
}

#[test]
fn test_drawn_content_types_are_constructible() {
    assert_eq!(ContentTypes::new(true, false).unwrap(), ContentTypes::DISPLAY);
    assert_eq!(ContentTypes::new(false, true).unwrap(), ContentTypes::VIDEO);
    assert_eq!(ContentTypes::new(true, true).unwrap(), ContentTypes::BOTH);

    let mut seen = HashSet::new();
    for seed in 0..300 {
        let content = Synthesizer::seeded(seed, today())
            .receipt()
            .campaign_details
            .content;
        let rebuilt = ContentTypes::new(content.has_display(), content.has_video()).unwrap();
        assert_eq!(rebuilt, content);
        seen.insert(content.label());
    }
    assert_eq!(seen.len(), 3, "{seen:?}");
}

#[test]
fn test_content_types_rejected_on_deserialize() {
    let err = serde_json::from_str::<ContentTypes>(r#"{"has_display":false,"has_video":false}"#);
    assert!(err.is_err());

    let ok: ContentTypes =
        serde_json::from_str(r#"{"has_display":true,"has_video":false}"#).unwrap();
    assert!(ok.has_display());
    assert!(!ok.has_video());
}

#[test]
fn test_validate_catches_tampered_totals() {
    let mut record = Synthesizer::seeded(7, today()).record(RecordKind::Campaign);
    if let Record::Campaign(receipt) = &mut record {
        receipt.totals.total += 1.0;
    }

    let err = record.validate().unwrap_err();
    assert!(matches!(err, ReceiptError::InvalidRecord { .. }));
    assert!(err.to_string().contains(record.transaction_id()));
}

#[test]
fn test_record_serializes_with_kind_tag() {
    let record = Synthesizer::seeded(3, today()).record(RecordKind::Pricing);
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["kind"], "pricing");
    assert!(json["pricing_tables"].is_array());
    assert!(json["total"].is_number());

    let back: Record = serde_json::from_value(json).unwrap();
    assert_eq!(back.kind(), RecordKind::Pricing);
    assert_eq!(back.transaction_id(), record.transaction_id());
}
