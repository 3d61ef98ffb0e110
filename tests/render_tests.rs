use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use receipts::render::{
    compose, money, render, select_template, templates, wrap, Canvas, DrawOp, PageSize, Surface,
    CAMPAIGN_TEMPLATES, PRICING_TEMPLATES,
};
use receipts::synth::{LineItem, Record, RecordKind, Synthesizer, Totals};
use receipts::ReceiptError;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn record(seed: u64, kind: RecordKind) -> Record {
    Synthesizer::seeded(seed, today()).record(kind)
}

fn rendered(record: &Record, index: Option<usize>) -> (usize, Canvas) {
    let mut canvas = Canvas::new();
    let mut rng = StdRng::seed_from_u64(0);
    let used = render(&mut canvas, record, index, &mut rng).unwrap();
    (used, canvas)
}

#[test]
fn test_template_tables() {
    assert_eq!(CAMPAIGN_TEMPLATES.len(), 22);
    assert_eq!(PRICING_TEMPLATES.len(), 3);
    assert_eq!(CAMPAIGN_TEMPLATES[0].name, "TechAds Pro");
    assert_eq!(CAMPAIGN_TEMPLATES[21].name, "Performance Plus");
    assert_eq!(templates(RecordKind::Pricing)[2].name, "Impact Advertising");
}

#[test]
fn test_select_template_wraps_around() {
    let mut rng = StdRng::seed_from_u64(1);
    for k in 0..50 {
        assert_eq!(select_template(22, Some(22 + k), &mut rng).unwrap(), k % 22);
        assert_eq!(select_template(3, Some(3 * 7 + k), &mut rng).unwrap(), k % 3);
    }
}

#[test]
fn test_select_template_random_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut seen = [false; 22];
    for _ in 0..2000 {
        let index = select_template(22, None, &mut rng).unwrap();
        seen[index] = true;
    }
    assert!(seen.iter().all(|&s| s), "every template should be picked");
}

#[test]
fn test_select_template_needs_templates() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(matches!(
        select_template(0, Some(1), &mut rng),
        Err(ReceiptError::Render(_))
    ));
}

#[test]
fn test_render_wraparound_draws_same_template() {
    let record = record(5, RecordKind::Campaign);
    let n = CAMPAIGN_TEMPLATES.len();

    for k in [0, 3, 21] {
        let (a_index, a) = rendered(&record, Some(k));
        let (b_index, b) = rendered(&record, Some(n + k));
        assert_eq!(a_index, b_index);
        assert_eq!(a, b);
    }
}

#[test]
fn test_render_is_reproducible_for_a_seed() {
    let first = {
        let (_, canvas) = rendered(&record(42, RecordKind::Campaign), Some(0));
        serde_json::to_string(&canvas).unwrap()
    };
    let second = {
        let (_, canvas) = rendered(&record(42, RecordKind::Campaign), Some(0));
        serde_json::to_string(&canvas).unwrap()
    };

    assert_eq!(first, second);
    assert!(first.contains("TechAds Pro"));
}

#[test]
fn test_every_campaign_template_draws_the_record() {
    let record = record(11, RecordKind::Campaign);

    for (index, style) in CAMPAIGN_TEMPLATES.iter().enumerate() {
        let (used, canvas) = rendered(&record, Some(index));
        assert_eq!(used, index);
        assert!(!canvas.pages().is_empty(), "{} drew no pages", style.name);
        assert!(canvas.pending().is_empty(), "{} left a page open", style.name);
        assert_eq!(canvas.pages()[0].size, style.page);

        let texts = canvas.texts();
        assert!(texts.contains(&style.name), "{} missing its name", style.name);
        assert!(texts.iter().any(|t| t.contains(record.transaction_id())));
        assert!(texts.contains(&"TOTAL:"));
        assert!(texts.contains(&money(record.totals().total).as_str()));
    }
}

#[test]
fn test_every_pricing_template_draws_all_tables() {
    let record = record(12, RecordKind::Pricing);
    let Record::Pricing(receipt) = &record else {
        panic!("expected a pricing record");
    };

    for index in 0..PRICING_TEMPLATES.len() {
        let (_, canvas) = rendered(&record, Some(index));
        let tables: Vec<_> = canvas
            .pages()
            .iter()
            .flat_map(|p| p.ops.iter())
            .filter_map(|op| match op {
                DrawOp::Table { rows, .. } => Some(rows),
                _ => None,
            })
            .collect();

        assert_eq!(tables.len(), receipt.pricing_tables.len());
        for (rows, table) in tables.iter().zip(&receipt.pricing_tables) {
            assert_eq!(rows[0], vec!["Market", "Minimum (USD)", "Reach"]);
            assert_eq!(rows.len(), table.markets.len() + 1);
        }
        assert!(canvas.texts().contains(&receipt.notes.as_str()));
    }
}

#[test]
fn test_metric_masters_uses_a4() {
    let index = CAMPAIGN_TEMPLATES
        .iter()
        .position(|s| s.name == "Metric Masters")
        .unwrap();
    let (_, canvas) = rendered(&record(2, RecordKind::Campaign), Some(index));
    assert_eq!(canvas.pages()[0].size, PageSize::A4);
}

#[test]
fn test_long_receipts_continue_on_new_pages() {
    let mut record = record(8, RecordKind::Campaign);
    if let Record::Campaign(receipt) = &mut record {
        receipt.line_items = (0..60)
            .map(|i| LineItem::new(format!("Consulting block {i}"), 1, 100.0))
            .collect();
        let subtotal: f64 = receipt.line_items.iter().map(|i| i.total).sum();
        receipt.totals = Totals::derive(subtotal, receipt.totals.tax_rate);
    }
    record.validate().unwrap();

    let (_, canvas) = rendered(&record, Some(0));
    assert!(canvas.pages().len() > 1);
    assert!(canvas.texts().contains(&"TOTAL:"));
}

#[test]
fn test_render_rejects_invalid_record() {
    let mut record = record(4, RecordKind::Campaign);
    if let Record::Campaign(receipt) = &mut record {
        receipt.line_items[0].total += 5.0;
    }

    let mut canvas = Canvas::new();
    let mut rng = StdRng::seed_from_u64(0);
    let result = render(&mut canvas, &record, Some(0), &mut rng);

    assert!(matches!(result, Err(ReceiptError::InvalidRecord { .. })));
    assert_eq!(canvas.op_count(), 0);
}

#[test]
fn test_compose_on_custom_surface() {
    // Counts calls without recording anything
    #[derive(Default)]
    struct Counter {
        texts: usize,
        pages: usize,
    }

    impl Surface for Counter {
        fn set_page_size(&mut self, _: PageSize) {}
        fn set_font(&mut self, _: receipts::render::Font, _: f32) {}
        fn set_fill_color(&mut self, _: receipts::render::Color) {}
        fn set_stroke_color(&mut self, _: receipts::render::Color) {}
        fn set_line_width(&mut self, _: f32) {}
        fn draw_text(&mut self, _: f32, _: f32, _: &str, _: receipts::render::Align) {
            self.texts += 1;
        }
        fn draw_rect(&mut self, _: f32, _: f32, _: f32, _: f32, _: bool, _: bool) {}
        fn draw_line(&mut self, _: f32, _: f32, _: f32, _: f32) {}
        fn draw_path(&mut self, _: &[(f32, f32)], _: bool, _: bool, _: bool) {}
        fn draw_table(&mut self, _: f32, top: f32, table: &receipts::render::TableSpec) -> f32 {
            top - table.height()
        }
        fn show_page(&mut self) {
            self.pages += 1;
        }
    }

    let mut counter = Counter::default();
    compose(&mut counter, &CAMPAIGN_TEMPLATES[3], &record(1, RecordKind::Campaign));
    assert_eq!(counter.pages, 1);
    assert!(counter.texts > 10);
}

#[test]
fn test_money_and_wrap_helpers() {
    assert_eq!(money(1234567.5), "$1,234,567.50");
    assert_eq!(money(0.0), "$0.00");
    assert_eq!(wrap("aa bb cc dd", 5), vec!["aa bb", "cc dd"]);
}
