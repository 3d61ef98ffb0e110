use chrono::{Duration, NaiveDate, NaiveTime};
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use super::catalog::*;
use super::record::{
    round1, round2, AdPlatform, Address, CampaignDetails, ContentTypes, LineItem, MarketRow,
    PricingModel, PricingReceipt, PricingTable, Receipt, Record, RecordKind, Totals,
};

/// Produces receipt records from an explicitly owned random source.
///
/// Every draw goes through `rng`, so two synthesizers built with the same
/// seed and `today` yield identical records.
pub struct Synthesizer<R: Rng> {
    rng: R,
    today: NaiveDate,
}

impl Synthesizer<StdRng> {
    pub fn seeded(seed: u64, today: NaiveDate) -> Self {
        Self::new(StdRng::seed_from_u64(seed), today)
    }

    pub fn from_os_rng(today: NaiveDate) -> Self {
        Self::new(StdRng::from_os_rng(), today)
    }
}

impl<R: Rng> Synthesizer<R> {
    pub fn new(rng: R, today: NaiveDate) -> Self {
        Self { rng, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The shared random handle, for callers that pick templates from the same stream
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn record(&mut self, kind: RecordKind) -> Record {
        match kind {
            RecordKind::Campaign => Record::Campaign(self.receipt()),
            RecordKind::Pricing => Record::Pricing(self.pricing_receipt()),
        }
    }

    /// Generate one campaign receipt
    pub fn receipt(&mut self) -> Receipt {
        let line_items = self.line_items();
        let subtotal: f64 = line_items.iter().map(|i| i.total).sum();
        let tax_rate = *self.pick(TAX_RATES);
        let totals = Totals::derive(subtotal, tax_rate);

        Receipt {
            transaction_id: self.transaction_id(),
            date: self.past_date(365),
            time: self.time(),
            customer_name: Name().fake_with_rng(&mut self.rng),
            company_name: self.company_name(),
            email: SafeEmail().fake_with_rng(&mut self.rng),
            phone: PhoneNumber().fake_with_rng(&mut self.rng),
            address: self.address(),
            campaign_name: self.campaign_name(),
            line_items,
            ad_platforms: self.ad_platforms(),
            campaign_details: self.campaign_details(),
            totals,
            payment_method: self.pick(PAYMENT_METHODS).to_string(),
        }
    }

    /// Generate one pricing-table receipt
    pub fn pricing_receipt(&mut self) -> PricingReceipt {
        let table_count = self.rng.random_range(2..=4);
        let pricing_tables: Vec<PricingTable> = self
            .sample(PRICING_TABLE_TYPES, table_count)
            .into_iter()
            .map(|name| self.pricing_table(name))
            .collect();

        let minimums: u64 = pricing_tables.iter().map(|t| t.minimum_sum()).sum();
        let totals = Totals::derive(minimums as f64, PRICING_TAX_RATE);

        let campaign_name = format!(
            "{} Campaign {}",
            self.pick(PRICING_CAMPAIGN_PERIODS),
            self.rng.random_range(2024..=2026)
        );

        PricingReceipt {
            transaction_id: self.transaction_id(),
            date: self.past_date(365),
            time: self.time(),
            customer_name: Name().fake_with_rng(&mut self.rng),
            company_name: self.company_name(),
            campaign_name,
            pricing_tables,
            totals,
            payment_method: self.pick(PRICING_PAYMENT_METHODS).to_string(),
            notes: self.pick(CLOSING_NOTES).to_string(),
        }
    }

    fn pick<'a, T>(&mut self, values: &'a [T]) -> &'a T {
        // Catalogs are non-empty constants.
        &values[self.rng.random_range(0..values.len())]
    }

    /// Draw `count` distinct entries, keeping draw order
    fn sample(&mut self, values: &[&str], count: usize) -> Vec<String> {
        values
            .choose_multiple(&mut self.rng, count.min(values.len()))
            .map(|v| v.to_string())
            .collect()
    }

    fn transaction_id(&mut self) -> String {
        let prefix = self.pick(TRANSACTION_PREFIXES);
        let number: u32 = self.rng.random_range(100_000..=999_999);
        format!("{prefix}-{number}")
    }

    fn past_date(&mut self, days_back: i64) -> NaiveDate {
        let days_ago = self.rng.random_range(0..=days_back);
        self.today - Duration::days(days_ago)
    }

    fn time(&mut self) -> NaiveTime {
        let hour = self.rng.random_range(0..24);
        let minute = self.rng.random_range(0..60);
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
    }

    fn company_name(&mut self) -> String {
        let name: String = FirstName().fake_with_rng(&mut self.rng);
        format!("{} {}", name, self.pick(COMPANY_SUFFIXES))
    }

    fn address(&mut self) -> Address {
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        let number: String = BuildingNumber().fake_with_rng(&mut self.rng);
        Address {
            street: format!("{street} {number}"),
            city: CityName().fake_with_rng(&mut self.rng),
            state: StateAbbr().fake_with_rng(&mut self.rng),
            zip: ZipCode().fake_with_rng(&mut self.rng),
        }
    }

    fn campaign_name(&mut self) -> String {
        format!(
            "{} {} {}",
            self.pick(CAMPAIGN_ADJECTIVES),
            self.pick(CAMPAIGN_TYPES),
            self.pick(CAMPAIGN_PERIODS)
        )
    }

    fn line_items(&mut self) -> Vec<LineItem> {
        let count = self.rng.random_range(2..=5);
        self.sample(SERVICES, count)
            .into_iter()
            .map(|service| {
                let quantity = self.rng.random_range(1..=10);
                let unit_price = self.rng.random_range(100.0..=2000.0);
                LineItem::new(service, quantity, unit_price)
            })
            .collect()
    }

    fn ad_platforms(&mut self) -> Vec<AdPlatform> {
        let count = self.rng.random_range(2..=6);
        self.sample(AD_PLATFORMS, count)
            .into_iter()
            .map(|platform| AdPlatform {
                platform,
                amount: round2(self.rng.random_range(500.0..=15000.0)),
                impressions: self.rng.random_range(10_000..=500_000),
                clicks: self.rng.random_range(100..=10_000),
            })
            .collect()
    }

    fn content_types(&mut self) -> ContentTypes {
        let display: bool = self.rng.random();
        let video: bool = self.rng.random();
        match (display, video) {
            (true, true) => ContentTypes::BOTH,
            (true, false) => ContentTypes::DISPLAY,
            (false, true) => ContentTypes::VIDEO,
            // neither: reflip between the single kinds
            (false, false) if self.rng.random_bool(0.5) => ContentTypes::DISPLAY,
            (false, false) => ContentTypes::VIDEO,
        }
    }

    fn campaign_details(&mut self) -> CampaignDetails {
        let start_date = self.today + Duration::days(self.rng.random_range(1..=30));
        let duration_days: u32 = self.rng.random_range(30..=180);
        let end_date = start_date + Duration::days(duration_days as i64);

        let content = self.content_types();
        let display_formats = if content.has_display() {
            let count = self.rng.random_range(1..=4);
            self.sample(DISPLAY_FORMATS, count)
        } else {
            Vec::new()
        };
        let video_formats = if content.has_video() {
            let count = self.rng.random_range(1..=VIDEO_FORMATS.len());
            self.sample(VIDEO_FORMATS, count)
        } else {
            Vec::new()
        };

        let ramp_up_strategy = self.pick(RAMP_UP_STRATEGIES).to_string();

        let daily_budget = round2(self.rng.random_range(100.0..=5000.0));
        let total_budget = round2(daily_budget * duration_days as f64);

        let target_impressions = self.rng.random_range(50_000..=5_000_000);
        let target_clicks = self.rng.random_range(1_000..=100_000);
        let target_conversions = self.rng.random_range(50..=5_000);

        let cpm = round2(self.rng.random_range(2.5..=25.0));
        let ctr = round2(self.rng.random_range(0.5..=8.5));
        let bounce_rate = round1(self.rng.random_range(25.0..=75.0));

        let pricing_model = *self.pick(&PricingModel::ALL);
        let rate = match pricing_model.rate_range() {
            Some((low, high)) => round2(self.rng.random_range(low..=high)),
            None => cpm,
        };

        let frequency_cap = self.pick(FREQUENCY_CAPS).to_string();
        let geo_count = self.rng.random_range(1..=4);
        let geo_targets = self.sample(GEOGRAPHIES, geo_count);

        CampaignDetails {
            start_date,
            end_date,
            duration_days,
            content,
            display_formats,
            video_formats,
            ramp_up_strategy,
            daily_budget,
            total_budget,
            target_impressions,
            target_clicks,
            target_conversions,
            pricing_model,
            rate,
            rate_description: pricing_model.describe(rate),
            cpm,
            ctr,
            bounce_rate,
            frequency_cap,
            geo_targets,
            age_range: self.pick(AGE_RANGES).to_string(),
            devices: self.pick(DEVICE_CLASSES).to_string(),
        }
    }

    fn pricing_table(&mut self, name: String) -> PricingTable {
        let count = self.rng.random_range(3..=8);
        let markets = self
            .sample(MARKETS, count)
            .into_iter()
            .map(|market| MarketRow {
                market,
                min_value_usd: self.rng.random_range(500..=50_000),
                reach: self.rng.random_range(10_000..=10_000_000),
            })
            .collect();
        PricingTable { name, markets }
    }
}
