use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::catalog::TRANSACTION_PREFIXES;
use crate::error::{ReceiptError, Result};

/// Tolerance used when rechecking derived monetary values
const EPSILON: f64 = 1e-6;

/// Round a monetary value to cents
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Which generator produced a record, and which template set renders it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Service line items with campaign details
    Campaign,
    /// Market pricing tables
    Pricing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total: f64,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        let unit_price = round2(unit_price);
        Self {
            description: description.into(),
            quantity,
            unit_price,
            total: round2(quantity as f64 * unit_price),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdPlatform {
    pub platform: String,
    pub amount: f64,
    pub impressions: u64,
    pub clicks: u64,
}

/// Subtotal, tax and total, always derived in that order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: f64,
    pub tax_rate: f64,
    pub tax: f64,
    pub total: f64,
}

impl Totals {
    pub fn derive(subtotal: f64, tax_rate: f64) -> Self {
        let subtotal = round2(subtotal);
        let tax = round2(subtotal * tax_rate);
        Self {
            subtotal,
            tax_rate,
            tax,
            total: round2(subtotal + tax),
        }
    }

    fn check(&self, expected_subtotal: f64) -> std::result::Result<(), String> {
        if !close(self.subtotal, expected_subtotal) {
            return Err(format!(
                "subtotal {:.2} does not match items {:.2}",
                self.subtotal, expected_subtotal
            ));
        }
        if !close(self.tax, round2(self.subtotal * self.tax_rate)) {
            return Err(format!("tax {:.2} does not match rate", self.tax));
        }
        if !close(self.total, round2(self.subtotal + self.tax)) {
            return Err(format!("total {:.2} is not subtotal + tax", self.total));
        }
        Ok(())
    }
}

/// Display/video flags; at least one is always set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContentFlags", into = "ContentFlags")]
pub struct ContentTypes {
    display: bool,
    video: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ContentFlags {
    has_display: bool,
    has_video: bool,
}

impl ContentTypes {
    pub const DISPLAY: Self = Self {
        display: true,
        video: false,
    };
    pub const VIDEO: Self = Self {
        display: false,
        video: true,
    };
    pub const BOTH: Self = Self {
        display: true,
        video: true,
    };

    pub fn new(display: bool, video: bool) -> Result<Self> {
        if !display && !video {
            return Err(ReceiptError::InvalidContentTypes);
        }
        Ok(Self { display, video })
    }

    pub fn has_display(&self) -> bool {
        self.display
    }

    pub fn has_video(&self) -> bool {
        self.video
    }

    pub fn label(&self) -> &'static str {
        match (self.display, self.video) {
            (true, true) => "Display & Video",
            (true, false) => "Display",
            _ => "Video",
        }
    }
}

impl TryFrom<ContentFlags> for ContentTypes {
    type Error = ReceiptError;

    fn try_from(flags: ContentFlags) -> Result<Self> {
        ContentTypes::new(flags.has_display, flags.has_video)
    }
}

impl From<ContentTypes> for ContentFlags {
    fn from(types: ContentTypes) -> Self {
        Self {
            has_display: types.display,
            has_video: types.video,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingModel {
    #[serde(rename = "CPM")]
    Cpm,
    #[serde(rename = "CPC")]
    Cpc,
    #[serde(rename = "CPA")]
    Cpa,
    #[serde(rename = "CPV")]
    Cpv,
    #[serde(rename = "Flat Rate")]
    FlatRate,
}

impl PricingModel {
    pub const ALL: [PricingModel; 5] = [
        PricingModel::Cpm,
        PricingModel::Cpc,
        PricingModel::Cpa,
        PricingModel::Cpv,
        PricingModel::FlatRate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PricingModel::Cpm => "CPM",
            PricingModel::Cpc => "CPC",
            PricingModel::Cpa => "CPA",
            PricingModel::Cpv => "CPV",
            PricingModel::FlatRate => "Flat Rate",
        }
    }

    /// Range the rate is drawn from. CPM has none: it reuses the CPM metric.
    pub fn rate_range(&self) -> Option<(f64, f64)> {
        match self {
            PricingModel::Cpm => None,
            PricingModel::Cpc => Some((0.50, 15.0)),
            PricingModel::Cpa => Some((10.0, 200.0)),
            PricingModel::Cpv => Some((0.10, 2.0)),
            PricingModel::FlatRate => Some((5000.0, 50000.0)),
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            PricingModel::Cpm => "per 1,000 impressions",
            PricingModel::Cpc => "per click",
            PricingModel::Cpa => "per acquisition",
            PricingModel::Cpv => "per view",
            PricingModel::FlatRate => "flat rate",
        }
    }

    pub fn describe(&self, rate: f64) -> String {
        format!("${:.2} {}", rate, self.unit())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDetails {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: u32,
    #[serde(flatten)]
    pub content: ContentTypes,
    pub display_formats: Vec<String>,
    pub video_formats: Vec<String>,
    pub ramp_up_strategy: String,
    pub daily_budget: f64,
    pub total_budget: f64,
    pub target_impressions: u64,
    pub target_clicks: u64,
    pub target_conversions: u64,
    pub pricing_model: PricingModel,
    pub rate: f64,
    pub rate_description: String,
    pub cpm: f64,
    pub ctr: f64,
    pub bounce_rate: f64,
    pub frequency_cap: String,
    pub geo_targets: Vec<String>,
    pub age_range: String,
    pub devices: String,
}

impl CampaignDetails {
    fn check(&self) -> std::result::Result<(), String> {
        if !close(self.total_budget, round2(self.daily_budget * self.duration_days as f64)) {
            return Err(format!(
                "total budget {:.2} is not daily budget x {} days",
                self.total_budget, self.duration_days
            ));
        }
        let expected_end = self
            .start_date
            .checked_add_signed(chrono::Duration::days(self.duration_days as i64));
        if expected_end != Some(self.end_date) {
            return Err("end date does not match start date + duration".to_string());
        }
        if self.content.has_display() == self.display_formats.is_empty() {
            return Err("display formats do not match the display flag".to_string());
        }
        if self.content.has_video() == self.video_formats.is_empty() {
            return Err("video formats do not match the video flag".to_string());
        }
        check_distinct("geo target", self.geo_targets.iter())?;
        check_distinct("display format", self.display_formats.iter())?;
        check_distinct("video format", self.video_formats.iter())?;
        Ok(())
    }

    pub fn display_formats_label(&self) -> String {
        join_or_na(&self.display_formats)
    }

    pub fn video_formats_label(&self) -> String {
        join_or_na(&self.video_formats)
    }

    pub fn geo_label(&self) -> String {
        self.geo_targets.join(", ")
    }
}

fn join_or_na(values: &[String]) -> String {
    if values.is_empty() {
        "N/A".to_string()
    } else {
        values.join(", ")
    }
}

fn check_distinct<'a>(
    what: &str,
    values: impl Iterator<Item = &'a String>,
) -> std::result::Result<(), String> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(format!("{what} '{value}' appears twice"));
        }
    }
    Ok(())
}

fn check_transaction_id(id: &str) -> std::result::Result<(), String> {
    let valid = id.split_once('-').is_some_and(|(prefix, digits)| {
        TRANSACTION_PREFIXES.contains(&prefix)
            && digits.len() == 6
            && digits.chars().all(|c| c.is_ascii_digit())
    });
    if valid {
        Ok(())
    } else {
        Err(format!("malformed transaction id '{id}'"))
    }
}

/// Campaign receipt: service line items, ad platform spend and campaign facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub transaction_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub customer_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub campaign_name: String,
    pub line_items: Vec<LineItem>,
    pub ad_platforms: Vec<AdPlatform>,
    pub campaign_details: CampaignDetails,
    #[serde(flatten)]
    pub totals: Totals,
    pub payment_method: String,
}

impl Receipt {
    fn check(&self) -> std::result::Result<(), String> {
        check_transaction_id(&self.transaction_id)?;
        if self.line_items.is_empty() {
            return Err("no line items".to_string());
        }
        for item in &self.line_items {
            if item.quantity == 0 {
                return Err(format!("'{}' has zero quantity", item.description));
            }
            if !close(item.total, round2(item.quantity as f64 * item.unit_price)) {
                return Err(format!("'{}' total is not quantity x price", item.description));
            }
        }
        check_distinct("service", self.line_items.iter().map(|i| &i.description))?;
        check_distinct("platform", self.ad_platforms.iter().map(|p| &p.platform))?;

        let items_sum: f64 = self.line_items.iter().map(|i| i.total).sum();
        self.totals.check(items_sum)?;
        self.campaign_details.check()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRow {
    pub market: String,
    pub min_value_usd: u64,
    pub reach: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTable {
    pub name: String,
    pub markets: Vec<MarketRow>,
}

impl PricingTable {
    pub fn minimum_sum(&self) -> u64 {
        self.markets.iter().map(|m| m.min_value_usd).sum()
    }
}

/// Pricing-table receipt: named market tables instead of line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingReceipt {
    pub transaction_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub customer_name: String,
    pub company_name: String,
    pub campaign_name: String,
    pub pricing_tables: Vec<PricingTable>,
    #[serde(flatten)]
    pub totals: Totals,
    pub payment_method: String,
    pub notes: String,
}

impl PricingReceipt {
    fn check(&self) -> std::result::Result<(), String> {
        check_transaction_id(&self.transaction_id)?;
        if self.pricing_tables.is_empty() {
            return Err("no pricing tables".to_string());
        }
        check_distinct("pricing table", self.pricing_tables.iter().map(|t| &t.name))?;
        for table in &self.pricing_tables {
            if table.markets.is_empty() {
                return Err(format!("pricing table '{}' has no markets", table.name));
            }
            check_distinct("market", table.markets.iter().map(|m| &m.market))?;
        }
        let minimums: u64 = self.pricing_tables.iter().map(|t| t.minimum_sum()).sum();
        self.totals.check(minimums as f64)
    }
}

/// One synthesized receipt of either kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Campaign(Receipt),
    Pricing(PricingReceipt),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Campaign(_) => RecordKind::Campaign,
            Record::Pricing(_) => RecordKind::Pricing,
        }
    }

    pub fn transaction_id(&self) -> &str {
        match self {
            Record::Campaign(r) => &r.transaction_id,
            Record::Pricing(r) => &r.transaction_id,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Record::Campaign(r) => r.date,
            Record::Pricing(r) => r.date,
        }
    }

    pub fn time(&self) -> NaiveTime {
        match self {
            Record::Campaign(r) => r.time,
            Record::Pricing(r) => r.time,
        }
    }

    pub fn customer_name(&self) -> &str {
        match self {
            Record::Campaign(r) => &r.customer_name,
            Record::Pricing(r) => &r.customer_name,
        }
    }

    pub fn company_name(&self) -> &str {
        match self {
            Record::Campaign(r) => &r.company_name,
            Record::Pricing(r) => &r.company_name,
        }
    }

    pub fn campaign_name(&self) -> &str {
        match self {
            Record::Campaign(r) => &r.campaign_name,
            Record::Pricing(r) => &r.campaign_name,
        }
    }

    pub fn payment_method(&self) -> &str {
        match self {
            Record::Campaign(r) => &r.payment_method,
            Record::Pricing(r) => &r.payment_method,
        }
    }

    pub fn totals(&self) -> Totals {
        match self {
            Record::Campaign(r) => r.totals,
            Record::Pricing(r) => r.totals,
        }
    }

    /// Recheck every derived value and uniqueness rule.
    pub fn validate(&self) -> Result<()> {
        let outcome = match self {
            Record::Campaign(r) => r.check(),
            Record::Pricing(r) => r.check(),
        };
        outcome.map_err(|reason| ReceiptError::InvalidRecord {
            id: self.transaction_id().to_string(),
            reason,
        })
    }
}

impl From<Receipt> for Record {
    fn from(receipt: Receipt) -> Self {
        Record::Campaign(receipt)
    }
}

impl From<PricingReceipt> for Record {
    fn from(receipt: PricingReceipt) -> Self {
        Record::Pricing(receipt)
    }
}
