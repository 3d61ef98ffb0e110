pub mod catalog;
mod generator;
mod record;

pub use generator::Synthesizer;
pub use record::{
    round1, round2, AdPlatform, Address, CampaignDetails, ContentTypes, LineItem, MarketRow,
    PricingModel, PricingReceipt, PricingTable, Receipt, Record, RecordKind, Totals,
};
