//! Fixed vocabularies the synthesizer samples from.

pub const TRANSACTION_PREFIXES: &[&str] = &["TXN", "INV", "RCP", "ORD", "PAY"];

pub const COMPANY_SUFFIXES: &[&str] = &[
    "Inc.", "LLC", "Corp.", "Ltd.", "Group", "Agency", "Media", "Marketing",
];

pub const CAMPAIGN_ADJECTIVES: &[&str] = &[
    "Summer", "Winter", "Spring", "Fall", "Holiday", "Launch", "Premium", "Flash", "Grand",
    "Ultimate",
];

pub const CAMPAIGN_TYPES: &[&str] = &[
    "Sale",
    "Campaign",
    "Promotion",
    "Event",
    "Drive",
    "Initiative",
    "Program",
    "Showcase",
];

pub const CAMPAIGN_PERIODS: &[&str] = &["2024", "2025", "Q1", "Q2", "Q3", "Q4"];

pub const SERVICES: &[&str] = &[
    "Campaign Management",
    "Creative Design",
    "Video Production",
    "Copywriting",
    "Analytics & Reporting",
    "A/B Testing",
    "Audience Targeting",
    "Landing Page Design",
    "Display Ad Design",
    "Social Media Management",
    "SEO Optimization",
    "Content Creation",
];

pub const AD_PLATFORMS: &[&str] = &[
    "Google Ads",
    "Facebook Ads",
    "Instagram Ads",
    "LinkedIn Ads",
    "Twitter/X Ads",
    "TikTok Ads",
    "YouTube Ads",
    "Snapchat Ads",
    "Pinterest Ads",
    "Reddit Ads",
    "Amazon Ads",
    "Microsoft Ads",
];

pub const DISPLAY_FORMATS: &[&str] = &[
    "Interstitial Ads",
    "Native Ads",
    "Interactive Content",
    "Infographics",
    "Expanding Ads",
    "Lightbox Ads",
    "Pop-up Ads",
];

pub const VIDEO_FORMATS: &[&str] = &["Pre-roll", "Mid-roll", "Post-roll"];

pub const RAMP_UP_STRATEGIES: &[&str] = &[
    "Immediate - Full budget from day 1",
    "Gradual - 25% increase weekly over 4 weeks",
    "Fast - 50% increase weekly over 2 weeks",
    "Conservative - 10% increase daily for 10 days",
    "Aggressive - Double spend every 3 days",
    "Linear - Equal daily increase over 30 days",
    "Step - 33% increments at weeks 1, 2, 3",
];

pub const FREQUENCY_CAPS: &[&str] = &[
    "3 impressions per user per day",
    "5 impressions per user per week",
    "No frequency cap",
    "2 impressions per user per day",
    "10 impressions per user per week",
    "1 impression per user per day",
];

pub const GEOGRAPHIES: &[&str] = &[
    "United States",
    "Canada",
    "United Kingdom",
    "Australia",
    "Germany",
    "France",
    "Japan",
    "Brazil",
    "India",
    "Mexico",
];

pub const AGE_RANGES: &[&str] = &[
    "18-24", "25-34", "35-44", "45-54", "55-64", "18-34", "25-54", "35-65+",
];

pub const DEVICE_CLASSES: &[&str] = &[
    "All Devices",
    "Mobile Only",
    "Desktop Only",
    "Mobile & Tablet",
];

pub const TAX_RATES: &[f64] = &[0.0, 0.05, 0.07, 0.08, 0.0825, 0.10];

pub const PAYMENT_METHODS: &[&str] = &["Credit Card", "Wire Transfer", "ACH", "Check", "PayPal"];

/// Pricing-table receipts never settle through PayPal.
pub const PRICING_PAYMENT_METHODS: &[&str] = &["Credit Card", "Wire Transfer", "ACH", "Check"];

pub const MARKETS: &[&str] = &[
    "North America",
    "Europe",
    "Asia Pacific",
    "Latin America",
    "Middle East",
    "Africa",
    "Australia",
    "Southeast Asia",
    "Eastern Europe",
    "Western Europe",
    "South America",
    "Central America",
    "Nordic Countries",
    "UK & Ireland",
    "India",
    "China",
    "Japan",
    "Brazil",
];

pub const PRICING_TABLE_TYPES: &[&str] = &[
    "Geographic Pricing",
    "Demographic Pricing",
    "Device Pricing",
    "Time-Based Pricing",
    "Content Type Pricing",
    "Platform Pricing",
    "Engagement Tier Pricing",
    "Volume Discount Pricing",
];

pub const PRICING_CAMPAIGN_PERIODS: &[&str] = &["Q4", "Q1", "Summer", "Holiday", "Spring"];

pub const PRICING_TAX_RATE: f64 = 0.08;

pub const CLOSING_NOTES: &[&str] = &[
    "Thank you for your business!",
    "Net 30 payment terms",
    "Contact us for volume discounts",
    "Early payment discount available",
];
