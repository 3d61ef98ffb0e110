//! Vendor templates as data: every vendor is a set of style parameters fed
//! to the one shared layout in `layout.rs`.

use super::surface::{Color, Font, PageSize, TableLook};
use crate::synth::RecordKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    /// Text colour on filled banners
    pub ink: Color,
}

impl Palette {
    const fn new(primary: u32, secondary: u32, tertiary: u32) -> Self {
        Palette {
            primary: Color::hex(primary),
            secondary: Color::hex(secondary),
            tertiary: Color::hex(tertiary),
            ink: Color::WHITE,
        }
    }

    const fn mono(primary: u32) -> Self {
        Palette::new(primary, primary, primary)
    }
}

/// Decoration drawn across the top of the first page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Banner {
    Plain,
    Band { height: f32 },
    Stripes,
    Outline,
    Zigzag,
    Wave,
    Badge,
    Plus,
    Bars,
    Tab { width: f32 },
    Diagonal,
    Arrow,
}

impl Banner {
    /// Whether the vendor name sits on a filled shape
    pub fn is_filled(&self) -> bool {
        matches!(
            self,
            Banner::Band { .. }
                | Banner::Stripes
                | Banner::Zigzag
                | Banner::Wave
                | Banner::Tab { .. }
                | Banner::Diagonal
                | Banner::Arrow
        )
    }

    /// Whether the shape also runs under the title block on the right
    pub fn covers_title(&self) -> bool {
        matches!(
            self,
            Banner::Band { .. } | Banner::Stripes | Banner::Zigzag | Banner::Wave | Banner::Arrow
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoLayout {
    /// One label per line down the left margin
    Stacked,
    /// Bill-to block on the left, receipt facts on the right
    TwoColumn,
    /// Fixed-width `KEY : value` lines
    Ledger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsFormat {
    Paragraph,
    Grid,
    Boxed { filled: bool },
    KeyValue,
    Bullets { marker: &'static str },
    Compact,
    Hashtags,
    Wave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalsFormat {
    Stacked,
    Boxed,
    Filled,
    TotalOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Info,
    Items,
    Platforms,
    Details,
    Totals,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateStyle {
    pub name: &'static str,
    pub tagline: &'static str,
    pub page: PageSize,
    pub palette: Palette,
    pub heading_font: Font,
    pub body_font: Font,
    pub heading_size: f32,
    pub banner: Banner,
    /// Document title shown opposite the vendor name
    pub title: &'static str,
    pub info: InfoLayout,
    pub details: DetailsFormat,
    pub totals: TotalsFormat,
    pub sections: &'static [Section],
    pub table: TableLook,
}

impl TemplateStyle {
    /// Vendor name made safe for file names
    pub fn file_stem(&self) -> String {
        self.name.replace([' ', '/'], "_")
    }
}

const CLASSIC: &[Section] = &[
    Section::Info,
    Section::Items,
    Section::Details,
    Section::Totals,
];

const TOTALS_FIRST: &[Section] = &[
    Section::Info,
    Section::Items,
    Section::Totals,
    Section::Details,
];

const WITH_PLATFORMS: &[Section] = &[
    Section::Info,
    Section::Items,
    Section::Platforms,
    Section::Details,
    Section::Totals,
];

const PRICING: &[Section] = &[
    Section::Info,
    Section::Items,
    Section::Totals,
    Section::Notes,
];

const fn campaign(
    name: &'static str,
    tagline: &'static str,
    palette: Palette,
    banner: Banner,
    details: DetailsFormat,
    totals: TotalsFormat,
) -> TemplateStyle {
    TemplateStyle {
        name,
        tagline,
        page: PageSize::Letter,
        palette,
        heading_font: Font::HelveticaBold,
        body_font: Font::Helvetica,
        heading_size: 24.0,
        banner,
        title: "RECEIPT",
        info: InfoLayout::Stacked,
        details,
        totals,
        sections: CLASSIC,
        table: TableLook::classic(),
    }
}

pub const CAMPAIGN_TEMPLATES: &[TemplateStyle] = &[
    campaign(
        "TechAds Pro",
        "Modern Advertising Technology",
        Palette::mono(0x0066CC),
        Banner::Plain,
        DetailsFormat::Paragraph,
        TotalsFormat::Stacked,
    ),
    TemplateStyle {
        heading_font: Font::TimesBold,
        heading_size: 28.0,
        info: InfoLayout::TwoColumn,
        ..campaign(
            "AdMaster Global",
            "Premium Advertising Solutions",
            Palette::mono(0x1A1A1A),
            Banner::Band { height: 92.0 },
            DetailsFormat::Grid,
            TotalsFormat::Boxed,
        )
    },
    campaign(
        "Creative Campaigns",
        "Where Ideas Come Alive",
        Palette::new(0xFF6B35, 0xFFE66D, 0x4ECDC4),
        Banner::Band { height: 62.0 },
        DetailsFormat::Bullets { marker: "*" },
        TotalsFormat::Filled,
    ),
    TemplateStyle {
        heading_size: 22.0,
        info: InfoLayout::TwoColumn,
        ..campaign(
            "Digital Reach",
            "Digital Marketing Excellence",
            Palette::mono(0x000000),
            Banner::Plain,
            DetailsFormat::Boxed { filled: false },
            TotalsFormat::Stacked,
        )
    },
    TemplateStyle {
        heading_size: 30.0,
        ..campaign(
            "Apex Media",
            "Bold Ideas, Bigger Reach",
            Palette::mono(0x8B5CF6),
            Banner::Diagonal,
            DetailsFormat::Compact,
            TotalsFormat::Stacked,
        )
    },
    campaign(
        "Social Boost",
        "Amplify Your Social Presence",
        Palette::new(0xE91E63, 0x9C27B0, 0x3F51B5),
        Banner::Stripes,
        DetailsFormat::Boxed { filled: true },
        TotalsFormat::Stacked,
    ),
    TemplateStyle {
        body_font: Font::Courier,
        info: InfoLayout::TwoColumn,
        ..campaign(
            "Prime Ads",
            "Premium Placement Specialists",
            Palette {
                ink: Color::hex(0x1A1A1A),
                ..Palette::new(0xFFD700, 0xFFD700, 0x1A1A1A)
            },
            Banner::Band { height: 72.0 },
            DetailsFormat::KeyValue,
            TotalsFormat::Filled,
        )
    },
    TemplateStyle {
        sections: TOTALS_FIRST,
        ..campaign(
            "Click Velocity",
            "Speed Meets Performance",
            Palette::new(0x00BCD4, 0xFF5722, 0x00BCD4),
            Banner::Plain,
            DetailsFormat::Grid,
            TotalsFormat::Stacked,
        )
    },
    TemplateStyle {
        heading_font: Font::TimesBold,
        info: InfoLayout::TwoColumn,
        ..campaign(
            "Brand Builders",
            "Building Brands That Last",
            Palette::mono(0x2C3E50),
            Banner::Outline,
            DetailsFormat::Boxed { filled: false },
            TotalsFormat::Boxed,
        )
    },
    TemplateStyle {
        heading_size: 26.0,
        ..campaign(
            "Viral Marketing",
            "Make Some Noise",
            Palette::mono(0xFF1744),
            Banner::Zigzag,
            DetailsFormat::Hashtags,
            TotalsFormat::TotalOnly,
        )
    },
    TemplateStyle {
        page: PageSize::A4,
        heading_font: Font::CourierBold,
        body_font: Font::Courier,
        heading_size: 20.0,
        info: InfoLayout::Ledger,
        sections: WITH_PLATFORMS,
        ..campaign(
            "Metric Masters",
            "Data-Driven Advertising",
            Palette::mono(0x000000),
            Banner::Plain,
            DetailsFormat::KeyValue,
            TotalsFormat::TotalOnly,
        )
    },
    campaign(
        "Ad Genius",
        "Smart Advertising, Smarter Results",
        Palette::mono(0x6200EA),
        Banner::Tab { width: 300.0 },
        DetailsFormat::Compact,
        TotalsFormat::Stacked,
    ),
    TemplateStyle {
        info: InfoLayout::TwoColumn,
        sections: WITH_PLATFORMS,
        ..campaign(
            "Campaign Central",
            "Your Campaign Command Center",
            Palette::mono(0x009688),
            Banner::Outline,
            DetailsFormat::Grid,
            TotalsFormat::Boxed,
        )
    },
    campaign(
        "Pixel Perfect",
        "Design-Driven Advertising",
        Palette::new(0xE91E63, 0x9C27B0, 0xE91E63),
        Banner::Band { height: 62.0 },
        DetailsFormat::Grid,
        TotalsFormat::Stacked,
    ),
    TemplateStyle {
        heading_size: 32.0,
        sections: TOTALS_FIRST,
        ..campaign(
            "Impact Ads",
            "Maximum Impact Advertising",
            Palette::mono(0xD32F2F),
            Banner::Plain,
            DetailsFormat::Grid,
            TotalsFormat::Filled,
        )
    },
    campaign(
        "Growth Engine",
        "Fueling Business Growth",
        Palette::mono(0x388E3C),
        Banner::Badge,
        DetailsFormat::Bullets { marker: "-" },
        TotalsFormat::Stacked,
    ),
    TemplateStyle {
        heading_font: Font::CourierBold,
        body_font: Font::Courier,
        heading_size: 22.0,
        info: InfoLayout::Ledger,
        ..campaign(
            "Ad Lab",
            "Experimental Advertising Research",
            Palette::mono(0x00897B),
            Banner::Plain,
            DetailsFormat::KeyValue,
            TotalsFormat::TotalOnly,
        )
    },
    campaign(
        "Market Movers",
        "Moving Markets Forward",
        Palette::mono(0xFF6F00),
        Banner::Arrow,
        DetailsFormat::Bullets { marker: ">" },
        TotalsFormat::Stacked,
    ),
    TemplateStyle {
        sections: WITH_PLATFORMS,
        ..campaign(
            "Conversion Kings",
            "Ruling the Conversion Game",
            Palette {
                ink: Color::BLACK,
                ..Palette::mono(0xFFD700)
            },
            Banner::Bars,
            DetailsFormat::Grid,
            TotalsFormat::Filled,
        )
    },
    TemplateStyle {
        heading_size: 28.0,
        ..campaign(
            "Ad Wave",
            "Riding the Wave of Success",
            Palette::mono(0x00ACC1),
            Banner::Wave,
            DetailsFormat::Wave,
            TotalsFormat::TotalOnly,
        )
    },
    TemplateStyle {
        info: InfoLayout::TwoColumn,
        ..campaign(
            "Strategy Sphere",
            "360 Degree Campaign Strategy",
            Palette::mono(0x5E35B1),
            Banner::Badge,
            DetailsFormat::Paragraph,
            TotalsFormat::Boxed,
        )
    },
    campaign(
        "Performance Plus",
        "Positive Results, Every Time",
        Palette::mono(0x43A047),
        Banner::Plus,
        DetailsFormat::Bullets { marker: "+" },
        TotalsFormat::Stacked,
    ),
];

const fn pricing(
    name: &'static str,
    tagline: &'static str,
    primary: u32,
    heading_size: f32,
    info: InfoLayout,
) -> TemplateStyle {
    TemplateStyle {
        name,
        tagline,
        page: PageSize::Letter,
        palette: Palette::mono(primary),
        heading_font: Font::HelveticaBold,
        body_font: Font::Helvetica,
        heading_size,
        banner: Banner::Plain,
        title: "INVOICE",
        info,
        details: DetailsFormat::Compact,
        totals: TotalsFormat::Stacked,
        sections: PRICING,
        table: TableLook::banded(Color::hex(0x4A90E2)),
    }
}

pub const PRICING_TEMPLATES: &[TemplateStyle] = &[
    pricing(
        "Premium Ad Solutions",
        "Professional Media Buying",
        0x2C5AA0,
        22.0,
        InfoLayout::Stacked,
    ),
    pricing(
        "Global Media Partners",
        "Worldwide Market Access",
        0x555555,
        20.0,
        InfoLayout::Stacked,
    ),
    pricing(
        "Impact Advertising",
        "Energy in Every Placement",
        0xFF6600,
        24.0,
        InfoLayout::TwoColumn,
    ),
];

/// Template set that renders records of `kind`
pub fn templates(kind: RecordKind) -> &'static [TemplateStyle] {
    match kind {
        RecordKind::Campaign => CAMPAIGN_TEMPLATES,
        RecordKind::Pricing => PRICING_TEMPLATES,
    }
}
