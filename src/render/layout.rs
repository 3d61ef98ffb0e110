//! The single layout algorithm behind every vendor template.
//!
//! A `TemplateStyle` decides colours, fonts, banner shape and the order and
//! format of each section; this module decides where things go. Content
//! that would run past the bottom margin continues on a new page.

use std::f32::consts::PI;

use super::format::{grouped_int, money, percent, whole_money, wrap};
use super::style::{Banner, DetailsFormat, InfoLayout, Section, TemplateStyle, TotalsFormat};
use super::surface::{Color, Font, Surface, TableSpec};
use crate::synth::{CampaignDetails, PricingReceipt, Receipt, Record};

const LEFT: f32 = 50.0;
const RIGHT_MARGIN: f32 = 62.0;
const TOP_MARGIN: f32 = 60.0;
const BOTTOM_MARGIN: f32 = 50.0;
/// Rows a table keeps together with whatever precedes it
const KEEP_ROWS: usize = 6;

/// Draw `record` onto `surface` in `style` and close the last page.
pub fn compose<S: Surface + ?Sized>(surface: &mut S, style: &TemplateStyle, record: &Record) {
    let mut layout = Layout::new(surface, style);
    layout.header(record);

    for section in style.sections {
        match (section, record) {
            (Section::Info, _) => layout.info(record),
            (Section::Items, Record::Campaign(r)) => layout.line_items(r),
            (Section::Items, Record::Pricing(r)) => layout.pricing_tables(r),
            (Section::Platforms, Record::Campaign(r)) => layout.platforms(r),
            (Section::Details, Record::Campaign(r)) => layout.details(&r.campaign_details),
            (Section::Totals, _) => layout.totals(record),
            (Section::Notes, Record::Pricing(r)) => layout.notes(&r.notes),
            // Sections without data for this record kind are skipped
            _ => {}
        }
    }

    layout.surface.show_page();
}

struct Layout<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    style: &'a TemplateStyle,
    y: f32,
}

impl<'a, S: Surface + ?Sized> Layout<'a, S> {
    fn new(surface: &'a mut S, style: &'a TemplateStyle) -> Self {
        surface.set_page_size(style.page);
        surface.set_fill_color(Color::BLACK);
        surface.set_stroke_color(Color::BLACK);
        surface.set_line_width(1.0);
        Self {
            surface,
            style,
            y: style.page.height(),
        }
    }

    fn width(&self) -> f32 {
        self.style.page.width()
    }

    fn right(&self) -> f32 {
        self.width() - RIGHT_MARGIN
    }

    fn content_width(&self) -> f32 {
        self.right() - LEFT
    }

    /// Start a new page unless `needed` points fit above the bottom margin.
    /// Blocks taller than a whole page only get a fresh page.
    fn ensure(&mut self, needed: f32) {
        let usable = self.style.page.height() - TOP_MARGIN - BOTTOM_MARGIN;
        if self.y - needed.min(usable) < BOTTOM_MARGIN {
            self.new_page();
        }
    }

    fn new_page(&mut self) {
        self.surface.show_page();
        self.surface.set_page_size(self.style.page);
        self.y = self.style.page.height() - TOP_MARGIN;
    }

    fn body(&mut self, size: f32) {
        self.surface.set_font(self.style.body_font, size);
    }

    fn bold(&mut self, size: f32) {
        self.surface.set_font(self.style.body_font.bold(), size);
    }

    fn header(&mut self, record: &Record) {
        let top = self.style.page.height();
        let palette = self.style.palette;
        let banner = self.style.banner;
        let right = self.right();

        let bottom = self.banner(top);

        let filled = banner.is_filled();
        let (heading_y, tagline_y) = if filled {
            (top - 40.0, top - 56.0)
        } else {
            (top - 82.0, top - 98.0)
        };
        let name_color = if filled { palette.ink } else { palette.primary };
        let title_color = if banner.covers_title() {
            palette.ink
        } else {
            palette.primary
        };

        self.surface.set_fill_color(name_color);
        self.surface
            .set_font(self.style.heading_font, self.style.heading_size);
        self.surface.text(LEFT, heading_y, self.style.name);
        self.surface.set_font(self.style.body_font.regular(), 10.0);
        self.surface.text(LEFT, tagline_y, self.style.tagline);

        self.surface.set_fill_color(title_color);
        self.surface.set_font(self.style.heading_font.bold(), 16.0);
        self.surface.right_text(right, heading_y, self.style.title);
        self.surface.set_font(self.style.body_font.regular(), 10.0);
        self.surface
            .right_text(right, tagline_y, &format!("#{}", record.transaction_id()));
        self.surface.set_fill_color(Color::BLACK);

        self.y = bottom.min(tagline_y - 14.0) - 14.0;
        self.surface.set_stroke_color(palette.primary);
        self.surface.draw_line(LEFT, self.y, right, self.y);
        self.surface.set_stroke_color(Color::BLACK);
        self.y -= 25.0;
    }

    /// Draw the banner decoration; returns the lowest y it occupies.
    fn banner(&mut self, top: f32) -> f32 {
        let palette = self.style.palette;
        let w = self.width();
        let s = &mut *self.surface;
        s.set_fill_color(palette.primary);
        s.set_stroke_color(palette.primary);

        let bottom = match self.style.banner {
            Banner::Plain => top - 60.0,
            Banner::Band { height } => {
                s.draw_rect(0.0, top - height, w, height, true, false);
                if palette.secondary != palette.primary {
                    s.set_fill_color(palette.secondary);
                    s.draw_rect(0.0, top - height - 4.0, w, 4.0, true, false);
                }
                top - height - 4.0
            }
            Banner::Stripes => {
                let third = w / 3.0;
                let colors = [palette.primary, palette.secondary, palette.tertiary];
                for (i, color) in colors.into_iter().enumerate() {
                    s.set_fill_color(color);
                    s.draw_rect(third * i as f32, top - 62.0, third, 62.0, true, false);
                }
                top - 62.0
            }
            Banner::Outline => {
                s.set_line_width(2.0);
                s.draw_rect(40.0, top - 112.0, w - 80.0, 82.0, false, true);
                s.set_line_width(1.0);
                top - 112.0
            }
            Banner::Zigzag => {
                let mut points = Vec::new();
                let mut x = 0.0;
                let mut peak = false;
                while x < w {
                    points.push((x, if peak { top - 2.0 } else { top - 24.0 }));
                    x += 100.0;
                    peak = !peak;
                }
                points.extend([(w, top - 24.0), (w, top - 74.0), (0.0, top - 74.0)]);
                s.draw_path(&points, true, true, false);
                top - 74.0
            }
            Banner::Wave => {
                let steps = (w / 10.0).ceil() as usize;
                let mut points: Vec<(f32, f32)> = (0..=steps)
                    .map(|i| {
                        let x = (i as f32 * 10.0).min(w);
                        (x, top - 66.0 + 8.0 * (x / 20.0 * PI).sin())
                    })
                    .collect();
                points.extend([(w, top), (0.0, top)]);
                s.draw_path(&points, true, true, false);
                top - 74.0
            }
            Banner::Badge => {
                let (cx, cy, r) = (w - 92.0, top - 40.0, 30.0);
                let points: Vec<(f32, f32)> = (0..32)
                    .map(|i| {
                        let angle = i as f32 / 32.0 * 2.0 * PI;
                        (cx + r * angle.cos(), cy + r * angle.sin())
                    })
                    .collect();
                s.draw_path(&points, true, true, false);
                top - 60.0
            }
            Banner::Plus => {
                s.draw_rect(w - 122.0, top - 62.0, 15.0, 50.0, true, false);
                s.draw_rect(w - 137.0, top - 45.0, 45.0, 15.0, true, false);
                top - 62.0
            }
            Banner::Bars => {
                for (i, height) in [20.0, 32.0, 44.0].into_iter().enumerate() {
                    s.draw_rect(w - 162.0 + i as f32 * 20.0, top - 56.0, 10.0, height, true, false);
                }
                s.draw_rect(w - 167.0, top - 62.0, 60.0, 6.0, true, false);
                top - 62.0
            }
            Banner::Tab { width } => {
                s.draw_rect(0.0, top - 62.0, width, 52.0, true, false);
                top - 62.0
            }
            Banner::Diagonal => {
                let points = [(0.0, top), (360.0, top), (300.0, top - 110.0), (0.0, top - 80.0)];
                s.draw_path(&points, true, true, false);
                top - 110.0
            }
            Banner::Arrow => {
                let points = [
                    (0.0, top - 10.0),
                    (w - 80.0, top - 10.0),
                    (w - 30.0, top - 42.0),
                    (w - 80.0, top - 74.0),
                    (0.0, top - 74.0),
                ];
                s.draw_path(&points, true, true, false);
                top - 74.0
            }
        };

        s.set_fill_color(Color::BLACK);
        s.set_stroke_color(Color::BLACK);
        bottom
    }

    fn info(&mut self, record: &Record) {
        let date = record.date().format("%Y-%m-%d").to_string();
        let time = record.time().format("%H:%M").to_string();
        let contact = match record {
            Record::Campaign(r) => r.email.clone(),
            Record::Pricing(_) => String::new(),
        };

        match self.style.info {
            InfoLayout::Stacked => {
                let lines = [
                    format!("Date: {date} {time}"),
                    format!("Customer: {}", record.customer_name()),
                    format!("Company: {}", record.company_name()),
                    format!("Campaign: {}", record.campaign_name()),
                    format!("Payment: {}", record.payment_method()),
                ];
                self.ensure(lines.len() as f32 * 15.0);
                self.body(10.0);
                for line in &lines {
                    self.surface.text(LEFT, self.y, line);
                    self.y -= 15.0;
                }
            }
            InfoLayout::TwoColumn => {
                self.ensure(70.0);
                let column = LEFT + 300.0;
                self.bold(11.0);
                self.surface.text(LEFT, self.y, "BILL TO:");
                self.body(10.0);
                self.surface.text(LEFT, self.y - 15.0, record.company_name());
                self.surface.text(LEFT, self.y - 30.0, record.customer_name());
                if !contact.is_empty() {
                    self.surface.text(LEFT, self.y - 45.0, &contact);
                }

                self.surface
                    .text(column, self.y, &format!("Date: {date} {time}"));
                self.surface.text(
                    column,
                    self.y - 15.0,
                    &format!("Payment Method: {}", record.payment_method()),
                );
                self.surface.text(
                    column,
                    self.y - 30.0,
                    &format!("Campaign: {}", record.campaign_name()),
                );
                self.y -= 60.0;
            }
            InfoLayout::Ledger => {
                let entries = [
                    ("RECEIPT_ID", record.transaction_id().to_string()),
                    ("DATE", date),
                    ("TIME", time),
                    ("CLIENT", record.company_name().to_string()),
                    ("CONTACT", record.customer_name().to_string()),
                    ("CAMPAIGN", record.campaign_name().to_string()),
                    ("PAYMENT", record.payment_method().to_string()),
                ];
                self.ensure(entries.len() as f32 * 15.0);
                self.body(9.0);
                for (key, value) in &entries {
                    self.surface
                        .text(LEFT, self.y, &format!("{key:<14}: {value}"));
                    self.y -= 15.0;
                }
            }
        }

        self.y -= 15.0;
    }

    /// Draw a table whose first row is the header, splitting it across
    /// pages and repeating the header on each
    fn table(&mut self, fractions: &[f32], rows: Vec<Vec<String>>) {
        let width = self.content_width();
        let widths: Vec<f32> = fractions.iter().map(|f| f * width).collect();
        let look = self.style.table;

        let mut rows = rows.into_iter();
        let header = rows.next().unwrap_or_default();
        let mut remaining: Vec<Vec<String>> = rows.collect();

        self.ensure((remaining.len() + 1).min(KEEP_ROWS) as f32 * look.row_height);
        loop {
            let room = ((self.y - BOTTOM_MARGIN) / look.row_height).floor() as usize;
            let take = room.saturating_sub(1).max(1).min(remaining.len());

            let mut chunk = Vec::with_capacity(take + 1);
            chunk.push(header.clone());
            chunk.extend(remaining.drain(..take));
            let table = TableSpec {
                widths: widths.clone(),
                rows: chunk,
                look,
            };
            self.y = self.surface.draw_table(LEFT, self.y, &table);

            if remaining.is_empty() {
                break;
            }
            self.new_page();
        }
        self.y -= 20.0;
    }

    fn line_items(&mut self, receipt: &Receipt) {
        let mut rows = vec![header_row(&["Description", "Qty", "Unit Price", "Total"])];
        rows.extend(receipt.line_items.iter().map(|item| {
            vec![
                item.description.clone(),
                item.quantity.to_string(),
                money(item.unit_price),
                money(item.total),
            ]
        }));
        self.table(&[0.5, 0.15, 0.15, 0.2], rows);
    }

    fn pricing_tables(&mut self, receipt: &PricingReceipt) {
        let keep = 20.0 + KEEP_ROWS as f32 * self.style.table.row_height;
        self.heading("PRICING TABLES", 13.0, keep);

        for pricing in &receipt.pricing_tables {
            let mut rows = vec![header_row(&["Market", "Minimum (USD)", "Reach"])];
            rows.extend(pricing.markets.iter().map(|row| {
                vec![
                    row.market.clone(),
                    whole_money(row.min_value_usd as f64),
                    grouped_int(row.reach as i64),
                ]
            }));

            // Keep each title on the same page as its table
            self.ensure(20.0 + rows.len().min(KEEP_ROWS) as f32 * self.style.table.row_height);
            self.bold(11.0);
            self.surface.text(LEFT, self.y, &pricing.name);
            self.y -= 10.0;
            self.table(&[0.45, 0.275, 0.275], rows);
        }
    }

    fn platforms(&mut self, receipt: &Receipt) {
        if receipt.ad_platforms.is_empty() {
            return;
        }
        let keep = KEEP_ROWS as f32 * self.style.table.row_height;
        self.heading("AD PLATFORM SPEND", 9.0, keep);

        let mut rows = vec![header_row(&["Platform", "Spend", "Impressions", "Clicks"])];
        rows.extend(receipt.ad_platforms.iter().map(|p| {
            vec![
                p.platform.clone(),
                money(p.amount),
                grouped_int(p.impressions as i64),
                grouped_int(p.clicks as i64),
            ]
        }));
        self.table(&[0.4, 0.2, 0.2, 0.2], rows);
    }

    /// Section title in the primary colour; `keep` reserves room for what follows
    fn heading(&mut self, label: &str, size: f32, keep: f32) {
        self.ensure(size + keep);
        self.surface.set_fill_color(self.style.palette.primary);
        self.bold(size);
        self.surface.text(LEFT, self.y, label);
        self.surface.set_fill_color(Color::BLACK);
        self.y -= size + 6.0;
    }

    /// Heading line followed by body lines, kept together on one page
    fn block(&mut self, heading: &str, heading_font: Font, lines: &[String], leading: f32) {
        self.ensure(12.0 + lines.len() as f32 * leading);
        self.surface.set_fill_color(self.style.palette.primary);
        self.surface.set_font(heading_font, 8.0);
        self.surface.text(LEFT, self.y, heading);
        self.surface.set_fill_color(Color::BLACK);
        self.y -= 12.0;

        self.body(8.0);
        for line in lines {
            self.surface.text(LEFT, self.y, line);
            self.y -= leading;
        }
    }

    fn details(&mut self, d: &CampaignDetails) {
        let period = format!("{} to {}", d.start_date, d.end_date);
        let daily = whole_money(d.daily_budget);
        let bold = self.style.body_font.bold();

        match self.style.details {
            DetailsFormat::Paragraph => {
                let text = format!(
                    "{} campaign from {}. Budget: {}/day. Pricing: {} at {}. \
                     Metrics: CPM {}, CTR {:.1}%, Bounce {:.1}%. Targeting: {}, {}, {}.",
                    d.content.label(),
                    period,
                    daily,
                    d.pricing_model.label(),
                    d.rate_description,
                    money(d.cpm),
                    d.ctr,
                    d.bounce_rate,
                    d.geo_label(),
                    d.age_range,
                    d.devices
                );
                self.block("CAMPAIGN DETAILS", bold, &wrap(&text, 110), 10.0);
            }
            DetailsFormat::Grid => self.details_grid(d, &period, &daily),
            DetailsFormat::Boxed { filled } => {
                let lines = [
                    format!(
                        "CPM: {} | CTR: {:.1}% | Bounce: {:.1}%",
                        money(d.cpm),
                        d.ctr,
                        d.bounce_rate
                    ),
                    format!(
                        "{} | {} days | {}/day",
                        d.content.label(),
                        d.duration_days,
                        daily
                    ),
                    format!("Period: {period}"),
                    format!("{} | {}", d.pricing_model.label(), d.geo_label()),
                ];
                self.details_box(&lines, filled);
            }
            DetailsFormat::KeyValue => {
                let geography: String = d.geo_label().chars().take(30).collect();
                let entries = [
                    ("start_date", d.start_date.to_string()),
                    ("end_date", d.end_date.to_string()),
                    ("cpm", format!("{:.2}", d.cpm)),
                    ("ctr", format!("{:.1}", d.ctr)),
                    ("bounce", format!("{:.1}", d.bounce_rate)),
                    ("budget/day", format!("{:.0}", d.daily_budget)),
                    ("type", d.content.label().to_string()),
                    ("model", d.pricing_model.label().to_string()),
                    ("geography", geography),
                ];
                let lines: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("  {key:.<11}: {value}"))
                    .collect();
                self.block("[ CAMPAIGN_METRICS ]", Font::CourierBold, &lines, 9.0);
            }
            DetailsFormat::Bullets { marker } => {
                let lines = [
                    format!("Content: {}", d.content.label()),
                    format!("Period: {period} ({} days)", d.duration_days),
                    format!("Budget: {daily}/day ({} total)", whole_money(d.total_budget)),
                    format!(
                        "Pricing: {} at {}",
                        d.pricing_model.label(),
                        d.rate_description
                    ),
                    format!(
                        "Metrics: CPM {}, CTR {:.1}%, Bounce {:.1}%",
                        money(d.cpm),
                        d.ctr,
                        d.bounce_rate
                    ),
                    format!(
                        "Formats: {} / {}",
                        d.display_formats_label(),
                        d.video_formats_label()
                    ),
                    format!(
                        "Targeting: {}, {}, {}",
                        d.geo_label(),
                        d.age_range,
                        d.devices
                    ),
                    format!("Ramp-up: {}", d.ramp_up_strategy),
                    format!("Frequency: {}", d.frequency_cap),
                ]
                .map(|line| format!("{marker} {line}"));
                self.block("CAMPAIGN DETAILS", bold, &lines, 10.0);
            }
            DetailsFormat::Compact => {
                let text = format!(
                    "{} | {} | CPM {} CTR {:.1}% | {}",
                    d.content.label(),
                    period,
                    money(d.cpm),
                    d.ctr,
                    d.geo_label()
                );
                self.block("CAMPAIGN:", bold, &wrap(&text, 120), 10.0);
            }
            DetailsFormat::Hashtags => {
                let tags = format!(
                    "#{} #CPM{:.0} #CTR{:.1} #Bounce{:.0}",
                    d.content.label().replace(' ', ""),
                    d.cpm,
                    d.ctr,
                    d.bounce_rate
                );
                let lines = [
                    format!(
                        "Campaign: {period} | {daily}/day | {}",
                        d.pricing_model.label()
                    ),
                    format!("{} days | {}", d.duration_days, d.geo_label()),
                ];
                self.block(&tags, Font::HelveticaBoldOblique, &lines, 10.0);
            }
            DetailsFormat::Wave => {
                let heading = format!("~ {} Campaign ~", d.content.label());
                let lines = [
                    format!(
                        "~ Metrics: CPM {} ~ CTR {:.1}% ~ Bounce {:.1}% ~",
                        money(d.cpm),
                        d.ctr,
                        d.bounce_rate
                    ),
                    format!(
                        "~ Budget: {daily}/day for {} days ~ {} ~",
                        d.duration_days,
                        d.pricing_model.label()
                    ),
                    format!(
                        "~ Reach: {}, {} on {} ~",
                        d.geo_label(),
                        d.age_range,
                        d.devices
                    ),
                    format!("~ Period: {} ~ {} ~", d.start_date, d.end_date),
                ];
                self.block(&heading, Font::HelveticaOblique, &lines, 9.0);
            }
        }

        self.y -= 12.0;
    }

    fn details_grid(&mut self, d: &CampaignDetails, period: &str, daily: &str) {
        let cells = [
            format!("CPM: {}", money(d.cpm)),
            format!("CTR: {:.1}%", d.ctr),
            format!("Bounce Rate: {:.1}%", d.bounce_rate),
            format!("Content: {}", d.content.label()),
            format!("Model: {}", d.pricing_model.label()),
            format!("Duration: {} days", d.duration_days),
        ];
        let wide = [
            format!("Period: {period}"),
            format!("Budget: {daily}/day ({} total)", whole_money(d.total_budget)),
            format!("Targeting: {}, {}", d.geo_label(), d.age_range),
        ];
        let column_width = self.content_width() / 3.0;

        self.ensure(14.0 + 10.0 * (cells.len() / 3 + wide.len()) as f32);
        self.surface.set_fill_color(self.style.palette.primary);
        self.bold(9.0);
        self.surface.text(LEFT, self.y, "CAMPAIGN DETAILS:");
        self.surface.set_fill_color(Color::BLACK);
        self.y -= 14.0;

        self.body(8.0);
        for row in cells.chunks(3) {
            for (i, cell) in row.iter().enumerate() {
                self.surface
                    .text(LEFT + column_width * i as f32, self.y, cell);
            }
            self.y -= 10.0;
        }
        for line in &wide {
            self.surface.text(LEFT, self.y, line);
            self.y -= 10.0;
        }
    }

    fn details_box(&mut self, lines: &[String], filled: bool) {
        let height = 20.0 + lines.len() as f32 * 10.0;
        let width = self.content_width();
        self.ensure(height);

        let box_bottom = self.y - height;
        if filled {
            self.surface.set_fill_color(Color::LIGHT_GREY);
            self.surface.set_stroke_color(self.style.palette.primary);
            self.surface
                .draw_rect(LEFT, box_bottom, width, height, true, true);
        } else {
            self.surface.set_stroke_color(Color::GREY);
            self.surface
                .draw_rect(LEFT, box_bottom, width, height, false, true);
        }
        self.surface.set_fill_color(Color::BLACK);
        self.surface.set_stroke_color(Color::BLACK);

        self.bold(8.0);
        self.surface.text(LEFT + 5.0, self.y - 12.0, "CAMPAIGN METRICS");
        self.body(8.0);
        for (i, line) in lines.iter().enumerate() {
            self.surface
                .text(LEFT + 5.0, self.y - 22.0 - i as f32 * 10.0, line);
        }
        self.y = box_bottom - 10.0;
    }

    fn totals(&mut self, record: &Record) {
        let totals = record.totals();
        let right = self.right();
        let label_x = right - 150.0;
        let primary = self.style.palette.primary;
        let tax_label = format!("Tax ({}):", percent(totals.tax_rate));

        let framed = matches!(self.style.totals, TotalsFormat::Boxed | TotalsFormat::Filled);
        if self.style.totals == TotalsFormat::TotalOnly {
            self.ensure(25.0);
        } else {
            self.ensure(if framed { 70.0 } else { 55.0 });
        }

        match self.style.totals {
            TotalsFormat::Boxed | TotalsFormat::Filled => {
                let (x, top) = (label_x - 20.0, self.y);
                if self.style.totals == TotalsFormat::Filled {
                    self.surface.set_fill_color(Color::LIGHT_GREY);
                    self.surface.set_stroke_color(primary);
                    self.surface.draw_rect(x, top - 55.0, 170.0 + 20.0, 55.0, true, true);
                } else {
                    self.surface.draw_rect(x, top - 55.0, 170.0 + 20.0, 55.0, false, true);
                }
                self.surface.set_fill_color(Color::BLACK);
                self.surface.set_stroke_color(Color::BLACK);
                self.y -= 15.0;
            }
            TotalsFormat::Stacked | TotalsFormat::TotalOnly => {}
        }

        if self.style.totals != TotalsFormat::TotalOnly {
            self.body(10.0);
            self.surface.text(label_x, self.y, "Subtotal:");
            self.surface
                .right_text(right - 5.0, self.y, &money(totals.subtotal));
            self.surface.text(label_x, self.y - 15.0, &tax_label);
            self.surface
                .right_text(right - 5.0, self.y - 15.0, &money(totals.tax));
            self.y -= 32.0;
        }

        self.surface.set_fill_color(primary);
        self.bold(12.0);
        self.surface.text(label_x, self.y, "TOTAL:");
        self.surface
            .right_text(right - 5.0, self.y, &money(totals.total));
        self.surface.set_fill_color(Color::BLACK);
        self.y -= if framed { 30.0 } else { 25.0 };
    }

    fn notes(&mut self, notes: &str) {
        self.ensure(20.0);
        self.surface.set_font(Font::HelveticaOblique, 8.0);
        self.surface.text(LEFT, self.y, notes);
        self.y -= 20.0;
    }
}

fn header_row(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}
