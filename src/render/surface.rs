use serde::{Serialize, Serializer};

/// Page dimensions in points, origin at the bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageSize {
    Letter,
    A4,
}

impl PageSize {
    pub fn width(&self) -> f32 {
        match self {
            PageSize::Letter => 612.0,
            PageSize::A4 => 595.27,
        }
    }

    pub fn height(&self) -> f32 {
        match self {
            PageSize::Letter => 792.0,
            PageSize::A4 => 841.89,
        }
    }
}

/// 24-bit RGB colour, serialized as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color::hex(0x000000);
    pub const WHITE: Color = Color::hex(0xFFFFFF);
    pub const GREY: Color = Color::hex(0x808080);
    pub const LIGHT_GREY: Color = Color::hex(0xF0F0F0);
    pub const WHITESMOKE: Color = Color::hex(0xF5F5F5);

    pub const fn hex(rgb: u32) -> Self {
        Color(rgb & 0xFF_FFFF)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:06X}", self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// The standard PDF base fonts the templates use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Font {
    #[serde(rename = "Helvetica")]
    Helvetica,
    #[serde(rename = "Helvetica-Bold")]
    HelveticaBold,
    #[serde(rename = "Helvetica-Oblique")]
    HelveticaOblique,
    #[serde(rename = "Helvetica-BoldOblique")]
    HelveticaBoldOblique,
    #[serde(rename = "Times-Roman")]
    Times,
    #[serde(rename = "Times-Bold")]
    TimesBold,
    #[serde(rename = "Courier")]
    Courier,
    #[serde(rename = "Courier-Bold")]
    CourierBold,
}

impl Font {
    /// Bold face of the same family
    pub fn bold(&self) -> Font {
        match self {
            Font::Helvetica | Font::HelveticaBold => Font::HelveticaBold,
            Font::HelveticaOblique | Font::HelveticaBoldOblique => Font::HelveticaBoldOblique,
            Font::Times | Font::TimesBold => Font::TimesBold,
            Font::Courier | Font::CourierBold => Font::CourierBold,
        }
    }

    /// Upright regular face of the same family
    pub fn regular(&self) -> Font {
        match self {
            Font::Helvetica
            | Font::HelveticaBold
            | Font::HelveticaOblique
            | Font::HelveticaBoldOblique => Font::Helvetica,
            Font::Times | Font::TimesBold => Font::Times,
            Font::Courier | Font::CourierBold => Font::Courier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
    Center,
}

/// Header styling and grid of a structured table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableLook {
    pub header_fill: Color,
    pub header_text: Color,
    pub grid: Color,
    pub grid_width: f32,
    pub zebra: Option<Color>,
    pub font_size: f32,
    pub row_height: f32,
}

impl TableLook {
    pub const fn classic() -> Self {
        TableLook {
            header_fill: Color::GREY,
            header_text: Color::WHITESMOKE,
            grid: Color::BLACK,
            grid_width: 1.0,
            zebra: None,
            font_size: 10.0,
            row_height: 25.0,
        }
    }

    pub const fn banded(header_fill: Color) -> Self {
        TableLook {
            header_fill,
            header_text: Color::WHITESMOKE,
            grid: Color::GREY,
            grid_width: 0.5,
            zebra: Some(Color::LIGHT_GREY),
            font_size: 9.0,
            row_height: 22.0,
        }
    }
}

/// A table to lay out: the first row is the header
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub widths: Vec<f32>,
    pub rows: Vec<Vec<String>>,
    pub look: TableLook,
}

impl TableSpec {
    pub fn height(&self) -> f32 {
        self.rows.len() as f32 * self.look.row_height
    }
}

/// Drawing target for receipt templates.
///
/// Coordinates are points from the bottom-left corner of the current page.
pub trait Surface {
    fn set_page_size(&mut self, size: PageSize);
    fn set_font(&mut self, font: Font, size: f32);
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);

    fn draw_text(&mut self, x: f32, y: f32, text: &str, align: Align);
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: bool, stroke: bool);
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
    fn draw_path(&mut self, points: &[(f32, f32)], closed: bool, fill: bool, stroke: bool);

    /// Draw a table whose top edge sits at `top`; returns the y of its bottom edge.
    fn draw_table(&mut self, x: f32, top: f32, table: &TableSpec) -> f32;

    /// Finish the current page and start a new one
    fn show_page(&mut self);

    fn text(&mut self, x: f32, y: f32, text: &str) {
        self.draw_text(x, y, text, Align::Left);
    }

    fn right_text(&mut self, x: f32, y: f32, text: &str) {
        self.draw_text(x, y, text, Align::Right);
    }
}

/// One recorded drawing operation with its graphics state resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        text: String,
        font: Font,
        size: f32,
        fill: Color,
        align: Align,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Color>,
        stroke: Option<Color>,
        line_width: f32,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Color,
        line_width: f32,
    },
    Path {
        points: Vec<[f32; 2]>,
        closed: bool,
        fill: Option<Color>,
        stroke: Option<Color>,
        line_width: f32,
    },
    Table {
        x: f32,
        top: f32,
        widths: Vec<f32>,
        rows: Vec<Vec<String>>,
        font_size: f32,
        row_height: f32,
        header_fill: Color,
        header_text: Color,
        grid: Color,
        grid_width: f32,
        zebra: Option<Color>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub size: PageSize,
    pub width: f32,
    pub height: f32,
    pub ops: Vec<DrawOp>,
}

/// Recording surface: keeps every operation so a sink can persist it later.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Canvas {
    #[serde(skip)]
    size: PageSize,
    #[serde(skip)]
    font: Font,
    #[serde(skip)]
    font_size: f32,
    #[serde(skip)]
    fill: Color,
    #[serde(skip)]
    stroke: Color,
    #[serde(skip)]
    line_width: f32,
    #[serde(skip)]
    current: Vec<DrawOp>,
    pages: Vec<Page>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            size: PageSize::Letter,
            font: Font::Helvetica,
            font_size: 12.0,
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
            current: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Pages closed with `show_page`
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Operations drawn since the last `show_page`
    pub fn pending(&self) -> &[DrawOp] {
        &self.current
    }

    pub fn op_count(&self) -> usize {
        self.pages.iter().map(|p| p.ops.len()).sum::<usize>() + self.current.len()
    }

    /// Every text run on every page, in drawing order
    pub fn texts(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|p| p.ops.iter())
            .chain(self.current.iter())
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Canvas {
    fn set_page_size(&mut self, size: PageSize) {
        self.size = size;
    }

    fn set_font(&mut self, font: Font, size: f32) {
        self.font = font;
        self.font_size = size;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, align: Align) {
        self.current.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            font: self.font,
            size: self.font_size,
            fill: self.fill,
            align,
        });
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: bool, stroke: bool) {
        self.current.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            fill: fill.then_some(self.fill),
            stroke: stroke.then_some(self.stroke),
            line_width: self.line_width,
        });
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.current.push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            stroke: self.stroke,
            line_width: self.line_width,
        });
    }

    fn draw_path(&mut self, points: &[(f32, f32)], closed: bool, fill: bool, stroke: bool) {
        self.current.push(DrawOp::Path {
            points: points.iter().map(|&(x, y)| [x, y]).collect(),
            closed,
            fill: fill.then_some(self.fill),
            stroke: stroke.then_some(self.stroke),
            line_width: self.line_width,
        });
    }

    fn draw_table(&mut self, x: f32, top: f32, table: &TableSpec) -> f32 {
        let look = table.look;
        self.current.push(DrawOp::Table {
            x,
            top,
            widths: table.widths.clone(),
            rows: table.rows.clone(),
            font_size: look.font_size,
            row_height: look.row_height,
            header_fill: look.header_fill,
            header_text: look.header_text,
            grid: look.grid,
            grid_width: look.grid_width,
            zebra: look.zebra,
        });
        top - table.height()
    }

    fn show_page(&mut self) {
        let ops = std::mem::take(&mut self.current);
        self.pages.push(Page {
            size: self.size,
            width: self.size.width(),
            height: self.size.height(),
            ops,
        });
    }
}
