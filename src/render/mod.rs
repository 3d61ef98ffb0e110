mod format;
mod layout;
mod style;
mod surface;

use rand::Rng;
use tracing::debug;

use crate::error::{ReceiptError, Result};
use crate::synth::Record;

pub use format::{grouped_int, money, percent, whole_money, wrap};
pub use layout::compose;
pub use style::{
    templates, Banner, DetailsFormat, InfoLayout, Palette, Section, TemplateStyle, TotalsFormat,
    CAMPAIGN_TEMPLATES, PRICING_TEMPLATES,
};
pub use surface::{
    Align, Canvas, Color, DrawOp, Font, Page, PageSize, Surface, TableLook, TableSpec,
};

/// Pick a template index out of `count`.
///
/// A requested index wraps around the template count; without one the
/// choice is uniform over all templates.
pub fn select_template<R: Rng>(
    count: usize,
    requested: Option<usize>,
    rng: &mut R,
) -> Result<usize> {
    if count == 0 {
        return Err(ReceiptError::Render("no templates to choose from".to_string()));
    }
    Ok(match requested {
        Some(index) => index % count,
        None => rng.random_range(0..count),
    })
}

/// Draw `record` onto `surface` with one of the templates for its kind.
///
/// Returns the index of the template that was used.
pub fn render<S, R>(
    surface: &mut S,
    record: &Record,
    template_index: Option<usize>,
    rng: &mut R,
) -> Result<usize>
where
    S: Surface + ?Sized,
    R: Rng,
{
    record.validate()?;

    let set = templates(record.kind());
    let index = select_template(set.len(), template_index, rng)?;
    let style = &set[index];
    debug!(
        template = style.name,
        index,
        transaction_id = record.transaction_id(),
        "rendering receipt"
    );

    compose(surface, style, record);
    Ok(index)
}
