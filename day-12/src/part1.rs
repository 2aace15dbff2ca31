use tracing::info;

use crate::region::{survey, PriceModel};

/// Total fence price of every region: area times perimeter.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let pricing = survey(input)?;
    let total = pricing.total(PriceModel::Perimeter);
    info!(regions = pricing.regions.len(), total, "Priced fences");
    Ok(total.to_string())
}
