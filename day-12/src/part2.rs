use tracing::info;

use crate::region::{survey, PriceModel};

/// Total fence price with the bulk discount: area times number of sides.
#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> miette::Result<String> {
    let pricing = survey(input)?;
    let total = pricing.total(PriceModel::BulkDiscount);
    info!(regions = pricing.regions.len(), total, "Priced fences with bulk discount");
    Ok(total.to_string())
}
