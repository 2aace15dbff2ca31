use tracing::info;

use crate::region::{survey, Pricing};

/// Surveys the garden and returns every region with both fence totals.
#[tracing::instrument(skip(input))]
pub fn report(input: &str) -> miette::Result<Pricing> {
    let pricing = survey(input)?;
    info!(
        regions = pricing.regions.len(),
        total = pricing.total_price(),
        discounted = pricing.total_price_with_discount(),
        "Priced garden"
    );
    Ok(pricing)
}
