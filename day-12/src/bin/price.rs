use clap::Parser;
use day_12::{cli::Args, price::report};
use miette::Context;
use tracing::debug;

#[tracing::instrument]
fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let file = args.read_input()?;
    let pricing = report(&file).context("price garden")?;

    for region in &pricing.regions {
        debug!(
            "{}: area {} perimeter {} sides {} price {} discounted {}",
            region.label,
            region.area,
            region.perimeter,
            region.sides,
            region.price(),
            region.discounted_price()
        );
    }

    println!("Total price: {}", pricing.total_price());
    println!("Total price with discount: {}", pricing.total_price_with_discount());
    Ok(())
}
