use clap::Parser;
use day_12::{cli::Args, part2::process};
use miette::Context;

#[tracing::instrument]
fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let file = args.read_input()?;
    let result = process(&file).context("process part 2")?;
    println!("{}", result);
    Ok(())
}
