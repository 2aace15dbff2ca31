pub mod cli;
pub mod error;
pub mod garden;
pub mod part1;
pub mod part2;
pub mod price;
pub mod region;
pub mod side;
