use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};

#[derive(Debug, Parser)]
#[command(about = "Prices the fences around garden regions")]
pub struct Args {
    /// Garden map, one row of plots per line
    #[arg(default_value = "input1.txt")]
    pub input: PathBuf,
}

impl Args {
    pub fn read_input(&self) -> miette::Result<String> {
        std::fs::read_to_string(&self.input)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read {}", self.input.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input() {
        let args = Args::parse_from(["part1"]);
        assert_eq!(PathBuf::from("input1.txt"), args.input);
    }

    #[test]
    fn test_missing_input() {
        let args = Args::parse_from(["part1", "does/not/exist.txt"]);
        let err = args.read_input().unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }
}
