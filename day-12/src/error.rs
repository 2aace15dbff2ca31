use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum GardenError {
    #[error("Garden map is empty")]
    #[diagnostic(code(day12::empty), help("Provide at least one row of plots"))]
    Empty,

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] GridParseError),

    #[error("Row {row} has {found} plots, expected {expected}")]
    #[diagnostic(
        code(day12::ragged),
        help("Every row of the garden must have the same length")
    )]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Side reduction did not settle after {merges} merges of {sides} sides")]
    #[diagnostic(code(day12::side_reduction))]
    SideReduction { sides: usize, merges: usize },
}

#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse garden map")]
#[diagnostic(
    code(day12::parse_error),
    help("Plots must be printable ASCII characters, one row per line")
)]
pub struct GridParseError {
    #[source_code]
    pub src: String,
    #[label("Unexpected character here")]
    pub span: SourceSpan,
}

impl GridParseError {
    pub(crate) fn at(src: &str, offset: usize) -> Self {
        let len = src
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .map_or(0, char::len_utf8);
        Self {
            src: src.to_string(),
            span: (offset, len).into(),
        }
    }
}
