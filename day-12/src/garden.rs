use std::fmt;

use glam::IVec2;
use itertools::iproduct;
use tracing::debug;

use crate::error::{GardenError, GridParseError};

/// Rectangular map of garden plots, one plant label per plot.
///
/// Positions are `IVec2` with `x` as the column and `y` as the row, both
/// starting at zero in the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Garden {
    plots: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Garden {
    /// Parses a garden map, one row per line.
    ///
    /// Blank lines are skipped. Every remaining row must have the same
    /// number of plots.
    pub fn parse(input: &str) -> Result<Self, GardenError> {
        if input.trim().is_empty() {
            return Err(GardenError::Empty);
        }

        let rows = parser::parse_rows(input)?;
        let garden = Self::from_rows(rows)?;
        debug!(width = garden.width, height = garden.height, "Parsed garden map");
        Ok(garden)
    }

    pub fn from_rows(plots: Vec<Vec<char>>) -> Result<Self, GardenError> {
        let width = plots.first().map(Vec::len).ok_or(GardenError::Empty)?;
        if width == 0 {
            return Err(GardenError::Empty);
        }

        if let Some((row, found)) = plots
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GardenError::Ragged {
                row: row + 1,
                expected: width,
                found,
            });
        }

        let height = plots.len();
        Ok(Self {
            plots,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Label of the plot at `position`, or `None` outside the map.
    pub fn label(&self, position: IVec2) -> Option<char> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        self.plots.get(y)?.get(x).copied()
    }

    /// Every position of the map in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = IVec2> + '_ {
        iproduct!(0..self.height, 0..self.width).map(|(y, x)| IVec2::new(x as i32, y as i32))
    }
}

impl fmt::Display for Garden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.plots {
            for plot in row {
                write!(f, "{}", plot)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// region: nom parser
mod parser {
    use nom::{
        character::complete::{line_ending, satisfy},
        multi::{many0, many1, separated_list1},
        sequence::preceded,
        IResult,
    };
    use nom_locate::LocatedSpan;

    use super::GridParseError;

    type Span<'a> = LocatedSpan<&'a str>;

    fn parse_plot(input: Span) -> IResult<Span, char> {
        satisfy(|c: char| c.is_ascii_graphic())(input)
    }

    fn parse_grid(input: Span) -> IResult<Span, Vec<Vec<char>>> {
        preceded(
            many0(line_ending),
            separated_list1(many1(line_ending), many1(parse_plot)),
        )(input)
    }

    pub(super) fn parse_rows(input: &str) -> Result<Vec<Vec<char>>, GridParseError> {
        let (rest, rows) = match parse_grid(Span::new(input)) {
            Ok(parsed) => parsed,
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
                return Err(GridParseError::at(input, e.input.location_offset()));
            }
            Err(nom::Err::Incomplete(_)) => return Err(GridParseError::at(input, input.len())),
        };

        // only line endings may follow the last row
        let fragment = rest.fragment();
        let trailing = fragment.trim_start_matches(['\r', '\n']);
        if !trailing.is_empty() {
            let offset = rest.location_offset() + (fragment.len() - trailing.len());
            return Err(GridParseError::at(input, offset));
        }

        Ok(rows)
    }

}
// endregion

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_garden() -> miette::Result<()> {
        let garden = Garden::parse("AAAA\nBBCD\nBBCC\nEEEC\n")?;
        assert_eq!(4, garden.width());
        assert_eq!(4, garden.height());
        assert_eq!(16, garden.cell_count());
        assert_eq!(Some('D'), garden.label(IVec2::new(3, 1)));
        assert_eq!(Some('E'), garden.label(IVec2::new(0, 3)));
        Ok(())
    }

    #[test]
    fn test_label_out_of_bounds() -> miette::Result<()> {
        let garden = Garden::parse("AB\nCD")?;
        assert_eq!(None, garden.label(IVec2::new(-1, 0)));
        assert_eq!(None, garden.label(IVec2::new(0, -1)));
        assert_eq!(None, garden.label(IVec2::new(2, 0)));
        assert_eq!(None, garden.label(IVec2::new(0, 2)));
        Ok(())
    }

    #[test]
    fn test_positions_row_major() -> miette::Result<()> {
        let garden = Garden::parse("AB\nCD")?;
        let labels: String = garden
            .positions()
            .filter_map(|position| garden.label(position))
            .collect();
        assert_eq!("ABCD", labels);
        Ok(())
    }

    #[test]
    fn test_parse_garden_after_blank_lines() -> miette::Result<()> {
        let garden = Garden::parse("\n\nAB\nCD\n")?;
        assert_eq!(2, garden.width());
        assert_eq!(2, garden.height());
        assert_eq!(Some('A'), garden.label(IVec2::new(0, 0)));
        Ok(())
    }

    #[test]
    fn test_empty_garden() {
        assert!(matches!(Garden::parse(""), Err(GardenError::Empty)));
        assert!(matches!(Garden::parse("\n\n"), Err(GardenError::Empty)));
    }

    #[test]
    fn test_ragged_garden() {
        let err = Garden::parse("AAA\nAA\nAAA").unwrap_err();
        assert!(matches!(
            err,
            GardenError::Ragged {
                row: 2,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_invalid_plot() {
        let err = Garden::parse("AA\nA A").unwrap_err();
        assert!(matches!(err, GardenError::Parse(_)));
    }

    #[test]
    fn test_garden_display() -> miette::Result<()> {
        let garden = Garden::parse("AB\nCD")?;
        assert_eq!("AB\nCD\n", garden.to_string());
        Ok(())
    }
}
