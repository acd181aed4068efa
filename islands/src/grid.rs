use std::fmt;

use chumsky::prelude::*;
use miette::Diagnostic;
use thiserror::Error;

/// A single map cell. `'0'` parses to water, `'1'` to land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Water,
    Land,
}

/// Ways a map file can fail validation.
#[derive(Debug, Error, Diagnostic)]
pub enum GridError {
    #[error("grid rows have different sizes: row {row} is {len} cells wide, expected {expected}")]
    #[diagnostic(code(islands::grid::unequal_dimensions))]
    UnequalDimensions {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("grid is not made of zeros and ones: found {symbol:?}")]
    #[diagnostic(code(islands::grid::invalid_symbol))]
    InvalidSymbol { symbol: char },
}

/// A validated rectangular map, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Parses the map body into rows of cells.
///
/// The grammar only accepts `'0'`, `'1'` and line breaks, so the single way
/// it can fail is a foreign character in the input.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<Cell>>, extra::Err<Rich<'a, char>>> {
    let cell = choice((just('0').to(Cell::Water), just('1').to(Cell::Land)));

    cell.repeated()
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
}

impl Grid {
    /// Builds a grid from the raw content of a map file.
    ///
    /// Blank lines are dropped before validation and never count as rows;
    /// the remaining rows must all have the same length.
    pub fn parse(input: &str) -> Result<Self, GridError> {
        let rows = parser()
            .parse(input)
            .into_result()
            .map_err(|errs| GridError::InvalidSymbol {
                symbol: errs
                    .first()
                    .and_then(|e| e.found().copied())
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
            })?;

        // Blank source lines carry no cells; drop them so trailing newlines
        // and interior gaps don't produce ragged rows.
        let rows: Vec<_> = rows.into_iter().filter(|r| !r.is_empty()).collect();

        let width = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((row, len)) = rows
            .iter()
            .enumerate()
            .find_map(|(i, r)| (r.len() != width).then_some((i, r.len())))
        {
            return Err(GridError::UnequalDimensions {
                row,
                len,
                expected: width,
            });
        }

        let height = rows.len();
        let cells = rows.into_iter().flatten().collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at (x, y), or `Water` if out of bounds.
    ///
    /// Signed coordinates let neighbor probes run off every edge without
    /// special-casing the borders.
    pub fn get(&self, x: isize, y: isize) -> Cell {
        if x < 0 || y < 0 {
            return Cell::Water;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return Cell::Water;
        }
        self.cells[y * self.width + x]
    }

    pub fn is_land(&self, x: isize, y: isize) -> bool {
        self.get(x, y) == Cell::Land
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                let symbol = match cell {
                    Cell::Water => '0',
                    Cell::Land => '1',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
