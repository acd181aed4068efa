pub mod count;
pub mod grid;

pub use count::count_islands;
pub use grid::{Cell, Grid, GridError};

/// Parses the raw content of a map file and counts its islands.
#[tracing::instrument]
pub fn process(input: &str) -> Result<usize, GridError> {
    let grid = Grid::parse(input)?;
    tracing::debug!(width = grid.width(), height = grid.height(), "parsed map");
    Ok(count_islands(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    use miette::Result;

    #[test]
    fn it_works() -> Result<()> {
        let input = "1111\n0111\n\n0110\n";
        assert_eq!(process(input)?, 1);
        Ok(())
    }

    #[test]
    fn invalid_input_reports_no_count() {
        assert!(matches!(
            process("01\n011"),
            Err(GridError::UnequalDimensions { .. })
        ));
        assert!(matches!(
            process("0x\n01"),
            Err(GridError::InvalidSymbol { symbol: 'x' })
        ));
    }
}
