//! Lu Shu grid construction.
//!
//! The grid is the Lo Shu magic square with each cell holding how often its
//! digit occurs in the `DDMMYYYY` form of the birth date:
//!
//! ```text
//! 4 9 2
//! 3 5 7
//! 8 1 6
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::date::BirthDate;
use crate::digits::{digit_counts, nonzero_digits};
use crate::error::Result;

/// Digit at each grid position, row by row.
pub const GRID_LAYOUT: [[u8; 3]; 3] = [[4, 9, 2], [3, 5, 7], [8, 1, 6]];

/// Frequency matrix in [`GRID_LAYOUT`] order.
pub type Grid = [[u32; 3]; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuShuGrid {
    cells: Grid,
}

impl LuShuGrid {
    pub fn from_cells(cells: Grid) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &Grid {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Frequency of `digit`; zero for anything outside 1..=9.
    pub fn frequency(&self, digit: u8) -> u32 {
        match position_of(digit) {
            Some((row, col)) => self.cells[row][col],
            None => 0,
        }
    }

    /// Digit -> count for every digit that occurs at least once.
    pub fn frequencies(&self) -> BTreeMap<u8, u32> {
        (1..=9u8)
            .map(|digit| (digit, self.frequency(digit)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    pub fn total(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }
}

/// Grid position of a digit, from the fixed layout.
pub fn position_of(digit: u8) -> Option<(usize, usize)> {
    match digit {
        4 => Some((0, 0)),
        9 => Some((0, 1)),
        2 => Some((0, 2)),
        3 => Some((1, 0)),
        5 => Some((1, 1)),
        7 => Some((1, 2)),
        8 => Some((2, 0)),
        1 => Some((2, 1)),
        6 => Some((2, 2)),
        _ => None,
    }
}

pub fn generate_lu_shu_grid(date: &BirthDate) -> LuShuGrid {
    let counts = digit_counts(&nonzero_digits(&date.ddmmyyyy()));
    let mut cells = [[0u32; 3]; 3];
    for (row, digits) in GRID_LAYOUT.iter().enumerate() {
        for (col, digit) in digits.iter().enumerate() {
            cells[row][col] = counts[*digit as usize];
        }
    }
    LuShuGrid { cells }
}

pub fn generate_lu_shu_grid_from_iso(dob: &str) -> Result<LuShuGrid> {
    Ok(generate_lu_shu_grid(&BirthDate::parse_iso(dob)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_grid_for_known_date() {
        let grid = generate_lu_shu_grid_from_iso("1990-07-20").unwrap();
        assert_eq!(grid.cells(), &[[0, 2, 1], [0, 0, 1], [0, 1, 0]]);
        assert_eq!(grid.frequency(9), 2);
        assert_eq!(
            grid.frequencies(),
            BTreeMap::from([(1, 1), (2, 1), (7, 1), (9, 2)])
        );
    }

    #[test]
    fn layout_and_position_table_agree() {
        for (row, digits) in GRID_LAYOUT.iter().enumerate() {
            for (col, digit) in digits.iter().enumerate() {
                assert_eq!(position_of(*digit), Some((row, col)));
            }
        }
        assert_eq!(position_of(0), None);
        assert_eq!(position_of(10), None);
    }

    #[test]
    fn cell_sum_matches_nonzero_digit_count() {
        for dob in ["1990-07-20", "2000-10-10", "1987-12-31", "1955-05-05", "2011-01-01"] {
            let date = BirthDate::parse_iso(dob).unwrap();
            let grid = generate_lu_shu_grid(&date);
            let expected = date.ddmmyyyy().chars().filter(|c| *c != '0').count() as u32;
            assert_eq!(grid.total(), expected, "{dob}");
        }
    }

    #[test]
    fn same_date_gives_same_grid() {
        let a = generate_lu_shu_grid_from_iso("1975-04-16").unwrap();
        let b = generate_lu_shu_grid_from_iso("1975-04-16").unwrap();
        assert_eq!(a, b);
    }
}
