//! Plane analysis over the Lu Shu grid: the three rows, three columns and
//! two diagonals, plus the digits missing from the grid.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::{position_of, LuShuGrid};
use crate::reference::{self, PlaneInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    Mental,
    Emotional,
    Practical,
    Thought,
    Will,
    Action,
    Diagonal1,
    Diagonal2,
}

impl Plane {
    pub const ALL: [Plane; 8] = [
        Plane::Mental,
        Plane::Emotional,
        Plane::Practical,
        Plane::Thought,
        Plane::Will,
        Plane::Action,
        Plane::Diagonal1,
        Plane::Diagonal2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Plane::Mental => "mental",
            Plane::Emotional => "emotional",
            Plane::Practical => "practical",
            Plane::Thought => "thought",
            Plane::Will => "will",
            Plane::Action => "action",
            Plane::Diagonal1 => "diagonal1",
            Plane::Diagonal2 => "diagonal2",
        }
    }

    /// Grid cells (row, col) making up the plane, in order.
    pub fn cells(&self) -> [(usize, usize); 3] {
        match self {
            Plane::Mental => [(0, 0), (0, 1), (0, 2)],
            Plane::Emotional => [(1, 0), (1, 1), (1, 2)],
            Plane::Practical => [(2, 0), (2, 1), (2, 2)],
            Plane::Thought => [(0, 0), (1, 0), (2, 0)],
            Plane::Will => [(0, 1), (1, 1), (2, 1)],
            Plane::Action => [(0, 2), (1, 2), (2, 2)],
            Plane::Diagonal1 => [(0, 0), (1, 1), (2, 2)],
            Plane::Diagonal2 => [(0, 2), (1, 1), (2, 0)],
        }
    }

    pub fn values(&self, grid: &LuShuGrid) -> [u32; 3] {
        self.cells().map(|(row, col)| grid.cell(row, col))
    }

    pub fn info(&self) -> &'static PlaneInfo {
        reference::plane_info(*self)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn from_percentage(percent: u8) -> Self {
        match percent {
            0..=33 => Strength::Weak,
            34..=66 => Strength::Moderate,
            67..=99 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Moderate => "moderate",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very-strong",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneAnalysis {
    pub fill_percentage: u8,
    pub filled_count: u8,
    pub total_count: u8,
    pub strength: Strength,
    pub is_active: bool,
}

pub const ACTIVE_THRESHOLD: u8 = 67;

/// Fill ratio of three cells. Percentages round up so one and two filled
/// cells land on 34 and 67.
pub fn analyze_plane(values: [u32; 3]) -> PlaneAnalysis {
    let filled = values.iter().filter(|v| **v > 0).count() as u8;
    let total = values.len() as u8;
    let fill_percentage = ((filled as u32 * 100 + total as u32 - 1) / total as u32) as u8;

    PlaneAnalysis {
        fill_percentage,
        filled_count: filled,
        total_count: total,
        strength: Strength::from_percentage(fill_percentage),
        is_active: fill_percentage >= ACTIVE_THRESHOLD,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaneReport {
    pub plane: Plane,
    pub values: [u32; 3],
    #[serde(flatten)]
    pub info: &'static PlaneInfo,
    #[serde(flatten)]
    pub analysis: PlaneAnalysis,
}

pub fn grid_plane_analyses(grid: &LuShuGrid) -> BTreeMap<Plane, PlaneReport> {
    Plane::ALL
        .iter()
        .map(|plane| {
            let values = plane.values(grid);
            let report = PlaneReport {
                plane: *plane,
                values,
                info: plane.info(),
                analysis: analyze_plane(values),
            };
            (*plane, report)
        })
        .collect()
}

pub fn active_planes(grid: &LuShuGrid) -> Vec<Plane> {
    Plane::ALL
        .iter()
        .copied()
        .filter(|plane| analyze_plane(plane.values(grid)).is_active)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingNumberEffect {
    pub number: u8,
    pub effect: String,
}

/// Digits 1..=9 whose grid cell is empty, ascending.
pub fn missing_numbers(grid: &LuShuGrid) -> Vec<MissingNumberEffect> {
    (1..=9u8)
        .filter(|digit| {
            position_of(*digit)
                .map(|(row, col)| grid.cell(row, col) == 0)
                .unwrap_or(false)
        })
        .filter_map(|digit| {
            reference::missing_number_effect(digit).map(|effect| MissingNumberEffect {
                number: digit,
                effect: effect.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::generate_lu_shu_grid_from_iso;

    #[test]
    fn empty_plane_is_weak() {
        let analysis = analyze_plane([0, 0, 0]);
        assert_eq!(analysis.fill_percentage, 0);
        assert_eq!(analysis.strength, Strength::Weak);
        assert!(!analysis.is_active);
    }

    #[test]
    fn full_plane_is_very_strong() {
        let analysis = analyze_plane([1, 1, 1]);
        assert_eq!(analysis.fill_percentage, 100);
        assert_eq!(analysis.filled_count, 3);
        assert_eq!(analysis.total_count, 3);
        assert_eq!(analysis.strength, Strength::VeryStrong);
        assert!(analysis.is_active);
    }

    #[test]
    fn two_filled_cells_are_strong_and_active() {
        let analysis = analyze_plane([1, 1, 0]);
        assert_eq!(analysis.fill_percentage, 67);
        assert_eq!(analysis.strength, Strength::Strong);
        assert!(analysis.is_active);
    }

    #[test]
    fn one_filled_cell_is_moderate() {
        let analysis = analyze_plane([0, 3, 0]);
        assert_eq!(analysis.fill_percentage, 34);
        assert_eq!(analysis.strength, Strength::Moderate);
        assert!(!analysis.is_active);
    }

    #[test]
    fn repeated_digits_count_once_toward_fill() {
        assert_eq!(analyze_plane([4, 0, 0]), analyze_plane([1, 0, 0]));
    }

    #[test]
    fn analyses_cover_all_eight_planes() {
        let grid = generate_lu_shu_grid_from_iso("1990-07-20").unwrap();
        let analyses = grid_plane_analyses(&grid);
        assert_eq!(analyses.len(), 8);

        // top row 4,9,2 -> 0,2,1
        let mental = &analyses[&Plane::Mental];
        assert_eq!(mental.values, [0, 2, 1]);
        assert_eq!(mental.analysis.strength, Strength::Strong);

        // middle column 9,5,1 -> 2,0,1
        assert!(analyses[&Plane::Will].analysis.is_active);
        assert_eq!(analyses[&Plane::Diagonal1].analysis.fill_percentage, 0);
    }

    #[test]
    fn active_planes_match_analyses() {
        let grid = generate_lu_shu_grid_from_iso("1990-07-20").unwrap();
        assert_eq!(active_planes(&grid), vec![Plane::Mental, Plane::Will, Plane::Action]);
    }

    #[test]
    fn missing_numbers_are_the_empty_cells() {
        let grid = generate_lu_shu_grid_from_iso("1990-07-20").unwrap();
        let missing: Vec<u8> = missing_numbers(&grid).iter().map(|m| m.number).collect();
        assert_eq!(missing, vec![3, 4, 5, 6, 8]);

        let present = (1..=9u8).filter(|d| grid.frequency(*d) > 0).count();
        assert_eq!(missing.len() + present, 9);
    }

    #[test]
    fn full_grid_has_nothing_missing() {
        let grid = LuShuGrid::from_cells([[1, 1, 1], [1, 1, 1], [1, 1, 1]]);
        assert!(missing_numbers(&grid).is_empty());
        assert_eq!(active_planes(&grid).len(), 8);
    }

    #[test]
    fn plane_keys_serialize_by_name() {
        let json = serde_json::to_value(Plane::Diagonal2).unwrap();
        assert_eq!(json, "diagonal2");
        let strength = serde_json::to_value(Strength::VeryStrong).unwrap();
        assert_eq!(strength, "very-strong");
    }
}
