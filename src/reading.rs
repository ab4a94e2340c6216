use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core_numbers::{calculate_destiny_number, calculate_mulank};
use crate::date::BirthDate;
use crate::error::Result;
use crate::grid::{generate_lu_shu_grid, Grid, LuShuGrid};
use crate::lucky::{calculate_lucky_numbers, LuckyNumbersAnalysis};
use crate::personality::{analyze_personality, PersonalityAnalysis};
use crate::planes::{
    active_planes, grid_plane_analyses, missing_numbers, MissingNumberEffect, Plane, PlaneReport,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuShuGridRecord {
    pub grid: Grid,
    pub frequencies: BTreeMap<u8, u32>,
}

impl From<&LuShuGrid> for LuShuGridRecord {
    fn from(grid: &LuShuGrid) -> Self {
        Self {
            grid: *grid.cells(),
            frequencies: grid.frequencies(),
        }
    }
}

/// Everything computed for one date of birth, in the shape it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub date_of_birth: BirthDate,
    pub mulank: u8,
    pub destiny: u8,
    pub lu_shu_grid: LuShuGridRecord,
    pub personality_analysis: PersonalityAnalysis,
    pub lucky_numbers: LuckyNumbersAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_planes: Option<Vec<Plane>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_numbers: Option<Vec<MissingNumberEffect>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Reading {
    pub fn grid(&self) -> LuShuGrid {
        LuShuGrid::from_cells(self.lu_shu_grid.grid)
    }

    pub fn plane_analyses(&self) -> BTreeMap<Plane, PlaneReport> {
        grid_plane_analyses(&self.grid())
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title.filter(|t| !t.trim().is_empty());
        self
    }
}

pub fn calculate_reading(date: &BirthDate) -> Reading {
    let mulank = calculate_mulank(date);
    let destiny = calculate_destiny_number(date);
    let grid = generate_lu_shu_grid(date);
    let personality_analysis = analyze_personality(date);
    let lucky_numbers = calculate_lucky_numbers(mulank, destiny);

    tracing::debug!(
        %date,
        mulank,
        destiny,
        personality = %personality_analysis.personality_type,
        "calculated reading"
    );

    Reading {
        date_of_birth: *date,
        mulank,
        destiny,
        lu_shu_grid: LuShuGridRecord::from(&grid),
        personality_analysis,
        lucky_numbers,
        active_planes: Some(active_planes(&grid)),
        missing_numbers: Some(missing_numbers(&grid)),
        title: None,
    }
}

pub fn calculate_reading_from_iso(dob: &str) -> Result<Reading> {
    Ok(calculate_reading(&BirthDate::parse_iso(dob)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personality::DominantGroup;

    #[test]
    fn assembles_full_reading() {
        let reading = calculate_reading_from_iso("1990-07-20").unwrap();
        assert_eq!(reading.mulank, 2);
        assert_eq!(reading.destiny, 1);
        assert_eq!(reading.lu_shu_grid.grid, [[0, 2, 1], [0, 0, 1], [0, 1, 0]]);
        assert_eq!(reading.personality_analysis.dominant_group, DominantGroup::Balanced);
        assert_eq!(reading.lucky_numbers, calculate_lucky_numbers(2, 1));
        assert_eq!(
            reading.active_planes,
            Some(vec![Plane::Mental, Plane::Will, Plane::Action])
        );
        let missing: Vec<u8> = reading
            .missing_numbers
            .as_ref()
            .unwrap()
            .iter()
            .map(|m| m.number)
            .collect();
        assert_eq!(missing, vec![3, 4, 5, 6, 8]);
        assert!(reading.title.is_none());
    }

    #[test]
    fn serializes_with_storage_field_names() {
        let reading = calculate_reading_from_iso("1990-07-20")
            .unwrap()
            .with_title(Some("Mine".to_string()));
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["date_of_birth"], "1990-07-20");
        assert_eq!(json["mulank"], 2);
        assert_eq!(json["lu_shu_grid"]["frequencies"]["9"], 2);
        assert_eq!(json["lucky_numbers"]["friends"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["active_planes"][0], "mental");
        assert_eq!(json["title"], "Mine");

        let back: Reading = serde_json::from_value(json).unwrap();
        assert_eq!(back, reading);
    }

    #[test]
    fn blank_titles_are_dropped() {
        let reading = calculate_reading_from_iso("2001-01-01")
            .unwrap()
            .with_title(Some("   ".to_string()));
        assert!(reading.title.is_none());
    }

    #[test]
    fn grid_round_trips_to_plane_analyses() {
        let reading = calculate_reading_from_iso("1984-11-05").unwrap();
        assert_eq!(reading.plane_analyses().len(), 8);
        assert_eq!(reading.grid().total(), 7);
    }
}
