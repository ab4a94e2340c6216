//! Birth date parsing. This is the only place the calculation engine can fail;
//! everything downstream takes an already validated [`BirthDate`].

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{NumerologyError, Result};

/// A calendar date treated as a literal day/month/year triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse a strict ISO `YYYY-MM-DD` string.
    pub fn parse_iso(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = |reason: &str| NumerologyError::InvalidDate {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let bytes = trimmed.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid("expected YYYY-MM-DD"));
        }

        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map_err(|err| invalid(&err.to_string()))?;
        Self::from_naive(date).map_err(|_| invalid("year must be between 1 and 9999"))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            NumerologyError::InvalidDate {
                input: format!("{year:04}-{month:02}-{day:02}"),
                reason: "not a calendar date".to_string(),
            }
        })?;
        Self::from_naive(date)
    }

    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        if !(1..=9999).contains(&date.year()) {
            return Err(NumerologyError::InvalidDate {
                input: date.to_string(),
                reason: "year must be between 1 and 9999".to_string(),
            });
        }
        Ok(Self(date))
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> u32 {
        // from_naive keeps the year in 1..=9999
        self.0.year() as u32
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    /// `DDMMYYYY`, the layout the Lu Shu grid is read from.
    pub fn ddmmyyyy(&self) -> String {
        format!("{:02}{:02}{:04}", self.day(), self.month(), self.year())
    }

    /// `YYYYMMDD`, the digit order of the ISO form.
    pub fn iso_digits(&self) -> String {
        format!("{:04}{:02}{:02}", self.year(), self.month(), self.day())
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for BirthDate {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_iso(s)
    }
}

impl Serialize for BirthDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_iso(&raw).map_err(serde::de::Error::custom)
    }
}
