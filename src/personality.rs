//! Personality classification from birth date digits.
//!
//! Digits split into an achievement group (1, 3, 4, 9) and an emotional group
//! (2, 6, 7, 8). 5 belongs to neither; its count is added to both group totals
//! before they are compared and so never tips the result to one side. It only
//! selects the description variant.

use serde::{Deserialize, Serialize};

use crate::date::BirthDate;
use crate::digits::nonzero_digits;
use crate::error::Result;
use crate::reference::{
    GroupProfile, ADAPTER_DIGIT, BALANCED_BEHAVIORS, BALANCED_DESCRIPTION, BALANCED_TYPE,
    FLEXIBLE_BEHAVIORS, FLEXIBLE_DESCRIPTION, FLEXIBLE_TRAITS, FLEXIBLE_TYPE, GROUP_A,
    GROUP_A_DIGITS, GROUP_B, GROUP_B_DIGITS,
};

const BALANCED_TRAITS_PER_GROUP: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DominantGroup {
    A,
    B,
    #[serde(rename = "balanced")]
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitFrequency {
    pub number: u8,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityAnalysis {
    pub frequencies: Vec<DigitFrequency>,
    pub group_a_count: u32,
    pub group_b_count: u32,
    pub number5_count: u32,
    pub dominant_group: DominantGroup,
    pub personality_type: String,
    pub traits: Vec<String>,
    pub behaviors: Vec<String>,
    pub description: String,
}

/// Frequency per digit, highest count first. Equal counts keep the order in
/// which the digits first appear.
pub fn digit_frequencies(digits: &[u8]) -> Vec<DigitFrequency> {
    let mut frequencies: Vec<DigitFrequency> = Vec::new();
    for &digit in digits {
        match frequencies.iter_mut().find(|f| f.number == digit) {
            Some(entry) => entry.count += 1,
            None => frequencies.push(DigitFrequency { number: digit, count: 1 }),
        }
    }
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies
}

fn group_count(frequencies: &[DigitFrequency], group: &[u8]) -> u32 {
    frequencies
        .iter()
        .filter(|f| group.contains(&f.number))
        .map(|f| f.count)
        .sum()
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn analyze_personality(date: &BirthDate) -> PersonalityAnalysis {
    classify(&nonzero_digits(&date.iso_digits()))
}

pub fn analyze_personality_from_dob(dob: &str) -> Result<PersonalityAnalysis> {
    Ok(analyze_personality(&BirthDate::parse_iso(dob)?))
}

/// Classify an arbitrary digit sequence. Zeros should already be removed.
pub fn classify(digits: &[u8]) -> PersonalityAnalysis {
    let frequencies = digit_frequencies(digits);
    let group_a_count = group_count(&frequencies, &GROUP_A_DIGITS);
    let group_b_count = group_count(&frequencies, &GROUP_B_DIGITS);
    let number5_count = group_count(&frequencies, &[ADAPTER_DIGIT]);

    let base = |dominant_group, personality_type: &str, traits, behaviors, description: &str| {
        PersonalityAnalysis {
            frequencies: frequencies.clone(),
            group_a_count,
            group_b_count,
            number5_count,
            dominant_group,
            personality_type: personality_type.to_string(),
            traits,
            behaviors,
            description: description.to_string(),
        }
    };

    if group_a_count == 0 && group_b_count == 0 {
        return base(
            DominantGroup::Balanced,
            FLEXIBLE_TYPE,
            owned(FLEXIBLE_TRAITS),
            owned(FLEXIBLE_BEHAVIORS),
            FLEXIBLE_DESCRIPTION,
        );
    }

    let group_a_total = group_a_count + number5_count;
    let group_b_total = group_b_count + number5_count;

    if group_a_total.abs_diff(group_b_total) <= 1 {
        let traits: Vec<String> = GROUP_A
            .traits
            .iter()
            .take(BALANCED_TRAITS_PER_GROUP)
            .chain(GROUP_B.traits.iter().take(BALANCED_TRAITS_PER_GROUP))
            .map(|s| s.to_string())
            .collect();
        return base(
            DominantGroup::Balanced,
            BALANCED_TYPE,
            traits,
            owned(BALANCED_BEHAVIORS),
            BALANCED_DESCRIPTION,
        );
    }

    let (dominant_group, profile): (DominantGroup, &GroupProfile) =
        if group_a_total > group_b_total {
            (DominantGroup::A, &GROUP_A)
        } else {
            (DominantGroup::B, &GROUP_B)
        };
    let description = if number5_count > 0 {
        profile.description_with_five
    } else {
        profile.description
    };

    base(
        dominant_group,
        profile.label,
        owned(profile.traits),
        owned(profile.behaviors),
        description,
    )
}
