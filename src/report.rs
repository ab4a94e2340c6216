use std::fmt::Write;

use crate::grid::GRID_LAYOUT;
use crate::reading::Reading;
use crate::reference::{number_profile, relationship};

fn join<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        return "none".to_string();
    }
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Markdown rendering of a reading.
pub fn build_report(reading: &Reading) -> String {
    let mut output = String::new();
    let title = reading.title.as_deref().unwrap_or("Numerology Reading");

    let _ = writeln!(output, "# {title}");
    let _ = writeln!(output, "Date of birth: {}", reading.date_of_birth);
    let _ = writeln!(output);
    let _ = writeln!(output, "## Core Numbers");

    for (label, number) in [("Mulank", reading.mulank), ("Destiny Number", reading.destiny)] {
        match number_profile(number) {
            Some(profile) => {
                let _ = writeln!(
                    output,
                    "- {}: {} ({}, ruled by {})",
                    label, number, profile.title, profile.planet
                );
                let _ = writeln!(output, "  - Traits: {}", join(profile.characteristics));
                let _ = writeln!(output, "  - Careers: {}", join(profile.careers));
            }
            None => {
                let _ = writeln!(output, "- {label}: {number}");
            }
        }
    }

    if let Some(profile) = number_profile(reading.mulank) {
        let _ = writeln!(output, "- Lucky colors: {}", join(profile.lucky_colors));
        let _ = writeln!(output, "- Lucky days: {}", join(profile.lucky_days));
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Lu Shu Grid");
    let _ = writeln!(output, "```");
    for (row, digits) in reading.lu_shu_grid.grid.iter().zip(GRID_LAYOUT.iter()) {
        let cells: Vec<String> = row
            .iter()
            .zip(digits.iter())
            .map(|(count, digit)| {
                if *count == 0 {
                    "-".repeat(3)
                } else {
                    format!("{:<3}", digit.to_string().repeat(*count as usize))
                }
            })
            .collect();
        let _ = writeln!(output, "{}", cells.join(" | "));
    }
    let _ = writeln!(output, "```");

    let _ = writeln!(output);
    let _ = writeln!(output, "## Planes");
    for report in reading.plane_analyses().values() {
        let _ = writeln!(
            output,
            "- {}: {}% filled, {}{}",
            report.info.name,
            report.analysis.fill_percentage,
            report.analysis.strength.as_str(),
            if report.analysis.is_active { " (active)" } else { "" }
        );
        if !report.analysis.is_active {
            if let Some(tip) = report.info.balance_tip {
                let _ = writeln!(output, "  - Tip: {tip}");
            }
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Missing Numbers");
    match reading.missing_numbers.as_deref() {
        Some(missing) if !missing.is_empty() => {
            for entry in missing {
                let _ = writeln!(output, "- {}: {}", entry.number, entry.effect);
            }
        }
        _ => {
            let _ = writeln!(output, "Every number is present in the grid.");
        }
    }

    let personality = &reading.personality_analysis;
    let _ = writeln!(output);
    let _ = writeln!(output, "## Personality");
    let _ = writeln!(output, "**{}**", personality.personality_type);
    let _ = writeln!(output, "{}", personality.description);
    let _ = writeln!(
        output,
        "- Achievement numbers: {}, emotional numbers: {}, fives: {}",
        personality.group_a_count, personality.group_b_count, personality.number5_count
    );
    let _ = writeln!(output, "- Traits: {}", join(&personality.traits));
    for behavior in personality.behaviors.iter() {
        let _ = writeln!(output, "- {behavior}");
    }

    let lucky = &reading.lucky_numbers;
    let _ = writeln!(output);
    let _ = writeln!(output, "## Lucky Numbers");
    for number in [reading.mulank, reading.destiny] {
        if let Some(entry) = relationship(number) {
            let _ = writeln!(output, "- {} is the {}", number, entry.role);
        }
    }
    let _ = writeln!(output, "- Friendly: {}", join(&lucky.friends));
    let _ = writeln!(output, "- Unfavourable: {}", join(&lucky.enemies));
    let _ = writeln!(output, "- Neutral: {}", join(&lucky.neutrals));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::calculate_reading_from_iso;

    #[test]
    fn report_lists_core_numbers_and_sections() {
        let reading = calculate_reading_from_iso("1990-07-20").unwrap();
        let report = build_report(&reading);

        assert!(report.starts_with("# Numerology Reading"));
        assert!(report.contains("Date of birth: 1990-07-20"));
        assert!(report.contains("- Mulank: 2 (The Peacemaker, ruled by Moon)"));
        assert!(report.contains("- Destiny Number: 1 (The Leader, ruled by Sun)"));
        assert!(report.contains("- Mental Plane: 67% filled, strong (active)"));
        assert!(report.contains("**Balanced Personality**"));
        assert!(report.contains("- Friendly: 1, 2, 3"));
    }

    #[test]
    fn grid_shows_repeated_digits() {
        let reading = calculate_reading_from_iso("1990-07-20").unwrap();
        let report = build_report(&reading);
        assert!(report.contains("--- | 99  | 2  "));
    }

    #[test]
    fn uses_title_when_present() {
        let reading = calculate_reading_from_iso("1990-07-20")
            .unwrap()
            .with_title(Some("Asha".to_string()));
        assert!(build_report(&reading).starts_with("# Asha"));
    }
}
