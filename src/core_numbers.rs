use crate::date::BirthDate;
use crate::digits::reduce_to_single_digit;
use crate::error::Result;

/// Mulank (psychic number): the day of month, reduced.
pub fn calculate_mulank(date: &BirthDate) -> u8 {
    reduce_to_single_digit(date.day())
}

/// Destiny number: day + month + full year added as plain integers, then
/// reduced.
pub fn calculate_destiny_number(date: &BirthDate) -> u8 {
    reduce_to_single_digit(date.day() + date.month() + date.year())
}

pub fn calculate_mulank_from_iso(dob: &str) -> Result<u8> {
    Ok(calculate_mulank(&BirthDate::parse_iso(dob)?))
}

pub fn calculate_destiny_number_from_iso(dob: &str) -> Result<u8> {
    Ok(calculate_destiny_number(&BirthDate::parse_iso(dob)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mulank_reduces_the_day() {
        assert_eq!(calculate_mulank_from_iso("1990-07-20").unwrap(), 2);
        assert_eq!(calculate_mulank_from_iso("1985-03-29").unwrap(), 2);
        assert_eq!(calculate_mulank_from_iso("2000-01-09").unwrap(), 9);
    }

    #[test]
    fn mulank_ignores_month_and_year() {
        let a = calculate_mulank_from_iso("1990-07-28").unwrap();
        let b = calculate_mulank_from_iso("2023-11-28").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, 1);
    }

    #[test]
    fn destiny_sums_components_as_integers() {
        // 20 + 7 + 1990 = 2017 -> 10 -> 1
        assert_eq!(calculate_destiny_number_from_iso("1990-07-20").unwrap(), 1);
        // 31 + 12 + 1999 = 2042 -> 8
        assert_eq!(calculate_destiny_number_from_iso("1999-12-31").unwrap(), 8);
    }

    #[test]
    fn invalid_input_is_rejected_before_calculation() {
        assert!(calculate_mulank_from_iso("1990-13-01").is_err());
        assert!(calculate_destiny_number_from_iso("not a date").is_err());
    }
}
