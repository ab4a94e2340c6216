/// Repeatedly sums decimal digits until a single digit remains.
///
/// Master numbers (11, 22, 33) are reduced like any other. Callers pass
/// `n >= 1`; zero comes back unchanged.
pub fn reduce_to_single_digit(n: u32) -> u8 {
    let mut value = n;
    while value > 9 {
        value = digit_sum(value);
    }
    value as u8
}

pub fn digit_sum(n: u32) -> u32 {
    let mut rest = n;
    let mut sum = 0;
    while rest > 0 {
        sum += rest % 10;
        rest /= 10;
    }
    sum
}

/// Non-zero digits of `text` in reading order. Anything that is not an ASCII
/// digit is skipped.
pub fn nonzero_digits(text: &str) -> Vec<u8> {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .filter(|d| *d != 0)
        .collect()
}

/// Occurrence count per digit, indexed by the digit itself (slot 0 unused).
pub fn digit_counts(digits: &[u8]) -> [u32; 10] {
    let mut counts = [0u32; 10];
    for &digit in digits {
        if (1..=9).contains(&digit) {
            counts[digit as usize] += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digits_are_unchanged() {
        for n in 1..=9 {
            assert_eq!(reduce_to_single_digit(n), n as u8);
        }
    }

    #[test]
    fn reduces_through_several_passes() {
        assert_eq!(reduce_to_single_digit(2017), 1);
        assert_eq!(reduce_to_single_digit(99_999), 9);
        assert_eq!(reduce_to_single_digit(38), 2);
    }

    #[test]
    fn master_numbers_are_not_preserved() {
        assert_eq!(reduce_to_single_digit(11), 2);
        assert_eq!(reduce_to_single_digit(22), 4);
        assert_eq!(reduce_to_single_digit(33), 6);
    }

    #[test]
    fn reduction_stays_in_range_and_is_idempotent() {
        for n in 1..=20_000u32 {
            let once = reduce_to_single_digit(n);
            assert!((1..=9).contains(&once), "{n} reduced to {once}");
            assert_eq!(reduce_to_single_digit(once as u32), once);
        }
    }

    #[test]
    fn extraction_drops_zeros_and_separators() {
        assert_eq!(nonzero_digits("1990-07-20"), vec![1, 9, 9, 7, 2]);
        assert_eq!(nonzero_digits("0000"), Vec::<u8>::new());
    }

    #[test]
    fn counts_by_digit() {
        let counts = digit_counts(&[2, 7, 1, 9, 9]);
        assert_eq!(counts[9], 2);
        assert_eq!(counts[1], 1);
        assert_eq!(counts[5], 0);
        assert_eq!(counts.iter().sum::<u32>(), 5);
    }
}
