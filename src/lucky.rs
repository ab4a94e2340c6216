use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::reference::{self, NumberRelationship};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyNumbersAnalysis {
    pub friends: Vec<u8>,
    pub enemies: Vec<u8>,
    pub neutrals: Vec<u8>,
}

pub fn lookup_relationship(number: u8) -> Option<&'static NumberRelationship> {
    reference::relationship(number)
}

/// Friends, enemies and neutrals shared by the Mulank and Destiny numbers.
///
/// Each side's lists are merged, then a number survives only in the one list
/// the other two merged lists do not mention. A number the two sources
/// disagree about is dropped entirely. Unknown inputs give three empty lists.
pub fn calculate_lucky_numbers(mulank: u8, destiny: u8) -> LuckyNumbersAnalysis {
    let (first, second) = match (lookup_relationship(mulank), lookup_relationship(destiny)) {
        (Some(first), Some(second)) => (first, second),
        _ => return LuckyNumbersAnalysis::default(),
    };

    let union = |a: &[u8], b: &[u8]| -> BTreeSet<u8> { a.iter().chain(b).copied().collect() };
    let friends = union(first.friends, second.friends);
    let enemies = union(first.enemies, second.enemies);
    let neutrals = union(first.neutrals, second.neutrals);

    let exclusive = |own: &BTreeSet<u8>, x: &BTreeSet<u8>, y: &BTreeSet<u8>| -> Vec<u8> {
        own.iter()
            .filter(|d| !x.contains(*d) && !y.contains(*d))
            .copied()
            .collect()
    };

    LuckyNumbersAnalysis {
        friends: exclusive(&friends, &enemies, &neutrals),
        enemies: exclusive(&enemies, &friends, &neutrals),
        neutrals: exclusive(&neutrals, &friends, &enemies),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_disjoint(analysis: &LuckyNumbersAnalysis) -> bool {
        let mut seen = BTreeSet::new();
        analysis
            .friends
            .iter()
            .chain(&analysis.enemies)
            .chain(&analysis.neutrals)
            .all(|d| seen.insert(*d))
    }

    #[test]
    fn same_number_twice_reflects_its_own_table() {
        let lucky = calculate_lucky_numbers(1, 1);
        assert_eq!(lucky.friends, vec![1, 2, 3, 9]);
        assert_eq!(lucky.enemies, vec![6, 8]);
        assert_eq!(lucky.neutrals, vec![4, 5, 7]);
    }

    #[test]
    fn disagreement_removes_the_number() {
        // 2 is a friend of 1 but an enemy of 8; 8 is an enemy of 1 and both
        // friend and enemy of itself.
        let lucky = calculate_lucky_numbers(1, 8);
        assert!(!lucky.friends.contains(&2));
        assert!(!lucky.enemies.contains(&2));
        assert!(!lucky.friends.contains(&8));
        assert!(!lucky.enemies.contains(&8));
        assert_eq!(lucky.friends, Vec::<u8>::new());
        assert_eq!(lucky.enemies, Vec::<u8>::new());
        assert_eq!(lucky.neutrals, vec![4]);
    }

    #[test]
    fn mulank_two_destiny_one() {
        let lucky = calculate_lucky_numbers(2, 1);
        assert_eq!(lucky.friends, vec![1, 2, 3]);
        assert_eq!(lucky.enemies, vec![8]);
        assert_eq!(lucky.neutrals, vec![7]);
    }

    #[test]
    fn results_are_sorted_and_disjoint_for_every_pair() {
        for mulank in 1..=9 {
            for destiny in 1..=9 {
                let lucky = calculate_lucky_numbers(mulank, destiny);
                assert!(is_disjoint(&lucky), "{mulank}/{destiny}: {lucky:?}");
                for list in [&lucky.friends, &lucky.enemies, &lucky.neutrals] {
                    assert!(list.windows(2).all(|w| w[0] < w[1]));
                }
            }
        }
    }

    #[test]
    fn unknown_numbers_give_empty_lists() {
        assert_eq!(calculate_lucky_numbers(0, 5), LuckyNumbersAnalysis::default());
        assert_eq!(calculate_lucky_numbers(5, 12), LuckyNumbersAnalysis::default());
    }
}
