//! Team splitting

use crate::error::RandomError;
use crate::random::{shuffle, shuffle_in_place};
use crate::rng::RandomSource;

/// Splits `members` into `teams` groups of near-equal size.
///
/// Members are shuffled, then dealt round-robin: shuffled slot `i` goes to
/// team `i % teams`. Every member lands in exactly one team and team sizes
/// differ by at most one.
///
/// Dealing alone would always hand the extra members to the lowest team
/// indices, so the finished teams are shuffled once more. Which team ends up
/// larger is therefore random as well.
///
/// # Errors
///
/// [`RandomError::InvalidTeamCount`] when `teams` is zero or larger than the
/// number of members.
pub fn partition_into_teams<T, R>(
    members: &[T],
    teams: usize,
    rng: &mut R,
) -> Result<Vec<Vec<T>>, RandomError>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    if teams == 0 || teams > members.len() {
        return Err(RandomError::InvalidTeamCount {
            teams,
            members: members.len(),
        });
    }

    let per_team = members.len().div_ceil(teams);
    let mut out: Vec<Vec<T>> = (0..teams).map(|_| Vec::with_capacity(per_team)).collect();
    for (i, member) in shuffle(members, rng).into_iter().enumerate() {
        out[i % teams].push(member);
    }
    shuffle_in_place(&mut out, rng);

    tracing::debug!(members = members.len(), teams, "split members into teams");
    Ok(out)
}

/// One-line summary of a split, e.g. `1팀: A, B | 2팀: C`.
pub fn format_teams<S: AsRef<str>>(teams: &[Vec<S>]) -> String {
    teams
        .iter()
        .enumerate()
        .map(|(i, team)| {
            let names: Vec<&str> = team.iter().map(AsRef::as_ref).collect();
            format!("{}팀: {}", i + 1, names.join(", "))
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandom;
    use std::collections::HashSet;

    #[test]
    fn test_five_into_two() {
        let names = ["A", "B", "C", "D", "E"];
        let mut rng = SeededRandom::new(1);
        for _ in 0..20 {
            let teams = partition_into_teams(&names, 2, &mut rng).unwrap();
            assert_eq!(teams.len(), 2);

            let mut sizes: Vec<usize> = teams.iter().map(Vec::len).collect();
            sizes.sort();
            assert_eq!(sizes, vec![2, 3]);

            let mut all: Vec<&str> = teams.concat();
            all.sort();
            assert_eq!(all, vec!["A", "B", "C", "D", "E"]);
        }
    }

    #[test]
    fn test_sizes_balanced_for_many_shapes() {
        let mut rng = SeededRandom::new(2);
        for len in 1..=24usize {
            let names: Vec<String> = (0..len).map(|i| format!("p{i}")).collect();
            for k in 1..=len {
                let teams = partition_into_teams(&names, k, &mut rng).unwrap();
                assert_eq!(teams.len(), k);

                let max = teams.iter().map(Vec::len).max().unwrap();
                let min = teams.iter().map(Vec::len).min().unwrap();
                assert!(max - min <= 1, "len={len} k={k}");

                let mut all = teams.concat();
                all.sort();
                let mut expected = names.clone();
                expected.sort();
                assert_eq!(all, expected);
            }
        }
    }

    #[test]
    fn test_duplicate_names_kept() {
        let mut rng = SeededRandom::new(3);
        let teams = partition_into_teams(&["Kim", "Kim", "Lee"], 3, &mut rng).unwrap();
        let mut all = teams.concat();
        all.sort();
        assert_eq!(all, vec!["Kim", "Kim", "Lee"]);
        assert!(teams.iter().all(|t| t.len() == 1));
    }

    #[test]
    fn test_larger_team_position_varies() {
        let names = ["A", "B", "C"];
        let mut rng = SeededRandom::new(4);
        let mut big_index = HashSet::new();
        for _ in 0..200 {
            let teams = partition_into_teams(&names, 2, &mut rng).unwrap();
            let idx = teams.iter().position(|t| t.len() == 2).unwrap();
            big_index.insert(idx);
        }
        assert_eq!(big_index.len(), 2);
    }

    #[test]
    fn test_invalid_team_counts() {
        let names = ["A", "B", "C"];
        let mut rng = SeededRandom::new(5);
        assert_eq!(
            partition_into_teams(&names, 0, &mut rng),
            Err(RandomError::InvalidTeamCount { teams: 0, members: 3 })
        );
        assert_eq!(
            partition_into_teams(&names, 4, &mut rng),
            Err(RandomError::InvalidTeamCount { teams: 4, members: 3 })
        );

        let empty: [&str; 0] = [];
        assert!(partition_into_teams(&empty, 1, &mut rng).is_err());
    }

    #[test]
    fn test_format_teams() {
        let teams = vec![vec!["A", "B"], vec!["C"]];
        assert_eq!(format_teams(&teams), "1팀: A, B | 2팀: C");

        let none: Vec<Vec<String>> = Vec::new();
        assert_eq!(format_teams(&none), "");
    }
}
