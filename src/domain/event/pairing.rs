//! Pairing generator - pure domain service assigning gift targets.
//!
//! The participants are shuffled (Fisher–Yates) and each one gives to the
//! next in the shuffled order, wrapping around. The result is one cycle
//! through everyone, so no participant ever draws themselves once there are
//! at least two of them.
//!
//! Only single-cycle assignments are produced; the generator does not sample
//! uniformly over all derangements.

use rand::Rng;

/// A giver and the person they prepare a present for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing<T> {
    /// The Secret Santa.
    pub user: T,
    /// Who `user` gives to.
    pub target: T,
}

/// Builds a cyclic derangement over `participants`.
///
/// Every input appears exactly once as `user` and once as `target`. Callers
/// must reject fewer than two participants beforehand.
pub fn generate_pairs<T, R>(mut participants: Vec<T>, rng: &mut R) -> Vec<Pairing<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    shuffle(&mut participants, rng);

    let n = participants.len();
    (0..n)
        .map(|i| Pairing {
            user: participants[i].clone(),
            target: participants[(i + 1) % n].clone(),
        })
        .collect()
}

/// In-place Fisher–Yates shuffle.
fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn assert_derangement(input: &[u32], pairs: &[Pairing<u32>]) {
        assert_eq!(pairs.len(), input.len());

        let givers: HashSet<u32> = pairs.iter().map(|p| p.user).collect();
        let targets: HashSet<u32> = pairs.iter().map(|p| p.target).collect();
        let expected: HashSet<u32> = input.iter().copied().collect();

        assert_eq!(givers, expected, "every participant gives exactly once");
        assert_eq!(targets, expected, "every participant receives exactly once");
        for pair in pairs {
            assert_ne!(pair.user, pair.target, "{} drew themselves", pair.user);
        }
    }

    #[test]
    fn generates_derangements_for_two_to_one_hundred_participants() {
        let mut rng = StdRng::seed_from_u64(2024);
        for n in 2..=100u32 {
            let input: Vec<u32> = (0..n).collect();
            let pairs = generate_pairs(input.clone(), &mut rng);
            assert_derangement(&input, &pairs);
        }
    }

    #[test]
    fn two_participants_give_to_each_other() {
        let mut rng = StdRng::seed_from_u64(7);
        let pairs = generate_pairs(vec![13u32, 14], &mut rng);
        let mut as_tuples: Vec<(u32, u32)> = pairs.iter().map(|p| (p.user, p.target)).collect();
        as_tuples.sort();
        assert_eq!(as_tuples, vec![(13, 14), (14, 13)]);
    }

    #[test]
    fn assignment_forms_a_single_cycle() {
        let mut rng = StdRng::seed_from_u64(99);
        let pairs = generate_pairs((0..12u32).collect(), &mut rng);

        let next: std::collections::HashMap<u32, u32> =
            pairs.iter().map(|p| (p.user, p.target)).collect();
        let start = pairs[0].user;
        let mut current = next[&start];
        let mut steps = 1;
        while current != start {
            current = next[&current];
            steps += 1;
        }
        assert_eq!(steps, 12);
    }

    #[test]
    fn shuffle_is_driven_by_the_rng() {
        let input: Vec<u32> = (0..20).collect();
        let a = generate_pairs(input.clone(), &mut StdRng::seed_from_u64(1));
        let b = generate_pairs(input.clone(), &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn never_assigns_self(n in 2usize..=100, seed in any::<u64>()) {
            let input: Vec<u32> = (0..n as u32).collect();
            let pairs = generate_pairs(input.clone(), &mut StdRng::seed_from_u64(seed));
            assert_derangement(&input, &pairs);
        }
    }
}
