//! Per-zone combination search for the largest sustainable subset.

use crate::schema::FoodWeb;

use super::simulation::{SimulationOutcome, evaluate};
use super::zones::ZonePool;

/// Lexicographic `k`-subsets of `0..n`, yielded as sorted index lists.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    first: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            first: true,
            done: k > n,
        }
    }

    /// Advance to the next combination. Returns `None` once exhausted.
    pub fn next_combination(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(&self.indices);
        }

        let k = self.indices.len();
        // Rightmost position that can still move right.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] != i + self.n - k) else {
            self.done = true;
            return None;
        };
        self.indices[i] += 1;
        for j in (i + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(&self.indices)
    }
}

/// Best subset found for one zone.
#[derive(Debug, Clone)]
pub struct ZoneOutcome {
    pub zone: String,
    /// Winning subset as arena indices (empty if nothing is sustainable).
    pub members: Vec<usize>,
    /// Simulation result of the winning subset.
    pub web: FoodWeb,
    /// Number of candidate subsets handed to the sustainability check.
    pub evaluated: u64,
}

impl ZoneOutcome {
    #[inline]
    pub fn len(&self) -> usize {
        self.web.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.web.is_empty()
    }
}

/// Find the largest sustainable subset of a zone, at most `max_chain_length` members.
///
/// Among subsets of the winning size, the first in lexicographic order of the
/// pool's dominance sort wins. Sizes are tried largest first, which yields the
/// same subset as growing the size and replacing only on strict improvement.
pub fn search_zone(pool: &ZonePool, max_chain_length: usize) -> ZoneOutcome {
    let cap = max_chain_length.min(pool.len());
    let mut evaluated = 0u64;
    let mut best: Option<(Vec<usize>, SimulationOutcome)> = None;

    'sizes: for k in (1..=cap).rev() {
        let mut combos = Combinations::new(pool.len(), k);
        while let Some(candidate) = combos.next_combination() {
            evaluated += 1;
            if let Some(outcome) = evaluate(pool, candidate) {
                best = Some((candidate.to_vec(), outcome));
                break 'sizes;
            }
        }
    }

    let (members, web) = match best {
        Some((members, outcome)) => (members, outcome.to_food_web(pool)),
        None => (Vec::new(), FoodWeb::default()),
    };

    log::debug!(
        "zone '{}': {} species, best subset {} ({} subsets evaluated)",
        pool.zone(),
        pool.len(),
        members.len(),
        evaluated
    );

    ZoneOutcome {
        zone: pool.zone().to_string(),
        members,
        web,
        evaluated,
    }
}

/// Number of subsets an exhaustive search of a zone may evaluate.
///
/// Returns `None` when the count does not fit in a `u128`.
pub fn subset_count(zone_size: usize, max_chain_length: usize) -> Option<u128> {
    let mut total = 0u128;
    let mut binom = 1u128;
    for k in 1..=max_chain_length.min(zone_size) {
        binom = binom.checked_mul((zone_size - k + 1) as u128)? / k as u128;
        total = total.checked_add(binom)?;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{MAX_CHAIN_LENGTH, Species};

    fn collect(n: usize, k: usize) -> Vec<Vec<usize>> {
        let mut combos = Combinations::new(n, k);
        let mut out = Vec::new();
        while let Some(c) = combos.next_combination() {
            out.push(c.to_vec());
        }
        out
    }

    fn pool(species: &[Species]) -> ZonePool {
        let members: Vec<&Species> = species.iter().collect();
        ZonePool::resolve("test", &members)
    }

    #[test]
    fn test_combinations_lexicographic() {
        assert_eq!(
            collect(4, 2),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(collect(3, 3), vec![vec![0, 1, 2]]);
        assert!(collect(2, 3).is_empty());
        assert_eq!(collect(6, 3).len(), 20);
    }

    #[test]
    fn test_subset_count() {
        assert_eq!(subset_count(0, 8), Some(0));
        assert_eq!(subset_count(4, 8), Some(15));
        assert_eq!(subset_count(10, 2), Some(10 + 45));
        assert_eq!(subset_count(20, 8), Some(263_949));
    }

    #[test]
    fn test_subset_count_overflow() {
        assert_eq!(subset_count(1_000_000, 8), None);
        assert_eq!(subset_count(usize::MAX, 8), None);
        assert!(subset_count(1_000_000, 2).is_some());
    }

    #[test]
    fn test_chain_scenario() {
        let pool = pool(&[
            Species::producer("Animal1", 1000, "test"),
            Species::consumer("Animal2", 800, 900, "test", ["Animal1"]),
            Species::consumer("Animal3", 500, 900, "test", ["Animal1"]),
            Species::consumer("Animal4", 350, 400, "test", ["Animal3"]),
        ]);
        let outcome = search_zone(&pool, MAX_CHAIN_LENGTH);
        assert_eq!(
            outcome.web.names().collect::<Vec<_>>(),
            vec!["Animal1", "Animal3", "Animal4"]
        );
        assert_eq!(
            outcome.web.get("Animal4").unwrap().eats,
            Some(vec!["Animal3".to_string()])
        );
    }

    #[test]
    fn test_first_found_wins_ties() {
        // Both consumers are sustainable with the producer, but not together.
        let pool = pool(&[
            Species::producer("Kelp", 1000, "test"),
            Species::consumer("Urchin", 600, 900, "test", ["Kelp"]),
            Species::consumer("Snail", 400, 900, "test", ["Kelp"]),
        ]);
        let outcome = search_zone(&pool, MAX_CHAIN_LENGTH);
        assert_eq!(outcome.len(), 2);
        assert!(outcome.web.contains("Urchin"));
        assert!(!outcome.web.contains("Snail"));
    }

    #[test]
    fn test_chain_length_cap() {
        let species: Vec<Species> = (0..5)
            .map(|i| Species::producer(format!("P{i}"), 100 + i, "test"))
            .collect();
        let pool = pool(&species);
        assert_eq!(search_zone(&pool, 3).len(), 3);
        assert_eq!(search_zone(&pool, MAX_CHAIN_LENGTH).len(), 5);
    }

    #[test]
    fn test_default_chain_length_cap() {
        let species: Vec<Species> = (0..10)
            .map(|i| Species::producer(format!("P{i}"), 100 + i, "test"))
            .collect();
        let pool = pool(&species);
        let outcome = search_zone(&pool, MAX_CHAIN_LENGTH);

        assert_eq!(outcome.len(), 8);
        assert_eq!(outcome.members, (0..8).collect::<Vec<_>>());
        assert_eq!(
            outcome.web.names().collect::<Vec<_>>(),
            vec!["P9", "P8", "P7", "P6", "P5", "P4", "P3", "P2"]
        );
    }

    #[test]
    fn test_no_sustainable_subset() {
        let pool = pool(&[Species::consumer("Shark", 500, 100, "test", ["Shark"])]);
        let outcome = search_zone(&pool, MAX_CHAIN_LENGTH);
        assert!(outcome.is_empty());
        assert!(outcome.members.is_empty());
        assert_eq!(outcome.evaluated, 1);
    }
}
