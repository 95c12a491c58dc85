//! Legacy longest-chain strategy.
//!
//! Builds the longest "eats" chain ending at every species with a dynamic
//! program, then greedily keeps disjoint producer-anchored chains. It does not
//! simulate depletion or split feeding, so it can disagree with
//! [`CombinatorialSolver`](super::CombinatorialSolver).

use std::collections::HashMap;

use crate::schema::{Selection, Species};

/// Longest-chain dynamic program restricted to the richest producer zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestChain;

impl LongestChain {
    /// Zone whose producers provide the most calories in total (first zone wins ties).
    pub fn richest_zone(species: &[Species]) -> Option<&str> {
        let mut totals: Vec<(&str, u64)> = Vec::new();
        let mut slot: HashMap<&str, usize> = HashMap::new();

        for s in species.iter().filter(|s| s.is_producer()) {
            let idx = *slot.entry(s.zone.as_str()).or_insert_with(|| {
                totals.push((s.zone.as_str(), 0));
                totals.len() - 1
            });
            totals[idx].1 += u64::from(s.calories_provided);
        }

        let mut best: Option<(&str, u64)> = None;
        for (zone, total) in totals {
            if best.is_none_or(|(_, b)| total > b) {
                best = Some((zone, total));
            }
        }
        best.map(|(zone, _)| zone)
    }

    /// Run the chain selection.
    pub fn select_chains(&self, species: &[Species]) -> Selection {
        let Some(zone) = Self::richest_zone(species) else {
            return Selection::default();
        };

        let mut pool: Vec<&Species> = species.iter().filter(|s| s.zone == zone).collect();
        pool.sort_by(|a, b| b.calories_provided.cmp(&a.calories_provided));
        let n = pool.len();

        let mut length = vec![1usize; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut chains: Vec<Vec<usize>> = Vec::with_capacity(n);

        for i in 0..n {
            for j in 0..i {
                let feeds = pool[i].food_sources.iter().any(|f| *f == pool[j].name)
                    && pool[j].calories_provided > pool[i].calories_needed;
                if feeds && length[j] + 1 > length[i] {
                    length[i] = length[j] + 1;
                    parent[i] = Some(j);
                }
            }
            let mut chain = vec![i];
            if let Some(p) = parent[i] {
                chain.extend_from_slice(&chains[p]);
            }
            chains.push(chain);
        }

        chains.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut used = vec![false; n];
        let mut selected: Vec<usize> = Vec::new();
        for chain in &chains {
            let disjoint = chain.iter().all(|&i| !used[i]);
            let anchored = chain.iter().any(|&i| pool[i].is_producer());
            if disjoint && anchored {
                for &i in chain {
                    used[i] = true;
                }
                selected.extend_from_slice(chain);
            }
        }

        selected.sort_by(|&a, &b| pool[b].calories_provided.cmp(&pool[a].calories_provided));
        Selection::new(selected.into_iter().map(|i| pool[i].name.clone()).collect())
    }
}
