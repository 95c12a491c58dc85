//! Zone partitioning and food-source resolution.
//!
//! Species are grouped by zone key and each group is copied into a
//! [`ZonePool`] arena. Food-source names are rewritten as indices into that
//! arena, so a species can only ever be fed by something in its own zone.

use std::collections::HashMap;

use crate::schema::Species;

/// Group species by zone key, preserving the order in which zones first appear.
pub fn partition_zones(species: &[Species]) -> Vec<(&str, Vec<&Species>)> {
    let mut zones: Vec<(&str, Vec<&Species>)> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();

    for s in species {
        let idx = *slot.entry(s.zone.as_str()).or_insert_with(|| {
            zones.push((s.zone.as_str(), Vec::new()));
            zones.len() - 1
        });
        zones[idx].1.push(s);
    }

    zones
}

/// A species copied into a zone arena with its food sources resolved to indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpecies {
    pub name: String,
    pub calories_provided: u32,
    pub calories_needed: u32,
    /// Indices into the owning [`ZonePool`], deduplicated, in listed order.
    pub food_sources: Vec<usize>,
}

impl ResolvedSpecies {
    #[inline]
    pub fn is_producer(&self) -> bool {
        self.calories_needed == 0
    }
}

/// Resolved species of one zone, sorted by calories provided (descending, stable).
#[derive(Debug, Clone)]
pub struct ZonePool {
    zone: String,
    species: Vec<ResolvedSpecies>,
}

impl ZonePool {
    /// Copy the members of one zone and resolve their food sources.
    ///
    /// Names that match no member of this zone are dropped.
    pub fn resolve(zone: &str, members: &[&Species]) -> Self {
        let mut sorted: Vec<&Species> = members.to_vec();
        sorted.sort_by(|a, b| b.calories_provided.cmp(&a.calories_provided));

        let mut index: HashMap<&str, usize> = HashMap::with_capacity(sorted.len());
        for (i, s) in sorted.iter().enumerate() {
            index.entry(s.name.as_str()).or_insert(i);
        }

        let species = sorted
            .iter()
            .map(|s| {
                let mut food_sources: Vec<usize> = Vec::with_capacity(s.food_sources.len());
                for idx in s.food_sources.iter().filter_map(|n| index.get(n.as_str())) {
                    if !food_sources.contains(idx) {
                        food_sources.push(*idx);
                    }
                }
                ResolvedSpecies {
                    name: s.name.clone(),
                    calories_provided: s.calories_provided,
                    calories_needed: s.calories_needed,
                    food_sources,
                }
            })
            .collect();

        Self {
            zone: zone.to_string(),
            species,
        }
    }

    /// Partition a flat species list and resolve every zone.
    pub fn build_all(species: &[Species]) -> Vec<ZonePool> {
        partition_zones(species)
            .into_iter()
            .map(|(zone, members)| Self::resolve(zone, &members))
            .collect()
    }

    #[inline]
    pub fn zone(&self) -> &str {
        &self.zone
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.species.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> &ResolvedSpecies {
        &self.species[idx]
    }

    pub fn species(&self) -> &[ResolvedSpecies] {
        &self.species
    }

    /// Arena index of a species by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.species.iter().position(|s| s.name == name)
    }
}
