//! Synthetic species pools for benchmarks and stress tests.

use rand::prelude::*;

use crate::schema::Species;

/// Random species generator.
pub struct SpeciesGenerator {
    rng: StdRng,
    zones: Vec<String>,
}

impl SpeciesGenerator {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            zones: vec!["0-30m".into(), "31-60m".into(), "61-90m".into()],
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            ..Self::new(0)
        }
    }

    /// Replace the zone keys drawn from. An empty list leaves them unchanged.
    pub fn with_zones<S: Into<String>>(mut self, zones: impl IntoIterator<Item = S>) -> Self {
        let zones: Vec<String> = zones.into_iter().map(Into::into).collect();
        if !zones.is_empty() {
            self.zones = zones;
        }
        self
    }

    /// Generate `count` species named `Species1..=Species{count}`.
    ///
    /// Food sources are drawn from the same name range, so some land in
    /// other zones and are dropped at resolution time.
    pub fn generate(&mut self, count: usize) -> Vec<Species> {
        (1..=count)
            .map(|i| {
                let calories_provided = self.rng.gen_range(100..=6000);
                let calories_needed = self.rng.gen_range(0..=4500);
                let zone_idx = self.rng.gen_range(0..self.zones.len());
                let zone = self.zones[zone_idx].clone();

                let mut food_sources: Vec<String> = Vec::new();
                for _ in 0..self.rng.gen_range(0..=10) {
                    let name = format!("Species{}", self.rng.gen_range(1..=count));
                    if !food_sources.contains(&name) {
                        food_sources.push(name);
                    }
                }

                Species {
                    name: format!("Species{i}"),
                    calories_provided,
                    calories_needed,
                    zone,
                    temperature_range: None,
                    food_sources,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::validate_pool;

    #[test]
    fn test_deterministic_with_seed() {
        let a = SpeciesGenerator::new(42).generate(50);
        let b = SpeciesGenerator::new(42).generate(50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_ranges() {
        let species = SpeciesGenerator::new(7).with_zones(["a", "b"]).generate(200);
        assert_eq!(species.len(), 200);
        assert_eq!(species[0].name, "Species1");
        assert!(validate_pool(&species).is_ok());

        for s in &species {
            assert!((100..=6000).contains(&s.calories_provided));
            assert!(s.calories_needed <= 4500);
            assert!(s.zone == "a" || s.zone == "b");
            assert!(s.food_sources.len() <= 10);
        }
    }

    #[test]
    fn test_empty_zone_list_ignored() {
        let species = SpeciesGenerator::new(1)
            .with_zones(Vec::<String>::new())
            .generate(10);
        assert!(species.iter().all(|s| s.zone.ends_with('m')));
    }
}
