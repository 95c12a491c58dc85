//! Result types returned by the selection engine.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Terminal energy counters of one species after a feeding simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyState {
    /// Need left unmet. Zero once the species has eaten.
    pub remaining_calories_needed: u32,
    /// Supply left after consumers have eaten from this species.
    pub remaining_calories_provided: u32,
    /// Species whose calories zeroed this species' need (one, or two on a split feed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eats: Option<Vec<String>>,
}

impl EnergyState {
    /// Fully fed and not driven to extinction.
    #[inline]
    pub fn is_sustained(&self) -> bool {
        self.remaining_calories_needed == 0 && self.remaining_calories_provided > 0
    }
}

/// Outcome of the winning subset: species name to terminal energy state.
///
/// Entries are kept in dominance order (descending original calories provided).
/// Serializes as a JSON object keyed by species name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodWeb {
    entries: Vec<(String, EnergyState)>,
}

impl FoodWeb {
    pub fn new(entries: Vec<(String, EnergyState)>) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a species by name.
    pub fn get(&self, name: &str) -> Option<&EnergyState> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, state)| state)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Member names in dominance order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnergyState)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }
}

impl Serialize for FoodWeb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, state) in &self.entries {
            map.serialize_entry(name, state)?;
        }
        map.end()
    }
}

/// Flat selection contract: member count plus names ordered by calories provided.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub number_of_species: usize,
    pub species: Vec<String>,
}

impl Selection {
    pub fn new(species: Vec<String>) -> Self {
        Self {
            number_of_species: species.len(),
            species,
        }
    }
}

impl From<&FoodWeb> for Selection {
    fn from(web: &FoodWeb) -> Self {
        Self::new(web.names().map(str::to_owned).collect())
    }
}

/// What a strategy run reports: a full food web, or names only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StrategyOutput {
    FoodWeb(FoodWeb),
    Selection(Selection),
}

impl StrategyOutput {
    /// Number of selected species.
    pub fn len(&self) -> usize {
        match self {
            StrategyOutput::FoodWeb(web) => web.len(),
            StrategyOutput::Selection(selection) => selection.number_of_species,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_web() -> FoodWeb {
        FoodWeb::new(vec![
            (
                "Kelp".to_string(),
                EnergyState {
                    remaining_calories_needed: 0,
                    remaining_calories_provided: 400,
                    eats: None,
                },
            ),
            (
                "Urchin".to_string(),
                EnergyState {
                    remaining_calories_needed: 0,
                    remaining_calories_provided: 50,
                    eats: Some(vec!["Kelp".to_string()]),
                },
            ),
        ])
    }

    #[test]
    fn test_food_web_serializes_as_map() {
        let json = serde_json::to_value(sample_web()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Kelp": {"remainingCaloriesNeeded": 0, "remainingCaloriesProvided": 400},
                "Urchin": {
                    "remainingCaloriesNeeded": 0,
                    "remainingCaloriesProvided": 50,
                    "eats": ["Kelp"]
                }
            })
        );
    }

    #[test]
    fn test_lookup_and_selection() {
        let web = sample_web();
        assert_eq!(web.len(), 2);
        assert!(web.contains("Urchin"));
        assert!(web.get("Shark").is_none());
        assert!(web.iter().all(|(_, s)| s.is_sustained()));

        let selection = Selection::from(&web);
        assert_eq!(selection.number_of_species, 2);
        assert_eq!(selection.species, vec!["Kelp", "Urchin"]);
    }

    #[test]
    fn test_strategy_output_serializes_inner_value() {
        let web = StrategyOutput::FoodWeb(sample_web());
        assert_eq!(web.len(), 2);
        assert!(serde_json::to_value(&web).unwrap().get("Kelp").is_some());

        let selection = StrategyOutput::Selection(Selection::new(vec!["Kelp".to_string()]));
        assert_eq!(
            serde_json::to_value(&selection).unwrap(),
            serde_json::json!({"numberOfSpecies": 1, "species": ["Kelp"]})
        );
    }

    #[test]
    fn test_empty_web() {
        let web = FoodWeb::default();
        assert!(web.is_empty());
        assert_eq!(serde_json::to_string(&web).unwrap(), "{}");
        assert_eq!(Selection::from(&web), Selection::default());
    }
}
