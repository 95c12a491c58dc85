//! Species records as received from callers.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum length of a species name (and of any referenced food-source name).
pub const MAX_NAME_LEN: usize = 64;

/// A candidate species.
///
/// The engine treats these records as already validated; run
/// [`validate_pool`] at the boundary where untrusted input arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    /// Unique name within a run.
    pub name: String,
    /// Calories this species offers to its consumers.
    pub calories_provided: u32,
    /// Calories this species must eat. Zero marks a producer.
    #[serde(default)]
    pub calories_needed: u32,
    /// Zone (habitat band) key. Species are only ever matched within a zone.
    #[serde(rename = "depthRange", alias = "zone")]
    pub zone: String,
    /// Secondary range tag. Carried through, never consumed by the engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_range: Option<String>,
    /// Names of the species this one can eat.
    #[serde(default)]
    pub food_sources: Vec<String>,
}

impl Species {
    /// Create a producer (a species with no caloric need).
    pub fn producer(name: impl Into<String>, calories_provided: u32, zone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories_provided,
            calories_needed: 0,
            zone: zone.into(),
            temperature_range: None,
            food_sources: Vec::new(),
        }
    }

    /// Create a consumer feeding on the named sources.
    pub fn consumer<S: Into<String>>(
        name: impl Into<String>,
        calories_provided: u32,
        calories_needed: u32,
        zone: impl Into<String>,
        food_sources: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            calories_provided,
            calories_needed,
            zone: zone.into(),
            temperature_range: None,
            food_sources: food_sources.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the secondary temperature tag.
    pub fn with_temperature_range(mut self, range: impl Into<String>) -> Self {
        self.temperature_range = Some(range.into());
        self
    }

    /// Producers anchor every sustainable subset.
    #[inline]
    pub fn is_producer(&self) -> bool {
        self.calories_needed == 0
    }

    /// Validate a single record.
    pub fn validate(&self) -> Result<(), SpeciesError> {
        if self.name.is_empty() {
            return Err(SpeciesError::EmptyName);
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(SpeciesError::NameTooLong {
                name: self.name.clone(),
            });
        }
        if self.calories_provided == 0 {
            return Err(SpeciesError::NoCaloriesProvided {
                name: self.name.clone(),
            });
        }
        if let Some(source) = self
            .food_sources
            .iter()
            .find(|s| s.chars().count() > MAX_NAME_LEN)
        {
            return Err(SpeciesError::FoodSourceNameTooLong {
                species: self.name.clone(),
                food_source: source.clone(),
            });
        }
        Ok(())
    }

    /// Parse a single species from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpeciesError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, SpeciesError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parse a JSON array of species.
pub fn species_list_from_json(json: &str) -> Result<Vec<Species>, SpeciesError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and validate a JSON species file.
pub fn load_species_file<P: AsRef<Path>>(path: P) -> Result<Vec<Species>, SpeciesError> {
    let json = fs::read_to_string(path)?;
    let species = species_list_from_json(&json)?;
    validate_pool(&species)?;
    Ok(species)
}

/// Validate every record and check that names are unique.
pub fn validate_pool(species: &[Species]) -> Result<(), SpeciesError> {
    let mut seen = HashSet::with_capacity(species.len());
    for s in species {
        s.validate()?;
        if !seen.insert(s.name.as_str()) {
            return Err(SpeciesError::DuplicateName {
                name: s.name.clone(),
            });
        }
    }
    Ok(())
}

/// Species validation and parsing errors.
#[derive(Debug, thiserror::Error)]
pub enum SpeciesError {
    #[error("Species name must not be empty")]
    EmptyName,
    #[error("Species name '{name}' exceeds 64 characters")]
    NameTooLong { name: String },
    #[error("Species '{name}' must provide at least one calorie")]
    NoCaloriesProvided { name: String },
    #[error("Species '{species}' references food source '{food_source}' longer than 64 characters")]
    FoodSourceNameTooLong { species: String, food_source: String },
    #[error("Species name '{name}' appears more than once")]
    DuplicateName { name: String },
    #[error("Invalid species JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read species file: {0}")]
    Io(#[from] std::io::Error),
}
