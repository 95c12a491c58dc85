//! Feeding simulation and the sustainability check built on it.
//!
//! A simulation reads the static species data of a [`ZonePool`] and writes
//! only to its own [`SimulationOutcome`], so any number of runs can share a
//! pool without observing each other.

use crate::schema::{EnergyState, FoodWeb};

use super::zones::ZonePool;

/// Which members supplied the calories that fed a consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meal {
    /// Fed from a single source.
    Single(usize),
    /// Split evenly across two tied sources.
    Split(usize, usize),
}

/// Mutable counters of one member during a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberState {
    pub remaining_calories_provided: u32,
    pub remaining_calories_needed: u32,
    /// Arena indices of the species eaten.
    pub meal: Option<Meal>,
}

impl MemberState {
    #[inline]
    pub fn is_sustained(&self) -> bool {
        self.remaining_calories_needed == 0 && self.remaining_calories_provided > 0
    }
}

/// Terminal state of a simulated candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationOutcome {
    /// Arena indices in processing (dominance) order.
    pub members: Vec<usize>,
    /// Counters, parallel to `members`.
    pub states: Vec<MemberState>,
}

impl SimulationOutcome {
    /// Every member fully fed and not driven to extinction.
    pub fn is_sustained(&self) -> bool {
        self.states.iter().all(MemberState::is_sustained)
    }

    /// State of a member by arena index.
    pub fn state_of(&self, idx: usize) -> Option<&MemberState> {
        self.members
            .iter()
            .position(|&m| m == idx)
            .map(|pos| &self.states[pos])
    }

    /// Convert to the name-keyed result type.
    pub fn to_food_web(&self, pool: &ZonePool) -> FoodWeb {
        let name = |idx: usize| pool.get(idx).name.clone();
        let entries = self
            .members
            .iter()
            .zip(&self.states)
            .map(|(&idx, state)| {
                let eats = state.meal.map(|meal| match meal {
                    Meal::Single(a) => vec![name(a)],
                    Meal::Split(a, b) => vec![name(a), name(b)],
                });
                (
                    name(idx),
                    EnergyState {
                        remaining_calories_needed: state.remaining_calories_needed,
                        remaining_calories_provided: state.remaining_calories_provided,
                        eats,
                    },
                )
            })
            .collect();
        FoodWeb::new(entries)
    }
}

/// Run the eating simulation over a candidate set of arena indices.
///
/// Members are processed once each, in descending order of original calories
/// provided (stable with respect to `candidate`). Each consumer gets at most
/// one feeding event, drawn only from sources that are also in the set.
pub fn simulate(pool: &ZonePool, candidate: &[usize]) -> SimulationOutcome {
    let mut members = candidate.to_vec();
    members.sort_by(|&a, &b| {
        pool.get(b)
            .calories_provided
            .cmp(&pool.get(a).calories_provided)
    });

    let mut states: Vec<MemberState> = members
        .iter()
        .map(|&idx| {
            let species = pool.get(idx);
            MemberState {
                remaining_calories_provided: species.calories_provided,
                remaining_calories_needed: species.calories_needed,
                meal: None,
            }
        })
        .collect();

    let mut ranked: Vec<usize> = Vec::with_capacity(members.len());

    for pos in 0..members.len() {
        let species = pool.get(members[pos]);
        if species.is_producer() {
            continue;
        }

        // Positions (within this run) of the sources present in the set.
        ranked.clear();
        ranked.extend(
            species
                .food_sources
                .iter()
                .filter_map(|src| members.iter().position(|m| m == src)),
        );
        if ranked.is_empty() {
            continue;
        }
        ranked.sort_by(|&a, &b| {
            states[b]
                .remaining_calories_provided
                .cmp(&states[a].remaining_calories_provided)
        });

        let need = states[pos].remaining_calories_needed;

        if ranked.len() >= 2 {
            let (first, second) = (ranked[0], ranked[1]);
            let supply = states[first].remaining_calories_provided;
            if supply == states[second].remaining_calories_provided
                && 2 * u64::from(supply) >= u64::from(need)
            {
                let half = need / 2;
                states[first].remaining_calories_provided -= half;
                states[second].remaining_calories_provided -= half;
                states[pos].remaining_calories_needed = 0;
                states[pos].meal = Some(Meal::Split(members[first], members[second]));
                continue;
            }
        }

        // Equality is not enough: a source must strictly exceed the need.
        if let Some(&src) = ranked
            .iter()
            .find(|&&src| states[src].remaining_calories_provided > need)
        {
            states[src].remaining_calories_provided -= need;
            states[pos].remaining_calories_needed = 0;
            states[pos].meal = Some(Meal::Single(members[src]));
        }
    }

    SimulationOutcome { members, states }
}

/// Simulate a candidate set and keep the outcome only if it is sustainable.
///
/// Empty sets and sets without a producer are rejected without simulating.
pub fn evaluate(pool: &ZonePool, candidate: &[usize]) -> Option<SimulationOutcome> {
    if candidate.is_empty() || !candidate.iter().any(|&idx| pool.get(idx).is_producer()) {
        return None;
    }
    let outcome = simulate(pool, candidate);
    outcome.is_sustained().then_some(outcome)
}

/// Whether a candidate set is self-sustaining.
pub fn is_sustainable(pool: &ZonePool, candidate: &[usize]) -> bool {
    evaluate(pool, candidate).is_some()
}
