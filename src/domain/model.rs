use crate::utils::error::{PetError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_trimmed, validate_unique_entries,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_LEVEL: u8 = 0;
pub const MAX_LEVEL: u8 = 10;
pub const DEFAULT_LEVEL: u8 = 5;

const FEED_HUNGER_DROP: u8 = 3;
const FEED_HAPPINESS_GAIN: u8 = 1;
const REST_ENERGY_GAIN: u8 = 5;
const PLAY_ENERGY_COST: u8 = 2;
const PLAY_HAPPINESS_GAIN: u8 = 2;
const PLAY_HUNGER_GAIN: u8 = 1;

fn raise(level: u8, by: u8) -> u8 {
    level.saturating_add(by).min(MAX_LEVEL)
}

fn lower(level: u8, by: u8) -> u8 {
    level.saturating_sub(by).max(MIN_LEVEL)
}

/// The virtual pet. Counters stay within `MIN_LEVEL..=MAX_LEVEL`; the only
/// way to change them is through the methods below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    name: String,
    hunger: u8,
    energy: u8,
    happiness: u8,
    tricks: Vec<String>,
}

/// Read-only snapshot of the three counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub hunger: u8,
    pub energy: u8,
    pub happiness: u8,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hunger: {}\nEnergy: {}\nHappiness: {}",
            self.hunger, self.energy, self.happiness
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TricksSummary<'a> {
    None,
    Learned(&'a [String]),
}

impl fmt::Display for TricksSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TricksSummary::None => f.write_str("No tricks learned yet."),
            TricksSummary::Learned(tricks) => f.write_str(&tricks.join(", ")),
        }
    }
}

/// Flat persisted form of a pet. Field names are the on-disk keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PetRecord {
    pub name: String,
    pub hunger: u8,
    pub energy: u8,
    pub happiness: u8,
    pub tricks: Vec<String>,
}

impl Pet {
    /// A fresh pet with every counter at `DEFAULT_LEVEL` and no tricks.
    pub fn new(name: &str) -> Result<Self> {
        Self::with_levels(
            name,
            DEFAULT_LEVEL,
            DEFAULT_LEVEL,
            DEFAULT_LEVEL,
            Vec::new(),
        )
    }

    pub fn with_levels(
        name: &str,
        hunger: u8,
        energy: u8,
        happiness: u8,
        tricks: Vec<String>,
    ) -> Result<Self> {
        validate_non_empty_string("name", name)?;
        validate_range("hunger", hunger, MIN_LEVEL, MAX_LEVEL)?;
        validate_range("energy", energy, MIN_LEVEL, MAX_LEVEL)?;
        validate_range("happiness", happiness, MIN_LEVEL, MAX_LEVEL)?;
        validate_unique_entries("tricks", &tricks)?;

        Ok(Self {
            name: name.trim().to_string(),
            hunger,
            energy,
            happiness,
            tricks: tricks.into_iter().map(|t| t.trim().to_string()).collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tricks(&self) -> &[String] {
        &self.tricks
    }

    pub fn feed(&mut self) {
        self.hunger = lower(self.hunger, FEED_HUNGER_DROP);
        self.happiness = raise(self.happiness, FEED_HAPPINESS_GAIN);
        tracing::debug!(pet = %self.name, hunger = self.hunger, "fed");
    }

    pub fn rest(&mut self) {
        self.energy = raise(self.energy, REST_ENERGY_GAIN);
        tracing::debug!(pet = %self.name, energy = self.energy, "rested");
    }

    /// Fails without touching any counter when the pet has no energy left.
    pub fn play(&mut self) -> Result<()> {
        if self.energy == MIN_LEVEL {
            return Err(PetError::InsufficientEnergy {
                name: self.name.clone(),
            });
        }

        self.energy = lower(self.energy, PLAY_ENERGY_COST);
        self.happiness = raise(self.happiness, PLAY_HAPPINESS_GAIN);
        self.hunger = raise(self.hunger, PLAY_HUNGER_GAIN);
        tracing::debug!(pet = %self.name, energy = self.energy, "played");
        Ok(())
    }

    pub fn train(&mut self, trick: &str) -> Result<()> {
        let trick = trick.trim();
        if trick.is_empty() {
            return Err(PetError::EmptyTrick);
        }
        if self.knows(trick) {
            return Err(PetError::DuplicateTrick {
                name: self.name.clone(),
                trick: trick.to_string(),
            });
        }

        self.tricks.push(trick.to_string());
        tracing::debug!(pet = %self.name, trick, total = self.tricks.len(), "learned trick");
        Ok(())
    }

    pub fn knows(&self, trick: &str) -> bool {
        let trick = trick.trim();
        self.tricks.iter().any(|t| t == trick)
    }

    pub fn status(&self) -> Status {
        Status {
            hunger: self.hunger,
            energy: self.energy,
            happiness: self.happiness,
        }
    }

    pub fn tricks_summary(&self) -> TricksSummary<'_> {
        if self.tricks.is_empty() {
            TricksSummary::None
        } else {
            TricksSummary::Learned(&self.tricks)
        }
    }

    /// Overwrites all three counters, clamping anything above `MAX_LEVEL`.
    pub fn rebalance(&mut self, status: Status) {
        self.hunger = status.hunger.min(MAX_LEVEL);
        self.energy = status.energy.min(MAX_LEVEL);
        self.happiness = status.happiness.min(MAX_LEVEL);
    }
}

impl From<&Pet> for PetRecord {
    fn from(pet: &Pet) -> Self {
        PetRecord {
            name: pet.name.clone(),
            hunger: pet.hunger,
            energy: pet.energy,
            happiness: pet.happiness,
            tricks: pet.tricks.clone(),
        }
    }
}

impl TryFrom<PetRecord> for Pet {
    type Error = PetError;

    /// Records are taken as written: surrounding whitespace is rejected
    /// rather than trimmed away.
    fn try_from(record: PetRecord) -> Result<Self> {
        validate_trimmed("name", &record.name)?;
        for trick in &record.tricks {
            validate_trimmed("tricks", trick)?;
        }
        Pet::with_levels(
            &record.name,
            record.hunger,
            record.energy,
            record.happiness,
            record.tricks,
        )
    }
}
