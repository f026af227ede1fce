use crate::core::challenge::MathChallenge;
use crate::domain::model::{Pet, Status, TricksSummary};
use crate::utils::error::Result;
use rand::Rng;

const BALANCED_LEVEL: u8 = 5;
const RESHUFFLE_MIN: u8 = 1;
const RESHUFFLE_MAX: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub stars: u32,
    pub reshuffled: Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport<'a> {
    pub name: &'a str,
    pub status: Status,
    pub tricks: TricksSummary<'a>,
    pub stars: u32,
    pub achievement: Option<Achievement>,
}

/// Owns the pet for the lifetime of the process and layers the star
/// achievement on top of the plain state machine.
pub struct PetSession<R: Rng> {
    pet: Pet,
    stars: u32,
    rng: R,
}

impl<R: Rng> PetSession<R> {
    pub fn new(pet: Pet, rng: R) -> Self {
        Self { pet, stars: 0, rng }
    }

    pub fn pet(&self) -> &Pet {
        &self.pet
    }

    pub fn stars(&self) -> u32 {
        self.stars
    }

    pub fn feed(&mut self) -> StatusReport<'_> {
        self.pet.feed();
        self.show_status()
    }

    pub fn rest(&mut self) -> StatusReport<'_> {
        self.pet.rest();
        self.show_status()
    }

    /// On failure the achievement check is skipped and nothing changes.
    pub fn play(&mut self) -> Result<StatusReport<'_>> {
        self.pet.play()?;
        Ok(self.show_status())
    }

    pub fn train(&mut self, trick: &str) -> Result<StatusReport<'_>> {
        self.pet.train(trick)?;
        Ok(self.show_status())
    }

    pub fn challenge(&mut self) -> MathChallenge {
        MathChallenge::generate(&mut self.rng)
    }

    /// Refreshes the view of the pet, awarding a star if hunger and energy
    /// are balanced. Every balanced check reshuffles the counters.
    pub fn show_status(&mut self) -> StatusReport<'_> {
        let achievement = self.check_for_star();
        StatusReport {
            name: self.pet.name(),
            status: self.pet.status(),
            tricks: self.pet.tricks_summary(),
            stars: self.stars,
            achievement,
        }
    }

    fn check_for_star(&mut self) -> Option<Achievement> {
        let status = self.pet.status();
        if status.hunger != BALANCED_LEVEL || status.energy != BALANCED_LEVEL {
            return None;
        }

        self.stars += 1;
        let reshuffled = Status {
            hunger: self.rng.gen_range(RESHUFFLE_MIN..=RESHUFFLE_MAX),
            energy: self.rng.gen_range(RESHUFFLE_MIN..=RESHUFFLE_MAX),
            happiness: self.rng.gen_range(RESHUFFLE_MIN..=RESHUFFLE_MAX),
        };
        self.pet.rebalance(reshuffled);
        tracing::info!(pet = %self.pet.name(), stars = self.stars, "achievement unlocked");

        Some(Achievement {
            stars: self.stars,
            reshuffled,
        })
    }

    pub fn into_pet(self) -> Pet {
        self.pet
    }
}
