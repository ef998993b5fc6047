use std::time::Duration;

use rand::{thread_rng, Rng as _, SeedableRng as _};
use serde::{Deserialize, Serialize};

use crate::core::*;
use crate::maze::algorithms::{MazeAlgorithm as _, Random, RndBacktracker, RndNoise};
use crate::maze::{Maze, Mode, Path};
use crate::progress::Observer;

pub const DEFAULT_SIZE: usize = 25;
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.3;

/// Everything a caller may tune about generating and solving.
///
/// Nothing here is read from disk, the caller deserializes it from whatever source it likes and
/// missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side of generated mazes, odd for perfect ones.
    pub size: usize,
    /// Seed for deterministic generation, random if not set.
    pub seed: Option<u64>,
    /// Pacing handed to observers with every intermediate step.
    pub delay: Duration,
    /// Wall density of noise mazes.
    pub wall_probability: f64,
    pub mode: Mode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: None,
            delay: Duration::ZERO,
            wall_probability: DEFAULT_WALL_PROBABILITY,
            mode: Mode::default(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, value: usize) -> Self {
        self.size = value;
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn delay(mut self, value: Duration) -> Self {
        self.delay = value;
        self
    }

    pub fn wall_probability(mut self, value: f64) -> Self {
        self.wall_probability = value;
        self
    }

    pub fn mode(mut self, value: Mode) -> Self {
        self.mode = value;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.size < 3 || self.size % 2 == 0 {
            return Err(InvalidMazeError::InvalidSize(self.size).into());
        }
        if !(0.0..=1.0).contains(&self.wall_probability) {
            return Err(Error::InvalidSettings(format!(
                "wall probability must be between 0 and 1, got {}",
                self.wall_probability
            )));
        }
        Ok(())
    }

    /// Generator seeded from [`Settings::seed`], or from a fresh random seed.
    pub fn rng(&self) -> Random {
        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        log::debug!("Using seed {}", seed);
        Random::seed_from_u64(seed)
    }

    /// Carves a new perfect maze of [`Settings::size`].
    pub fn generate(&self, observer: Option<&mut dyn Observer>) -> Result<Maze> {
        self.validate()?;
        RndBacktracker.generate(self.size, &mut self.rng(), observer, self.delay)
    }

    /// Scatters walls over a new maze of [`Settings::size`], with random entrance and exit.
    pub fn generate_noise(&self, observer: Option<&mut dyn Observer>) -> Result<Maze> {
        RndNoise::new(self.wall_probability).generate(
            self.size,
            &mut self.rng(),
            observer,
            self.delay,
        )
    }

    /// Searches `maze` in the configured [`Settings::mode`].
    pub fn solve(
        &self,
        maze: &mut Maze,
        observer: Option<&mut dyn Observer>,
    ) -> Result<Option<Path>> {
        Ok(maze.search_with(self.mode, observer, self.delay)?)
    }
}
