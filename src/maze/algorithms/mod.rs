mod rnd_backtracker;
mod rnd_noise;

use std::time::Duration;

use crate::core::Result;
use crate::maze::Maze;
use crate::progress::Observer;

pub use rnd_backtracker::RndBacktracker;
pub use rnd_noise::RndNoise;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

pub trait MazeAlgorithm {
    /// Builds a new `size`×`size` maze with both entrance and exit chosen.
    ///
    /// Every change is reported to `observer`, paced with `delay`.
    fn generate(
        &self,
        size: usize,
        rng: &mut Random,
        observer: Option<&mut dyn Observer>,
        delay: Duration,
    ) -> Result<Maze>;
}
