use std::time::Duration;

use rand::Rng as _;

use super::{MazeAlgorithm, Random};
use crate::core::*;
use crate::maze::{Cell, Maze};
use crate::progress::{Observer, Reporter};

/// Scatters walls independently over the grid, there is no guarantee the exit is reachable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RndNoise {
    pub wall_probability: f64,
}

impl RndNoise {
    pub fn new(wall_probability: f64) -> Self {
        Self { wall_probability }
    }
}

impl Default for RndNoise {
    fn default() -> Self {
        Self::new(0.3)
    }
}

impl MazeAlgorithm for RndNoise {
    fn generate(
        &self,
        size: usize,
        rng: &mut Random,
        observer: Option<&mut dyn Observer>,
        delay: Duration,
    ) -> Result<Maze> {
        if size == 0 {
            return Err(InvalidMazeError::Empty.into());
        }
        if !(0.0..=1.0).contains(&self.wall_probability) {
            return Err(Error::InvalidSettings(format!(
                "wall probability must be between 0 and 1, got {}",
                self.wall_probability
            )));
        }

        let mut reporter = Reporter::new(observer, delay);

        let mut cells = Vec::with_capacity(size);
        let mut open = Vec::new();
        for r in 0..size {
            let row = (0..size)
                .map(|c| {
                    if rng.gen_bool(self.wall_probability) {
                        Cell::Wall
                    } else {
                        open.push(Coord::new(r as i32, c as i32));
                        Cell::Open
                    }
                })
                .collect::<Vec<_>>();
            cells.push(row);
        }

        if open.len() < 2 {
            return Err(Error::NoMovableCell);
        }

        let start = rng.gen_range(0..open.len());
        let mut end = rng.gen_range(0..open.len() - 1);
        if end >= start {
            end += 1;
        }
        let (start, end) = (open[start], open[end]);

        let maze = Maze::from_cells(cells, start, Some(end))?;
        reporter.finish(&[start, end])?;

        log::debug!(
            "Generated {0}x{0} noise maze with {1} open cells",
            size,
            open.len()
        );

        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::progress::Recorder;

    #[test]
    fn endpoints_are_valid() {
        for seed in 0..64 {
            let mut rng = Random::seed_from_u64(seed);
            let maze = RndNoise::new(0.4)
                .generate(8, &mut rng, None, Duration::ZERO)
                .unwrap();

            let end = maze.end().unwrap();
            assert!(maze.is_open(maze.start()));
            assert!(maze.is_open(end));
            assert_ne!(maze.start(), end);
            assert_eq!(maze.size(), 8);
        }
    }

    #[test]
    fn density_extremes() {
        let mut rng = Random::seed_from_u64(1);

        let open = RndNoise::new(0.0)
            .generate(6, &mut rng, None, Duration::ZERO)
            .unwrap();
        assert_eq!(open.open_cells().count(), 36);

        assert_eq!(
            RndNoise::new(1.0).generate(6, &mut rng, None, Duration::ZERO),
            Err(Error::NoMovableCell)
        );
    }

    #[test]
    fn rejects_bad_input() {
        let mut rng = Random::seed_from_u64(1);
        assert!(matches!(
            RndNoise::new(1.5).generate(6, &mut rng, None, Duration::ZERO),
            Err(Error::InvalidSettings(_))
        ));
        assert_eq!(
            RndNoise::default().generate(0, &mut rng, None, Duration::ZERO),
            Err(Error::InvalidMaze(InvalidMazeError::Empty))
        );
    }

    #[test]
    fn reports_endpoints() {
        let mut rng = Random::seed_from_u64(9);
        let mut recorder = Recorder::new();
        let maze = RndNoise::default()
            .generate(10, &mut rng, Some(&mut recorder), Duration::from_millis(1))
            .unwrap();

        assert_eq!(recorder.steps, vec![vec![maze.start(), maze.end().unwrap()]]);
    }
}
