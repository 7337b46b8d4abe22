use mazebuilder::Maze;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_SIDE: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be an integer: {value}")]
    Parse { name: &'static str, value: String },
    #[error("width and height must be larger than 1: {width} {height}")]
    TooSmall { width: usize, height: usize },
    #[error("a {width}x{height} maze has too many cells")]
    TooLarge { width: usize, height: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    width: usize,
    height: usize,
    seed: Option<u64>,
}

impl MazeConfig {
    pub fn new(width: usize, height: usize, seed: Option<u64>) -> Result<MazeConfig, ConfigError> {
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(ConfigError::TooSmall { width, height });
        }

        // Set sizes are stored as negative isize values.
        match width.checked_mul(height) {
            Some(num_cells) if num_cells <= isize::MAX as usize => {}
            _ => return Err(ConfigError::TooLarge { width, height }),
        }

        Ok(MazeConfig {
            width,
            height,
            seed,
        })
    }

    pub fn from_args(
        width: &str,
        height: &str,
        seed: Option<&str>,
    ) -> Result<MazeConfig, ConfigError> {
        let width = parse("width", width)?;
        let height = parse("height", height)?;
        let seed = seed.map(|seed| parse("seed", seed)).transpose()?;

        MazeConfig::new(width, height, seed)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn build(&self) -> Result<Maze, mazebuilder::generator::Error> {
        Maze::generate(self.width, self.height, &mut self.rng())
    }
}

fn parse<T: FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    T::from_str(value).map_err(|_| ConfigError::Parse {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, MazeConfig};

    #[test]
    fn parses_arguments() {
        let config = MazeConfig::from_args("10", "4", Some("99")).unwrap();

        assert_eq!(config.width(), 10);
        assert_eq!(config.height(), 4);
        assert_eq!(config.seed(), Some(99));
        assert_eq!(MazeConfig::from_args("2", "2", None).unwrap().seed(), None);
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(
            MazeConfig::from_args("ten", "4", None),
            Err(ConfigError::Parse {
                name: "width",
                value: "ten".to_string()
            })
        );
        assert_eq!(
            MazeConfig::from_args("3", "-4", None),
            Err(ConfigError::Parse {
                name: "height",
                value: "-4".to_string()
            })
        );
        assert!(MazeConfig::from_args("3", "4", Some("x")).is_err());
    }

    #[test]
    fn rejects_small_sides() {
        assert_eq!(
            MazeConfig::new(1, 5, None),
            Err(ConfigError::TooSmall {
                width: 1,
                height: 5
            })
        );
        assert!(MazeConfig::new(5, 0, None).is_err());
    }

    #[test]
    fn rejects_huge_grid() {
        assert_eq!(
            MazeConfig::new(usize::MAX, 2, None),
            Err(ConfigError::TooLarge {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn seeded_builds_repeat() {
        let config = MazeConfig::new(9, 7, Some(5)).unwrap();
        let first = config.build().unwrap();
        let second = config.build().unwrap();

        assert_eq!(first.walls(), second.walls());
        assert_eq!(first.walls().len(), 2 * 63 - 9 - 7 - 62);
    }
}
