use crate::roll::RollContext;
use rand::{rngs::StdRng, SeedableRng};

/// Caps on the size of the tables an evaluation may build.
///
/// `None` disables a cap.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Limits {
    /// The most dice a single `NdM` may roll.
    pub max_dice: Option<usize>,
    /// The most outcomes a table built by `d` or `*` may have.
    pub max_outcomes: Option<usize>,
}

impl Limits {
    pub const UNBOUNDED: Self = Self {
        max_dice: None,
        max_outcomes: None,
    };
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_dice: Some(1000),
            max_outcomes: Some(10_000),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub limits: Limits,
    /// Seeds the roller for reproducible results. Entropy is used otherwise.
    pub seed: Option<u64>,
}

impl Config {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn context(&self) -> RollContext<StdRng> {
        RollContext::new(self.limits, self.rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::Roller;

    #[test]
    fn test_default_limits() {
        let config = Config::default();
        assert_eq!(config.limits.max_dice, Some(1000));
        assert_eq!(config.limits.max_outcomes, Some(10_000));
        assert_eq!(config.seed, None);
        assert_eq!(config.context().limits(), Limits::default());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = Config {
            seed: Some(42),
            ..Config::default()
        };
        let mut a = config.rng();
        let mut b = config.rng();
        let xs: Vec<u32> = (0..8).map(|_| Roller::draw(&mut a)).collect();
        let ys: Vec<u32> = (0..8).map(|_| Roller::draw(&mut b)).collect();
        assert_eq!(xs, ys);
    }
}
