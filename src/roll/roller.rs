use rand::Rng;

/// A uniform random source with a finite resolution.
pub trait Roller {
    /// Draws a value uniformly from `0..=u32::MAX`.
    fn draw(&mut self) -> u32;
}

impl<R: Rng> Roller for R {
    fn draw(&mut self) -> u32 {
        self.gen()
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;
