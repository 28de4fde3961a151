//! Dice expressions evaluated over exact discrete distributions.
//!
//! An expression such as `avg(3d6) + 2` is parsed into an AST and folded
//! into a [`Distribution`], which is then resolved to a single number by
//! sampling it with the context's [`Roller`].
//!
//! ```
//! let outcome = dice_prob::roll("prob(7, 2d6)").unwrap();
//! assert!((outcome.value - 1.0 / 6.0).abs() < 1e-12);
//! ```

pub mod common;
mod config;
pub mod dist;
mod error;
pub mod ops;
pub mod parse;
pub mod roll;

pub use config::{Config, Limits};
pub use dist::Distribution;
pub use error::Error;
pub use parse::parse;
pub use roll::{Outcome, RollContext, RollError, Roller};

/// Parses and evaluates `s` in `ctx`.
pub fn roll_with<R: Roller>(s: &str, ctx: &mut RollContext<R>) -> Result<Outcome, Error> {
    let expr = parse(s)?;
    Ok(ctx.evaluate(&expr)?)
}

/// Parses and evaluates `s` with the default [`Config`].
pub fn roll(s: &str) -> Result<Outcome, Error> {
    roll_with(s, &mut Config::default().context())
}
