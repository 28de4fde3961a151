use crate::dist::Distribution;
use crate::roll::{RResult, RollContext, Roller};
use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[enum_dispatch::enum_dispatch(Operate)]
pub enum BinaryOperator {
    Add(Add),
    Mul(Mul),
    Dice(Dice),
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add(_) => "+",
            Self::Mul(_) => "*",
            Self::Dice(_) => "d",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Combines two independent distributions into a new one, consuming both.
#[enum_dispatch::enum_dispatch]
pub trait Operate {
    fn operate<R: Roller>(
        &self,
        ctx: &mut RollContext<R>,
        lhs: Distribution,
        rhs: Distribution,
    ) -> RResult<Distribution>;
}

/// `a + b`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Add;

/// `a * b`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Mul;

/// `NdM`
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dice;

impl Operate for Add {
    fn operate<R: Roller>(
        &self,
        ctx: &mut RollContext<R>,
        lhs: Distribution,
        rhs: Distribution,
    ) -> RResult<Distribution> {
        ctx.add(lhs, rhs)
    }
}

impl Operate for Mul {
    fn operate<R: Roller>(
        &self,
        ctx: &mut RollContext<R>,
        lhs: Distribution,
        rhs: Distribution,
    ) -> RResult<Distribution> {
        ctx.times(lhs, rhs)
    }
}

impl Operate for Dice {
    fn operate<R: Roller>(
        &self,
        ctx: &mut RollContext<R>,
        lhs: Distribution,
        rhs: Distribution,
    ) -> RResult<Distribution> {
        ctx.dice(lhs, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;
    use crate::roll::roller::StepRoller;

    fn ctx() -> RollContext<StepRoller> {
        RollContext::new(Limits::default(), StepRoller::new(0, 0))
    }

    #[test]
    fn test_display() {
        assert_eq!(BinaryOperator::from(Add).to_string(), "+");
        assert_eq!(BinaryOperator::from(Mul).to_string(), "*");
        assert_eq!(BinaryOperator::from(Dice).to_string(), "d");
    }

    #[test]
    fn test_dispatch() {
        let mut ctx = ctx();
        let op = BinaryOperator::from(Add);
        let d = op
            .operate(&mut ctx, Distribution::certain(2.0), Distribution::certain(3.0))
            .unwrap();
        assert_eq!(d, Distribution::certain(5.0));

        let op = BinaryOperator::from(Mul);
        let d = op
            .operate(&mut ctx, Distribution::certain(2.0), Distribution::certain(3.0))
            .unwrap();
        assert_eq!(d, Distribution::certain(6.0));

        let op = BinaryOperator::from(Dice);
        let d = op
            .operate(&mut ctx, Distribution::certain(2.0), Distribution::certain(3.0))
            .unwrap();
        assert_eq!(d.size(), 6);
        assert_eq!(d.constant(), 0.0);
    }
}
