use super::{error::RollError, roller::Roller, Outcome, RResult};
use crate::common::*;
use crate::config::Limits;
use crate::dist::{self, Distribution};
use crate::ops::Operate;
use crate::parse::{
    ast,
    visit::{self, Accept},
};
use rand::rngs::StdRng;

/// Evaluates expressions into distributions and resolves them with its
/// [`Roller`].
///
/// Every operation takes its operands by value and returns a new
/// distribution.
pub struct RollContext<R = StdRng> {
    limits: Limits,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub fn new(limits: Limits, roller: R) -> Self {
        Self { limits, roller }
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(Limits::UNBOUNDED, roller)
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    fn check_outcomes(&self, outcomes: Float) -> RResult<()> {
        match self.limits.max_outcomes {
            Some(max) if outcomes > max as Float => {
                Err(RollError::TooManyOutcomes { outcomes, max })
            }
            _ => Ok(()),
        }
    }

    /// Reports a table the allocator refused as exceeding the outcome limit.
    fn table_error(&self, err: dist::DistError) -> RollError {
        match err {
            dist::DistError::TableTooLarge { outcomes } => RollError::TooManyOutcomes {
                outcomes,
                max: self.limits.max_outcomes.unwrap_or(usize::MAX),
            },
            err => err.into(),
        }
    }

    /// Resolves a dice operand to a non-negative whole number.
    fn dice_operand(&mut self, d: Distribution) -> RResult<usize> {
        let value = self.resolve(&d)?;
        let rounded = value.round();
        if !(rounded >= 0.0 && rounded.is_finite()) {
            return Err(RollError::InvalidDice(value));
        }
        Ok(rounded as usize)
    }

    pub fn add(&mut self, d1: Distribution, d2: Distribution) -> RResult<Distribution> {
        Ok(dist::add(d1, d2)?)
    }

    pub fn times(&mut self, d1: Distribution, d2: Distribution) -> RResult<Distribution> {
        if d1.is_uncertain() || d2.is_uncertain() {
            self.check_outcomes(dist::product_size(&d1, &d2))?;
        }
        dist::times(d1, d2).map_err(|err| self.table_error(err))
    }

    /// `d1 d2`: the sum of `d1` dice with `d2` faces each.
    ///
    /// Uncertain operands are rolled first, so the result is the table for
    /// one concrete `NdM` rather than a mixture over all of them.
    pub fn dice(&mut self, d1: Distribution, d2: Distribution) -> RResult<Distribution> {
        let count = self.dice_operand(d1)?;
        let faces = self.dice_operand(d2)?;
        if count == 0 || faces == 0 {
            return Ok(Distribution::certain(0.0));
        }
        if let Some(max) = self.limits.max_dice {
            if count > max {
                return Err(RollError::TooManyDice { count, max });
            }
        }
        self.check_outcomes(count as Float * faces as Float)?;
        tracing::debug!(count, faces, "building dice table");
        dist::uniform_sum(count, faces).map_err(|err| self.table_error(err))
    }

    pub fn avg(&mut self, d: Distribution) -> RResult<Distribution> {
        Ok(dist::avg(d)?)
    }

    pub fn roll(&mut self, d: Distribution) -> RResult<Distribution> {
        if d.is_certain() {
            return Ok(d);
        }
        let value = self.resolve(&d)?;
        Ok(Distribution::certain(value))
    }

    /// The probability that `d2` resolves to the value `d1` resolves to.
    pub fn prob(&mut self, d1: Distribution, d2: Distribution) -> RResult<Distribution> {
        let value = self.resolve(&d1)?;
        let p = dist::probability_of(value, &d2)?;
        Ok(Distribution::certain(p))
    }

    /// Collapses `d` to a single number, sampling it if it is uncertain.
    pub fn resolve(&mut self, d: &Distribution) -> RResult<Float> {
        let value = dist::sample(d, &mut self.roller)?;
        if d.is_uncertain() {
            tracing::debug!(value, size = d.size(), "rolled");
        }
        Ok(value)
    }

    pub fn eval(&mut self, expr: &ast::Expression) -> RResult<Distribution> {
        expr.root().accept(self)
    }

    /// Evaluates `expr` and resolves the result.
    pub fn evaluate(&mut self, expr: &ast::Expression) -> RResult<Outcome> {
        let distribution = self.eval(expr)?;
        let value = self.resolve(&distribution)?;
        Ok(Outcome {
            distribution,
            value,
        })
    }
}

impl<R: Roller> visit::AstVisitor for RollContext<R> {
    type Output = RResult<Distribution>;

    fn visit_int(&mut self, x: &Int) -> Self::Output {
        Ok(Distribution::certain(*x as Float))
    }

    fn visit_float(&mut self, x: &Float) -> Self::Output {
        Ok(Distribution::certain(*x))
    }

    fn visit_parenthetical(&mut self, p: &ast::Node) -> Self::Output {
        p.accept(self)
    }

    fn visit_binary(
        &mut self,
        l: &ast::Node,
        op: &crate::ops::BinaryOperator,
        r: &ast::Node,
    ) -> Self::Output {
        let left = l.accept(self)?;
        let right = r.accept(self)?;
        op.operate(self, left, right)
    }

    fn visit_call(&mut self, call: &ast::Call) -> Self::Output {
        match call {
            ast::Call::Roll(x) => {
                let value = x.accept(self)?;
                self.roll(value)
            }
            ast::Call::Avg(x) => {
                let value = x.accept(self)?;
                self.avg(value)
            }
            ast::Call::Prob(target, x) => {
                let target = target.accept(self)?;
                let value = x.accept(self)?;
                self.prob(target, value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_utils::assert_close;
    use crate::roll::roller::StepRoller;

    fn low_roller() -> StepRoller {
        StepRoller::new(0, 0)
    }

    fn high_roller() -> StepRoller {
        StepRoller::new(u32::MAX, 0)
    }

    fn eval_with(s: &str, roller: StepRoller) -> RResult<Float> {
        let mut ctx = RollContext::new(Limits::default(), roller);
        let ast = crate::parse::parse(s).unwrap();
        ctx.evaluate(&ast).map(|outcome| outcome.value)
    }

    fn check(s: &str, expected: Float) {
        assert_close(eval_with(s, low_roller()).unwrap(), expected);
    }

    fn check_high(s: &str, expected: Float) {
        assert_close(eval_with(s, high_roller()).unwrap(), expected);
    }

    fn check_err(s: &str, expected: RollError) {
        assert_eq!(eval_with(s, low_roller()).unwrap_err(), expected);
    }

    #[test]
    fn test_eval_number() {
        check("2", 2.0);
        check("2.5", 2.5);
        check("(4)", 4.0);
    }

    #[test]
    fn test_eval_binary() {
        check("2 + 3", 5.0);
        check("2 * 3.5", 7.0);
        check("1 + 2 * 3", 7.0);
        check("(1 + 2) * 3", 9.0);
    }

    #[test]
    fn test_eval_dice() {
        check("3d6", 3.0);
        check_high("3d6", 18.0);
        check("d20 + 4", 5.0);
        check_high("d20 + 4", 24.0);
        check("2d4 * 3", 6.0);
        check_high("1d4 * 1d6", 24.0);
        check("0d6", 0.0);
        check("3d0 + 1", 1.0);
    }

    #[test]
    fn test_eval_rolled_dice_operands() {
        // 2d2 rolls its lowest outcome, 2, before building 2d6
        check("(2d2)d6", 2.0);
        check_high("(2d2)d6", 24.0);
        check("d6d4", 1.0);
    }

    #[test]
    fn test_eval_functions() {
        check("avg(3d6)", 10.5);
        check("avg(1d6 + 2)", 5.5);
        check("avg(2d6 * 2)", 14.0);
        check("avg(7)", 7.0);
        check("prob(4, 1d6)", 1.0 / 6.0);
        check("prob(7, 2d6)", 6.0 / 36.0);
        check("prob(13, 2d6)", 0.0);
        check("prob(3, 3)", 1.0);
        check("prob(2, 3)", 0.0);
        check("roll(2d4) * 2", 4.0);
        check_high("roll(2d4) * 2", 16.0);
        check("roll(5)", 5.0);
    }

    #[test]
    fn test_eval_prob_rolls_target() {
        // the target 1d6 rolls 1 with the low roller
        check("prob(1d6, 1d6)", 1.0 / 6.0);
        check("prob(1d6, 2d6)", 0.0);
    }

    #[test]
    fn test_err_limits() {
        check_err("1001d2", RollError::TooManyDice { count: 1001, max: 1000 });
        check_err(
            "200d100",
            RollError::TooManyOutcomes {
                outcomes: 20_000.0,
                max: 10_000,
            },
        );
        check_err(
            "1d100 * 1d200",
            RollError::TooManyOutcomes {
                outcomes: 20_000.0,
                max: 10_000,
            },
        );
    }

    #[test]
    fn test_unbounded() {
        let mut ctx = RollContext::new_unbounded(low_roller());
        let d = ctx
            .dice(Distribution::certain(1001.0), Distribution::certain(1.0))
            .unwrap();
        assert_eq!(d.size(), 1001);
        assert_eq!(ctx.resolve(&d), Ok(1001.0));
    }

    #[test]
    fn test_unbounded_oversized_tables_are_errors() {
        let mut ctx = RollContext::new_unbounded(low_roller());
        let err = ctx
            .times(Distribution::new(6, 1.0, 0.0), Distribution::certain(1e20))
            .unwrap_err();
        assert!(matches!(
            err,
            RollError::TooManyOutcomes {
                max: usize::MAX,
                ..
            }
        ));
        let err = ctx
            .dice(
                Distribution::certain(usize::MAX as Float),
                Distribution::certain(4.0),
            )
            .unwrap_err();
        assert!(matches!(err, RollError::TooManyOutcomes { .. }));
    }

    #[test]
    fn test_err_invalid_dice() {
        let mut ctx = RollContext::new(Limits::default(), low_roller());
        assert_eq!(
            ctx.dice(Distribution::certain(-2.0), Distribution::certain(6.0)),
            Err(RollError::InvalidDice(-2.0))
        );
        assert!(matches!(
            ctx.dice(Distribution::certain(2.0), Distribution::certain(Float::NAN)),
            Err(RollError::InvalidDice(x)) if x.is_nan()
        ));
    }

    #[test]
    fn test_dice_rounds_operands() {
        let mut ctx = RollContext::new(Limits::default(), low_roller());
        let d = ctx
            .dice(Distribution::certain(1.6), Distribution::certain(5.4))
            .unwrap();
        // 2d5
        assert_eq!(d.size(), 10);
        assert_close(d.total_weight(), 1.0);
    }

    #[test]
    fn test_certain_reductions_are_identity() {
        let mut ctx = RollContext::new(Limits::default(), high_roller());
        let d = ctx.roll(Distribution::certain(4.25)).unwrap();
        assert_eq!(d, Distribution::certain(4.25));
        let d = ctx.avg(Distribution::certain(4.25)).unwrap();
        assert_eq!(d, Distribution::certain(4.25));
        assert_eq!(ctx.resolve(&d), Ok(4.25));
    }

    #[test]
    fn test_err_zero_weight() {
        let mut ctx = RollContext::new(Limits::default(), low_roller());
        let empty = Distribution::new(3, 0.0, 0.0);
        assert!(matches!(
            ctx.roll(empty),
            Err(RollError::Distribution(dist::DistError::ZeroWeight { .. }))
        ));
    }
}
