//! A postfix (RPN) calculator on top of [`BoundedStack`].
//!
//! Numbers are pushed as they're read; operators consume operands from the
//! top of the stack. Like the stack itself, a number pushed onto a full stack
//! is dropped.

use crate::stack::{BoundedStack, DEFAULT_CAPACITY};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("unknown token `{0}`")]
    UnknownToken(String),

    #[error("`{op}` needs {needed} operand(s), but the stack has {available}")]
    MissingOperands {
        op: String,
        needed: usize,
        available: usize,
    },

    #[error("division by zero")]
    DivisionByZero,
}

#[derive(Debug, Clone, Default)]
pub struct Calculator<const N: usize = DEFAULT_CAPACITY> {
    stack: BoundedStack<N>,
}

impl<const N: usize> Calculator<N> {
    pub fn new() -> Self {
        Self {
            stack: BoundedStack::new(),
        }
    }

    pub fn stack(&self) -> &BoundedStack<N> {
        &self.stack
    }

    /// Evaluate every whitespace-separated token in `line`, then return the
    /// top of the stack.
    ///
    /// Evaluation stops at the first bad token. Tokens before it have already
    /// taken effect; the bad one leaves the stack untouched.
    pub fn eval_line(&mut self, line: &str) -> Result<Option<f32>, CalcError> {
        for token in line.split_whitespace() {
            self.eval_token(token)?;
        }
        Ok(self.result())
    }

    pub fn eval_token(&mut self, token: &str) -> Result<(), CalcError> {
        match token {
            "+" => self.binary(token, |a, b| Ok(a + b)),
            "-" => self.binary(token, |a, b| Ok(a - b)),
            "*" => self.binary(token, |a, b| Ok(a * b)),
            "/" => self.binary(token, |a, b| {
                if b == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }),
            "neg" => {
                let [a] = self.operands(token)?;
                self.replace::<1>(&[-a]);
                Ok(())
            }
            "dup" => {
                let [a] = self.operands(token)?;
                self.stack.push(a);
                Ok(())
            }
            "swap" => {
                let [a, b] = self.operands(token)?;
                self.replace::<2>(&[b, a]);
                Ok(())
            }
            "drop" => {
                self.operands::<1>(token)?;
                self.stack.pop();
                Ok(())
            }
            "clear" => {
                self.stack.clear();
                Ok(())
            }
            _ => {
                let value = token
                    .parse::<f32>()
                    .map_err(|_| CalcError::UnknownToken(token.to_owned()))?;
                self.stack.push(value);
                Ok(())
            }
        }
    }

    pub fn result(&self) -> Option<f32> {
        self.stack.peek()
    }

    /// `a op b`, where `b` is the top of the stack.
    fn binary(
        &mut self,
        op: &str,
        f: impl FnOnce(f32, f32) -> Result<f32, CalcError>,
    ) -> Result<(), CalcError> {
        let [a, b] = self.operands(op)?;
        let result = f(a, b)?;
        self.replace::<2>(&[result]);
        Ok(())
    }

    /// Copy the top `K` values, bottom first, without popping them.
    fn operands<const K: usize>(&self, op: &str) -> Result<[f32; K], CalcError> {
        let live = self.stack.as_slice();
        let missing = || CalcError::MissingOperands {
            op: op.to_owned(),
            needed: K,
            available: live.len(),
        };

        let start = live.len().checked_sub(K).ok_or_else(missing)?;
        live.get(start..)
            .and_then(|top| <[f32; K]>::try_from(top).ok())
            .ok_or_else(missing)
    }

    /// Pop `K` values and push `with` in their place.
    fn replace<const K: usize>(&mut self, with: &[f32]) {
        for _ in 0..K {
            self.stack.pop();
        }
        for &value in with {
            self.stack.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(line: &str) -> Result<Option<f32>, CalcError> {
        Calculator::<20>::new().eval_line(line)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(eval("3 4 +"), Ok(Some(7.0)));
        assert_eq!(eval("10 4 -"), Ok(Some(6.0)));
        assert_eq!(eval("2.5 4 *"), Ok(Some(10.0)));
        assert_eq!(eval("9 2 /"), Ok(Some(4.5)));
        assert_eq!(eval("1 2 + 4 *"), Ok(Some(12.0)));
    }

    #[test]
    fn negative_literals_and_neg() {
        assert_eq!(eval("-3 2 +"), Ok(Some(-1.0)));
        assert_eq!(eval("5 neg"), Ok(Some(-5.0)));
    }

    #[test]
    fn stack_words() {
        assert_eq!(eval("2 dup *"), Ok(Some(4.0)));
        assert_eq!(eval("1 2 swap -"), Ok(Some(1.0)));
        assert_eq!(eval("1 2 drop"), Ok(Some(1.0)));
        assert_eq!(eval("1 2 clear"), Ok(None));
    }

    #[test]
    fn empty_line_has_no_result() {
        assert_eq!(eval(""), Ok(None));
        assert_eq!(eval("   "), Ok(None));
    }

    #[test]
    fn missing_operands_leave_stack_unchanged() {
        let mut calc = Calculator::<20>::new();
        let err = calc.eval_line("7 +").unwrap_err();
        assert_eq!(
            err,
            CalcError::MissingOperands {
                op: "+".to_owned(),
                needed: 2,
                available: 1,
            }
        );
        assert_eq!(calc.stack().as_slice(), &[7.0]);
        assert_eq!(err.to_string(), "`+` needs 2 operand(s), but the stack has 1");
    }

    #[test]
    fn division_by_zero_leaves_stack_unchanged() {
        let mut calc = Calculator::<20>::new();
        assert_eq!(calc.eval_line("1 0 /"), Err(CalcError::DivisionByZero));
        assert_eq!(calc.stack().as_slice(), &[1.0, 0.0]);
    }

    #[test]
    fn unknown_token() {
        let mut calc = Calculator::<20>::new();
        assert_eq!(
            calc.eval_line("1 2 pow"),
            Err(CalcError::UnknownToken("pow".to_owned()))
        );
        assert_eq!(calc.stack().len(), 2);
    }

    #[test]
    fn numbers_beyond_capacity_are_dropped() {
        let mut calc = Calculator::<2>::new();
        assert_eq!(calc.eval_line("1 2 3"), Ok(Some(2.0)));
        assert_eq!(calc.eval_line("+"), Ok(Some(3.0)));
    }

    #[test]
    fn state_carries_across_lines() {
        let mut calc = Calculator::<20>::new();
        calc.eval_line("6").unwrap();
        assert_eq!(calc.eval_line("7 *"), Ok(Some(42.0)));
    }
}
