use crate::utils::error::{PetError, Result};
use rand::Rng;
use std::fmt;

const OPERAND_MIN: i32 = 1;
const OPERAND_MAX: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}

/// Expected answer. Division is kept in tenths, rounded half to even.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Whole(i32),
    Tenths(i32),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Whole(n) => write!(f, "{}", n),
            Answer::Tenths(t) => write!(f, "{:.1}", *t as f64 / 10.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { expected: Answer },
    NoAnswer,
}

/// Arithmetic question the player must answer before a trick can be taught.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathChallenge {
    pub lhs: i32,
    pub rhs: i32,
    pub operation: Operation,
}

impl MathChallenge {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let lhs = rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
        let rhs = rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
        let operation = Operation::ALL[rng.gen_range(0..Operation::ALL.len())];
        Self { lhs, rhs, operation }
    }

    pub fn question(&self) -> String {
        format!(
            "What is {} {} {}?",
            self.lhs,
            self.operation.symbol(),
            self.rhs
        )
    }

    pub fn answer(&self) -> Answer {
        match self.operation {
            Operation::Add => Answer::Whole(self.lhs + self.rhs),
            Operation::Subtract => Answer::Whole(self.lhs - self.rhs),
            Operation::Multiply => Answer::Whole(self.lhs * self.rhs),
            Operation::Divide => {
                let quotient = self.lhs as f64 / self.rhs as f64;
                let tenths = (quotient * 10.0).round_ties_even() as i32;
                Answer::Tenths(tenths)
            }
        }
    }

    /// Blank input counts as no answer; anything unparsable is a validation error.
    /// Division answers must equal the rounded quotient exactly, so `0.34`
    /// is wrong for `1 / 3`.
    pub fn check(&self, input: &str) -> Result<Verdict> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Verdict::NoAnswer);
        }

        let expected = self.answer();
        let correct = match expected {
            Answer::Whole(n) => input.parse::<i32>().ok().map(|v| v == n),
            Answer::Tenths(t) => input.parse::<f64>().ok().map(|v| v == t as f64 / 10.0),
        };

        match correct {
            Some(true) => Ok(Verdict::Correct),
            Some(false) => Ok(Verdict::Incorrect { expected }),
            None => Err(PetError::ValidationError {
                message: "Please enter a valid number.".to_string(),
            }),
        }
    }
}
