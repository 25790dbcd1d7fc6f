//! Question generation and answer checking.
//!
//! Every tier produces an [`Expression`] whose expected answer is exact,
//! except `extreme`, whose sine values are rounded to two decimals and
//! compared at that precision.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::MalformedAnswer;
use crate::mode::Tier;

/// A 2x2 integer matrix, row-major.
pub type Matrix2 = [[i64; 2]; 2];

/// Angles (degrees) used by the extreme tier.
pub const EXTREME_ANGLES: [u32; 3] = [30, 45, 60];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    const ALL: [ArithOp; 4] = [ArithOp::Add, ArithOp::Sub, ArithOp::Mul, ArithOp::Div];

    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatrixOp {
    Add,
    Sub,
    /// Matrix product, not entrywise.
    Mul,
}

impl MatrixOp {
    const ALL: [MatrixOp; 3] = [MatrixOp::Add, MatrixOp::Sub, MatrixOp::Mul];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "x",
        }
    }

    pub fn apply(self, a: &Matrix2, b: &Matrix2) -> Matrix2 {
        let mut out = [[0i64; 2]; 2];
        for i in 0..2 {
            for j in 0..2 {
                out[i][j] = match self {
                    Self::Add => a[i][j] + b[i][j],
                    Self::Sub => a[i][j] - b[i][j],
                    Self::Mul => a[i][0] * b[0][j] + a[i][1] * b[1][j],
                };
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Question {
    Text(String),
    Matrix {
        lhs: Matrix2,
        op: MatrixOp,
        rhs: Matrix2,
    },
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Matrix { lhs, op, rhs } => {
                writeln!(f, "[{:>2} {:>2}]", lhs[0][0], lhs[0][1])?;
                writeln!(f, "[{:>2} {:>2}]", lhs[1][0], lhs[1][1])?;
                writeln!(f, "   {}", op.symbol())?;
                writeln!(f, "[{:>2} {:>2}]", rhs[0][0], rhs[0][1])?;
                write!(f, "[{:>2} {:>2}]", rhs[1][0], rhs[1][1])
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Answer {
    Scalar(f64),
    Matrix(Matrix2),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) if v.fract() == 0.0 => write!(f, "{v:.0}"),
            Self::Scalar(v) => write!(f, "{v}"),
            Self::Matrix(m) => write!(f, "[[{} {}] [{} {}]]", m[0][0], m[0][1], m[1][0], m[1][1]),
        }
    }
}

/// Raw player input for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Line(String),
    Rows([String; 2]),
}

/// Typed by the player to end a Standard session.
pub const STOP_SENTINEL: &str = "exit";

impl Reply {
    pub fn is_stop(&self) -> bool {
        let is_sentinel = |s: &String| s.trim().eq_ignore_ascii_case(STOP_SENTINEL);
        match self {
            Self::Line(line) => is_sentinel(line),
            Self::Rows(rows) => rows.iter().any(is_sentinel),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// A generated question with its expected answer. Consumed once per round.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    tier: Tier,
    question: Question,
    answer: Answer,
}

impl Expression {
    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    pub fn is_matrix(&self) -> bool {
        matches!(self.answer, Answer::Matrix(_))
    }

    /// Compare a reply against the expected answer.
    pub fn check(&self, reply: &Reply) -> Result<Outcome, MalformedAnswer> {
        let correct = match (&self.answer, reply) {
            (Answer::Scalar(expected), Reply::Line(line)) => {
                let given = parse_scalar(line)?;
                if self.tier == Tier::Extreme {
                    round2(given) == *expected
                } else {
                    given == *expected
                }
            }
            (Answer::Matrix(expected), Reply::Rows(rows)) => {
                let given = [parse_row(0, &rows[0])?, parse_row(1, &rows[1])?];
                given == *expected
            }
            (Answer::Scalar(_), Reply::Rows(_)) => return Err(MalformedAnswer::UnexpectedRows),
            (Answer::Matrix(_), Reply::Line(_)) => return Err(MalformedAnswer::MissingRows),
        };
        Ok(if correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        })
    }
}

fn parse_scalar(line: &str) -> Result<f64, MalformedAnswer> {
    line.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| MalformedAnswer::NotANumber(line.trim().to_string()))
}

fn parse_row(row: usize, line: &str) -> Result<[i64; 2], MalformedAnswer> {
    let bad = || MalformedAnswer::BadRow {
        row: row + 1,
        found: line.trim().to_string(),
    };
    let values: Vec<i64> = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| bad())?;
    match values.as_slice() {
        [a, b] => Ok([*a, *b]),
        _ => Err(bad()),
    }
}

/// Round to two decimal places.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Produces expressions for a tier from an injected random source.
pub struct ExpressionGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> ExpressionGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self, tier: Tier) -> Expression {
        let (question, answer) = match tier {
            Tier::Easy => self.easy(),
            Tier::Medium => self.medium(),
            Tier::Hard => self.hard(),
            Tier::Extreme => self.extreme(),
            Tier::Matrix => self.matrix(),
        };
        Expression {
            tier,
            question,
            answer,
        }
    }

    /// Draw a tier uniformly from `pool` (duplicates weight the draw) and generate for it.
    /// An empty pool falls back to easy.
    pub fn generate_from_pool(&mut self, pool: &[Tier]) -> (Tier, Expression) {
        let tier = pool.choose(&mut self.rng).copied().unwrap_or(Tier::Easy);
        (tier, self.generate(tier))
    }

    fn easy(&mut self) -> (Question, Answer) {
        let op = ArithOp::ALL[self.rng.gen_range(0..ArithOp::ALL.len())];
        let (a, b) = if op == ArithOp::Div {
            let divisor: i64 = self.rng.gen_range(2..=10);
            (divisor * self.rng.gen_range(2..=10), divisor)
        } else {
            (self.rng.gen_range(1..=20), self.rng.gen_range(1..=20))
        };
        let value = match op {
            ArithOp::Add => a + b,
            ArithOp::Sub => a - b,
            ArithOp::Mul => a * b,
            ArithOp::Div => a / b,
        };
        (
            Question::Text(format!("{a} {} {b}", op.symbol())),
            Answer::Scalar(value as f64),
        )
    }

    fn medium(&mut self) -> (Question, Answer) {
        let a: i64 = self.rng.gen_range(1..=15);
        let b: i64 = self.rng.gen_range(1..=15);
        let c: i64 = self.rng.gen_range(2..=10);
        (
            Question::Text(format!("({a} + {b}) * {c}")),
            Answer::Scalar(((a + b) * c) as f64),
        )
    }

    fn hard(&mut self) -> (Question, Answer) {
        if self.rng.gen_bool(0.5) {
            let base: i64 = self.rng.gen_range(2..=10);
            let exp: u32 = self.rng.gen_range(2..=3);
            (
                Question::Text(format!("{base} ^ {exp}")),
                Answer::Scalar(base.pow(exp) as f64),
            )
        } else {
            let root: i64 = self.rng.gen_range(2..=12);
            (
                Question::Text(format!("sqrt({})", root * root)),
                Answer::Scalar(root as f64),
            )
        }
    }

    fn extreme(&mut self) -> (Question, Answer) {
        let angle = EXTREME_ANGLES[self.rng.gen_range(0..EXTREME_ANGLES.len())];
        let value = round2(f64::from(angle).to_radians().sin());
        (
            Question::Text(format!("sin({angle})")),
            Answer::Scalar(value),
        )
    }

    fn matrix(&mut self) -> (Question, Answer) {
        let lhs = self.random_matrix();
        let rhs = self.random_matrix();
        let op = MatrixOp::ALL[self.rng.gen_range(0..MatrixOp::ALL.len())];
        let answer = op.apply(&lhs, &rhs);
        (Question::Matrix { lhs, op, rhs }, Answer::Matrix(answer))
    }

    fn random_matrix(&mut self) -> Matrix2 {
        let mut m = [[0i64; 2]; 2];
        for row in m.iter_mut() {
            for cell in row.iter_mut() {
                *cell = self.rng.gen_range(0..=9);
            }
        }
        m
    }
}
