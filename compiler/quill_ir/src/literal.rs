//! Literal values and the per-kind increment table used for implicit
//! enumerator values.
//!
//! Floats are stored as `u64` bits so literals keep `Eq` and `Hash`.

use std::fmt;

use crate::{Name, StringInterner};

/// A literal value.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Int(i64),
    /// IEEE-754 bits of an `f64`.
    Float(u64),
    Str(Name),
    Bool(bool),
}

/// The kind of a [`Literal`], without its payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralKind {
    Int,
    Float,
    Str,
    Bool,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::Int => "integer",
            LiteralKind::Float => "floating",
            LiteralKind::Str => "string",
            LiteralKind::Bool => "boolean",
        })
    }
}

/// Operator applied between the previous enumerator value and the step.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum IncrementOp {
    #[default]
    Add,
    Mul,
}

impl IncrementOp {
    /// Parse the operator from its source spelling.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(IncrementOp::Add),
            '*' => Some(IncrementOp::Mul),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            IncrementOp::Add => '+',
            IncrementOp::Mul => '*',
        }
    }
}

/// Increment rule of an enum: `operator` and `step`. Defaults to `+ 1`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Increment {
    pub op: IncrementOp,
    pub step: i64,
}

impl Increment {
    pub const fn new(op: IncrementOp, step: i64) -> Self {
        Increment { op, step }
    }
}

impl Default for Increment {
    fn default() -> Self {
        Increment {
            op: IncrementOp::Add,
            step: 1,
        }
    }
}

/// Why an implicit value could not be computed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IncrementError {
    /// The literal kind has no increment rule.
    Unsupported(LiteralKind),
    /// The result does not fit the literal kind.
    Overflow,
}

/// Computes the next value of one literal kind.
pub type IncrementRule = fn(Literal, Increment) -> Result<Literal, IncrementError>;

impl LiteralKind {
    /// The increment table. Kinds without an entry cannot be incremented.
    pub fn increment_rule(self) -> Option<IncrementRule> {
        match self {
            LiteralKind::Int => Some(increment_int),
            LiteralKind::Float => Some(increment_float),
            LiteralKind::Str | LiteralKind::Bool => None,
        }
    }
}

fn increment_int(value: Literal, increment: Increment) -> Result<Literal, IncrementError> {
    let Literal::Int(previous) = value else {
        return Err(IncrementError::Unsupported(value.kind()));
    };
    let next = match increment.op {
        IncrementOp::Add => previous.checked_add(increment.step),
        IncrementOp::Mul => previous.checked_mul(increment.step),
    };
    next.map(Literal::Int).ok_or(IncrementError::Overflow)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "steps are small author-written integers"
)]
fn increment_float(value: Literal, increment: Increment) -> Result<Literal, IncrementError> {
    let Some(previous) = value.as_float() else {
        return Err(IncrementError::Unsupported(value.kind()));
    };
    let step = increment.step as f64;
    let next = match increment.op {
        IncrementOp::Add => previous + step,
        IncrementOp::Mul => previous * step,
    };
    if next.is_finite() {
        Ok(Literal::float(next))
    } else {
        Err(IncrementError::Overflow)
    }
}

impl Literal {
    #[inline]
    pub fn float(value: f64) -> Self {
        Literal::Float(value.to_bits())
    }

    pub const fn kind(self) -> LiteralKind {
        match self {
            Literal::Int(_) => LiteralKind::Int,
            Literal::Float(_) => LiteralKind::Float,
            Literal::Str(_) => LiteralKind::Str,
            Literal::Bool(_) => LiteralKind::Bool,
        }
    }

    pub const fn as_int(self) -> Option<i64> {
        match self {
            Literal::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(self) -> Option<f64> {
        match self {
            Literal::Float(bits) => Some(f64::from_bits(bits)),
            _ => None,
        }
    }

    /// Apply `increment` using the rule for this literal's kind.
    pub fn increment(self, increment: Increment) -> Result<Literal, IncrementError> {
        let rule = self
            .kind()
            .increment_rule()
            .ok_or(IncrementError::Unsupported(self.kind()))?;
        rule(self, increment)
    }

    /// Source-like rendering, used by dumps and diagnostics.
    pub fn render(self, interner: &StringInterner) -> String {
        match self {
            Literal::Int(v) => v.to_string(),
            Literal::Float(bits) => format!("{:?}", f64::from_bits(bits)),
            Literal::Str(name) => format!("{:?}", interner.lookup(name)),
            Literal::Bool(v) => v.to_string(),
        }
    }
}
