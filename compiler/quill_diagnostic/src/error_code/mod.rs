//! Error codes for resolution diagnostics.
//!
//! Format: E#### where the first digit indicates the phase:
//! - E2xxx: Resolution errors
//! - E9xxx: Internal compiler errors

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Reference still unresolved when the pass budget ran out
    E2001,
    /// Implicit enumerator value cannot be computed from the previous value
    E2002,
    /// Name used as a type does not denote a type
    E2003,
    /// Duplicate member in a type declaration
    E2004,
    /// Implicit enumerator value overflows
    E2005,
    /// Name used as a value does not denote a value
    E2006,
    /// Internal compiler error
    E9001,
}

impl ErrorCode {
    /// All variants, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E9001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line explanation, used by `--explain` style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E2001 => "unresolved reference",
            ErrorCode::E2002 => "impossible increment",
            ErrorCode::E2003 => "not a type",
            ErrorCode::E2004 => "duplicate member",
            ErrorCode::E2005 => "enumerator value overflow",
            ErrorCode::E2006 => "not a value",
            ErrorCode::E9001 => "internal compiler error",
        }
    }

    pub fn is_resolution_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }

    pub fn is_internal(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E2001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
