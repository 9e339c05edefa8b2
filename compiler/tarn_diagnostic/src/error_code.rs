use std::fmt;

/// Error codes for all Tarn diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Type errors
/// - E6xxx: Runtime errors
/// - E9xxx: Internal errors (a well-typed program hit an impossible state)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Integer literal out of range
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unexpected end of input
    E1002,
    /// Input continues after the program expression
    E1003,
    /// Function type without a return type
    E1004,

    // Type Errors (E2xxx)
    /// Type mismatch
    E2001,
    /// Argument count mismatch
    E2002,
    /// Unbound variable
    E2003,
    /// Circular type (occurs check failed)
    E2004,
    /// Unknown type annotation
    E2005,

    // Runtime Errors (E6xxx)
    /// `car`/`cdr` applied to the empty list
    E6001,
    /// Integer overflow
    E6002,

    // Internal Errors (E9xxx)
    /// Internal evaluator error
    E9001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E9001,
    ];

    /// The code as written in diagnostics, e.g. `"E2001"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// Short description used by `tarn explain`-style listings.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unexpected character",
            ErrorCode::E0003 => "integer literal out of range",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "unexpected end of input",
            ErrorCode::E1003 => "trailing input after program",
            ErrorCode::E1004 => "function type without return type",
            ErrorCode::E2001 => "type mismatch",
            ErrorCode::E2002 => "wrong number of arguments",
            ErrorCode::E2003 => "unbound variable",
            ErrorCode::E2004 => "circular type",
            ErrorCode::E2005 => "unknown type annotation",
            ErrorCode::E6001 => "called on empty list",
            ErrorCode::E6002 => "integer overflow",
            ErrorCode::E9001 => "internal evaluator error",
        }
    }

    /// Check if this is a static error (reported before evaluation).
    pub fn is_static(&self) -> bool {
        !self.is_runtime() && !self.is_internal()
    }

    /// Check if this is an expected runtime error (E6xxx range).
    pub fn is_runtime(&self) -> bool {
        self.as_str().starts_with("E6")
    }

    /// Check if this reports an internal invariant violation (E9xxx range).
    pub fn is_internal(&self) -> bool {
        self.as_str().starts_with("E9")
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
