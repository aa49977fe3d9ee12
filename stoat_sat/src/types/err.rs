/*!
Error types used in the library.

- Some of these are external --- e.g. a [ParseError] notes where, and why, a DIMACS
  input could not be read.
- Others are internally expected and surface only on malformed problems --- e.g. a
  clause whose literals mention an atom the solver does not know of.

Names of the error enums --- for the most part --- mirror the module they originate
from, and each converts into the top-level [ErrorKind].
*/

use crate::db::ClauseKey;

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error related to parsing DIMACS input.
    Parse(ParseError),

    /// A clause mentions an atom outside the solver's atom table.
    ///
    /// Identified by a pre-solve validation pass, before any propagation.
    OutOfRangeAtom {
        /// The key of the offending clause.
        clause: ClauseKey,
    },

    /// An error from the integer → boolean encoding.
    Encoding(EncodingError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::OutOfRangeAtom { clause } => {
                write!(f, "Variable index out of range for clause {clause}")
            }
            Self::Encoding(e) => e.fmt(f),
        }
    }
}

/// Errors from reading a DIMACS input.
///
/// Each variant carries the 1-based line number on which the error was noted, together
/// with the offending text, and the [Display](std::fmt::Display) rendering is stable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// No content was found.
    Empty,

    /// A line was read where the header was expected, without the `p cnf ` prefix.
    HeaderPrefix { line: usize, text: String },

    /// The header did not contain an atom count and a clause count.
    HeaderCounts { line: usize, text: String },

    /// Some token followed the clause count of an otherwise well-formed header.
    JunkAfterHeader { line: usize, junk: String },

    /// A token of a clause line could not be read as a literal.
    Literal { line: usize, text: String },

    /// A `0` appeared somewhere other than the end of a clause line.
    MidlineZero { line: usize, text: String },

    /// A clause line was not terminated by `0`.
    MissingZero { line: usize, text: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(
                f,
                "Invalid dimacs input format - all lines are either empty or commented out"
            ),

            Self::HeaderPrefix { line, text } => write!(
                f,
                "{line}: Invalid dimacs input format, expecting a line prefix 'p cnf ' but got '{text}'"
            ),

            Self::HeaderCounts { line, text } => write!(
                f,
                "{line}: Invalid dimacs input format, expecting a header 'p cnf <variables: unsigned int> <clauses: unsigned int>' but got '{text}'"
            ),

            Self::JunkAfterHeader { line, junk } => write!(
                f,
                "{line}: Invalid dimacs input format, junk after header '{junk}'"
            ),

            Self::Literal { line, text } => write!(
                f,
                "{line}: Invalid dimacs input format, expecting a literal but got '{text}'"
            ),

            Self::MidlineZero { line, text } => {
                write!(f, "{line}: 0 should be only at the end for the line '{text}'")
            }

            Self::MissingZero { line, text } => write!(
                f,
                "{line}: Missing 0 at the end of the line for line '{text}'"
            ),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from the integer → boolean encoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodingError {
    /// The value is outside the encodable range.
    ValueTooLarge(i32),

    /// No one-hot atom of the variable is true in the model.
    NoValue,

    /// More than one one-hot atom of the variable is true in the model.
    MultipleValues,
}

impl std::fmt::Display for EncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ValueTooLarge(value) => write!(f, "Value is too big: {value}"),
            Self::NoValue => write!(f, "No value"),
            Self::MultipleValues => write!(f, "Multiple values"),
        }
    }
}

impl From<EncodingError> for ErrorKind {
    fn from(e: EncodingError) -> Self {
        ErrorKind::Encoding(e)
    }
}

impl std::error::Error for ErrorKind {}
impl std::error::Error for ParseError {}
impl std::error::Error for EncodingError {}
