//! Contains all kinds of lexical errors that can occur while splitting a script into words.

use derive_more::From;
use enum_as_inner::EnumAsInner;
use tcl_base::source_file::Position;
use thiserror::Error;

/// A double-quoted word reached the end of input before its closing `"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("found a double-quoted word without a closing `\"`")]
pub struct UnterminatedQuote {
    /// The position of the opening `"`, or of the first quoted character when the reader was
    /// entered with the quote already consumed.
    pub opening: Position,
}

/// A brace-quoted word reached the end of input before the matching `}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("found a brace-quoted word without a matching `}}`")]
pub struct UnterminatedBrace {
    /// The position of the opening `{`, or of the first braced character when the reader was
    /// entered with the brace already consumed.
    pub opening: Position,
}

/// A backslash is not followed by anything that can be decoded.
///
/// The decoder gives every sequence a meaning, a dangling backslash included, so no reader
/// produces this error. The variant keeps the error set stable for a stricter decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("found a backslash that is not followed by an escape sequence")]
pub struct MalformedEscape {
    /// The position where the escape sequence was expected to start.
    pub position: Position,
}

/// Is an enumeration containing all kinds of lexical errors that can occur while splitting a
/// script into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    UnterminatedQuote(UnterminatedQuote),

    #[error(transparent)]
    UnterminatedBrace(UnterminatedBrace),

    #[error(transparent)]
    MalformedEscape(MalformedEscape),
}

impl Error {
    /// Gets the position that a diagnostic for this error should point at.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::UnterminatedQuote(error) => error.opening,
            Self::UnterminatedBrace(error) => error.opening,
            Self::MalformedEscape(error) => error.position,
        }
    }

    /// Gets a short hint on how the script can be fixed.
    #[must_use]
    pub fn help(&self) -> &'static str {
        match self {
            Self::UnterminatedQuote(..) => "this quote is never closed",
            Self::UnterminatedBrace(..) => "this brace is never matched by a `}`",
            Self::MalformedEscape(..) => "this escape sequence cannot be decoded",
        }
    }
}
