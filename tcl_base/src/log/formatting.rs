//! Contains the ANSI escape codes used to style and color console output.

use std::fmt::Display;

/// Represents a style that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Self::Bold => "\x1B[1m",
        }
    }

    /// Applies the style to the given displayable object.
    pub fn with<T>(self, display: T) -> Painted<T> {
        Painted {
            code: self.code(),
            display,
        }
    }
}

/// Represents a foreground color that can be applied to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Yellow,
    Cyan,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1B[31m",
            Self::Yellow => "\x1B[33m",
            Self::Cyan => "\x1B[36m",
        }
    }

    /// Applies the color to the given displayable object.
    pub fn with<T>(self, display: T) -> Painted<T> {
        Painted {
            code: self.code(),
            display,
        }
    }
}

/// Is a struct implementing [`Display`] that wraps a displayable object in an ANSI escape code
/// and resets the terminal afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Painted<T> {
    code: &'static str,

    /// The displayable object.
    pub display: T,
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\x1B[0m", self.code, self.display)
    }
}
