//! Contains the decoder for backslash substitution.
//!
//! | After `\`        | Substitution                                             |
//! |------------------|----------------------------------------------------------|
//! | `a b f n r t v`  | the matching [`ControlEscape`] character                 |
//! | newline          | a single space; following spaces and tabs are swallowed  |
//! | `0`-`7`          | up to three octal digits, truncated to 8 bits            |
//! | `x`              | any number of hex digits, only the last two count        |
//! | `u`              | up to four hex digits                                    |
//! | anything else    | the character itself                                     |

use std::collections::HashMap;

use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use tcl_base::source_file::CharSource;

use crate::whitespace;

/// Is an enumeration of the single-letter escapes that stand for control characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum ControlEscape {
    Bell,
    Backspace,
    FormFeed,
    NewLine,
    CarriageReturn,
    Tab,
    VerticalTab,
}

impl ControlEscape {
    /// Gets the letter written after the backslash.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Bell => 'a',
            Self::Backspace => 'b',
            Self::FormFeed => 'f',
            Self::NewLine => 'n',
            Self::CarriageReturn => 'r',
            Self::Tab => 't',
            Self::VerticalTab => 'v',
        }
    }

    /// Gets the control character the escape is substituted with.
    #[must_use]
    pub fn character(self) -> char {
        match self {
            Self::Bell => '\x07',
            Self::Backspace => '\x08',
            Self::FormFeed => '\x0C',
            Self::NewLine => '\n',
            Self::CarriageReturn => '\r',
            Self::Tab => '\t',
            Self::VerticalTab => '\x0B',
        }
    }

    /// Looks up the escape written with the given letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        lazy_static! {
            static ref LETTER_ESCAPE_MAP: HashMap<char, ControlEscape> =
                ControlEscape::iter().map(|escape| (escape.letter(), escape)).collect();
        }

        LETTER_ESCAPE_MAP.get(&letter).copied()
    }
}

const BYTE_MASK: u32 = 0xFF;
const UNICODE_MASK: u32 = 0xFFFF;
const MAX_OCTAL_DIGITS: usize = 3;
const MAX_UNICODE_DIGITS: usize = 4;

/// Decodes exactly one escape sequence.
///
/// The source must be positioned right after the backslash. It is left right after the decoded
/// sequence; digit scanning stops in front of the first character that is not a digit.
///
/// A backslash at the end of input stands for itself.
pub fn read_escape(source: &mut impl CharSource) -> char {
    let Some(character) = source.read_one() else {
        return '\\';
    };

    match character {
        '\n' => {
            whitespace::skip_space_and_tabs(source);
            ' '
        }
        '0'..='7' => {
            let first = character.to_digit(8).unwrap_or_default();
            let (value, _) = read_digits(source, 8, MAX_OCTAL_DIGITS - 1, first);
            code_point(value & BYTE_MASK)
        }
        'x' => match read_digits(source, 16, usize::MAX, 0) {
            (_, 0) => 'x',
            (value, _) => code_point(value & BYTE_MASK),
        },
        'u' => match read_digits(source, 16, MAX_UNICODE_DIGITS, 0) {
            (_, 0) => 'u',
            (value, _) => code_point(value & UNICODE_MASK),
        },
        letter => ControlEscape::from_letter(letter).map_or(letter, ControlEscape::character),
    }
}

/// Consumes at most `max_digits` digits of the given radix, folding them onto `initial`.
///
/// Only the low 16 bits of the accumulated value are kept between digits, so an unbounded run
/// keeps its trailing digits. Returns the value and the number of digits consumed.
fn read_digits(
    source: &mut impl CharSource,
    radix: u32,
    max_digits: usize,
    initial: u32,
) -> (u32, usize) {
    let mut value = initial;
    let mut count = 0;

    while count < max_digits {
        let Some(digit) = source.peek_char().and_then(|character| character.to_digit(radix)) else {
            break;
        };

        source.read_one();
        value = ((value * radix) + digit) & UNICODE_MASK;
        count += 1;
    }

    (value, count)
}

/// Surrogate halves have no `char` and decode to the replacement character.
fn code_point(value: u32) -> char { char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER) }

#[cfg(test)]
mod tests;
