//! Is a module containing the [`Word`] type and the readers for the three kinds of words.

use tcl_base::source_file::{CharSource, Position};

use crate::{
    error::{Error, UnterminatedBrace, UnterminatedQuote},
    escape::read_escape,
    sink::{Discard, Sink},
    whitespace::{self, is_word_separator},
};

/// Is an enumeration of the ways a word can be written, decided by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WordKind {
    /// Runs until unescaped whitespace; backslash substitution applies.
    Plain,

    /// Enclosed in `"`; backslash substitution applies.
    Quoted,

    /// Enclosed in balanced `{` `}`; only backslash-newline is substituted.
    Braced,
}

/// Represents a single word read from the source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    /// The content of the word after substitution, without enclosing quotes or braces.
    pub text: String,

    /// How the word was written.
    pub kind: WordKind,

    /// The position of the first character of the word, including an opening quote or brace.
    pub start: Position,

    /// The position right after the last character of the word, including a closing quote or
    /// brace.
    pub end: Position,
}

/// Reads the next word, skipping the whitespace in front of it.
///
/// Returns [`None`] if only whitespace is left. The whitespace following the word is not
/// consumed.
///
/// # Errors
/// - [`Error::UnterminatedQuote`]: the word starts with `"` that is never closed.
/// - [`Error::UnterminatedBrace`]: the word starts with `{` that is never matched.
pub fn read_word(source: &mut impl CharSource) -> Result<Option<Word>, Error> {
    whitespace::skip_whitespace(source);

    let start = source.position();
    let mut text = String::new();

    let Some(kind) = scan_word(source, &mut text)? else {
        return Ok(None);
    };

    Ok(Some(Word {
        text,
        kind,
        start,
        end: source.position(),
    }))
}

/// Reads the content of a double-quoted word.
///
/// The source must be positioned right after the opening `"`. The closing `"` is consumed but
/// not included in the result.
///
/// # Errors
/// - [`Error::UnterminatedQuote`]: the end of input is reached before the closing `"`.
pub fn read_quotes(source: &mut impl CharSource) -> Result<String, Error> {
    let opening = source.position();
    let mut text = String::new();
    scan_quotes(source, opening, &mut text)?;

    Ok(text)
}

/// Reads the content of a brace-quoted word.
///
/// The source must be positioned right after the opening `{`. The matching `}` is consumed but
/// not included in the result.
///
/// # Errors
/// - [`Error::UnterminatedBrace`]: the end of input is reached before the matching `}`.
pub fn read_braces(source: &mut impl CharSource) -> Result<String, Error> {
    let opening = source.position();
    let mut text = String::new();
    scan_braces(source, opening, &mut text)?;

    Ok(text)
}

/// Moves past the whitespace under the source or, if there is none, past one word and the
/// whitespace after it.
///
/// # Errors
/// See [`read_word`].
pub fn read_to_next_word(source: &mut impl CharSource) -> Result<(), Error> {
    if source.peek_char().is_some_and(is_word_separator) {
        whitespace::skip_whitespace(source);
        return Ok(());
    }

    scan_word(source, &mut Discard)?;
    whitespace::skip_whitespace(source);

    Ok(())
}

/// Applies [`read_to_next_word`] `count` times without building any of the skipped words.
///
/// # Errors
/// See [`read_word`].
pub fn move_to_word(source: &mut impl CharSource, count: usize) -> Result<(), Error> {
    for _ in 0..count {
        read_to_next_word(source)?;
    }

    Ok(())
}

/// Dispatches on the upcoming character; returns [`None`] at the end of input.
fn scan_word(source: &mut impl CharSource, sink: &mut impl Sink) -> Result<Option<WordKind>, Error> {
    let opening = source.position();

    let kind = match source.peek_char() {
        None => return Ok(None),
        Some('"') => {
            source.read_one();
            scan_quotes(source, opening, sink)?;
            WordKind::Quoted
        }
        Some('{') => {
            source.read_one();
            scan_braces(source, opening, sink)?;
            WordKind::Braced
        }
        Some(_) => {
            scan_plain(source, sink);
            WordKind::Plain
        }
    };

    Ok(Some(kind))
}

fn scan_plain(source: &mut impl CharSource, sink: &mut impl Sink) {
    while let Some(character) = source.peek_char() {
        if is_word_separator(character) {
            break;
        }

        source.read_one();

        if character == '\\' {
            sink.push(read_escape(source));
        } else {
            sink.push(character);
        }
    }
}

fn scan_quotes(
    source: &mut impl CharSource,
    opening: Position,
    sink: &mut impl Sink,
) -> Result<(), Error> {
    loop {
        match source.read_one() {
            None => return Err(UnterminatedQuote { opening }.into()),
            Some('"') => return Ok(()),
            Some('\\') => sink.push(read_escape(source)),
            Some(character) => sink.push(character),
        }
    }
}

fn scan_braces(
    source: &mut impl CharSource,
    opening: Position,
    sink: &mut impl Sink,
) -> Result<(), Error> {
    let mut depth = 1_usize;

    loop {
        let Some(character) = source.read_one() else {
            return Err(UnterminatedBrace { opening }.into());
        };

        match character {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            '\\' => {
                if source.peek_char() == Some('\n') {
                    sink.push(read_escape(source));
                    continue;
                }

                // kept verbatim, and an escaped brace never changes the depth
                let Some(escaped) = source.read_one() else {
                    return Err(UnterminatedBrace { opening }.into());
                };

                sink.push('\\');
                sink.push(escaped);
                continue;
            }
            _ => {}
        }

        sink.push(character);
    }
}
