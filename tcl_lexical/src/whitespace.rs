//! Contains the scanners that consume runs of whitespace between words and after a
//! backslash-newline continuation.

use tcl_base::source_file::CharSource;

use crate::sink::{Discard, Sink};

/// Checks if the character separates words.
#[must_use]
pub fn is_word_separator(character: char) -> bool { character.is_whitespace() }

/// Checks if the character is folded away after a backslash-newline continuation.
#[must_use]
pub fn is_space_or_tab(character: char) -> bool { matches!(character, ' ' | '\t') }

/// Consumes the longest run of whitespace characters, newlines included.
///
/// The source is left at the first non-whitespace character or at the end of input.
pub fn read_whitespace(source: &mut impl CharSource) -> String {
    let mut run = String::new();
    walk(source, is_word_separator, &mut run);
    run
}

/// Consumes the longest run of spaces and horizontal tabs, stopping at a newline.
///
/// The source is left at the first character that is neither or at the end of input.
pub fn read_space_and_tabs(source: &mut impl CharSource) -> String {
    let mut run = String::new();
    walk(source, is_space_or_tab, &mut run);
    run
}

pub(crate) fn skip_whitespace(source: &mut impl CharSource) {
    walk(source, is_word_separator, &mut Discard);
}

pub(crate) fn skip_space_and_tabs(source: &mut impl CharSource) {
    walk(source, is_space_or_tab, &mut Discard);
}

/// Advances the source while the predicate holds for the upcoming character.
fn walk(source: &mut impl CharSource, predicate: impl Fn(char) -> bool, sink: &mut impl Sink) {
    while let Some(character) = source.peek_char() {
        if !predicate(character) {
            break;
        }

        source.read_one();
        sink.push(character);
    }
}
