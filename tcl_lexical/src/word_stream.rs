//! Contains the [`WordStream`] struct, the list of every word in a script.

use std::ops::Index;

use derive_more::Deref;
use tcl_base::{diagnostic::Handler, source_file::CharSource};

use crate::{
    error::Error,
    word::{read_word, Word},
};

/// Is a list of the [`Word`]s read from a source, in order.
///
/// This struct is the final output of the word scanner and is meant to be consumed by whatever
/// evaluates the script.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct WordStream {
    #[deref]
    words: Vec<Word>,
}

impl WordStream {
    /// Splits the rest of the source into words.
    ///
    /// This function calls [`read_word`] repeatedly until the source is exhausted. A lexical error
    /// is reported to the handler and ends the stream; the words read before it are kept.
    #[must_use]
    pub fn tokenize(source: &mut impl CharSource, handler: &dyn Handler<Error>) -> Self {
        let mut words = Vec::new();

        loop {
            match read_word(source) {
                Ok(Some(word)) => words.push(word),
                Ok(None) => break,
                Err(error) => {
                    // every error is raised at the end of input, nothing is left to scan
                    handler.receive(error);
                    break;
                }
            }
        }

        Self { words }
    }

    /// Dissolves this struct into the list of words.
    #[must_use]
    pub fn dissolve(self) -> Vec<Word> { self.words }
}

impl Index<usize> for WordStream {
    type Output = Word;

    fn index(&self, index: usize) -> &Self::Output { &self.words[index] }
}

#[cfg(test)]
mod tests;
