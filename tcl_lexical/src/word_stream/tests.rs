use std::fmt::Display;

use proptest::{
    prelude::Arbitrary,
    prop_assert, prop_assert_eq, proptest,
    strategy::{BoxedStrategy, Strategy},
    test_runner::TestCaseResult,
};
use tcl_base::{
    diagnostic::{Dummy, Storage},
    source_file::{CharSource, Cursor, SourceFile},
};
use tcl_test::input::Input;

use super::WordStream;
use crate::{
    error::Error,
    word::{
        self, read_word,
        tests::{WhiteSpaces, Word},
    },
};

/// Represents an input for the [`super::WordStream`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Script {
    /// The words of the script, each followed by the whitespace separating it from the next one.
    pub words: Vec<(Word, WhiteSpaces)>,
}

impl Arbitrary for Script {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec((Word::arbitrary(), WhiteSpaces::arbitrary()), 0..8)
            .prop_map(|words| Self { words })
            .boxed()
    }
}

impl Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (word, separator) in &self.words {
            Display::fmt(word, f)?;
            Display::fmt(separator, f)?;
        }

        Ok(())
    }
}

impl Input<&super::WordStream> for &Script {
    fn assert(self, output: &super::WordStream) -> TestCaseResult {
        let inputs = self.words.iter().map(|(word, _)| word).collect::<Vec<_>>();
        let outputs = output.iter().collect::<Vec<_>>();

        prop_assert_eq!(inputs.len(), outputs.len());
        for (input, output) in inputs.into_iter().zip(outputs) {
            input.assert(output)?;
        }

        Ok(())
    }
}

#[test]
fn tokenize_script() {
    let source_file = SourceFile::temp("set greeting \"hello\\tworld\"\nputs {$greeting}\n").unwrap();
    let storage: Storage<Error> = Storage::new();

    let word_stream = WordStream::tokenize(&mut source_file.cursor(), &storage);

    assert!(storage.as_vec().is_empty());
    assert_eq!(word_stream.len(), 5);
    assert_eq!(word_stream[2].text, "hello\tworld");
    assert_eq!(word_stream[4].text, "$greeting");
    assert_eq!(word_stream[4].kind, word::WordKind::Braced);
}

#[test]
fn tokenize_reports_unterminated_brace() {
    let mut cursor = Cursor::new("proc f {} {\n  return 1\n");
    let storage: Storage<Error> = Storage::new();

    let words = WordStream::tokenize(&mut cursor, &storage).dissolve();

    let texts = words.iter().map(|word| word.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, vec!["proc", "f", ""]);

    let errors = storage.into_vec();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_unterminated_brace());
    assert_eq!(errors[0].position().byte_index(), 10);
}

#[test]
fn tokenize_keeps_trailing_backslash() {
    let mut cursor = Cursor::new("set path C:\\");
    let storage: Storage<Error> = Storage::new();

    let words = WordStream::tokenize(&mut cursor, &storage).dissolve();

    let texts = words.iter().map(|word| word.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, vec!["set", "path", "C:\\"]);
    assert_eq!(words[2].end.byte_index(), 12);
    assert!(storage.as_vec().is_empty());
}

#[test]
fn tokenize_after_skipping() {
    let mut cursor = Cursor::new("a {b c} \"d\" e");

    word::move_to_word(&mut cursor, 2).unwrap();
    let words = WordStream::tokenize(&mut cursor, &Dummy);

    assert_eq!(words.len(), 2);
    assert_eq!(words[0].text, "d");
    assert_eq!(words[1].text, "e");
}

proptest! {
    #[test]
    fn word_stream_test(
        input in Script::arbitrary()
    ) {
        let source = input.to_string();
        let source_file = SourceFile::temp(&source)?;

        let storage: Storage<Error> = Storage::new();
        let word_stream = WordStream::tokenize(&mut source_file.cursor(), &storage);

        prop_assert!(storage.as_vec().is_empty());
        input.assert(&word_stream)?;
    }

    #[test]
    fn rescan_test(
        input in Script::arbitrary()
    ) {
        let source = input.to_string();
        let word_stream = WordStream::tokenize(&mut Cursor::new(&source), &Dummy);

        for word in word_stream.iter() {
            let consumed = &source[word.start.byte_index()..word.end.byte_index()];
            let mut cursor = Cursor::new(consumed);

            let rescanned = read_word(&mut cursor).unwrap();
            prop_assert_eq!(rescanned.as_ref().map(|x| x.text.as_str()), Some(word.text.as_str()));
            prop_assert_eq!(cursor.read_one(), None);
        }
    }

    #[test]
    fn move_to_word_test(
        input in Script::arbitrary(),
        skip in 0usize..8,
    ) {
        let source = input.to_string();
        let mut cursor = Cursor::new(&source);

        word::move_to_word(&mut cursor, skip).unwrap();
        let rest = WordStream::tokenize(&mut cursor, &Dummy);

        let expected = input.words.len().saturating_sub(skip);
        prop_assert_eq!(rest.len(), expected);
        for (output, (input, _)) in rest.iter().zip(input.words.iter().skip(skip)) {
            input.assert(output)?;
        }
    }
}
