#![allow(clippy::future_not_send)]

//! Contains the code related to the script input and the cursor that the word scanner reads from.

use std::{
    fmt::{Debug, Display},
    fs::File,
    ops::Range,
    path::PathBuf,
    sync::Arc,
};

use getset::{CopyGetters, Getters};
use memmap::MmapOptions;
use ouroboros::self_referencing;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

/// Represents a TCL script loaded into memory.
#[derive(Getters)]
pub struct SourceFile {
    source: MappedSource,

    /// Gets the full path to the source file.
    #[get = "pub"]
    full_path: PathBuf,

    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("lines", &self.lines.len())
            .finish()
    }
}

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    #[borrows(mapped)]
    mapped_str: &'this str,
}

impl MappedSource {
    fn create(file: File) -> Result<Self, Error> {
        // mapping a zero-length file fails on most platforms
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        MappedSourceTryBuilder {
            file,
            mapped,
            mapped_str_builder: |mapped| {
                mapped
                    .as_ref()
                    .map_or(Ok(""), |mapped| std::str::from_utf8(mapped).map_err(Error::from))
            },
        }
        .try_build()
    }

    fn content(&self) -> &str { self.borrow_mapped_str() }
}

impl SourceFile {
    /// Gets the content of the source file.
    #[must_use]
    pub fn content(&self) -> &str { self.source.content() }

    /// Gets the line of the source file at the given line number, including its line terminator.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        let range = self.lines.get(line.checked_sub(1)?)?;
        Some(&self.content()[range.clone()])
    }

    /// Gets the number of lines in the source file.
    #[must_use]
    pub fn line_number(&self) -> usize { self.lines.len() }

    /// Creates a [`Cursor`] positioned at the very beginning of the source file.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_> { Cursor::new(self.content()) }

    /// Loads the source file from the given file path.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn load(file: File, path: PathBuf) -> Result<Arc<Self>, Error> {
        let source = MappedSource::create(file)?;
        let lines = get_line_byte_positions(source.content());

        Ok(Arc::new(Self {
            source,
            full_path: path,
            lines,
        }))
    }

    /// Creates a temporary source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   mapping it to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("tcl")
            .suffix(".tcl")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }

    /// Gets the [`Location`] of the given byte index.
    ///
    /// The byte index equal to the content length is accepted and points past the last character.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        if !self.content().is_char_boundary(byte_index) {
            return None;
        }

        // the last range is the only one allowed to contain its own end
        let line = self.lines.partition_point(|range| range.end <= byte_index);
        let line = line.min(self.lines.len() - 1);
        let range = &self.lines[line];

        let column = self.content()[range.start..byte_index].chars().count() + 1;

        Some(Location {
            line: line + 1,
            column,
        })
    }
}

/// Is an unsigned integer that represents a byte index in the source code.
pub type ByteIndex = usize;

/// Is a struct pointing to a particular location in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location (starts at 1).
    pub column: usize,
}

/// Represents a range of characters in a source file.
#[derive(Clone, CopyGetters, Getters)]
pub struct Span {
    /// Gets the start byte index of the span.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_file, &other.source_file)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Span {}

impl Span {
    /// Creates a span from the given start and end byte indices in the source file.
    ///
    /// Returns [`None`] if the indices are out of order or do not lie on character boundaries.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        let content = source_file.content();
        if start > end || !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Creates a span covering the single character found at the given position.
    ///
    /// At the end of the source file the span is empty.
    #[must_use]
    pub fn at(source_file: Arc<SourceFile>, position: Position) -> Option<Self> {
        let start = position.byte_index();
        let width = source_file
            .content()
            .get(start..)?
            .chars()
            .next()
            .map_or(0, char::len_utf8);

        Self::new(source_file, start, start + width)
    }

    /// Gets the string slice of the source code that the span represents.
    #[must_use]
    pub fn str(&self) -> &str { &self.source_file.content()[self.start..self.end] }

    /// Gets the starting [`Location`] of the span.
    #[must_use]
    pub fn start_location(&self) -> Location {
        self.source_file
            .get_location(self.start)
            .expect("span start is always a char boundary")
    }
}

/// An opaque token that remembers a place in a [`CharSource`].
///
/// A position is only meaningful for the source that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, CopyGetters)]
pub struct Position {
    /// Gets the byte offset of the position; intended for diagnostics only.
    #[get_copy = "pub"]
    byte_index: ByteIndex,
}

/// A seekable character source that the word scanner consumes one character at a time.
pub trait CharSource {
    /// Consumes the next character, or returns [`None`] at the end of input.
    fn read_one(&mut self) -> Option<char>;

    /// Gets the current position of the source.
    fn position(&self) -> Position;

    /// Restores a position previously obtained from [`CharSource::position`].
    fn seek(&mut self, position: Position);

    /// Gets at most `count` upcoming characters without consuming them.
    ///
    /// Fewer characters are returned if the end of input is reached.
    fn peek(&mut self, count: usize) -> String {
        let saved = self.position();
        let peeked = std::iter::from_fn(|| self.read_one()).take(count).collect();
        self.seek(saved);

        peeked
    }

    /// Gets the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        let saved = self.position();
        let character = self.read_one();
        self.seek(saved);

        character
    }
}

/// A [`CharSource`] indexing directly into an in-memory string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, CopyGetters)]
pub struct Cursor<'a> {
    /// Gets the whole text the cursor moves over.
    #[get_copy = "pub"]
    text: &'a str,
    byte_index: ByteIndex,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of the given text.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            byte_index: 0,
        }
    }

    /// Gets the text that has not been consumed yet.
    #[must_use]
    pub fn rest(&self) -> &'a str { &self.text[self.byte_index..] }
}

impl CharSource for Cursor<'_> {
    fn read_one(&mut self) -> Option<char> {
        let character = self.rest().chars().next()?;
        self.byte_index += character.len_utf8();

        Some(character)
    }

    fn position(&self) -> Position {
        Position {
            byte_index: self.byte_index,
        }
    }

    fn seek(&mut self, position: Position) {
        assert!(
            self.text.is_char_boundary(position.byte_index),
            "the position does not belong to this cursor"
        );

        self.byte_index = position.byte_index;
    }

    fn peek(&mut self, count: usize) -> String { self.rest().chars().take(count).collect() }

    fn peek_char(&mut self) -> Option<char> { self.rest().chars().next() }
}

fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let mut results = Vec::new();
    let mut line_start = 0;
    let mut characters = text.char_indices().peekable();

    while let Some((byte, character)) = characters.next() {
        let line_end = match character {
            '\n' => byte + 1,
            '\r' if characters.next_if(|(_, next)| *next == '\n').is_some() => byte + 2,
            '\r' => byte + 1,
            _ => continue,
        };

        results.push(line_start..line_end);
        line_start = line_end;
    }

    results.push(line_start..text.len());

    results
}
