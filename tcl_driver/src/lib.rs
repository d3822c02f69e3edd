//! Contains the command line driver that splits a TCL script into words and prints them.

use std::{cell::Cell, fmt::Display, fs::File, path::PathBuf, process::ExitCode, sync::Arc};

pub use clap::Parser;
use tcl_base::{
    diagnostic::Handler,
    log::{Message, Severity, SourceCodeDisplay},
    source_file::{self, SourceFile, Span},
};
use tcl_lexical::{error::Error, word, word_stream::WordStream};

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "tcl",
    about = "Splits a TCL script into words.",
    author = "66011245@kmitl.ac.th"
)]
#[command(group(clap::ArgGroup::new("input").required(true).args(["file", "eval"])))]
pub struct Argument {
    /// The script file to split into words.
    pub file: Option<PathBuf>,

    /// Splits the given script instead of reading a file.
    #[clap(long = "eval", value_name = "SCRIPT")]
    pub eval: Option<String>,

    /// Skips this many words before printing.
    #[clap(long = "skip", default_value_t = 0)]
    pub skip: usize,

    /// Prints every word with its kind and byte range instead of its text only.
    #[clap(long = "debug")]
    pub debug: bool,
}

/// A struct that implements [`Handler`] by rendering every lexical error against the source file
/// to the standard error stream.
#[derive(Debug)]
struct Printer {
    source_file: Arc<SourceFile>,
    printed: Cell<bool>,
}

impl Printer {
    fn new(source_file: Arc<SourceFile>) -> Self {
        Self {
            source_file,
            printed: Cell::new(false),
        }
    }

    fn has_printed(&self) -> bool { self.printed.get() }
}

impl Handler<Error> for Printer {
    fn receive(&self, error: Error) {
        eprintln!("{}", Message::new(Severity::Error, error));

        if let Some(span) = Span::at(self.source_file.clone(), error.position()) {
            eprint!("{}", SourceCodeDisplay::new(&span, Some(error.help())));
        }

        self.printed.set(true);
    }
}

fn report(origin: impl Display, error: impl Display) -> ExitCode {
    eprintln!("{}", Message::new(Severity::Error, format!("{origin}: {error}")));
    ExitCode::FAILURE
}

fn load(argument: &Argument) -> Result<Arc<SourceFile>, ExitCode> {
    if let Some(script) = &argument.eval {
        return SourceFile::temp(script).map_err(|error| report("--eval", error));
    }

    let Some(path) = &argument.file else {
        return Err(report("tcl", "no script was given"));
    };

    let file = File::open(path).map_err(|error| report(path.display(), error))?;

    SourceFile::load(file, path.clone()).map_err(|error| match error {
        source_file::Error::IoError(error) => report(path.display(), error),
        source_file::Error::Utf8Error(error) => report(path.display(), error),
    })
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    let source_file = match load(&argument) {
        Ok(source_file) => source_file,
        Err(exit_code) => return exit_code,
    };

    let printer = Printer::new(source_file.clone());
    let mut cursor = source_file.cursor();

    if let Err(error) = word::move_to_word(&mut cursor, argument.skip) {
        printer.receive(error);
        return ExitCode::FAILURE;
    }

    if argument.skip > 0 && cursor.rest().is_empty() {
        eprintln!(
            "{}",
            Message::new(
                Severity::Warning,
                format!("skipping {} words leaves nothing to print", argument.skip)
            )
        );
    }

    let word_stream = WordStream::tokenize(&mut cursor, &printer);

    for word in word_stream.iter() {
        if argument.debug {
            println!(
                "{:?} {}..{} {:?}",
                word.kind,
                word.start.byte_index(),
                word.end.byte_index(),
                word.text
            );
        } else {
            println!("{}", word.text);
        }
    }

    if printer.has_printed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
