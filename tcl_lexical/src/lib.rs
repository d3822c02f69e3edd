//! This crate implements the word-level tokenizer for the TCL lexical syntax. It splits a
//! character stream into words following the double-quoting, brace-quoting and backslash
//! substitution rules, without performing any command or variable substitution.
//!
//! Every reader takes a [`tcl_base::source_file::CharSource`] and leaves it positioned right after
//! whatever it consumed. The final output of scanning a whole script is a
//! [`word_stream::WordStream`].

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod escape;
pub mod whitespace;
pub mod word;
pub mod word_stream;

mod sink;
