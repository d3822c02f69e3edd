/// Receives the characters produced by a reader.
pub trait Sink {
    fn push(&mut self, character: char);
}

impl Sink for String {
    fn push(&mut self, character: char) { Self::push(self, character); }
}

/// Drops everything it receives; used to skip words without building them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Discard;

impl Sink for Discard {
    fn push(&mut self, _character: char) {}
}
