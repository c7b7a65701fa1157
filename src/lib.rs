pub mod checker;
pub mod cli;
pub mod config;
pub mod engine;
pub mod render;

pub use checker::Checker;
pub use config::Config;

/// A classified word occurrence in the input text.
///
/// Offsets are byte offsets into the original text. Tokens produced by a scan
/// are strictly ordered by `start` and never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub len: usize,
    pub valid: bool,
}

impl Token {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The token's text within `source`.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end()]
    }
}
