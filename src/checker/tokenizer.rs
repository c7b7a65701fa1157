//! Word-character scanner.
//!
//! Splits a text span into maximal runs of word characters (alphanumerics,
//! apostrophes, hyphens) and yields each run together with its absolute byte
//! offset. Runs without a single letter or digit (e.g. `---`) are skipped.

/// True for characters that may appear inside a word.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '-'
}

/// A candidate word slice with its absolute byte offset in the full input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub start: usize,
    pub text: &'a str,
}

impl RawToken<'_> {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Lazy iterator over the candidate words of a span.
///
/// `base` is added to every local offset, so a scan over a chunk reports
/// offsets into the original, unsliced text. Pure function of its input; a
/// run that reaches the end of the span without a trailing delimiter is
/// still flushed.
pub struct RawTokens<'a> {
    span: &'a str,
    base: usize,
    pos: usize,
}

impl<'a> RawTokens<'a> {
    pub fn new(span: &'a str, base: usize) -> Self {
        Self { span, base, pos: 0 }
    }
}

impl<'a> Iterator for RawTokens<'a> {
    type Item = RawToken<'a>;

    fn next(&mut self) -> Option<RawToken<'a>> {
        while self.pos < self.span.len() {
            let rest = &self.span[self.pos..];
            let mut run_len = 0;
            let mut has_alnum = false;

            for c in rest.chars() {
                if !is_word_char(c) {
                    break;
                }
                has_alnum |= c.is_alphanumeric();
                run_len += c.len_utf8();
            }

            if run_len == 0 {
                // Not in a word: step over one delimiter character.
                let c = rest.chars().next()?;
                self.pos += c.len_utf8();
                continue;
            }

            let start = self.pos;
            self.pos += run_len;

            if has_alnum {
                return Some(RawToken {
                    start: self.base + start,
                    text: &self.span[start..start + run_len],
                });
            }
        }

        None
    }
}
