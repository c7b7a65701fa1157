//! Parallel scan coordinator.
//!
//! One-shot fork/join: the input is split into contiguous, word-boundary
//! aligned chunks, each chunk is scanned independently, and the per-chunk
//! token lists are concatenated in chunk order. Because chunk boundaries
//! never fall inside a word run, the merged sequence is byte-for-byte the
//! one a single-threaded scan would have produced.

use crate::checker::tokenizer::is_word_char;
use crate::{Checker, Config, Token};
use rayon::prelude::*;

/// Inputs smaller than this are scanned on the calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100_000;

/// Worker count for a run: configured override, else the rayon pool size.
pub fn worker_count(config: &Config) -> usize {
    config.threads.unwrap_or_else(rayon::current_num_threads).max(1)
}

/// Scan the whole input and return the globally ordered token sequence.
pub fn scan(text: &str, checker: &Checker, workers: usize, parallel_threshold: usize) -> Vec<Token> {
    if workers <= 1 || text.len() < parallel_threshold {
        return checker.check_span(text, 0);
    }

    let chunks = plan_chunks(text, workers);
    chunks
        .par_iter()
        .map(|&(start, end)| checker.check_span(&text[start..end], start))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Split `text` into at most `workers` contiguous chunks of roughly equal
/// size whose boundaries never fall inside a word-character run (or a UTF-8
/// sequence). Each chunk starts where the previous one ended and the last
/// chunk always reaches the end of text, so concatenating per-chunk results
/// in chunk order yields globally increasing offsets.
pub fn plan_chunks(text: &str, workers: usize) -> Vec<(usize, usize)> {
    let len = text.len();
    let workers = workers.max(1);
    if workers == 1 || len == 0 {
        return vec![(0, len)];
    }

    let chunk_size = len / workers;
    let mut chunks = Vec::with_capacity(workers);
    let mut start = 0;

    for i in 1..workers {
        let mut end = (i * chunk_size).clamp(start, len);
        while end < len && !text.is_char_boundary(end) {
            end += 1;
        }
        // Extend rightward past any word run the boundary landed in.
        while let Some(c) = text[end..].chars().next() {
            if !is_word_char(c) {
                break;
            }
            end += c.len_utf8();
        }
        // A boundary swallowed by the previous extension produces no chunk.
        if end > start {
            chunks.push((start, end));
            start = end;
        }
    }

    if start < len || chunks.is_empty() {
        chunks.push((start, len));
    }
    chunks
}
