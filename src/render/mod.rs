//! Annotated output rendering.
//!
//! Walks the original text and the ordered token sequence, escaping
//! everything and wrapping incorrectly spelled words in a red inline
//! element. Also provides a machine-readable JSON report of the run.

use crate::Token;
use serde::Serialize;

const INVALID_OPEN: &str = "<a style=\"color:red\">";
const INVALID_CLOSE: &str = "</a>";

/// Render the full HTML document for `text` with invalid words flagged.
///
/// Every byte outside and inside tokens is HTML-escaped; newlines in
/// inter-token text become `<br>` tags. Tokens themselves never contain a
/// newline, so only escaping applies to them.
pub fn render_html(text: &str, tokens: &[Token]) -> String {
    let mut output = String::with_capacity(text.len() + text.len() / 3 + 16);
    output.push_str("<html>\n");

    let mut last = 0;
    for token in tokens {
        if token.start > last {
            escape_into(&mut output, &text[last..token.start], true);
        }

        let word = token.text(text);
        if token.valid {
            escape_into(&mut output, word, false);
        } else {
            output.push_str(INVALID_OPEN);
            escape_into(&mut output, word, false);
            output.push_str(INVALID_CLOSE);
        }

        last = token.end();
    }

    if last < text.len() {
        escape_into(&mut output, &text[last..], true);
    }

    output.push_str("</html>\n");
    output
}

fn escape_into(output: &mut String, text: &str, break_newlines: bool) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '\n' if break_newlines => output.push_str("<br>\n"),
            _ => output.push(c),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonToken<'a> {
    start: usize,
    len: usize,
    word: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    total_tokens: usize,
    misspelled_count: usize,
    misspelled: Vec<JsonToken<'a>>,
}

/// Serialize the run as a JSON report listing every misspelled token.
pub fn render_json(text: &str, tokens: &[Token]) -> serde_json::Result<String> {
    let misspelled: Vec<JsonToken> = tokens
        .iter()
        .filter(|t| !t.valid)
        .map(|t| JsonToken {
            start: t.start,
            len: t.len,
            word: t.text(text),
        })
        .collect();

    let report = JsonReport {
        total_tokens: tokens.len(),
        misspelled_count: misspelled.len(),
        misspelled,
    };

    serde_json::to_string_pretty(&report)
}
