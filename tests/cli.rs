use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn wordlist(words: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", words).unwrap();
    file.flush().unwrap();
    file
}

fn spellmark() -> Command {
    Command::cargo_bin("spellmark").unwrap()
}

#[test]
fn missing_dictionary_argument_exits_one() {
    spellmark()
        .write_stdin("hello")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No dictionary file specified"));
}

#[test]
fn unreadable_dictionary_exits_one() {
    spellmark()
        .arg("/no/such/wordlist.txt")
        .write_stdin("hello")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load dictionary"));
}

#[test]
fn empty_dictionary_exits_one() {
    let dict = wordlist("");
    spellmark()
        .arg(dict.path())
        .write_stdin("hello")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no words"));
}

#[test]
fn renders_flagged_html_to_stdout() {
    let dict = wordlist("cat\n");
    spellmark()
        .arg(dict.path())
        .arg("--quiet")
        .write_stdin("cat & dg")
        .assert()
        .success()
        .stdout("<html>\ncat &amp; <a style=\"color:red\">dg</a></html>\n");
}

#[test]
fn diagnostics_never_reach_stdout() {
    let dict = wordlist("cat\n");
    spellmark()
        .arg(dict.path())
        .arg("--no-color")
        .write_stdin("cat & dg")
        .assert()
        .success()
        .stdout("<html>\ncat &amp; <a style=\"color:red\">dg</a></html>\n")
        .stderr(predicate::str::contains("Dictionary loaded: 1 words"));
}

#[test]
fn input_size_diagnostic_counts_raw_bytes() {
    let dict = wordlist("cat\n");
    // 7 raw bytes; the stray 0xE9 becomes a 3-byte replacement character
    // after lossy decoding, so the lossy length would be 9.
    spellmark()
        .arg(dict.path())
        .arg("--no-color")
        .write_stdin(&b"cat \xe9 x"[..])
        .assert()
        .success()
        .stderr(predicate::str::contains("Input size: 7 bytes"));
}

#[test]
fn json_format_reports_misspellings() {
    let dict = wordlist("cat\n");
    spellmark()
        .arg(dict.path())
        .args(["--quiet", "-o", "json"])
        .write_stdin("cat & dg")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word\": \"dg\""))
        .stdout(predicate::str::contains("\"misspelled_count\": 1"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dict = wordlist("the quick brown fox\n");
    let input = "The quick brwn fox won't jump over the 1960s fence.\n";

    let first = spellmark()
        .arg(dict.path())
        .arg("--quiet")
        .write_stdin(input)
        .assert()
        .success();
    let second = spellmark()
        .arg(dict.path())
        .arg("--quiet")
        .write_stdin(input)
        .assert()
        .success();

    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}

#[test]
fn forced_single_worker_matches_parallel_run() {
    let dict = wordlist("lorem ipsum dolor sit amet\n");
    let input = "lorem ipsum dolor sit amt, consectetur 1,234.5 elit.\n".repeat(200);

    let single = spellmark()
        .arg(dict.path())
        .args(["--quiet", "--threads", "1"])
        .write_stdin(input.clone())
        .assert()
        .success();
    let parallel = spellmark()
        .arg(dict.path())
        .args(["--quiet", "--threads", "4", "--parallel-threshold", "0"])
        .write_stdin(input)
        .assert()
        .success();

    assert_eq!(single.get_output().stdout, parallel.get_output().stdout);
}
