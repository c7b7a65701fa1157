use fst::Set;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("cannot open dictionary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary file {path} contains no words")]
    Empty { path: PathBuf },

    #[error("failed to build dictionary set: {0}")]
    Build(#[from] fst::Error),
}

/// The immutable set of known words, all lower-cased.
///
/// Built once at startup and shared read-only across workers for the rest of
/// the run; there is no writer after construction, so no locking anywhere.
#[derive(Debug)]
pub struct Dictionary {
    set: Set<Vec<u8>>,
}

impl Dictionary {
    /// Load a whitespace-delimited word list, lower-casing every entry.
    pub fn from_wordlist(path: &Path) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut words: Vec<String> = content
            .split_whitespace()
            .map(|w| w.to_lowercase())
            .collect();
        words.sort();
        words.dedup();

        if words.is_empty() {
            return Err(DictionaryError::Empty {
                path: path.to_path_buf(),
            });
        }

        let set = Set::from_iter(words.iter().map(|w| w.as_bytes()))?;
        Ok(Self { set })
    }

    /// Build a dictionary from in-memory words (useful for testing).
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lowered: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        lowered.sort();
        lowered.dedup();

        let set = Set::from_iter(lowered.iter().map(|w| w.as_bytes()))?;
        Ok(Self { set })
    }

    /// Exact membership check; callers are expected to pass lower-case words.
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word.as_bytes())
    }

    /// Case-insensitive membership check.
    pub fn contains_ignore_case(&self, word: &str) -> bool {
        self.set.contains(word.to_lowercase().as_bytes())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_wordlist() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Hello world\n  Test\nWORLD").unwrap();

        let dict = Dictionary::from_wordlist(file.path()).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("hello"));
        assert!(dict.contains("world"));
        assert!(dict.contains("test"));
        assert!(!dict.contains("Hello"));
        assert!(dict.contains_ignore_case("Hello"));
        assert!(!dict.contains("notfound"));
    }

    #[test]
    fn test_empty_wordlist_is_an_error() {
        let file = NamedTempFile::new().unwrap();
        let err = Dictionary::from_wordlist(file.path()).unwrap_err();
        assert!(matches!(err, DictionaryError::Empty { .. }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Dictionary::from_wordlist(Path::new("/no/such/wordlist.txt")).unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }
}
