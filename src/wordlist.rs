//! Wordlist management module
//!
//! Loads breach wordlists, discovers candidate files and keeps the
//! currently selected set.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_WORDLIST_DIR: &str = "./wordlists";

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Wordlist directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("Failed to read wordlist: {0}")]
    ReadError(#[from] std::io::Error),
}

/// Set of breach-exposed passwords loaded from one file.
///
/// Lookups are exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: HashSet<String>,
    source: Option<PathBuf>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from text: one entry per line, trimmed, blanks dropped.
    pub fn from_text(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn contains(&self, password: &str) -> bool {
        self.words.contains(password)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// File the set was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

impl FromIterator<String> for WordSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
            source: None,
        }
    }
}

/// Returns the directory scanned for wordlists.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_DIR`
/// 2. Default path `./wordlists`
pub fn wordlist_dir() -> PathBuf {
    std::env::var("PWD_WORDLIST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_WORDLIST_DIR))
}

/// Loads a wordlist file into a [`WordSet`].
///
/// Invalid UTF-8 byte sequences are skipped. An empty file gives an empty set.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
pub fn load_wordlist<P: AsRef<Path>>(path: P) -> Result<WordSet, WordlistError> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist load FAILED: {} ({:?})", e, path);
        if e.kind() == std::io::ErrorKind::NotFound {
            WordlistError::FileNotFound(path.to_path_buf())
        } else {
            WordlistError::ReadError(e)
        }
    })?;

    let mut set = WordSet::from_text(&decode_skipping_invalid(&bytes));
    set.source = Some(path.to_path_buf());

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist loaded: {} words from {:?}", set.len(), path);

    Ok(set)
}

/// Decodes UTF-8, dropping any invalid byte sequences.
fn decode_skipping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Recursively lists `*.txt` files under `dir`, sorted by path.
///
/// Symlinked directories are not descended into; symlinked files are listed.
///
/// # Errors
///
/// Returns `DirectoryNotFound` if `dir` is not a directory, or `ReadError`
/// if a directory cannot be listed.
pub fn discover_wordlists<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, WordlistError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Wordlist directory not found: {:?}", dir);
        return Err(WordlistError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut found = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in std::fs::read_dir(&current)? {
            let entry = entry?;
            let path = entry.path();
            // file_type() does not follow symlinks
            if entry.file_type()?.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "txt") && path.is_file() {
                found.push(path);
            }
        }
    }
    found.sort();

    #[cfg(feature = "tracing")]
    tracing::info!("Discovered {} wordlists under {:?}", found.len(), dir);

    Ok(found)
}

/// What a failed reload does to the previously loaded set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReloadPolicy {
    /// Discard the previous set; lookups see an empty wordlist.
    #[default]
    Clear,
    /// Keep serving the previous set.
    Preserve,
}

impl ReloadPolicy {
    /// Reads `PWD_WORDLIST_ON_ERROR`, falling back to the default when unset
    /// or unparsable.
    pub fn from_env() -> Self {
        std::env::var("PWD_WORDLIST_ON_ERROR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for ReloadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear" => Ok(ReloadPolicy::Clear),
            "preserve" => Ok(ReloadPolicy::Preserve),
            other => Err(format!(
                "unknown reload policy '{}', expected 'clear' or 'preserve'",
                other
            )),
        }
    }
}

/// Holds the active wordlist and swaps it wholesale on reload.
#[derive(Debug, Clone, Default)]
pub struct WordlistStore {
    words: WordSet,
    policy: ReloadPolicy,
}

impl WordlistStore {
    pub fn new(policy: ReloadPolicy) -> Self {
        Self {
            words: WordSet::default(),
            policy,
        }
    }

    pub fn words(&self) -> &WordSet {
        &self.words
    }

    pub fn policy(&self) -> ReloadPolicy {
        self.policy
    }

    /// Loads `path` and installs it, returning the word count.
    ///
    /// On failure the current set is cleared or kept according to the
    /// store's [`ReloadPolicy`], and the error is returned.
    pub fn reload<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, WordlistError> {
        match load_wordlist(path) {
            Ok(set) => {
                let count = set.len();
                self.words = set;
                Ok(count)
            }
            Err(e) => {
                if self.policy == ReloadPolicy::Clear {
                    self.words = WordSet::default();
                }
                Err(e)
            }
        }
    }
}
