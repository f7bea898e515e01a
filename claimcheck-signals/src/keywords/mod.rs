// claimcheck-signals/src/keywords/mod.rs
use daachorse::{DoubleArrayAhoCorasick, DoubleArrayAhoCorasickBuilder, MatchKind};
extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Error raised when a keyword automaton cannot be built.
pub use daachorse::errors::DaachorseError;

/// Case-insensitive substring matcher over a fixed keyword list.
///
/// Used for both domain allow-lists (matched against raw URL text) and
/// keyword sets (matched against snippets and model output). There are no
/// word boundaries: "false" matches "falsehood", and "cdc.gov" matches any
/// URL that merely contains it.
#[derive(Clone)]
pub struct KeywordMatcher {
    automaton: Option<DoubleArrayAhoCorasick<usize>>,
    patterns: Vec<String>,
}

impl fmt::Debug for KeywordMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordMatcher")
         .field("automaton", &"<DoubleArrayAhoCorasick>")
         .field("patterns", &self.patterns)
         .finish()
    }
}

impl KeywordMatcher {
    /// Builds a matcher from the given keywords.
    ///
    /// Keywords are lowercased, empty entries are dropped and duplicates are
    /// collapsed, keeping the first occurrence. An empty list yields a matcher
    /// that never matches. Fails only when the automaton cannot be built
    /// (e.g. the pattern set exceeds daachorse's size limits).
    pub fn new<I, S>(keywords: I) -> Result<Self, DaachorseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns: Vec<String> = Vec::new();
        for keyword in keywords {
            let lowered = keyword.as_ref().trim().to_lowercase();
            if lowered.is_empty() || patterns.contains(&lowered) {
                continue;
            }
            patterns.push(lowered);
        }

        let automaton = if patterns.is_empty() {
            None
        } else {
            Some(
                DoubleArrayAhoCorasickBuilder::new()
                    .match_kind(MatchKind::LeftmostFirst)
                    .build(patterns.iter().map(String::as_str))?,
            )
        };

        Ok(Self { automaton, patterns })
    }

    /// The normalized keyword list, in insertion order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the keyword that starts leftmost in `text`. When several start
    /// at the same position, the one listed first wins.
    pub fn find_first(&self, text: &str) -> Option<&str> {
        let automaton = self.automaton.as_ref()?;
        let haystack = text.to_lowercase();
        automaton
            .leftmost_find_iter(&haystack)
            .next()
            .and_then(|m| self.patterns.get(m.value()))
            .map(String::as_str)
    }

    /// True when any keyword occurs anywhere in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.find_first(text).is_some()
    }
}
