use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Maximum number of translated words shown per meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordLimit {
    Limited(usize),
    Unbounded,
}

impl WordLimit {
    pub const DEFAULT: WordLimit = WordLimit::Limited(3);

    /// First `limit` words, or all of them when unbounded
    pub fn apply<'a, T>(&self, words: &'a [T]) -> &'a [T] {
        match self {
            WordLimit::Limited(limit) => &words[..words.len().min(*limit)],
            WordLimit::Unbounded => words,
        }
    }
}

impl Default for WordLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for WordLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordLimit::Limited(limit) => write!(f, "{limit}"),
            WordLimit::Unbounded => f.write_str("all"),
        }
    }
}

impl FromStr for WordLimit {
    type Err = ParseWordLimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(WordLimit::Unbounded);
        }
        match s.parse::<i64>() {
            // -1 is the legacy spelling of "all"
            Ok(n) if n < 0 => Ok(WordLimit::Unbounded),
            Ok(n) => usize::try_from(n)
                .map(WordLimit::Limited)
                .map_err(|_| ParseWordLimitError(s.to_string())),
            Err(_) => Err(ParseWordLimitError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid result limit: {0}")]
pub struct ParseWordLimitError(pub String);

impl Serialize for WordLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WordLimit::Limited(limit) => serializer.serialize_u64(*limit as u64),
            WordLimit::Unbounded => serializer.serialize_str("all"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWordLimit {
    Count(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for WordLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = match RawWordLimit::deserialize(deserializer)? {
            RawWordLimit::Count(n) => n.to_string(),
            RawWordLimit::Text(text) => text,
        };
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_truncates_silently() {
        let words = ["a", "b", "c", "d"];
        assert_eq!(WordLimit::Limited(3).apply(&words), &["a", "b", "c"]);
        assert_eq!(WordLimit::Unbounded.apply(&words), &words);
        assert!(WordLimit::Limited(0).apply(&words).is_empty());
        assert_eq!(WordLimit::Limited(10).apply(&words).len(), 4);
    }

    #[test]
    fn parses_stored_spellings() {
        assert_eq!("all".parse::<WordLimit>(), Ok(WordLimit::Unbounded));
        assert_eq!("-1".parse::<WordLimit>(), Ok(WordLimit::Unbounded));
        assert_eq!(" 5 ".parse::<WordLimit>(), Ok(WordLimit::Limited(5)));
        assert!("many".parse::<WordLimit>().is_err());
    }

    #[test]
    fn serde_accepts_numbers_and_strings() {
        let limit: WordLimit = serde_json::from_str("4").unwrap();
        assert_eq!(limit, WordLimit::Limited(4));
        let limit: WordLimit = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(limit, WordLimit::Limited(3));
        let limit: WordLimit = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(limit, WordLimit::Unbounded);

        assert_eq!(serde_json::to_string(&WordLimit::Unbounded).unwrap(), "\"all\"");
        assert_eq!(serde_json::to_string(&WordLimit::Limited(2)).unwrap(), "2");
    }
}
