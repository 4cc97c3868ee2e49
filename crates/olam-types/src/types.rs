use serde::{Deserialize, Deserializer, Serialize};

/// Prefix carried by provenance tags (`src:ekkurup`, `src:crowd`, ...)
pub const SOURCE_TAG_PREFIX: &str = "src:";

/// The API sends `null` for some absent lists and strings
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One headword record returned by the dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalEntry {
    /// Display forms of the headword, first one is canonical
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relations: Vec<Relation>,
}

impl LexicalEntry {
    pub fn headword(&self) -> Option<&str> {
        self.content.first().map(String::as_str)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Tags with the `src:` prefix, other tags are ignored
    pub fn source_tags(&self) -> impl Iterator<Item = &str> {
        self.tags
            .iter()
            .map(String::as_str)
            .filter(|tag| tag.starts_with(SOURCE_TAG_PREFIX))
    }
}

/// Translation/meaning record of an entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Translated words, most relevant first
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<RelationKind>,
}

impl Relation {
    /// Grammatical categories, `None` when unknown
    pub fn word_types(&self) -> Option<&[String]> {
        self.relation
            .as_ref()
            .map(|kind| kind.types.as_slice())
            .filter(|types| !types.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationKind {
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<String>,
}

/// Echo of the resolved query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default, deserialize_with = "null_as_default")]
    pub q: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub from_lang: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub to_lang: String,
}

/// Result of one successful lookup, entries keep the API ranking
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<LexicalEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub query: Query,
}

impl ResultDocument {
    pub fn new(entries: Vec<LexicalEntry>, query: Query) -> Self {
        Self { entries, query }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cached copy of the most recent successful search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastSearch {
    pub query: String,
    pub result: ResultDocument,
    /// Epoch milliseconds
    pub timestamp: u64,
}
