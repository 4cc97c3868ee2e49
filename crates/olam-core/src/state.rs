use std::collections::BTreeSet;

use olam_types::{Language, LexicalEntry, ResultDocument, WordLimit};

/// What was searched to produce the current document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContext {
    pub word: String,
    pub from: Language,
    pub to: Language,
}

/// Navigation and filtering over one lookup result.
///
/// One instance lives per UI surface and is re-seeded with `set_document`
/// on every successful search. `entry_index` always points into the
/// filtered entry list (or is 0 when that list is empty), and both the
/// index and the source filter are reset whenever the document or the
/// filter changes.
#[derive(Debug, Clone, Default)]
pub struct ResultState {
    document: Option<ResultDocument>,
    context: Option<SearchContext>,
    entry_index: usize,
    source_filter: Option<String>,
    word_limit: WordLimit,
}

impl ResultState {
    pub fn new(word_limit: WordLimit) -> Self {
        Self {
            word_limit,
            ..Self::default()
        }
    }

    /// Replace the document, clearing the filter and rewinding to the first entry
    pub fn set_document(
        &mut self,
        document: ResultDocument,
        searched_word: impl Into<String>,
        from: Language,
        to: Language,
    ) {
        let word = searched_word.into();
        tracing::debug!(
            word = %word,
            %from,
            %to,
            entries = document.entries.len(),
            "result document replaced"
        );

        self.document = Some(document);
        self.context = Some(SearchContext { word, from, to });
        self.source_filter = None;
        self.entry_index = 0;
    }

    pub fn document(&self) -> Option<&ResultDocument> {
        self.document.as_ref()
    }

    pub fn context(&self) -> Option<&SearchContext> {
        self.context.as_ref()
    }

    pub fn entry_index(&self) -> usize {
        self.entry_index
    }

    pub fn source_filter(&self) -> Option<&str> {
        self.source_filter.as_deref()
    }

    pub fn word_limit(&self) -> WordLimit {
        self.word_limit
    }

    /// Takes effect on the next projection, navigation is untouched
    pub fn set_word_limit(&mut self, word_limit: WordLimit) {
        self.word_limit = word_limit;
    }

    fn filtered(&self) -> impl Iterator<Item = &LexicalEntry> {
        let filter = self.source_filter.as_deref();
        self.document
            .iter()
            .flat_map(|document| document.entries.iter())
            .filter(move |entry| filter.is_none_or(|tag| entry.has_tag(tag)))
    }

    /// Entries matching the source filter, in API order
    pub fn filtered_entries(&self) -> Vec<&LexicalEntry> {
        self.filtered().collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().count()
    }

    pub fn current_entry(&self) -> Option<&LexicalEntry> {
        self.filtered().nth(self.entry_index)
    }

    /// Every `src:` tag of the full document, independent of the active filter
    pub fn available_sources(&self) -> BTreeSet<String> {
        self.document
            .iter()
            .flat_map(|document| document.entries.iter())
            .flat_map(LexicalEntry::source_tags)
            .map(str::to_string)
            .collect()
    }

    /// Setting the active value again still rewinds to the first entry
    pub fn set_source_filter(&mut self, tag: Option<String>) {
        tracing::debug!(filter = ?tag, "source filter set");
        self.source_filter = tag;
        self.entry_index = 0;
    }

    pub fn has_next(&self) -> bool {
        self.entry_index + 1 < self.filtered_len()
    }

    pub fn has_previous(&self) -> bool {
        self.entry_index > 0
    }

    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.entry_index += 1;
            true
        } else {
            false
        }
    }

    pub fn retreat(&mut self) -> bool {
        if self.has_previous() {
            self.entry_index -= 1;
            true
        } else {
            false
        }
    }

    /// Leading `word_limit` words; callers compare lengths to decide on an ellipsis
    pub fn limit_words<'a>(&self, words: &'a [String]) -> &'a [String] {
        self.word_limit.apply(words)
    }
}

#[cfg(test)]
mod tests {
    use olam_types::Query;
    use proptest::prelude::*;

    use super::*;

    fn entry(word: &str, tags: &[&str]) -> LexicalEntry {
        LexicalEntry {
            content: vec![word.to_string()],
            tags: tags.iter().map(|t| t.to_string()).collect(),
            relations: vec![],
        }
    }

    fn document(entries: Vec<LexicalEntry>) -> ResultDocument {
        ResultDocument::new(
            entries,
            Query {
                q: "bank".into(),
                from_lang: "english".into(),
                to_lang: "malayalam".into(),
            },
        )
    }

    fn seeded(entries: Vec<LexicalEntry>) -> ResultState {
        let mut state = ResultState::new(WordLimit::default());
        state.set_document(document(entries), "bank", Language::English, Language::Malayalam);
        state
    }

    fn three_sources() -> ResultState {
        seeded(vec![
            entry("e0", &["src:ekkurup"]),
            entry("e1", &["src:crowd"]),
            entry("e2", &["src:ekkurup", "noun"]),
        ])
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_state_is_inert() {
        let mut state = ResultState::default();
        assert!(state.filtered_entries().is_empty());
        assert_eq!(state.current_entry(), None);
        assert!(state.available_sources().is_empty());
        assert!(!state.advance());
        assert!(!state.retreat());
        assert_eq!(state.entry_index(), 0);
    }

    #[test]
    fn single_untagged_entry_has_no_sources_or_navigation() {
        let state = seeded(vec![entry("bank", &[])]);
        assert!(state.available_sources().is_empty());
        assert!(!state.has_next());
        assert!(!state.has_previous());
        assert_eq!(state.current_entry().and_then(|e| e.headword()), Some("bank"));
    }

    #[test]
    fn sources_collected_from_every_entry() {
        let mut state = three_sources();
        let expected: BTreeSet<String> =
            ["src:crowd", "src:ekkurup"].iter().map(|s| s.to_string()).collect();
        assert_eq!(state.available_sources(), expected);

        state.set_source_filter(Some("src:crowd".into()));
        assert_eq!(state.available_sources(), expected);
    }

    #[test]
    fn filter_navigation_saturates() {
        let mut state = three_sources();
        state.set_source_filter(Some("src:ekkurup".into()));
        assert_eq!(state.filtered_len(), 2);
        assert!(state.advance());
        assert!(!state.advance());
        assert_eq!(state.entry_index(), 1);
    }

    #[test]
    fn filter_preserves_document_order() {
        let mut state = seeded(vec![entry("e0", &["A"]), entry("e1", &["B"]), entry("e2", &["A"])]);
        state.set_source_filter(Some("A".into()));
        let heads: Vec<_> = state
            .filtered_entries()
            .into_iter()
            .filter_map(LexicalEntry::headword)
            .collect();
        assert_eq!(heads, vec!["e0", "e2"]);
    }

    #[test]
    fn unknown_source_yields_empty_view() {
        let mut state = three_sources();
        state.set_source_filter(Some("src:nonexistent".into()));
        assert!(state.filtered_entries().is_empty());
        assert_eq!(state.current_entry(), None);
        assert!(!state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn filter_change_rewinds_even_when_unchanged() {
        let mut state = three_sources();
        state.advance();
        state.advance();
        assert_eq!(state.entry_index(), 2);

        state.set_source_filter(None);
        assert_eq!(state.entry_index(), 0);

        state.set_source_filter(Some("src:ekkurup".into()));
        state.advance();
        state.set_source_filter(Some("src:ekkurup".into()));
        assert_eq!(state.entry_index(), 0);
        assert_eq!(state.source_filter(), Some("src:ekkurup"));
    }

    #[test]
    fn new_document_clears_filter_and_index() {
        let mut state = three_sources();
        state.set_source_filter(Some("src:ekkurup".into()));
        state.advance();

        state.set_document(
            document(vec![entry("kara", &[])]),
            "കര",
            Language::Malayalam,
            Language::Malayalam,
        );
        assert_eq!(state.source_filter(), None);
        assert_eq!(state.entry_index(), 0);
        assert_eq!(state.context().map(|c| c.word.as_str()), Some("കര"));
    }

    #[test]
    fn retreat_at_start_is_noop() {
        let mut state = three_sources();
        assert!(!state.retreat());
        assert_eq!(state.entry_index(), 0);
        assert!(state.advance());
        assert!(state.retreat());
        assert_eq!(state.entry_index(), 0);
    }

    #[test]
    fn limit_words_truncates() {
        let input = words(&["a", "b", "c", "d"]);
        let mut state = ResultState::new(WordLimit::Limited(3));
        assert_eq!(state.limit_words(&input), &input[..3]);

        state.set_word_limit(WordLimit::Unbounded);
        assert_eq!(state.limit_words(&input), &input[..]);

        state.set_word_limit(WordLimit::Limited(0));
        assert!(state.limit_words(&input).is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Seed(Vec<u8>),
        Filter(Option<u8>),
        Advance,
        Retreat,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            prop::collection::vec(0u8..3, 0..6).prop_map(Op::Seed),
            prop::option::of(0u8..4).prop_map(Op::Filter),
            Just(Op::Advance),
            Just(Op::Retreat),
        ]
    }

    fn tag(n: u8) -> String {
        format!("src:{n}")
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_index_stays_in_bounds(ops in prop::collection::vec(op(), 1..40)) {
            let mut state = ResultState::default();
            for op in ops {
                match op {
                    Op::Seed(tags) => {
                        let entries = tags
                            .iter()
                            .enumerate()
                            .map(|(i, t)| entry(&format!("e{i}"), &[tag(*t).as_str()]))
                            .collect();
                        state.set_document(document(entries), "w", Language::English, Language::Malayalam);
                        prop_assert_eq!(state.entry_index(), 0);
                        prop_assert_eq!(state.source_filter(), None);
                    }
                    Op::Filter(t) => {
                        state.set_source_filter(t.map(tag));
                        prop_assert_eq!(state.entry_index(), 0);
                    }
                    Op::Advance => {
                        let before = state.entry_index();
                        if !state.advance() {
                            prop_assert_eq!(state.entry_index(), before);
                        }
                    }
                    Op::Retreat => {
                        let before = state.entry_index();
                        if !state.retreat() {
                            prop_assert_eq!(state.entry_index(), before);
                        }
                    }
                }

                let len = state.filtered_len();
                if len == 0 {
                    prop_assert_eq!(state.entry_index(), 0);
                } else {
                    prop_assert!(state.entry_index() < len);
                    prop_assert!(state.current_entry().is_some());
                }
            }
        }
    }
}
