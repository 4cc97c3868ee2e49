use olam_types::{LexicalEntry, SOURCE_TAG_PREFIX};

use crate::state::{ResultState, SearchContext};

pub const ALL_SOURCES_LABEL: &str = "All Sources";

/// Button caption for a provenance tag
pub fn source_label(tag: &str) -> String {
    match tag {
        "src:ekkurup" => "E. K. Kurup".to_string(),
        "src:crowd" => "Crowd Sourced".to_string(),
        other => other.strip_prefix(SOURCE_TAG_PREFIX).unwrap_or(other).to_string(),
    }
}

/// An interactive control, each maps to exactly one `ResultState` operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
    SelectSource(Option<String>),
}

impl Control {
    /// Returns whether the state moved
    pub fn apply(&self, state: &mut ResultState) -> bool {
        match self {
            Control::Previous => state.retreat(),
            Control::Next => state.advance(),
            Control::SelectSource(tag) => {
                state.set_source_filter(tag.clone());
                true
            }
        }
    }
}

/// How a click on a source button picks the next filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPolicy {
    /// Always select the clicked source
    #[default]
    Select,
    /// Clicking the active source clears the filter
    Toggle,
}

impl FilterPolicy {
    pub fn target(&self, clicked: &str, current: Option<&str>) -> Option<String> {
        match self {
            FilterPolicy::Toggle if current == Some(clicked) => None,
            _ => Some(clicked.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub label: String,
    /// `None` for the "all sources" pseudo-button
    pub tag: Option<String>,
    pub active: bool,
    pub control: Control,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningView {
    /// Already cut to the word limit
    pub words: Vec<String>,
    pub truncated: bool,
    pub word_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    /// Canonical display form
    pub headword: String,
    pub forms: Vec<String>,
    pub meanings: Vec<MeaningView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavView {
    /// Zero based
    pub position: usize,
    pub total: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl NavView {
    pub fn counter(&self) -> String {
        format!("{}/{}", self.position + 1, self.total)
    }

    /// Navigation is only worth showing for more than one entry
    pub fn visible(&self) -> bool {
        self.total > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// The search succeeded without entries
    NoResults,
    /// The active source filter matches nothing
    NoResultsForSource { source: String },
    Entry(EntryView),
}

/// Everything a surface needs to redraw the result panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub body: Body,
    pub nav: Option<NavView>,
    /// Empty when the document carries no sources
    pub filters: Vec<FilterButton>,
    pub context: Option<SearchContext>,
}

/// Projects a `ResultState` snapshot into a `View`, never mutates it
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter {
    filter_policy: FilterPolicy,
}

impl Presenter {
    pub fn new(filter_policy: FilterPolicy) -> Self {
        Self { filter_policy }
    }

    pub fn filter_policy(&self) -> FilterPolicy {
        self.filter_policy
    }

    /// `None` until a document has been loaded
    pub fn project(&self, state: &ResultState) -> Option<View> {
        let document = state.document()?;
        let filters = self.filters(state);
        let context = state.context().cloned();

        if document.is_empty() {
            return Some(View {
                body: Body::NoResults,
                nav: None,
                filters,
                context,
            });
        }

        let Some(entry) = state.current_entry() else {
            let source = state.source_filter().map(source_label).unwrap_or_default();
            return Some(View {
                body: Body::NoResultsForSource { source },
                nav: None,
                filters,
                context,
            });
        };

        let nav = NavView {
            position: state.entry_index(),
            total: state.filtered_len(),
            previous_enabled: state.has_previous(),
            next_enabled: state.has_next(),
        };

        Some(View {
            body: Body::Entry(self.entry(state, entry)),
            nav: Some(nav),
            filters,
            context,
        })
    }

    fn entry(&self, state: &ResultState, entry: &LexicalEntry) -> EntryView {
        let meanings = entry
            .relations
            .iter()
            .map(|relation| {
                let words = state.limit_words(&relation.content);
                MeaningView {
                    words: words.to_vec(),
                    truncated: words.len() < relation.content.len(),
                    word_types: relation.word_types().map(<[String]>::to_vec),
                }
            })
            .collect();

        EntryView {
            headword: entry.headword().unwrap_or_default().to_string(),
            forms: entry.content.clone(),
            meanings,
        }
    }

    fn filters(&self, state: &ResultState) -> Vec<FilterButton> {
        let sources = state.available_sources();
        if sources.is_empty() {
            return vec![];
        }

        let current = state.source_filter();
        let mut buttons = Vec::with_capacity(sources.len() + 1);
        buttons.push(FilterButton {
            label: ALL_SOURCES_LABEL.to_string(),
            tag: None,
            active: current.is_none(),
            control: Control::SelectSource(None),
        });

        for tag in sources {
            let control = Control::SelectSource(self.filter_policy.target(&tag, current));
            buttons.push(FilterButton {
                label: source_label(&tag),
                active: current == Some(tag.as_str()),
                tag: Some(tag),
                control,
            });
        }

        buttons
    }
}

#[cfg(test)]
mod tests {
    use olam_types::{Language, Query, Relation, RelationKind, ResultDocument, WordLimit};

    use super::*;

    fn relation(words: &[&str], types: Option<&[&str]>) -> Relation {
        Relation {
            content: words.iter().map(|w| w.to_string()).collect(),
            relation: types.map(|t| RelationKind {
                types: t.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }

    fn entry(word: &str, tags: &[&str], relations: Vec<Relation>) -> LexicalEntry {
        LexicalEntry {
            content: vec![word.to_string(), format!("{word}s")],
            tags: tags.iter().map(|t| t.to_string()).collect(),
            relations,
        }
    }

    fn state_with(entries: Vec<LexicalEntry>) -> ResultState {
        let mut state = ResultState::new(WordLimit::Limited(2));
        state.set_document(
            ResultDocument::new(entries, Query::default()),
            "bank",
            Language::English,
            Language::Malayalam,
        );
        state
    }

    fn sample() -> ResultState {
        state_with(vec![
            entry(
                "bank",
                &["src:ekkurup"],
                vec![relation(&["തീരം", "കര", "വക്ക്"], Some(&["n"])), relation(&["ബാങ്ക്"], None)],
            ),
            entry("banker", &["src:crowd"], vec![]),
            entry("banking", &["src:ekkurup", "src:datuk"], vec![]),
        ])
    }

    #[test]
    fn idle_until_a_document_arrives() {
        assert_eq!(Presenter::default().project(&ResultState::default()), None);
    }

    #[test]
    fn projects_current_entry_with_truncated_meanings() {
        let view = Presenter::default().project(&sample()).unwrap();
        let Body::Entry(entry) = view.body else {
            panic!("expected entry body");
        };

        assert_eq!(entry.headword, "bank");
        assert_eq!(entry.forms, vec!["bank", "banks"]);
        assert_eq!(entry.meanings[0].words, vec!["തീരം", "കര"]);
        assert!(entry.meanings[0].truncated);
        assert_eq!(entry.meanings[0].word_types, Some(vec!["n".to_string()]));
        assert!(!entry.meanings[1].truncated);
        assert_eq!(entry.meanings[1].word_types, None);

        let nav = view.nav.unwrap();
        assert_eq!(nav.counter(), "1/3");
        assert!(nav.visible());
        assert!(!nav.previous_enabled);
        assert!(nav.next_enabled);
        assert_eq!(view.context.map(|c| c.word), Some("bank".to_string()));
    }

    #[test]
    fn filter_buttons_list_all_plus_sorted_sources() {
        let mut state = sample();
        let view = Presenter::default().project(&state).unwrap();
        let labels: Vec<_> = view.filters.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["All Sources", "Crowd Sourced", "datuk", "E. K. Kurup"]);
        assert!(view.filters[0].active);
        assert!(view.filters[1..].iter().all(|b| !b.active));

        state.set_source_filter(Some("src:crowd".into()));
        let view = Presenter::default().project(&state).unwrap();
        assert!(!view.filters[0].active);
        assert!(view.filters[1].active);
        assert_eq!(view.nav.map(|n| n.visible()), Some(false));
    }

    #[test]
    fn toggle_policy_clears_on_reclick() {
        let mut state = sample();
        state.set_source_filter(Some("src:crowd".into()));

        let select = Presenter::new(FilterPolicy::Select).project(&state).unwrap();
        assert_eq!(select.filters[1].control, Control::SelectSource(Some("src:crowd".into())));

        let toggle = Presenter::new(FilterPolicy::Toggle).project(&state).unwrap();
        assert_eq!(toggle.filters[1].control, Control::SelectSource(None));
        assert_eq!(toggle.filters[2].control, Control::SelectSource(Some("src:datuk".into())));

        assert!(toggle.filters[1].control.apply(&mut state));
        assert_eq!(state.source_filter(), None);
    }

    #[test]
    fn controls_drive_navigation() {
        let mut state = sample();
        assert!(Control::Next.apply(&mut state));
        assert_eq!(state.entry_index(), 1);
        assert!(Control::Previous.apply(&mut state));
        assert!(!Control::Previous.apply(&mut state));
    }

    #[test]
    fn empty_document_and_empty_filter_are_distinct() {
        let empty = state_with(vec![]);
        let view = Presenter::default().project(&empty).unwrap();
        assert_eq!(view.body, Body::NoResults);
        assert!(view.filters.is_empty());
        assert_eq!(view.nav, None);

        let mut state = sample();
        state.set_source_filter(Some("src:nonexistent".into()));
        let view = Presenter::default().project(&state).unwrap();
        assert_eq!(
            view.body,
            Body::NoResultsForSource {
                source: "nonexistent".into()
            }
        );
        assert_eq!(view.filters.len(), 4);
    }

    #[test]
    fn untagged_document_has_no_filter_bar() {
        let state = state_with(vec![entry("bank", &["noun"], vec![])]);
        let view = Presenter::default().project(&state).unwrap();
        assert!(view.filters.is_empty());
        assert_eq!(view.nav.map(|n| n.visible()), Some(false));
    }
}
