use std::fmt;

use olam_config::Settings;
use olam_core::{Ticket, Trigger, View};
use olam_types::{Language, ResultDocument, SourceLanguage, WordLimit};

/// A change requested from the settings commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceChange {
    ResultLimit(WordLimit),
    FromLanguage(SourceLanguage),
    DoubleClick(bool),
}

impl PreferenceChange {
    pub fn apply(&self, settings: &mut Settings) {
        match self {
            PreferenceChange::ResultLimit(limit) => settings.result_limit = *limit,
            PreferenceChange::FromLanguage(from) => settings.from_language = *from,
            PreferenceChange::DoubleClick(enabled) => settings.double_click_enabled = *enabled,
        }
    }
}

impl fmt::Display for PreferenceChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferenceChange::ResultLimit(limit) => write!(f, "result limit = {limit}"),
            PreferenceChange::FromLanguage(from) => write!(f, "from language = {from}"),
            PreferenceChange::DoubleClick(true) => f.write_str("double-click = on"),
            PreferenceChange::DoubleClick(false) => f.write_str("double-click = off"),
        }
    }
}

/// User input addressed to a surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCommand {
    Search { text: String, trigger: Trigger },
    Next,
    Previous,
    /// Click on a source filter button
    SelectSource(String),
    ClearSource,
    RestoreLast,
    SetPreference(PreferenceChange),
    ShowOptions,
    /// Raw relay message in its JSON wire form
    Raw(String),
    /// Command list, answered by the input reader
    Help,
    Quit,
}

#[derive(Debug, Clone)]
pub enum SurfaceEvent {
    Command(SurfaceCommand),
    SearchFinished {
        ticket: Ticket,
        word: String,
        from: Language,
        to: Language,
        outcome: Result<ResultDocument, String>,
    },
}

/// Surface output consumed by the UI loop
#[derive(Debug, Clone)]
pub enum UiEvent {
    Loading {
        word: String,
    },
    Render {
        view: View,
        /// What the user asked for, shown on the "no results" view
        requested_from: SourceLanguage,
    },
    /// A search failed, previous results are kept
    Error(String),
    Options(Settings),
    Notice(String),
}

impl UiEvent {
    /// Whether this event ends a one-shot run
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            UiEvent::Render { .. } | UiEvent::Error(_) | UiEvent::Notice(_) | UiEvent::Options(_)
        )
    }
}
