pub mod language;
pub mod preprocess;
pub mod presenter;
pub mod sequence;
pub mod state;

pub use language::{LanguageDetector, UnicodeRangeDetector, detect, resolve_source};
pub use preprocess::{DefaultPreprocessor, Preprocessor, Trigger};
pub use presenter::{Control, FilterPolicy, Presenter, View};
pub use sequence::{SearchSequencer, Ticket};
pub use state::{ResultState, SearchContext};
