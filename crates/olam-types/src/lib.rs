mod language;
mod limit;
mod protocol;
mod types;

pub use language::{Language, ParseLanguageError, SourceLanguage};
pub use limit::{ParseWordLimitError, WordLimit};
pub use protocol::{RelayRequest, RelayResponse, SearchResponse};
pub use types::*;
