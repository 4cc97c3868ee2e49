use clap::Parser;
use olam_config::ui::SurfaceKind;
use olam_types::{SourceLanguage, WordLimit};

/// English/Malayalam dictionary lookups against olam.in
#[derive(Debug, Parser)]
#[command(name = "olam", version)]
pub struct Args {
    /// Word or phrase to look up right away
    pub word: Option<String>,

    /// Source language for this session: auto, english or malayalam
    #[arg(long)]
    pub from: Option<SourceLanguage>,

    /// Translations shown per meaning, a number or "all"
    #[arg(long)]
    pub limit: Option<WordLimit>,

    /// popup (select filters) or overlay (toggle filters)
    #[arg(long)]
    pub surface: Option<SurfaceKind>,

    /// Exit after the first result instead of reading commands
    #[arg(long)]
    pub once: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}
