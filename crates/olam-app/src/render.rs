use std::fmt::Write;

use olam_client::urls::dictionary_url;
use olam_config::Settings;
use olam_config::api::ApiConfig;
use olam_core::presenter::{Body, EntryView, FilterButton, NavView};
use olam_core::View;
use olam_types::SourceLanguage;

/// Terminal text for one projected view
pub fn format_view(
    view: &View,
    requested_from: SourceLanguage,
    api: &ApiConfig,
    show_details_link: bool,
) -> String {
    let mut out = String::new();

    if !view.filters.is_empty() {
        let _ = writeln!(out, "{}", format_filters(&view.filters));
    }

    match &view.body {
        Body::NoResults => {
            let to = view
                .context
                .as_ref()
                .map(|c| c.to.display_name())
                .unwrap_or("Malayalam");
            let _ = writeln!(
                out,
                "No results found ({} -> {})",
                requested_from.display_name(),
                to
            );
        }
        Body::NoResultsForSource { source } => {
            let _ = writeln!(out, "No results for {source}");
        }
        Body::Entry(entry) => {
            out.push_str(&format_entry(entry));
            if let Some(nav) = view.nav.as_ref().filter(|nav| nav.visible()) {
                let _ = writeln!(out, "{}", format_nav(nav));
            }
        }
    }

    if show_details_link && let Some(context) = &view.context {
        match dictionary_url(&api.dictionary_base, context.from, context.to, &context.word) {
            Ok(url) => {
                let _ = writeln!(out, "View full details on olam.in: {url}");
            }
            Err(e) => tracing::warn!("no details link: {e}"),
        }
    }

    out
}

fn format_filters(filters: &[FilterButton]) -> String {
    filters
        .iter()
        .map(|button| {
            if button.active {
                format!("[{}]", button.label)
            } else {
                format!(" {} ", button.label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_entry(entry: &EntryView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", entry.forms.join(", "));

    for (i, meaning) in entry.meanings.iter().enumerate() {
        let ellipsis = if meaning.truncated { "..." } else { "" };
        let _ = write!(out, "  {}. {}{}", i + 1, meaning.words.join(", "), ellipsis);
        if let Some(types) = &meaning.word_types {
            let _ = write!(out, " ({})", types.join(", "));
        }
        out.push('\n');
    }

    out
}

fn format_nav(nav: &NavView) -> String {
    let prev = if nav.previous_enabled { "<" } else { " " };
    let next = if nav.next_enabled { ">" } else { " " };
    format!("{prev} {} {next}", nav.counter())
}

pub fn format_settings(settings: &Settings) -> String {
    format!(
        "double-click: {}\nfrom: {}\nto: {}\nresult limit: {}",
        if settings.double_click_enabled { "on" } else { "off" },
        settings.from_language.display_name(),
        settings.to_language.display_name(),
        settings.result_limit,
    )
}
