use std::io::{BufRead, Write};
use std::thread::JoinHandle;

use kanal::AsyncSender;
use olam_core::Trigger;
use olam_types::{SourceLanguage, WordLimit};

use crate::events::{PreferenceChange, SurfaceCommand, SurfaceEvent};

pub const HELP: &str = "\
commands:
  <text>                 look up text
  :n | :p                next / previous entry
  :f <source>            filter by source (e.g. ekkurup, crowd)
  :a                     show all sources
  :dbl <word>            simulate a double-click selection
  :ctx <text>            simulate a context menu lookup
  :last                  restore the last search
  :set limit <n|all>     translations per meaning
  :set from <lang>       auto, english or malayalam
  :set double-click <on|off>
  :options               show saved settings
  :raw <json>            send a raw relay message
  :help                  this list
  :q                     quit";

/// Parses one input line. `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<SurfaceCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Some(SurfaceCommand::Search {
            text: line.to_string(),
            trigger: Trigger::Popup,
        }));
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    let command = match name {
        "q" | "quit" => SurfaceCommand::Quit,
        "n" | "next" => SurfaceCommand::Next,
        "p" | "prev" => SurfaceCommand::Previous,
        "a" | "all" => SurfaceCommand::ClearSource,
        "last" => SurfaceCommand::RestoreLast,
        "options" => SurfaceCommand::ShowOptions,
        "h" | "help" => SurfaceCommand::Help,
        "f" | "filter" => SurfaceCommand::SelectSource(required(name, arg)?.to_string()),
        "dbl" => SurfaceCommand::Search {
            text: required(name, arg)?.to_string(),
            trigger: Trigger::DoubleClick,
        },
        "ctx" => SurfaceCommand::Search {
            text: required(name, arg)?.to_string(),
            trigger: Trigger::ContextMenu,
        },
        "raw" => SurfaceCommand::Raw(required(name, arg)?.to_string()),
        "set" => SurfaceCommand::SetPreference(parse_preference(arg)?),
        other => return Err(format!("Unknown command :{other}, try :help")),
    };

    Ok(Some(command))
}

fn required<'a>(name: &str, arg: &'a str) -> Result<&'a str, String> {
    if arg.is_empty() {
        Err(format!(":{name} needs an argument"))
    } else {
        Ok(arg)
    }
}

fn parse_preference(arg: &str) -> Result<PreferenceChange, String> {
    let Some((key, value)) = arg.split_once(char::is_whitespace) else {
        return Err("usage: :set <limit|from|double-click> <value>".to_string());
    };
    let value = value.trim();

    match key {
        "limit" => value
            .parse::<WordLimit>()
            .map(PreferenceChange::ResultLimit)
            .map_err(|e| e.to_string()),
        "from" => value
            .parse::<SourceLanguage>()
            .map(PreferenceChange::FromLanguage)
            .map_err(|e| e.to_string()),
        "double-click" => match value {
            "on" | "true" => Ok(PreferenceChange::DoubleClick(true)),
            "off" | "false" => Ok(PreferenceChange::DoubleClick(false)),
            other => Err(format!("Expected on or off, got {other}")),
        },
        other => Err(format!("Unknown setting {other}")),
    }
}

/// Reads commands from stdin on a plain thread so a blocked read never
/// holds up runtime shutdown. EOF sends `Quit`.
pub fn spawn_stdin_reader(events_tx: AsyncSender<SurfaceEvent>) -> std::io::Result<JoinHandle<()>> {
    let tx = events_tx.to_sync();
    let interactive = atty::is(atty::Stream::Stdin);

    std::thread::Builder::new()
        .name("olam-stdin".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            let mut lines = stdin.lock().lines();

            loop {
                if interactive {
                    print!("> ");
                    let _ = std::io::stdout().flush();
                }

                let line = match lines.next() {
                    Some(Ok(line)) => line,
                    Some(Err(e)) => {
                        tracing::error!("Failed to read stdin: {e}");
                        break;
                    }
                    None => break,
                };

                match parse_command(&line) {
                    Ok(Some(SurfaceCommand::Help)) => println!("{HELP}"),
                    Ok(Some(command)) => {
                        let quit = command == SurfaceCommand::Quit;
                        if tx.send(SurfaceEvent::Command(command)).is_err() || quit {
                            return;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => eprintln!("{e}"),
                }
            }

            tracing::debug!("stdin closed");
            let _ = tx.send(SurfaceEvent::Command(SurfaceCommand::Quit));
        })
}
