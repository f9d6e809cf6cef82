//! Command-line entry point over `luminet_core`.
//!
//! # Responsibility
//! - Load an exported item array and print match candidates, the
//!   constellation graph, or note tags as JSON.
//! - Keep output deterministic so runs can be diffed.

use luminet_core::{
    build_constellation, init_with_settings, load_items_from_path, suggest_matches, tag_note,
    ConstellationOptions, IngestError, LogSettings, RankOptions,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::process::ExitCode;

const USAGE: &str = "usage:
  luminet_cli match <items.json> <author_id> [limit]
  luminet_cli constellation <items.json>
  luminet_cli tag <text...>";

#[derive(Debug)]
enum CliError {
    Usage(String),
    Logging(String),
    Ingest(IngestError),
    Output(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage(message) => write!(f, "{message}\n{USAGE}"),
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Ingest(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to encode output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ingest(err) => Some(err),
            Self::Output(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IngestError> for CliError {
    fn from(value: IngestError) -> Self {
        Self::Ingest(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}

fn main() -> ExitCode {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=cli_run module=cli status=error error={err}");
            eprintln!("{err}");
            match err {
                CliError::Usage(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(args: &[String]) -> Result<String, CliError> {
    if let Some(settings) = LogSettings::from_env().map_err(CliError::Logging)? {
        init_with_settings(settings).map_err(CliError::Logging)?;
    }

    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::Usage("missing command".to_string()));
    };

    match command.as_str() {
        "match" => {
            let [path, author_id, tail @ ..] = rest else {
                return Err(CliError::Usage(
                    "match needs <items.json> <author_id>".to_string(),
                ));
            };
            let options = match tail {
                [] => RankOptions::default(),
                [limit] => RankOptions {
                    limit: limit
                        .parse()
                        .map_err(|_| CliError::Usage(format!("invalid limit `{limit}`")))?,
                },
                _ => return Err(CliError::Usage("too many arguments".to_string())),
            };
            let batch = load_items_from_path(path)?;
            let candidates = suggest_matches(&batch.items, author_id.trim(), &options);
            Ok(serde_json::to_string_pretty(&candidates)?)
        }
        "constellation" => {
            let [path] = rest else {
                return Err(CliError::Usage(
                    "constellation needs <items.json>".to_string(),
                ));
            };
            let batch = load_items_from_path(path)?;
            let graph = build_constellation(&batch.items, &ConstellationOptions::default());
            Ok(serde_json::to_string_pretty(&graph)?)
        }
        "tag" => {
            if rest.is_empty() {
                return Err(CliError::Usage("tag needs <text...>".to_string()));
            }
            Ok(serde_json::to_string_pretty(&tag_note(&rest.join(" ")))?)
        }
        other => Err(CliError::Usage(format!("unknown command `{other}`"))),
    }
}
