//! Submits task drafts to the prioritization service from the command line.
//!
//! Usage:
//!
//! ```text
//! taskrank [--offline] prioritize <drafts-path>
//! taskrank [--offline] validate <drafts-path>
//! taskrank [--offline] list
//! taskrank [--offline] health
//! ```
//!
//! The drafts file holds a JSON array of objects whose keys are draft field
//! names. Values are the raw text a user would type:
//!
//! ```json
//! [
//!   { "title": "Write report", "deadline_days": "2", "importance": "8" },
//!   { "title": "Plan sprint", "estimated_hours": "3" }
//! ]
//! ```
//!
//! The service base URL comes from `TASKRANK_API_BASE`. `--offline` uses the
//! in-memory service instead. Logs go to stderr and honour `RUST_LOG`.

use serde_json::Value;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use taskrank::{
    config::{ClientConfig, ConfigError},
    draft::domain::{DraftCollection, DraftField, ParseDraftFieldError},
    editor::EditorSession,
    prioritization::{
        adapters::{http::HttpPrioritizationService, memory::InMemoryPrioritizationService},
        ports::{PrioritizationService, TransportError},
        services::{SubmissionError, SubmissionService},
    },
    view::{ListingView, RenderError, Renderer, SessionView, ValidationView},
};
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "taskrank=info";

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to read drafts file {}: {source}", path.display())]
    DraftsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse drafts: {0}")]
    DraftsParse(String),
    #[error(transparent)]
    UnknownField(#[from] ParseDraftFieldError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to create HTTP client: {0}")]
    Client(#[source] TransportError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Prioritize(PathBuf),
    Validate(PathBuf),
    List,
    Health,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Invocation {
    offline: bool,
    command: Command,
}

fn main() -> Result<ExitCode, BoxError> {
    init_tracing();
    let invocation = parse_args(std::env::args().skip(1))?;
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::RuntimeInit)?;

    let succeeded = if invocation.offline {
        info!("using in-memory prioritization service");
        let service = Arc::new(InMemoryPrioritizationService::new());
        runtime.block_on(run(service, &invocation.command))?
    } else {
        let config = ClientConfig::from_env()?;
        info!(base_url = %config.base_url(), "using remote prioritization service");
        let service =
            Arc::new(HttpPrioritizationService::new(config).map_err(CliError::Client)?);
        runtime.block_on(run(service, &invocation.command))?
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Invocation, CliError> {
    let mut offline = false;
    let mut positional = Vec::new();
    for arg in args {
        if arg == "--offline" {
            offline = true;
        } else {
            positional.push(arg);
        }
    }

    let mut remaining = positional.into_iter();
    let name = remaining
        .next()
        .ok_or_else(|| CliError::InvalidArgs("missing command argument".to_owned()))?;
    let mut drafts_path = || {
        remaining
            .next()
            .map(PathBuf::from)
            .ok_or_else(|| CliError::InvalidArgs(format!("missing drafts path for '{name}'")))
    };
    let command = match name.as_str() {
        "prioritize" => Command::Prioritize(drafts_path()?),
        "validate" => Command::Validate(drafts_path()?),
        "list" => Command::List,
        "health" => Command::Health,
        other => {
            return Err(CliError::InvalidArgs(format!(
                "unknown command '{other}'; expected prioritize, validate, list, or health"
            )));
        }
    };
    if let Some(extra) = remaining.next() {
        return Err(CliError::InvalidArgs(format!(
            "unexpected extra argument: {extra}"
        )));
    }
    Ok(Invocation { offline, command })
}

/// Runs one command, returning `false` when the service rejected the batch.
async fn run<S>(service: Arc<S>, command: &Command) -> Result<bool, CliError>
where
    S: PrioritizationService,
{
    let submissions = SubmissionService::new(service, Arc::new(mockable::DefaultClock));
    let renderer = Renderer::new()?;

    let (text, succeeded) = match command {
        Command::Prioritize(path) => {
            let mut session = EditorSession::with_drafts(load_drafts(path)?);
            submissions.submit_session(&mut session).await;
            let text = renderer.render_session(&SessionView::from_session(&session))?;
            (text, session.error().is_none())
        }
        Command::Validate(path) => {
            let report = submissions.validate(&load_drafts(path)?).await?;
            let text = renderer.render_validation(&ValidationView::from_report(&report))?;
            (text, true)
        }
        Command::List => {
            let listing = submissions.list_tasks().await?;
            (renderer.render_listing(&ListingView::from_listing(&listing))?, true)
        }
        Command::Health => {
            let health = submissions.health().await?;
            let healthy = health.is_ok();
            (health.status, healthy)
        }
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text.trim_end()).map_err(CliError::Output)?;
    Ok(succeeded)
}

fn load_drafts(path: &Path) -> Result<DraftCollection, CliError> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::DraftsRead {
        path: path.to_path_buf(),
        source,
    })?;
    drafts_from_json(&source)
}

/// Builds a collection from a JSON array of field maps, one draft per entry.
fn drafts_from_json(source: &str) -> Result<DraftCollection, CliError> {
    let entries: Vec<serde_json::Map<String, Value>> =
        serde_json::from_str(source).map_err(|err| CliError::DraftsParse(err.to_string()))?;

    let mut drafts = DraftCollection::empty();
    for entry in entries {
        let id = drafts.add_draft();
        for (key, value) in entry {
            let field = DraftField::try_from(key.as_str())?;
            drafts.update_field(id, field, raw_text(value));
        }
    }
    Ok(drafts)
}

fn raw_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}
