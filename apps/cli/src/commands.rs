//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use sections_core::{Fragments, GroupedList, StageBuilder};
use sections_shared::{AppConfig, DisplayConfig, SectionsError, init_config, load_config};
use serde_json::Value;
use tracing::{debug, info};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Sections — inspect grouped lists stored as JSON.
#[derive(Parser)]
#[command(
    name = "sections",
    version,
    about = "Compose grouped JSON documents and look up item positions.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Print the groups of one or more documents, in the order given.
    Show {
        /// JSON documents: arrays of `{"name": ..., "items": [...]}`.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Skip groups without items (overrides config).
        #[arg(long)]
        hide_empty: bool,

        /// Do not prefix items with their position.
        #[arg(long)]
        plain: bool,
    },

    /// Print the position of the first item equal to a value.
    Find {
        /// JSON documents to search, composed in the order given.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Value to look for, as JSON. Bare words are treated as strings.
        #[arg(long)]
        value: String,

        /// Skip groups without items (overrides config).
        #[arg(long)]
        hide_empty: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "sections=info",
        1 => "sections=debug",
        _ => "sections=trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so stdout stays pipeable.
    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Show {
            files,
            hide_empty,
            plain,
        } => cmd_show(&files, hide_empty, plain),
        Command::Find {
            files,
            value,
            hide_empty,
        } => cmd_find(&files, &value, hide_empty),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

fn resolve_display(hide_empty: bool) -> Result<DisplayConfig> {
    let mut display = load_config()?.display;
    display.hide_empty |= hide_empty;
    Ok(display)
}

fn cmd_show(files: &[PathBuf], hide_empty: bool, plain: bool) -> Result<()> {
    let mut display = resolve_display(hide_empty)?;
    display.numbered &= !plain;

    let builder = stage_documents(files, display)?;
    let groups = builder.groups();
    info!(
        documents = files.len(),
        groups = groups.len(),
        items = groups.total_items(),
        "composed documents"
    );

    let numbered = builder.base().numbered;
    for line in render(&groups, numbered) {
        println!("{line}");
    }
    Ok(())
}

fn cmd_find(files: &[PathBuf], value: &str, hide_empty: bool) -> Result<()> {
    let display = resolve_display(hide_empty)?;
    let builder = stage_documents(files, display)?;
    let needle = parse_value(value);

    match builder.index_path_of(&needle) {
        Some(path) => println!("{path}"),
        None => {
            debug!(%needle, "no matching item");
            println!("not found");
        }
    }
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Documents and staging
// ---------------------------------------------------------------------------

/// Read one JSON document of groups.
fn load_document(path: &Path) -> sections_shared::Result<GroupedList<Value>> {
    let content = std::fs::read_to_string(path).map_err(|e| SectionsError::io(path, e))?;
    serde_json::from_str(&content)
        .map_err(|e| SectionsError::parse(format!("{}: {e}", path.display())))
}

/// One stage per document, all reading the display settings as base value.
fn stage_documents(
    files: &[PathBuf],
    display: DisplayConfig,
) -> Result<StageBuilder<DisplayConfig, Value>> {
    if files.is_empty() {
        return Err(eyre!("at least one document is required"));
    }

    let mut builder = StageBuilder::new(display);
    for path in files {
        let document = load_document(path)?;
        debug!(path = %path.display(), groups = document.len(), "loaded document");

        builder.push_stage(move |display: &DisplayConfig| {
            document
                .iter()
                .filter(|group| !(display.hide_empty && group.is_empty()))
                .cloned()
                .collect()
        });
    }
    Ok(builder)
}

/// Parse a lookup value as JSON, falling back to a plain string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Output lines: a header per group, then its items indented beneath it.
fn render(groups: &GroupedList<Value>, numbered: bool) -> Vec<String> {
    Fragments::new()
        .each(groups.iter().enumerate(), |lines, (index, group)| {
            lines.item(format!("[{}]", group.name())).if_else(
                group.is_empty(),
                |lines| lines.item("  (empty)".to_string()),
                |lines| {
                    lines.each(group.items.iter().enumerate(), |lines, (item, value)| {
                        let text = display_value(value);
                        lines.item(if numbered {
                            format!("  {index}:{item}  {text}")
                        } else {
                            format!("  {text}")
                        })
                    })
                },
            )
        })
        .build()
}
