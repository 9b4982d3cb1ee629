//! Clap derive structures for the `holidays` CLI.
//!
//! Defines the command tree, global flags, and shared types. Also compiled
//! by `build.rs` for man page generation, so only clap types belong here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// holidays -- public holidays by country, from the command line
#[derive(Debug, Parser)]
#[command(
    name = "holidays",
    version,
    about = "Browse public holidays by country from the command line",
    long_about = "Lists public holidays for a country and year.\n\n\
        Uses Nager.Date as the primary provider, with Calendarific as a\n\
        fallback when an API key is configured. The selected country is\n\
        remembered between runs.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(long, env = "HOLIDAYS_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Country used when no valid selection is stored (overrides config)
    #[arg(long, global = true, value_name = "CODE")]
    pub country: Option<String>,

    /// Year to list holidays for (defaults to the current year)
    #[arg(long, global = true)]
    pub year: Option<i32>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "HOLIDAYS_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Request timeout in seconds (overrides config)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List countries holidays are available for
    #[command(alias = "c")]
    Countries,

    /// Show holidays for the selected (or given) country
    #[command(alias = "s")]
    Show(ShowArgs),

    /// Select and remember a country
    Select(SelectArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Holidays ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// ISO 3166-1 alpha-2 code; selects and remembers the country
    pub code: Option<String>,
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// ISO 3166-1 alpha-2 code, e.g. DE
    pub code: String,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config and preference file locations
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
