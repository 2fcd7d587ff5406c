//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gantry",
    bin_name = "gantry",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3d7} Massive modular project-manifest generator",
    long_about = "Gantry scaffolds hundreds of library modules and builds the \
                  matching build-target dependency graph, handed to the \
                  downstream build-description consumer as a manifest.",
    after_help = "EXAMPLES:\n\
        \x20 gantry generate TuistApp --modules 300 --replicas 300 --team 72SA8V3WYL\n\
        \x20 gantry generate MyApp --modules 10 --replicas 0 --manifest-out manifest.json\n\
        \x20 gantry plan MyApp --modules 2 --replicas 1\n\
        \x20 gantry completions zsh > ~/.zfunc/_gantry",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold modules and emit the project manifest.
    #[command(
        visible_alias = "gen",
        about = "Scaffold modules and emit the project manifest",
        after_help = "EXAMPLES:\n\
            \x20 gantry generate TuistApp --modules 300 --replicas 300 --team 72SA8V3WYL\n\
            \x20 gantry generate MyApp -m 5 -r 0 --root ./fixture --manifest-out manifest.json\n\
            \x20 gantry generate MyApp -m 5 --dry-run"
    )]
    Generate(GenerateArgs),

    /// Build and validate the target graph without writing anything.
    #[command(
        about = "Validate the target graph and print a summary",
        after_help = "EXAMPLES:\n\
            \x20 gantry plan MyApp --modules 2 --replicas 1\n\
            \x20 gantry plan MyApp --output-format json"
    )]
    Plan(PlanArgs),

    /// Initialise a Gantry configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 gantry init           # default location\n\
            \x20 gantry init --force   # overwrite existing"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gantry completions bash > ~/.local/share/bash-completion/completions/gantry\n\
            \x20 gantry completions zsh  > ~/.zfunc/_gantry\n\
            \x20 gantry completions fish > ~/.config/fish/completions/gantry.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Gantry configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gantry config get defaults.organization\n\
            \x20 gantry config list\n\
            \x20 gantry config path"
    )]
    Config(ConfigCommands),
}

// ── Shared graph arguments ────────────────────────────────────────────────────

/// Arguments shared by every command that builds the target graph.
#[derive(Debug, Args)]
pub struct GraphArgs {
    /// Base application name; module and target names are synthesized from it.
    #[arg(value_name = "APP_NAME", help = "Base application name")]
    pub name: String,

    /// Modules to generate per family (kit and ui).
    #[arg(
        short = 'm',
        long = "modules",
        value_name = "COUNT",
        help = "Modules per family (kit and ui)"
    )]
    pub modules: Option<u32>,

    /// Additional replicated app/test pairs.
    #[arg(
        short = 'r',
        long = "replicas",
        value_name = "COUNT",
        help = "Replicated app/test pairs"
    )]
    pub replicas: Option<u32>,

    /// Target platform.
    #[arg(short = 'p', long = "platform", value_enum, help = "Target platform")]
    pub platform: Option<PlatformArg>,

    /// Development team identifier for code signing settings.
    #[arg(long = "team", value_name = "TEAM_ID", help = "Development team id")]
    pub team: Option<String>,

    /// Organization name recorded in the manifest.
    #[arg(long = "org", value_name = "NAME", help = "Organization name")]
    pub organization: Option<String>,

    /// Reverse-domain prefix for synthesized bundle ids.
    #[arg(
        long = "bundle-prefix",
        value_name = "PREFIX",
        help = "Bundle id prefix (e.g. io.tuist)"
    )]
    pub bundle_prefix: Option<String>,

    /// External package reference; repeat for multiple packages.
    #[arg(
        long = "package",
        value_name = "NAME",
        action = clap::ArgAction::Append,
        help = "External package reference (repeatable)"
    )]
    pub packages: Vec<String>,

    /// Fail when two targets share a bundle id.
    ///
    /// Replicated app targets intentionally reuse the canonical app's bundle
    /// id, so this is off by default.
    #[arg(
        long = "deny-duplicate-bundle-ids",
        help = "Reject duplicate bundle ids"
    )]
    pub deny_duplicate_bundle_ids: bool,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `gantry generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Destination root; module trees land under `<root>/Targets/`.
    #[arg(
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Destination root directory"
    )]
    pub root: PathBuf,

    /// Where to write the manifest; `-` means stdout.
    #[arg(
        short = 'o',
        long = "manifest-out",
        value_name = "FILE",
        default_value = "-",
        help = "Manifest output file ('-' for stdout)"
    )]
    pub manifest_out: PathBuf,

    /// Custom source stub template file (must contain the ??? placeholder).
    #[arg(long = "source-template", value_name = "FILE")]
    pub source_template: Option<PathBuf>,

    /// Custom test stub template file (must contain the ??? placeholder).
    #[arg(long = "test-template", value_name = "FILE")]
    pub test_template: Option<PathBuf>,

    /// File extension for generated stubs.
    #[arg(long = "ext", value_name = "EXT", help = "Stub file extension")]
    pub extension: Option<String>,

    /// Scaffold worker count (0 = auto).
    #[arg(short = 'j', long = "jobs", value_name = "N", help = "Worker count (0 = auto)")]
    pub jobs: Option<usize>,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and generate immediately")]
    pub yes: bool,

    /// Describe what would be generated without writing any files.
    #[arg(long = "dry-run", help = "Show what would be generated without generating")]
    pub dry_run: bool,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Arguments for `gantry plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `gantry init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gantry completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `gantry config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.organization`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported target platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PlatformArg {
    Ios,
    Macos,
    Tvos,
    Watchos,
}

impl std::fmt::Display for PlatformArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ios => write!(f, "ios"),
            Self::Macos => write!(f, "macos"),
            Self::Tvos => write!(f, "tvos"),
            Self::Watchos => write!(f, "watchos"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
