//! CLI argument definitions
//!
//! All Clap derive structs for `tappadgen` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// XAML tap-pad markup generator for the cube puzzle UI.
#[derive(Parser, Debug)]
#[command(name = "tappadgen", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "TAPPADGEN_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emit the tappad markup document.
    Generate(GenerateArgs),

    /// Check margin-table coverage without emitting markup.
    Validate(ValidateArgs),

    /// Print the effective margin table.
    Table(TableArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Generate Command
// ============================================================================

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Grid dimension (defaults to the margin file's grid.size, or 3).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    pub n: Option<u8>,

    /// Path to a YAML margin-table file overlaying the built-in table.
    #[arg(short, long, env = "TAPPADGEN_MARGINS")]
    pub margins: Option<PathBuf>,

    /// Write the document to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// ============================================================================
// Validate Command
// ============================================================================

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Grid dimension (defaults to the margin file's grid.size, or 3).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    pub n: Option<u8>,

    /// Path to a YAML margin-table file overlaying the built-in table.
    #[arg(short, long, env = "TAPPADGEN_MARGINS")]
    pub margins: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

// ============================================================================
// Table Command
// ============================================================================

/// Arguments for `table`.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Grid dimension (defaults to the margin file's grid.size, or 3).
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..))]
    pub n: Option<u8>,

    /// Path to a YAML margin-table file overlaying the built-in table.
    #[arg(short, long, env = "TAPPADGEN_MARGINS")]
    pub margins: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
