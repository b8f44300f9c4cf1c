//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};

/// wireup - find dead add-buttons in Next.js pages and wire them to placeholder modals.
#[derive(Parser, Debug)]
#[command(name = "wireup")]
#[command(
    author,
    version,
    about,
    long_about = r#"wireup scans a Next.js app directory for page files, detects "Ajouter" /
"Nouveau" / "Nouvelle" buttons that have no onClick handler, and rewrites each
page to add modal visibility state, click handlers, and placeholder <Modal>
dialogs.

Each command prints a ResultSet in the selected format (default: summary).

Output formats:
- summary: human-friendly progress lines (what the legacy script printed)
- jsonl: one JSON object per line (best for piping into tools)
- json: a single JSON array
- md: human-friendly Markdown

Examples:
    wireup scan
    wireup buttons
    wireup check
    wireup fix --dry-run
    wireup fix
"#
)]
pub struct Cli {
    /// Root directory for all operations.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory for all operations (defaults to the current directory).\n\n\
All paths emitted in results are relative to this root, and the app directory\n\
is interpreted relative to it."
    )]
    pub root: PathBuf,

    /// Output format (summary/jsonl/json/md).
    #[arg(
        long,
        global = true,
        default_value = "summary",
        value_name = "FORMAT",
        long_help = "Select the output format for ResultSet.\n\n\
Supported values:\n\
- summary (default)\n\
- jsonl\n\
- json\n\
- md (markdown)\n\n\
Tip: Prefer jsonl when you want stable, line-oriented output for piping."
    )]
    pub format: String,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Reduce non-essential output. Note: machine-readable results are still\n\
printed to stdout unless a command explicitly suppresses them."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Enable more detailed diagnostics. Summaries additionally report files\n\
that were skipped and why."
    )]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL output with indentation for human readability.\n\n\
This is useful when manually inspecting results. Has no effect on summary/md formats."
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the app directory and output a stable list of page files.
    #[command(
        long_about = "Scan <ROOT>/<APP-DIR> for files whose name equals the page pattern and\n\
emit one ResultItem per page. Output is sorted for stability.\n\n\
Use this to see exactly which files the fix command would consider.\n\n\
Examples:\n\
  wireup scan\n\
  wireup scan --app-dir src/app\n\
  wireup scan --hidden --no-ignore\n"
    )]
    Scan {
        /// App directory under ROOT to search.
        #[arg(
            long,
            default_value = "app",
            value_name = "DIR",
            long_help = "App directory under ROOT to search for page files.\n\n\
Defaults to 'app' (the Next.js app router layout)."
        )]
        app_dir: PathBuf,

        /// Page file name to match.
        #[arg(
            long,
            default_value = "page.tsx",
            value_name = "NAME",
            long_help = "Exact file name that identifies a page.\n\n\
Defaults to 'page.tsx'."
        )]
        page_name: String,

        /// Include hidden files/directories (dotfiles).
        #[arg(
            long,
            long_help = "Include hidden files and directories (dotfiles).\n\n\
By default, hidden entries are skipped."
        )]
        hidden: bool,

        /// Disable .gitignore and other ignore rules.
        #[arg(
            long,
            long_help = "Disable respect for ignore files (.gitignore, .ignore, global ignores).\n\n\
Use this for a raw scan that includes all paths, even those normally ignored."
        )]
        no_ignore: bool,
    },

    /// List dead buttons found across page files.
    #[command(
        long_about = r#"Parse every page file and emit one ResultItem per button that matches the
add-button pattern but carries no onClick handler.

Each item includes the button's line range, its raw element text as the
excerpt, and a data payload with the extracted label word and the modal state
identifier the fix command would derive.

Examples:
    wireup buttons
    wireup buttons --format jsonl
"#
    )]
    Buttons {
        /// App directory under ROOT to search.
        #[arg(long, default_value = "app", value_name = "DIR")]
        app_dir: PathBuf,

        /// Page file name to match.
        #[arg(long, default_value = "page.tsx", value_name = "NAME")]
        page_name: String,
    },

    /// Lint pages for conditions that block or degrade a rewrite.
    #[command(
        long_about = "Validate that every page with dead buttons can actually be rewritten:\n\
the 'use client' directive, the activeTab state anchor, the layout closing\n\
sequence, and the lucide-react import anchor are all checked.\n\n\
This command emits issues as error result items, suitable for CI gating.\n\n\
Example:\n\
  wireup check\n"
    )]
    Check {
        /// App directory under ROOT to search.
        #[arg(long, default_value = "app", value_name = "DIR")]
        app_dir: PathBuf,

        /// Page file name to match.
        #[arg(long, default_value = "page.tsx", value_name = "NAME")]
        page_name: String,
    },

    /// Rewrite pages so every dead button opens a placeholder modal.
    #[command(
        long_about = r#"For each page file, in path order: skip pages without the 'use client'
directive, find add-buttons lacking onClick, then splice in the Modal import,
one useState declaration per derived name, an onClick handler per button, and
trailing placeholder <Modal> markup. Files are written back only when their
content actually changed, so re-running is a no-op.

A failure on one file (unreadable, non-UTF-8, write error) is reported and
processing continues with the next file.

Examples:
    wireup fix
    wireup fix --dry-run
    wireup fix --app-dir src/app --page-name page.jsx
"#
    )]
    Fix {
        /// App directory under ROOT to search.
        #[arg(long, default_value = "app", value_name = "DIR")]
        app_dir: PathBuf,

        /// Page file name to match.
        #[arg(long, default_value = "page.tsx", value_name = "NAME")]
        page_name: String,

        /// Report what would change without writing any file.
        #[arg(
            long,
            long_help = "Run the full rewrite pipeline but never write files back.\n\n\
Changed files are reported exactly as a real run would report them."
        )]
        dry_run: bool,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Parse output format
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Get absolute root path
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    match cli.command {
        Commands::Scan {
            app_dir,
            page_name,
            hidden,
            no_ignore,
        } => crate::pages::run_scan(
            &root,
            &app_dir,
            &page_name,
            hidden,
            !no_ignore,
            render_config,
        ),

        Commands::Buttons { app_dir, page_name } => {
            crate::buttons::run_buttons(&root, &app_dir, &page_name, render_config)
        }

        Commands::Check { app_dir, page_name } => {
            crate::buttons::lint::run_check(&root, &app_dir, &page_name, render_config)
        }

        Commands::Fix {
            app_dir,
            page_name,
            dry_run,
        } => crate::rewrite::engine::run_fix(
            &root,
            &app_dir,
            &page_name,
            dry_run,
            cli.quiet,
            cli.verbose,
            render_config,
        ),
    }
}
