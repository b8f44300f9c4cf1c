//! Rewrite engine
//!
//! Per-file pipeline: gate on the 'use client' marker, detect dead buttons,
//! run the splice passes in order, and write back only when the content
//! actually changed. A failure on one file never stops the run.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::buttons::parse::{find_dead_buttons, has_client_marker, state_names};
use crate::core::file_reader::read_page;
use crate::core::model::{Meta, ResultItem, ResultSet, WireError};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::core::util::hash_bytes;
use crate::pages::page_paths;
use crate::rewrite::{splice, template};

/// Per-file processing failure
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("{0}")]
    Read(String),

    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// Why a page was left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoClientMarker,
    NoDeadButtons,
    NoChange,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NoClientMarker => "no 'use client' directive",
            SkipReason::NoDeadButtons => "no dead buttons",
            SkipReason::NoChange => "no splice anchor matched",
        }
    }
}

/// What a fix pass did to one page
#[derive(Debug, Clone)]
pub struct FixReport {
    /// The rewritten content
    pub content: String,

    /// Unique state stems, first-occurrence order
    pub names: Vec<String>,

    /// Dead buttons found
    pub buttons: usize,

    /// Buttons wired with a handler
    pub wired: usize,

    pub import_added: bool,
    pub states_added: bool,
    pub modals_added: bool,
}

/// Outcome of a fix pass over one page
#[derive(Debug, Clone)]
pub enum FixOutcome {
    Fixed(FixReport),
    Skipped(SkipReason),
}

/// Run the rewrite pipeline over page content
pub fn fix_content(original: &str) -> FixOutcome {
    if !has_client_marker(original) {
        return FixOutcome::Skipped(SkipReason::NoClientMarker);
    }

    let buttons = find_dead_buttons(original);
    if buttons.is_empty() {
        return FixOutcome::Skipped(SkipReason::NoDeadButtons);
    }
    let names = state_names(&buttons);

    let mut content = original.to_string();

    let mut import_added = false;
    if let Some(next) = splice::insert_modal_import(&content) {
        content = next;
        import_added = true;
    }

    let mut states_added = false;
    if let Some(next) = splice::insert_state_decls(&content, &names) {
        content = next;
        states_added = true;
    }

    let (next, wired) = splice::wire_handlers(&content, &buttons);
    content = next;

    let mut modals_added = false;
    if let Some(next) = splice::append_modals(&content, &names) {
        content = next;
        modals_added = true;
    }

    if content == original {
        return FixOutcome::Skipped(SkipReason::NoChange);
    }

    FixOutcome::Fixed(FixReport {
        content,
        buttons: buttons.len(),
        wired,
        names,
        import_added,
        states_added,
        modals_added,
    })
}

/// Fix a single page file on disk
pub fn fix_file(path: &Path, dry_run: bool) -> Result<FixOutcome, PatchError> {
    let read = read_page(path);
    let content = match read.content {
        Some(c) => c,
        None => {
            return Err(PatchError::Read(
                read.skip_reason.unwrap_or_else(|| "unreadable".to_string()),
            ));
        }
    };

    let outcome = fix_content(&content);
    if let FixOutcome::Fixed(report) = &outcome {
        if !dry_run {
            fs::write(path, &report.content)?;
        }
    }

    Ok(outcome)
}

/// Run the fix command
#[allow(clippy::too_many_arguments)]
pub fn run_fix(
    root: &Path,
    app_dir: &Path,
    page_name: &str,
    dry_run: bool,
    quiet: bool,
    verbose: bool,
    config: RenderConfig,
) -> Result<()> {
    let pages = page_paths(root, app_dir, page_name)?;
    let summary = config.format == OutputFormat::Summary;

    if summary && !quiet {
        println!("Found {} {} files", pages.len(), page_name);
        if dry_run {
            println!("Checking buttons (dry run)...\n");
        } else {
            println!("Fixing buttons...\n");
        }
    }

    let mut result_set = ResultSet::new();
    let mut fixed_count = 0usize;

    for (abs_path, rel_path) in &pages {
        match fix_file(abs_path, dry_run) {
            Ok(FixOutcome::Fixed(report)) => {
                fixed_count += 1;
                if summary && !quiet {
                    if dry_run {
                        println!("{} Would fix: {}", "~".yellow(), rel_path);
                    } else {
                        println!("{} Fixed: {}", "✓".green(), rel_path);
                    }
                }

                let meta = Meta {
                    size: Some(report.content.len() as u64),
                    hash: Some(hash_bytes(report.content.as_bytes())),
                    modified: true,
                    mtime_ms: None,
                };
                let states: Vec<String> =
                    report.names.iter().map(|n| template::state_ident(n)).collect();
                result_set.push(ResultItem::fix(rel_path.clone()).with_meta(meta).with_data(
                    json!({
                        "buttons": report.buttons,
                        "wired": report.wired,
                        "states": states,
                        "import_added": report.import_added,
                        "states_added": report.states_added,
                        "modals_added": report.modals_added,
                        "dry_run": dry_run,
                    }),
                ));
            }
            Ok(FixOutcome::Skipped(reason)) => {
                if summary && verbose {
                    println!("- Skipped ({}): {}", reason.as_str(), rel_path);
                }
            }
            Err(e) => {
                if summary {
                    println!("Error processing {}: {}", rel_path, e);
                }
                result_set.push(
                    ResultItem::error(WireError::new("PROCESS_FAILED", e.to_string()))
                        .with_path(rel_path.clone()),
                );
            }
        }
    }

    if summary {
        if !quiet {
            if dry_run {
                println!("\nDone! Would fix {} files.", fixed_count);
            } else {
                println!("\nDone! Fixed {} files.", fixed_count);
            }
        }
    } else {
        result_set.sort();
        let renderer = Renderer::with_config(config);
        println!("{}", renderer.render(&result_set));
    }

    Ok(())
}
