//! Renderer module
//!
//! Renders ResultSet to different output formats: summary, jsonl, json, md

use colored::Colorize;

use crate::core::model::{Kind, ResultItem, ResultSet};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Summary,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" => Ok(OutputFormat::Summary),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Summary => self.render_summary(result_set),
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
        }
    }

    /// Render as human-friendly summary lines
    fn render_summary(&self, result_set: &ResultSet) -> String {
        let mut lines = Vec::new();

        for item in &result_set.items {
            let path = item.path.as_deref().unwrap_or("<no path>");
            match item.kind {
                Kind::Page => {
                    if let Some(size) = item.meta.size {
                        lines.push(format!("{} ({} bytes)", path, size));
                    } else {
                        lines.push(path.to_string());
                    }
                }
                Kind::Button => {
                    let line = item.range.map(|r| r.start).unwrap_or(0);
                    let excerpt = item
                        .excerpt
                        .as_deref()
                        .map(condense)
                        .unwrap_or_default();
                    lines.push(format!("{}:{} {}", path, line, excerpt));
                }
                Kind::Fix => {
                    let dry_run = item
                        .data
                        .as_ref()
                        .and_then(|d| d.get("dry_run"))
                        .and_then(|v| v.as_bool())
                        .unwrap_or(false);
                    if dry_run {
                        lines.push(format!("{} Would fix: {}", "~".yellow(), path));
                    } else {
                        lines.push(format!("{} Fixed: {}", "✓".green(), path));
                    }
                }
                Kind::Error => {
                    for error in &item.errors {
                        let loc = match item.range {
                            Some(r) => format!("{}:{}", path, r.start),
                            None => path.to_string(),
                        };
                        lines.push(format!(
                            "{} {} {}: {}",
                            "✗".red(),
                            error.code,
                            loc,
                            error.message
                        ));
                    }
                }
            }
        }

        lines.join("\n")
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        // Group by kind
        let mut pages = Vec::new();
        let mut buttons = Vec::new();
        let mut fixes = Vec::new();
        let mut errors = Vec::new();

        for item in &result_set.items {
            match item.kind {
                Kind::Page => pages.push(item),
                Kind::Button => buttons.push(item),
                Kind::Fix => fixes.push(item),
                Kind::Error => errors.push(item),
            }
        }

        if !errors.is_empty() {
            output.push_str("## Errors\n\n");
            for item in errors {
                for error in &item.errors {
                    match &item.path {
                        Some(path) => output.push_str(&format!(
                            "- **{}** `{}`: {}\n",
                            error.code, path, error.message
                        )),
                        None => {
                            output.push_str(&format!("- **{}**: {}\n", error.code, error.message))
                        }
                    }
                }
            }
            output.push('\n');
        }

        if !pages.is_empty() {
            output.push_str("## Pages\n\n");
            for item in pages {
                if let Some(path) = &item.path {
                    output.push_str(&format!("- `{}`", path));
                    if let Some(size) = item.meta.size {
                        output.push_str(&format!(" ({} bytes)", size));
                    }
                    output.push('\n');
                }
            }
            output.push('\n');
        }

        if !buttons.is_empty() {
            output.push_str("## Buttons\n\n");
            for item in buttons {
                self.render_item_md(&mut output, item);
            }
            output.push('\n');
        }

        if !fixes.is_empty() {
            output.push_str("## Fixes\n\n");
            for item in fixes {
                if let Some(path) = &item.path {
                    output.push_str(&format!("- `{}`", path));
                    if let Some(states) = item
                        .data
                        .as_ref()
                        .and_then(|d| d.get("states"))
                        .and_then(|v| v.as_array())
                    {
                        let names: Vec<_> =
                            states.iter().filter_map(|s| s.as_str()).collect();
                        output.push_str(&format!(" ({})", names.join(", ")));
                    }
                    output.push('\n');
                }
            }
            output.push('\n');
        }

        output
    }

    fn render_item_md(&self, output: &mut String, item: &ResultItem) {
        if let Some(path) = &item.path {
            output.push_str(&format!("### `{}`", path));
            if let Some(range) = &item.range {
                output.push_str(&format!(" (lines {}-{})", range.start, range.end));
            }
            output.push('\n');
        }

        if let Some(excerpt) = &item.excerpt {
            output.push_str("\n```\n");
            output.push_str(excerpt);
            if !excerpt.ends_with('\n') {
                output.push('\n');
            }
            output.push_str("```\n");
        }

        output.push('\n');
    }
}

/// Collapse whitespace runs to single spaces for one-line display
fn condense(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
