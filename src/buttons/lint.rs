//! Page linting
//!
//! Checks for:
//! - dead buttons (what fix would rewrite)
//! - pages that fix would have to skip ('use client' missing)
//! - buttons fix would have to leave alone (no derivable name)
//! - missing splice anchors (activeTab state, layout close, lucide import)

use anyhow::Result;
use std::path::Path;

use crate::buttons::parse::{find_dead_buttons, has_client_marker};
use crate::core::file_reader::read_page;
use crate::core::model::{RangeLine, ResultItem, ResultSet, WireError};
use crate::core::render::{RenderConfig, Renderer};
use crate::pages::page_paths;
use crate::rewrite::{splice, template};

/// Lint issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    Error,
    Warning,
}

/// A lint issue
#[derive(Debug, Clone)]
pub struct LintIssue {
    pub severity: LintSeverity,
    pub code: String,
    pub message: String,
    pub path: String,
    pub line: Option<u32>,
}

impl LintIssue {
    pub fn error(code: &str, message: &str, path: &str, line: Option<u32>) -> Self {
        Self {
            severity: LintSeverity::Error,
            code: code.to_string(),
            message: message.to_string(),
            path: path.to_string(),
            line,
        }
    }

    pub fn warning(code: &str, message: &str, path: &str, line: Option<u32>) -> Self {
        Self {
            severity: LintSeverity::Warning,
            code: code.to_string(),
            message: message.to_string(),
            path: path.to_string(),
            line,
        }
    }

    pub fn to_result_item(&self) -> ResultItem {
        let mut item = ResultItem::error(WireError::new(&self.code, &self.message));
        item.path = Some(self.path.clone());
        item.range = self.line.map(|l| RangeLine::new(l, l));
        item
    }
}

/// Lint page content
pub fn lint_content(content: &str, path: &str) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    let buttons = find_dead_buttons(content);
    if buttons.is_empty() {
        return issues;
    }

    let mut named = 0usize;
    for button in &buttons {
        match &button.name {
            Some(name) => {
                named += 1;
                issues.push(LintIssue::warning(
                    "DEAD_BUTTON",
                    &format!("unwired button would open {}", template::state_ident(name)),
                    path,
                    Some(button.range.start),
                ));
            }
            None => {
                issues.push(LintIssue::warning(
                    "UNNAMED_BUTTON",
                    "no state name derivable from the button label; fix will leave it alone",
                    path,
                    Some(button.range.start),
                ));
            }
        }
    }

    if !has_client_marker(content) {
        issues.push(LintIssue::warning(
            "NOT_CLIENT_PAGE",
            "page has dead buttons but no 'use client' directive; fix will skip it",
            path,
            None,
        ));
        return issues;
    }

    if named > 0 {
        if !splice::has_tab_state(content) {
            issues.push(LintIssue::error(
                "MISSING_TAB_STATE",
                "no activeTab useState line to anchor state declarations after",
                path,
                None,
            ));
        }
        if !splice::has_layout_close(content) {
            issues.push(LintIssue::error(
                "MISSING_LAYOUT_CLOSE",
                "no </main> </div> closing sequence to place modals before",
                path,
                None,
            ));
        }
        if !content.contains(template::MODAL_IMPORT) && !splice::has_icon_import(content) {
            issues.push(LintIssue::warning(
                "MISSING_ICON_IMPORT",
                "no lucide-react import to anchor the Modal import after",
                path,
                None,
            ));
        }
    }

    issues
}

/// Run the check command
pub fn run_check(
    root: &Path,
    app_dir: &Path,
    page_name: &str,
    config: RenderConfig,
) -> Result<()> {
    let pages = page_paths(root, app_dir, page_name)?;
    let mut result_set = ResultSet::new();

    for (abs_path, rel_path) in &pages {
        let read = read_page(abs_path);
        let content = match read.content {
            Some(c) => c,
            None => {
                let code = read.code.map(|c| c.as_str()).unwrap_or("UNREADABLE");
                let reason = read.skip_reason.unwrap_or_default();
                result_set
                    .push(ResultItem::error(WireError::new(code, reason)).with_path(rel_path.clone()));
                continue;
            }
        };

        for issue in lint_content(&content, rel_path) {
            result_set.push(issue.to_result_item());
        }
    }

    result_set.sort();

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN_PAGE: &str = r#"'use client'

import { useState } from 'react'
import { Users } from 'lucide-react'

export default function Page() {
  const [activeTab, setActiveTab] = useState('list')

  return (
    <div>
      <main>
        <button className="btn">Ajouter Client</button>
      </main>
    </div>
  )
}
"#;

    #[test]
    fn test_lint_no_buttons_no_issues() {
        let content = "'use client'\nexport default function Page() { return null }\n";
        assert!(lint_content(content, "app/a/page.tsx").is_empty());
    }

    #[test]
    fn test_lint_dead_button_reported() {
        let issues = lint_content(CLEAN_PAGE, "app/a/page.tsx");
        let codes: Vec<_> = issues.iter().map(|i| i.code.as_str()).collect();
        assert!(codes.contains(&"DEAD_BUTTON"));
        assert!(codes.contains(&"MISSING_LAYOUT_CLOSE"));
        // activeTab and lucide import are present
        assert!(!codes.contains(&"MISSING_TAB_STATE"));
        assert!(!codes.contains(&"MISSING_ICON_IMPORT"));
    }

    #[test]
    fn test_lint_not_client_page() {
        let content = CLEAN_PAGE.replace("'use client'\n\n", "");
        let issues = lint_content(&content, "app/a/page.tsx");
        let codes: Vec<_> = issues.iter().map(|i| i.code.as_str()).collect();
        assert!(codes.contains(&"NOT_CLIENT_PAGE"));
        // Anchor checks are pointless for a page fix will skip
        assert!(!codes.contains(&"MISSING_LAYOUT_CLOSE"));
    }

    #[test]
    fn test_lint_missing_tab_state() {
        let content = CLEAN_PAGE.replace(
            "  const [activeTab, setActiveTab] = useState('list')\n",
            "",
        );
        let issues = lint_content(&content, "app/a/page.tsx");
        assert!(issues.iter().any(|i| {
            i.code == "MISSING_TAB_STATE" && i.severity == LintSeverity::Error
        }));
    }

    #[test]
    fn test_lint_missing_icon_import() {
        let content = CLEAN_PAGE.replace("import { Users } from 'lucide-react'\n", "");
        let issues = lint_content(&content, "app/a/page.tsx");
        assert!(issues.iter().any(|i| i.code == "MISSING_ICON_IMPORT"));
    }

    #[test]
    fn test_lint_unnamed_button() {
        let content = CLEAN_PAGE.replace("Ajouter Client", "Ajouter !");
        let issues = lint_content(&content, "app/a/page.tsx");
        let codes: Vec<_> = issues.iter().map(|i| i.code.as_str()).collect();
        assert!(codes.contains(&"UNNAMED_BUTTON"));
        // No named buttons: anchor checks do not apply
        assert!(!codes.contains(&"MISSING_LAYOUT_CLOSE"));
    }

    #[test]
    fn test_lint_issue_to_result_item() {
        let issue = LintIssue::error("MISSING_TAB_STATE", "no anchor", "app/a/page.tsx", Some(7));
        let item = issue.to_result_item();
        assert_eq!(item.path.as_deref(), Some("app/a/page.tsx"));
        assert_eq!(item.range, Some(RangeLine::new(7, 7)));
        assert_eq!(item.errors[0].code, "MISSING_TAB_STATE");
    }
}
