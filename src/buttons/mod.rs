//! Dead-button domain: parsing and linting

pub mod lint;
pub mod parse;

use anyhow::Result;
use serde_json::json;
use std::path::Path;

use crate::core::file_reader::read_page;
use crate::core::model::{ResultItem, ResultSet, WireError};
use crate::core::render::{RenderConfig, Renderer};
use crate::pages::page_paths;
use crate::rewrite::template;

/// Run the buttons command: list every dead button across pages
pub fn run_buttons(
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

        for button in parse::find_dead_buttons(&content) {
            let state = button.name.as_deref().map(template::state_ident);
            let item = ResultItem::button(rel_path.clone(), button.range, button.text)
                .with_data(json!({
                    "name": button.name,
                    "state": state,
                }));
            result_set.push(item);
        }
    }

    result_set.sort();

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
