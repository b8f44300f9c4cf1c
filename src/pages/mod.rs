//! Page discovery
//!
//! Walks the app directory with the ignore crate and keeps files whose name
//! matches the page pattern (page.tsx by default).

use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::core::model::{Meta, ResultItem, ResultSet};
use crate::core::paths::make_relative;
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::{get_file_size, get_mtime_ms};

/// Find page files under `<root>/<app_dir>`
pub fn find_pages(
    root: &Path,
    app_dir: &Path,
    page_name: &str,
    hidden: bool,
    ignore: bool,
) -> Result<ResultSet> {
    let scan_path = root.join(app_dir);

    let mut builder = WalkBuilder::new(&scan_path);
    builder
        .hidden(!hidden)
        .git_ignore(ignore)
        .git_global(ignore)
        .git_exclude(ignore);

    let mut result_set = ResultSet::new();

    if !scan_path.is_dir() {
        return Ok(result_set);
    }

    for entry in builder.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let matches_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n == page_name)
            .unwrap_or(false);
        if !matches_name {
            continue;
        }

        let relative = match make_relative(path, root) {
            Some(r) => r,
            None => continue,
        };

        let mut meta = Meta::default();
        if let Ok(size) = get_file_size(path) {
            meta.size = Some(size);
        }
        if let Ok(mtime) = get_mtime_ms(path) {
            meta.mtime_ms = Some(mtime);
        }

        result_set.push(ResultItem::page(relative).with_meta(meta));
    }

    result_set.sort();
    Ok(result_set)
}

/// Find pages and return (absolute, root-relative) path pairs in stable order
pub fn page_paths(
    root: &Path,
    app_dir: &Path,
    page_name: &str,
) -> Result<Vec<(PathBuf, String)>> {
    let pages = find_pages(root, app_dir, page_name, false, true)?;

    Ok(pages
        .into_iter()
        .filter_map(|item| item.path)
        .map(|rel| (root.join(&rel), rel))
        .collect())
}

/// Run the scan command
pub fn run_scan(
    root: &Path,
    app_dir: &Path,
    page_name: &str,
    hidden: bool,
    ignore: bool,
    config: RenderConfig,
) -> Result<()> {
    let result_set = find_pages(root, app_dir, page_name, hidden, ignore)?;

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
