//! Home page rendering.
//!
//! Generates the self-contained `index.html` listing every published report,
//! newest first, with the stylesheet inlined.

use crate::core::{ReportIndex, ReportRecord, Site};
use anyhow::Context;
use std::fs;
use std::path::PathBuf;

const TEMPLATE: &str = include_str!("home.html");
const CSS: &str = include_str!("home.css");

const UNTITLED: &str = "Untitled";
const NO_NOTES: &str = "无附加备注";
const VIEW_REPORT: &str = "查看报告";
const EMPTY_STATE: &str = "暂无报告，等待下一份研究产出。";
const NO_DATE: &str = "-";

/// Render the full home page for `index`.
pub fn render_home(index: &ReportIndex) -> String {
    let cards = if index.is_empty() {
        format!("<p class=\"empty\">{}</p>", EMPTY_STATE)
    } else {
        index
            .records()
            .iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let latest = index
        .latest()
        .map(|r| r.date.as_str())
        .filter(|d| !d.is_empty())
        .map_or_else(|| NO_DATE.to_string(), escape);

    fill(
        TEMPLATE,
        &[
            ("__CSS__", CSS),
            ("__TOTAL__", index.len().to_string().as_str()),
            ("__LATEST__", latest.as_str()),
            ("__CARDS__", cards.as_str()),
        ],
    )
}

/// Render `index` and overwrite the site's home page with it.
pub fn write_home(site: &Site, index: &ReportIndex) -> anyhow::Result<PathBuf> {
    let path = site.home_path();
    let html = render_home(index);
    fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
    log::debug!("Rendered {} cards into {}", index.len(), path.display());
    Ok(path)
}

/// One `<article class="card">` for `record`.
///
/// An empty title shows as `Untitled`, whether the key was missing from the
/// index or stored as `""` or `null`. Empty notes show the no-notes placeholder.
/// Keys kept in `extra` are not rendered.
fn render_card(record: &ReportRecord) -> String {
    let title = if record.title.is_empty() {
        UNTITLED.to_string()
    } else {
        escape(&record.title)
    };
    let notes = if record.notes.is_empty() {
        NO_NOTES.to_string()
    } else {
        escape(&record.notes)
    };

    format!(
        "<article class=\"card\"><p class=\"meta\">{}</p><h3>{}</h3><p class=\"notes\">{}</p><a class=\"btn\" href=\"{}\" target=\"_blank\">{}</a></article>",
        escape(&record.subtitle()),
        title,
        notes,
        escape(&record.path),
        VIEW_REPORT,
    )
}

/// Substitute each placeholder once, in template order. Values are never
/// re-scanned, so record text that happens to look like a placeholder stays
/// literal.
fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    let extra: usize = slots.iter().map(|(_, value)| value.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;
    for (placeholder, value) in slots {
        if let Some((before, after)) = rest.split_once(placeholder) {
            out.push_str(before);
            out.push_str(value);
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
