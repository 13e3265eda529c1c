//! Output formatting for CLI display
//!
//! Turns folder trees, counts and records into terminal lines. Quiet mode
//! strips decoration so the output can be piped.

use crate::dashboard::folder_label;
use crate::filter::FolderSelector;
use crate::hierarchy::{FolderCounts, FolderNode, flatten_forest};
use crate::model::{Folder, Record};
use colored::Colorize;

/// Sidebar lines: the two pseudo-folders, then the tree with counts
///
/// The selected entry is marked with `*`.
#[must_use]
pub fn folder_tree(
    forest: &[FolderNode],
    counts: &FolderCounts,
    selection: FolderSelector,
) -> Vec<String> {
    let mark = |selected: bool| if selected { "*" } else { " " };

    let mut lines = vec![
        format!(
            "{} All Records ({})",
            mark(selection == FolderSelector::All),
            counts.all
        ),
        format!(
            "{} Uncategorized ({})",
            mark(selection == FolderSelector::Uncategorized),
            counts.uncategorized
        ),
    ];

    for node in forest {
        push_node(node, 0, counts, selection, &mut lines);
    }

    lines
}

fn push_node(
    node: &FolderNode,
    depth: usize,
    counts: &FolderCounts,
    selection: FolderSelector,
    lines: &mut Vec<String>,
) {
    let selected = selection == FolderSelector::Folder(node.id());
    let expand = if node.has_children() { "▸" } else { " " };
    let line = format!(
        "{} {}{} {} [{}] ({})",
        if selected { "*" } else { " " },
        "  ".repeat(depth),
        expand,
        node.folder.name,
        node.id(),
        counts.get(node.id())
    );
    lines.push(if selected { line.bold().to_string() } else { line });

    for child in &node.children {
        push_node(child, depth + 1, counts, selection, lines);
    }
}

/// Move-to-folder choices: uncategorized first, then folders indented by depth
#[must_use]
pub fn folder_options(forest: &[FolderNode]) -> Vec<String> {
    std::iter::once("Uncategorized".to_string())
        .chain(
            flatten_forest(forest)
                .into_iter()
                .map(|(depth, folder)| format!("{}{}", " ".repeat(depth * 4), folder.name)),
        )
        .collect()
}

/// A record card, or just the title in quiet mode
#[must_use]
pub fn record_card(record: &Record, folders: &[Folder], quiet: bool) -> String {
    if quiet {
        return record.title.clone();
    }

    let subtitle = record
        .subtitle
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("No subtitle");
    let updated = if record.updated_at.is_empty() {
        "unknown"
    } else {
        record.updated_at.as_str()
    };

    format!(
        "  {}\n    {} | {} scans\n    Last modified: {}\n    Folder: {}",
        record.title.bold(),
        subtitle,
        record.scan_count,
        updated,
        folder_label(record, folders).cyan()
    )
}

/// Count summary line for one folder, tab-separated in quiet mode
#[must_use]
pub fn folder_count(name: &str, count: usize, quiet: bool) -> String {
    if quiet {
        format!("{name}\t{count}")
    } else {
        format!("  {name}: {count} record(s)")
    }
}

/// Success line for completed actions
#[must_use]
pub fn success(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}
