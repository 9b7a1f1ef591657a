//! Re-indent normalization and bottom-up section recovery.

use crate::indent::{indent_level, strip_indent, INDENT_UNIT};
use crate::model::DocSection;

/// Title given to text that precedes the first underlined section.
pub const DESCRIPTION: &str = "Description";

/// Split into lines, left-align the block at indent level 0 and drop
/// trailing blank lines.
pub fn normalize(doc: &str) -> Vec<String> {
    let lines: Vec<&str> = doc.split('\n').collect();
    let min_level = lines.iter().filter_map(|l| indent_level(l)).min().unwrap_or(0);

    let mut out: Vec<String> = lines
        .iter()
        .map(|l| strip_indent(l, min_level * INDENT_UNIT).to_string())
        .collect();
    while out.last().is_some_and(|l| l.trim().is_empty()) {
        out.pop();
    }
    out
}

/// Recover titled sections, scanning from the last line upward.
///
/// A line made only of `-` underlines the line above it when both share
/// the same indent level and the dashes are no longer than the trimmed
/// title. Non-blank text above the first title becomes a
/// [`DESCRIPTION`] section. Sections are returned top to bottom.
pub fn split_sections(lines: &[String]) -> Vec<DocSection> {
    let mut sections = Vec::new();
    // Exclusive end of the body currently being collected.
    let mut end = lines.len();

    for i in (1..lines.len()).rev() {
        if i >= end || !is_underline(&lines[i], &lines[i - 1]) {
            continue;
        }
        sections.push(DocSection {
            title: lines[i - 1].trim().to_string(),
            body: lines[i + 1..end].join("\n"),
        });
        end = i - 1;
    }

    if lines[..end].iter().any(|l| !l.trim().is_empty()) {
        sections.push(DocSection {
            title: DESCRIPTION.to_string(),
            body: lines[..end].join("\n"),
        });
    }

    sections.reverse();
    sections
}

fn is_underline(line: &str, title: &str) -> bool {
    let dashes = line.trim();
    if dashes.is_empty() || !dashes.chars().all(|c| c == '-') {
        return false;
    }
    if indent_level(line) != indent_level(title) {
        return false;
    }
    dashes.chars().count() <= title.trim().chars().count()
}
