//! Per-section body rendering.
//!
//! Each line moves a small state machine: indentation blocks open and close
//! with the indent level, `>>>` lines start a literal code block, `- ` and
//! `* ` lines build a list, and `label: value` lines get a bold label.

use super::links::LinkDetector;
use crate::escape::html_escape;
use crate::indent::{indent_level, strip_indent, INDENT_UNIT};

const INDENT_OPEN: &str = "<div class=\"indent\">";
const CODE_OPEN: &str = "<div class=\"code\">";
const DIV_CLOSE: &str = "</div>";
const LINE_BREAK: &str = "<br>";

/// Render one section body to markup.
pub fn render_body(body: &str, links: &LinkDetector) -> String {
    let mut state = RenderState::default();
    for (i, line) in body.split('\n').enumerate() {
        match indent_level(line) {
            Some(level) => state.content_line(line, level, links),
            None => state.blank_line(i == 0),
        }
    }
    state.finish()
}

/// Transient state for one section body.
///
/// `open_indent_divs` always equals `last_indent`: indentation blocks are
/// only opened or closed together with a change of `last_indent`, which
/// stays frozen while a code block is open.
#[derive(Default)]
struct RenderState {
    last_indent: usize,
    in_code_block: bool,
    in_list: bool,
    code_base_indent: usize,
    list_base_indent: usize,
    open_indent_divs: usize,
    previous_line_was_blank: bool,
    html: String,
}

impl RenderState {
    fn blank_line(&mut self, first: bool) {
        self.close_code_block();
        if self.in_list {
            self.close_list();
        }
        if !first {
            self.html.push_str(LINE_BREAK);
        }
        self.previous_line_was_blank = true;
    }

    fn content_line(&mut self, line: &str, level: usize, links: &LinkDetector) {
        self.track_indent(level);

        if self.in_code_block {
            self.html.push_str(LINE_BREAK);
        }

        let trimmed = line.trim();
        if !self.in_code_block && trimmed.starts_with(">>>") {
            self.in_code_block = true;
            self.code_base_indent = level;
            if !self.previous_line_was_blank {
                self.html.push_str(LINE_BREAK);
            }
            self.html.push_str(CODE_OPEN);
        }

        let content = if self.in_code_block {
            let text = strip_indent(line, self.code_base_indent * INDENT_UNIT);
            html_escape(text).replace(' ', "&nbsp;")
        } else {
            self.prose(trimmed, level, links)
        };

        self.html.push(' ');
        self.html.push_str(&content);
        self.previous_line_was_blank = false;
    }

    /// Open or close indentation blocks for a non-blank line at `level`.
    fn track_indent(&mut self, level: usize) {
        if self.in_code_block {
            if level >= self.code_base_indent {
                return;
            }
            self.close_code_block();
        }

        if level > self.last_indent {
            self.open_divs(level - self.last_indent);
        } else {
            if self.in_list && level < self.list_base_indent {
                self.close_list();
            }
            self.close_divs(self.last_indent - level);
        }
        self.last_indent = level;
    }

    /// Escape, link, list and emphasis handling for a non-code line.
    fn prose(&mut self, trimmed: &str, level: usize, links: &LinkDetector) -> String {
        let escaped = html_escape(trimmed);
        let (mut content, linked) = match links.linkify(&escaped) {
            Some(linked) => (linked, true),
            None => (escaped, false),
        };

        let item = content
            .strip_prefix("- ")
            .or_else(|| content.strip_prefix("* "))
            .map(str::to_string);
        if let Some(item) = item {
            if self.in_list {
                self.html.push_str("</li>");
            } else {
                self.html.push_str("<ul>");
                self.in_list = true;
                self.list_base_indent = level;
            }
            self.html.push_str("<li>");
            content = item;
        }

        if !linked {
            if let Some((label, rest)) = content.split_once(':') {
                content = format!("<b>{label}</b>:{rest}");
            }
        }
        content
    }

    fn open_divs(&mut self, n: usize) {
        for _ in 0..n {
            self.html.push_str(INDENT_OPEN);
        }
        self.open_indent_divs += n;
    }

    fn close_divs(&mut self, n: usize) {
        let n = n.min(self.open_indent_divs);
        for _ in 0..n {
            self.html.push_str(DIV_CLOSE);
        }
        self.open_indent_divs -= n;
    }

    fn close_code_block(&mut self) {
        if self.in_code_block {
            self.html.push_str(DIV_CLOSE);
            self.in_code_block = false;
        }
    }

    /// Close the list together with any indentation opened inside its items.
    fn close_list(&mut self) {
        let inner = self.last_indent.saturating_sub(self.list_base_indent);
        self.close_divs(inner);
        self.last_indent = self.list_base_indent;
        self.html.push_str("</li></ul>");
        self.in_list = false;
        self.list_base_indent = 0;
    }

    fn finish(mut self) -> String {
        self.close_code_block();
        if self.in_list {
            self.close_list();
        }
        self.close_divs(self.open_indent_divs);
        debug_assert_eq!(self.open_indent_divs, 0);
        self.html
    }
}
