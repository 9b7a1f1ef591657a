//! Hyperlink auto-detection in escaped docstring text.

use anyhow::{Context, Result};
use regex::Regex;

/// URL body character, with `&amp;` as the only entity allowed inside.
const BODY: &str = r"(?:[^\s()<>{}\[\]&]|&amp;)";
/// Last URL character: no trailing punctuation.
const TAIL: &str = r"(?:[^\s()<>{}\[\]&.,;:!?`]|&amp;)";

/// Finds scheme-prefixed URLs and bare `name.tld` domains.
pub struct LinkDetector {
    re: Regex,
}

impl LinkDetector {
    pub fn new(tlds: &[String]) -> Result<Self> {
        let tlds = tlds
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(
            r"(?i)\b(?:(?:https?|ftp)://|www\.){BODY}*{TAIL}|\b[a-z0-9]+(?:[.\-][a-z0-9]+)*\.(?:{tlds})\b(?:/{BODY}*{TAIL})?/?"
        );
        Ok(Self {
            re: Regex::new(&pattern).context("failed to build link pattern")?,
        })
    }

    /// Wrap every URL in `text` in an anchor element. Returns `None` when
    /// nothing was linked. Domains touching an `@` are e-mail addresses
    /// and stay plain.
    pub fn linkify(&self, text: &str) -> Option<String> {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        let mut linked = false;

        for m in self.re.find_iter(text) {
            if text[..m.start()].ends_with('@') || text[m.end()..].starts_with('@') {
                continue;
            }
            out.push_str(&text[last..m.start()]);
            out.push_str(&format!("<a href=\"{url}\">{url}</a>", url = m.as_str()));
            last = m.end();
            linked = true;
        }

        if !linked {
            return None;
        }
        out.push_str(&text[last..]);
        Some(out)
    }
}
