//! Recognition tables injected into the scanner and the renderers.

use crate::indent::INDENT_UNIT;

/// Keywords that introduce a function-like definition.
pub const ROUTINE_KEYWORDS: &[&str] = &["def", "async def"];

/// Keywords that introduce a class-like definition.
pub const AGGREGATE_KEYWORDS: &[&str] = &["class"];

/// Top-level domains accepted for bare `name.tld` hyperlinks.
///
/// `py` is not in the table: `setup.py` is a file name, not a link.
pub const LINK_TLDS: &[&str] = &[
    "com", "net", "org", "edu", "gov", "mil", "aero", "asia", "biz", "cat", "coop", "info", "int",
    "jobs", "mobi", "museum", "name", "post", "pro", "tel", "travel", "xxx", "ac", "ad", "ae",
    "af", "ag", "ai", "al", "am", "an", "ao", "aq", "ar", "as", "at", "au", "aw", "ax", "az",
    "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br", "bs", "bt",
    "bv", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl", "cm", "cn",
    "co", "cr", "cs", "cu", "cv", "cx", "cy", "cz", "dd", "de", "dj", "dk", "dm", "do", "dz",
    "ec", "ee", "eg", "eh", "er", "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga",
    "gb", "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt",
    "gu", "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io",
    "iq", "ir", "is", "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki", "km", "kn", "kp",
    "kr", "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv", "ly",
    "ma", "mc", "md", "me", "mg", "mh", "mk", "ml", "mm", "mn", "mo", "mp", "mq", "mr", "ms",
    "mt", "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no",
    "np", "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm", "pn", "pr",
    "ps", "pt", "pw", "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb", "sc", "sd", "se", "sg",
    "sh", "si", "sj", "sk", "sl", "sm", "sn", "so", "sr", "ss", "st", "su", "sv", "sx", "sy",
    "sz", "tc", "td", "tf", "tg", "th", "tj", "tk", "tl", "tm", "tn", "to", "tp", "tr", "tt",
    "tv", "tw", "tz", "ua", "ug", "uk", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn",
    "vu", "wf", "ws", "ye", "yt", "yu", "za", "zm", "zw",
];

/// Recognition tables for one scan/render pass.
#[derive(Debug, Clone)]
pub struct Config {
    /// Keywords that start a routine definition (`def`).
    pub routine_keywords: Vec<String>,
    /// Keywords that start an aggregate definition (`class`).
    pub aggregate_keywords: Vec<String>,
    /// Comment-to-end-of-line marker.
    pub comment_marker: char,
    /// Characters that delimit string literals and docstrings.
    pub quote_chars: Vec<char>,
    /// Top-level domains for bare-domain hyperlink detection.
    pub link_tlds: Vec<String>,
    /// Columns per nesting level when comparing entity indents.
    pub indent_unit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            routine_keywords: ROUTINE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            aggregate_keywords: AGGREGATE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            comment_marker: '#',
            quote_chars: vec!['"', '\''],
            link_tlds: LINK_TLDS.iter().map(|s| s.to_string()).collect(),
            indent_unit: INDENT_UNIT,
        }
    }
}

impl Config {
    /// Override the indent unit; zero falls back to [`INDENT_UNIT`].
    pub fn with_indent_unit(mut self, unit: usize) -> Self {
        self.indent_unit = if unit == 0 { INDENT_UNIT } else { unit };
        self
    }

    pub(crate) fn is_quote(&self, c: char) -> bool {
        self.quote_chars.contains(&c)
    }
}
