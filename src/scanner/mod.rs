//! Source entity scanner — character-level walk over Python source.
//!
//! Finds `def`/`class` definitions, their normalized signatures, attached
//! docstrings and indentation, skipping comments and string literals.
//! Malformed input never fails: the scan stops at end of input and keeps
//! every entity recognized before the malformed region.

mod cursor;

use cursor::Cursor;

use crate::config::Config;
use crate::model::{Entity, EntityKind};
use tracing::debug;

/// Scanner bound to one set of recognition tables.
pub struct Scanner<'a> {
    config: &'a Config,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Scan `source` and return its entities in source order.
    pub fn scan(&self, source: &str) -> Vec<Entity> {
        let mut pass = Pass {
            cursor: Cursor::new(source),
            config: self.config,
            entities: Vec::new(),
            min_indent: 0,
        };
        while !pass.cursor.is_eof() {
            pass.logical_line();
        }
        debug!(entities = pass.entities.len(), "scanned source");
        pass.entities
    }

    /// Module-level docstring: the first statement, when it is a
    /// triple-quoted string. Blank and comment lines before it are skipped.
    pub fn module_docstring(&self, source: &str) -> Option<String> {
        let mut cursor = Cursor::new(source);
        loop {
            cursor.skip_whitespace();
            match cursor.peek() {
                Some(c) if c == self.config.comment_marker => cursor.skip_line(),
                _ => break,
            }
        }
        match read_docstring(&mut cursor, self.config) {
            Docstring::Found(text) => Some(text),
            Docstring::Absent | Docstring::Unterminated => None,
        }
    }
}

// -- Scan pass ----------------------------------------------------------------

struct Pass<'a> {
    cursor: Cursor,
    config: &'a Config,
    entities: Vec<Entity>,
    /// Lowest indent seen on a non-definition line since the last entity.
    min_indent: usize,
}

impl Pass<'_> {
    /// Scan one logical line. The cursor must be at a physical line start.
    fn logical_line(&mut self) {
        debug_assert!(self.cursor.at_line_start());
        let indent = self.cursor.skip_blanks();
        match self.cursor.peek() {
            None => return,
            Some('\n') => {
                self.cursor.next();
                return;
            }
            Some(c) if c == self.config.comment_marker => {
                self.cursor.skip_line();
                return;
            }
            _ => {}
        }

        match self.match_definition() {
            Some((kind, keyword)) => match self.definition(kind, keyword, indent) {
                Some(entity) => {
                    self.entities.push(entity);
                    self.min_indent = indent;
                }
                None => return,
            },
            None => self.min_indent = self.min_indent.min(indent),
        }

        self.rest_of_line();
    }

    /// Keyword at the cursor followed by a space or a line continuation.
    fn match_definition(&self) -> Option<(EntityKind, String)> {
        let routines = self
            .config
            .routine_keywords
            .iter()
            .map(|k| (EntityKind::Routine, k));
        let aggregates = self
            .config
            .aggregate_keywords
            .iter()
            .map(|k| (EntityKind::Aggregate, k));

        routines.chain(aggregates).find_map(|(kind, keyword)| {
            if !self.cursor.starts_with(keyword) {
                return None;
            }
            match self.cursor.peek_at(keyword.chars().count()) {
                Some(' ' | '\t' | '\\') => Some((kind, keyword.clone())),
                _ => None,
            }
        })
    }

    /// Consume a definition through its terminating colon and docstring.
    /// `None` when input ends before the definition is complete.
    fn definition(&mut self, kind: EntityKind, keyword: String, indent: usize) -> Option<Entity> {
        self.cursor.advance(keyword.chars().count());

        let mut sig = SignatureBuilder::default();
        match kind {
            EntityKind::Routine => {
                if self.routine_name(&mut sig)? {
                    self.bracketed(&mut sig)?;
                    // Return annotation is not part of the signature.
                    self.until_colon(&mut SignatureBuilder::default())?;
                }
            }
            EntityKind::Aggregate => self.until_colon(&mut sig)?,
        }

        let documentation = match read_docstring(&mut self.cursor, self.config) {
            Docstring::Found(text) => Some(text),
            Docstring::Absent => None,
            Docstring::Unterminated => return None,
        };

        Some(Entity {
            keyword,
            signature: sig.finish(),
            documentation,
            kind,
            indent,
            min_indent_since_previous: self.min_indent,
        })
    }

    /// Collect the routine name up to `(`. Returns `false` if a colon ends
    /// the definition first (no parameter list).
    fn routine_name(&mut self, sig: &mut SignatureBuilder) -> Option<bool> {
        loop {
            match self.cursor.peek()? {
                '(' => return Some(true),
                ':' => {
                    self.cursor.next();
                    return Some(false);
                }
                '\\' if self.cursor.peek_at(1) == Some('\n') => self.cursor.advance(2),
                c => {
                    sig.push(c);
                    self.cursor.next();
                }
            }
        }
    }

    /// Collect a bracketed group starting at the opening bracket, through
    /// its matching close. Brackets inside strings and comments don't count.
    fn bracketed(&mut self, sig: &mut SignatureBuilder) -> Option<()> {
        let mut depth = 0usize;
        loop {
            let c = self.cursor.peek()?;
            if self.config.is_quote(c) {
                let literal = read_string(&mut self.cursor);
                sig.push_literal(&literal);
                continue;
            }
            if c == self.config.comment_marker {
                self.skip_comment();
                continue;
            }
            match c {
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => depth = depth.saturating_sub(1),
                '\\' if self.cursor.peek_at(1) == Some('\n') => {
                    self.cursor.advance(2);
                    continue;
                }
                _ => {}
            }
            sig.push(c);
            self.cursor.next();
            if depth == 0 {
                return Some(());
            }
        }
    }

    /// Collect everything up to the first colon outside brackets and
    /// strings, consuming the colon.
    fn until_colon(&mut self, sig: &mut SignatureBuilder) -> Option<()> {
        loop {
            let c = self.cursor.peek()?;
            match c {
                ':' => {
                    self.cursor.next();
                    return Some(());
                }
                '(' | '[' | '{' => self.bracketed(sig)?,
                '\\' if self.cursor.peek_at(1) == Some('\n') => self.cursor.advance(2),
                c if self.config.is_quote(c) => {
                    let literal = read_string(&mut self.cursor);
                    sig.push_literal(&literal);
                }
                c if c == self.config.comment_marker => self.skip_comment(),
                c => {
                    sig.push(c);
                    self.cursor.next();
                }
            }
        }
    }

    /// Consume the remainder of a logical line. Open brackets and
    /// backslash continuations carry it over onto following physical lines.
    fn rest_of_line(&mut self) {
        let mut depth = 0usize;
        while let Some(c) = self.cursor.peek() {
            match c {
                '\n' => {
                    self.cursor.next();
                    if depth == 0 {
                        return;
                    }
                }
                '\\' => self.cursor.advance(2),
                '(' | '[' | '{' => {
                    depth += 1;
                    self.cursor.next();
                }
                ')' | ']' | '}' => {
                    depth = depth.saturating_sub(1);
                    self.cursor.next();
                }
                c if self.config.is_quote(c) => {
                    read_string(&mut self.cursor);
                }
                c if c == self.config.comment_marker => self.skip_comment(),
                _ => {
                    self.cursor.next();
                }
            }
        }
    }

    /// Skip to the end of the line, leaving the line break unconsumed.
    fn skip_comment(&mut self) {
        while self.cursor.peek().is_some_and(|c| c != '\n') {
            self.cursor.next();
        }
    }
}

// -- Literals -----------------------------------------------------------------

enum Docstring {
    Found(String),
    Absent,
    Unterminated,
}

/// Read a string literal starting at its opening quote, returning it with
/// its delimiters. Backslash escapes are honored; an unterminated literal
/// runs to end of input.
fn read_string(cursor: &mut Cursor) -> String {
    let mut text = String::new();
    let Some(quote) = cursor.next() else {
        return text;
    };
    text.push(quote);

    let triple = cursor.peek() == Some(quote) && cursor.peek_at(1) == Some(quote);
    if triple {
        cursor.advance(2);
        text.push(quote);
        text.push(quote);
    }

    while let Some(c) = cursor.next() {
        text.push(c);
        if c == '\\' {
            if let Some(escaped) = cursor.next() {
                text.push(escaped);
            }
            continue;
        }
        if c != quote {
            continue;
        }
        if !triple {
            break;
        }
        if cursor.peek() == Some(quote) && cursor.peek_at(1) == Some(quote) {
            cursor.advance(2);
            text.push(quote);
            text.push(quote);
            break;
        }
    }
    text
}

/// Look past whitespace and line breaks for a triple-quoted docstring.
/// On `Absent` the cursor is left where it started.
fn read_docstring(cursor: &mut Cursor, config: &Config) -> Docstring {
    let start = cursor.mark();
    cursor.skip_whitespace();

    let prefix = usize::from(matches!(cursor.peek(), Some('r' | 'R' | 'u' | 'U')));
    let quote = match cursor.peek_at(prefix) {
        Some(q) if config.is_quote(q) => q,
        _ => {
            cursor.reset(start);
            return Docstring::Absent;
        }
    };
    if cursor.peek_at(prefix + 1) != Some(quote) || cursor.peek_at(prefix + 2) != Some(quote) {
        cursor.reset(start);
        return Docstring::Absent;
    }
    cursor.advance(prefix + 3);

    let mut body = String::new();
    while let Some(c) = cursor.next() {
        if c == '\\' {
            body.push(c);
            if let Some(escaped) = cursor.next() {
                body.push(escaped);
            }
            continue;
        }
        if c == quote && cursor.peek() == Some(quote) && cursor.peek_at(1) == Some(quote) {
            cursor.advance(2);
            if body.ends_with(char::is_whitespace) {
                body.pop();
            }
            return Docstring::Found(body);
        }
        body.push(c);
    }
    Docstring::Unterminated
}

/// Accumulates signature text: whitespace outside string literals is
/// dropped and every comma is followed by exactly one space.
#[derive(Default)]
struct SignatureBuilder {
    out: String,
}

impl SignatureBuilder {
    fn push(&mut self, c: char) {
        if c.is_whitespace() {
            return;
        }
        self.out.push(c);
        if c == ',' {
            self.out.push(' ');
        }
    }

    fn push_literal(&mut self, literal: &str) {
        self.out.push_str(literal);
    }

    fn finish(self) -> String {
        self.out.trim_end().to_string()
    }
}
