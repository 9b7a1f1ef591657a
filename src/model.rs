//! Data model for scanned source files — format-agnostic.

/// Function-like or class-like definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Routine,
    Aggregate,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Routine => "routine",
            EntityKind::Aggregate => "aggregate",
        }
    }
}

/// One discovered definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Keyword that introduced the definition (`def`, `async def`, `class`).
    pub keyword: String,
    /// Normalized definition, e.g. `foo(a, b="x:y")` or `Foo(Base)`.
    pub signature: String,
    /// Raw text between the triple-quote delimiters, if any.
    pub documentation: Option<String>,
    pub kind: EntityKind,
    /// Leading columns of the definition line.
    pub indent: usize,
    /// Lowest leading column seen on any non-definition line since the
    /// previous entity (0 for the first entity).
    pub min_indent_since_previous: usize,
}

impl Entity {
    /// Name part of the signature (everything before the first `(`).
    pub fn name(&self) -> &str {
        match self.signature.find('(') {
            Some(pos) => &self.signature[..pos],
            None => &self.signature,
        }
    }

    /// Parenthesized remainder of the signature, without the opening `(`.
    pub fn params(&self) -> Option<&str> {
        self.signature
            .find('(')
            .map(|pos| &self.signature[pos + 1..])
    }
}

/// A titled block inside a documentation comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocSection {
    pub title: String,
    /// Raw body lines joined with `\n`, not yet rendered.
    pub body: String,
}

/// Everything extracted from a single source file.
#[derive(Debug, Default)]
pub struct SourcePage {
    /// Project-relative path, always `./`-prefixed with `/` separators.
    pub path: String,
    /// Module-level docstring.
    pub module_doc: Option<String>,
    pub entities: Vec<Entity>,
}

/// Project-wide metadata shared read-only by every page.
#[derive(Debug, Default)]
pub struct Project {
    pub name: String,
    /// Repository link shown in the navigation bar.
    pub github: Option<String>,
    /// All project files (`./`-prefixed), sorted.
    pub files: Vec<String>,
}
