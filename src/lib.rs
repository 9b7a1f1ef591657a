//! Browsable documentation from Python docstrings.
//!
//! The [`scanner`] finds definitions and their docstrings, the
//! [`docstring`] parser turns numpydoc-style text into markup and
//! [`render`] nests everything into pages.

pub mod config;
pub mod discover;
pub mod docstring;
pub mod escape;
pub mod indent;
pub mod model;
pub mod render;
pub mod scanner;

pub use config::Config;
pub use docstring::{DocContext, DocRenderer};
pub use model::{DocSection, Entity, EntityKind, Project, SourcePage};
pub use render::tree::render_tree;
pub use scanner::Scanner;
