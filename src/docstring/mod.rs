//! Docstring structural parser — numpydoc-style comment to markup.
//!
//! A docstring is left-aligned, split into sections at dash-underlined
//! titles, and each section body is rendered line by line.

mod body;
mod links;
mod sections;

pub use links::LinkDetector;
pub use sections::{normalize, split_sections, DESCRIPTION};

use anyhow::Result;

use crate::config::Config;
use crate::escape::html_escape;
use crate::model::DocSection;

/// Fragment returned for a missing or blank docstring.
pub const NO_DOCUMENTATION: &str = "No documentation found for this section";

/// Where the rendered fragment will be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocContext {
    /// Inside an entity's collapsible block.
    Entity,
    /// Under the page's "File Description" header; the `Description`
    /// section header is left out.
    File,
}

pub struct DocRenderer {
    links: LinkDetector,
}

impl DocRenderer {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            links: LinkDetector::new(&config.link_tlds)?,
        })
    }

    /// Sections of a docstring, top to bottom, bodies still raw.
    pub fn sections(&self, doc: &str) -> Vec<DocSection> {
        split_sections(&normalize(doc))
    }

    /// Render a docstring (or its absence) to a markup fragment.
    pub fn render(&self, doc: Option<&str>, context: DocContext) -> String {
        let Some(doc) = doc.filter(|d| !d.trim().is_empty()) else {
            return NO_DOCUMENTATION.to_string();
        };

        let mut html = String::new();
        for section in self.sections(doc) {
            if !(context == DocContext::File && section.title == DESCRIPTION) {
                html.push_str(&format!("<h3>{}</h3>", html_escape(&section.title)));
            }
            html.push_str(&body::render_body(&section.body, &self.links));
        }
        html
    }
}
