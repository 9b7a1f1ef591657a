//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod json;
pub mod page;
pub mod theme;
pub mod tree;

use crate::config::Config;
use crate::model::{Project, SourcePage};
use anyhow::{anyhow, Result};

/// Trait for rendering a scanned source file into a specific output format.
pub trait Renderer: Send + Sync {
    /// Standalone document for one file of `project`.
    fn render(&self, project: &Project, page: &SourcePage) -> String;
    /// The file's documentation alone, without page chrome.
    fn render_fragment(&self, page: &SourcePage) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, config: &Config) -> Result<Box<dyn Renderer>> {
    match format {
        "html" => Ok(Box::new(html::HtmlRenderer::new(config)?)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use html or json", format)),
    }
}
