//! HTML renderer — one browsable page per source file.

use anyhow::Result;

use crate::config::Config;
use crate::docstring::DocRenderer;
use crate::model::{Project, SourcePage};
use crate::render::page;
use crate::render::Renderer;

pub struct HtmlRenderer {
    docs: DocRenderer,
    indent_unit: usize,
}

impl HtmlRenderer {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            docs: DocRenderer::new(config)?,
            indent_unit: config.indent_unit,
        })
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, project: &Project, source: &SourcePage) -> String {
        page::source_page(project, source, &self.docs, self.indent_unit)
    }

    fn render_fragment(&self, source: &SourcePage) -> String {
        page::content_block(source, &self.docs, self.indent_unit)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}
