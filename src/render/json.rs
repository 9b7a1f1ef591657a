//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the scanned entities directly, with raw signatures and
//! unrendered docstrings. Useful for custom rendering pipelines.

use crate::model::*;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, _project: &Project, page: &SourcePage) -> String {
        self.render_fragment(page)
    }

    fn render_fragment(&self, page: &SourcePage) -> String {
        let mut out = String::new();
        out.push_str("{\n");
        out.push_str(&format!("  \"path\": \"{}\",\n", json_escape(&page.path)));
        write_opt_field(&mut out, "  ", "module_doc", &page.module_doc, true);

        out.push_str("  \"entities\": [");
        if page.entities.is_empty() {
            out.push_str("]\n");
        } else {
            out.push('\n');
            for (i, entity) in page.entities.iter().enumerate() {
                out.push_str(&render_entity_json(entity));
                if i < page.entities.len() - 1 {
                    out.push_str(",\n");
                } else {
                    out.push('\n');
                }
            }
            out.push_str("  ]\n");
        }
        out.push_str("}\n");
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

fn render_entity_json(entity: &Entity) -> String {
    let mut out = String::new();
    out.push_str("    {\n");
    out.push_str(&format!(
        "      \"keyword\": \"{}\",\n",
        json_escape(&entity.keyword)
    ));
    out.push_str(&format!("      \"kind\": \"{}\",\n", entity.kind.as_str()));
    out.push_str(&format!("      \"name\": \"{}\",\n", json_escape(entity.name())));
    out.push_str(&format!(
        "      \"signature\": \"{}\",\n",
        json_escape(&entity.signature)
    ));
    out.push_str(&format!("      \"indent\": {},\n", entity.indent));
    out.push_str(&format!(
        "      \"min_indent_since_previous\": {},\n",
        entity.min_indent_since_previous
    ));
    write_opt_field(&mut out, "      ", "documentation", &entity.documentation, false);
    out.push_str("    }");
    out
}

fn write_opt_field(
    out: &mut String,
    indent: &str,
    name: &str,
    value: &Option<String>,
    trailing_comma: bool,
) {
    let comma = if trailing_comma { "," } else { "" };
    match value {
        Some(v) => out.push_str(&format!("{indent}\"{name}\": \"{}\"{comma}\n", json_escape(v))),
        None => out.push_str(&format!("{indent}\"{name}\": null{comma}\n")),
    }
}

fn json_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
