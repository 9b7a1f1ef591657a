//! Nested collapsible entity blocks rebuilt from a flat indentation trace.

use crate::docstring::{DocContext, DocRenderer};
use crate::escape::html_escape;
use crate::model::{Entity, EntityKind};

const BLOCK_CLOSE: &str = "</details>";

/// Caption placed before an entity nested directly in `parent`.
pub fn caption(parent: EntityKind, child: EntityKind) -> &'static str {
    match (parent, child) {
        (_, EntityKind::Aggregate) => "Inner Classes",
        (EntityKind::Aggregate, EntityKind::Routine) => "Methods",
        (EntityKind::Routine, EntityKind::Routine) => "Nested Functions",
    }
}

/// Opening markup of one entity block: its header line followed by the
/// rendered documentation. The block is left open.
pub fn entity_header(entity: &Entity, docs: &DocRenderer) -> String {
    let mut out = format!(
        "<details><summary><span class=\"def\">{}</span> <span class=\"blue\">{}</span>",
        html_escape(&entity.keyword),
        html_escape(entity.name())
    );
    if let Some(params) = entity.params() {
        out.push('(');
        out.push_str(&html_escape(params));
    }
    out.push_str("</summary>");
    out.push_str(&docs.render(entity.documentation.as_deref(), DocContext::Entity));
    out
}

/// Render entities, in source order, as balanced nested blocks.
///
/// Nesting depth changes by `(indent - min_indent_since_previous) / indent_unit`
/// between consecutive entities; a positive delta nests the entity inside
/// the previous one.
pub fn render_tree(entities: &[Entity], docs: &DocRenderer, indent_unit: usize) -> String {
    let Some(first) = entities.first() else {
        return String::new();
    };
    let unit = indent_unit.max(1) as i64;

    let mut out = entity_header(first, docs);
    let mut open = 1usize;

    for pair in entities.windows(2) {
        let (previous, entity) = (&pair[0], &pair[1]);
        let delta = (entity.indent as i64 - entity.min_indent_since_previous as i64).div_euclid(unit);

        if delta > 0 {
            out.push_str(&format!("<h3>{}</h3>", caption(previous.kind, entity.kind)));
        } else {
            let close = ((1 - delta) as usize).min(open);
            out.push_str(&BLOCK_CLOSE.repeat(close));
            open -= close;
        }
        out.push_str(&entity_header(entity, docs));
        open += 1;
    }

    out.push_str(&BLOCK_CLOSE.repeat(open));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::docstring::NO_DOCUMENTATION;

    fn docs() -> DocRenderer {
        DocRenderer::new(&Config::default()).unwrap()
    }

    fn entity(kind: EntityKind, name: &str, indent: usize, min: usize) -> Entity {
        let keyword = match kind {
            EntityKind::Routine => "def",
            EntityKind::Aggregate => "class",
        };
        Entity {
            keyword: keyword.to_string(),
            signature: format!("{name}()"),
            documentation: None,
            kind,
            indent,
            min_indent_since_previous: min,
        }
    }

    fn block(keyword: &str, name: &str) -> String {
        format!(
            "<details><summary><span class=\"def\">{keyword}</span> <span class=\"blue\">{name}</span>()</summary>{NO_DOCUMENTATION}"
        )
    }

    #[test]
    fn empty_sequence() {
        assert_eq!(render_tree(&[], &docs(), 4), "");
    }

    #[test]
    fn siblings_close_previous_block() {
        let entities = [
            entity(EntityKind::Routine, "a", 0, 0),
            entity(EntityKind::Routine, "b", 0, 0),
        ];
        let html = render_tree(&entities, &docs(), 4);
        assert_eq!(
            html,
            format!("{}</details>{}</details>", block("def", "a"), block("def", "b"))
        );
    }

    #[test]
    fn method_then_top_level_function() {
        let entities = [
            entity(EntityKind::Aggregate, "A", 0, 0),
            entity(EntityKind::Routine, "m", 4, 0),
            entity(EntityKind::Routine, "n", 4, 4),
            entity(EntityKind::Routine, "f", 0, 4),
        ];
        let html = render_tree(&entities, &docs(), 4);
        let expected = [
            block("class", "A"),
            "<h3>Methods</h3>".to_string(),
            block("def", "m"),
            "</details>".to_string(),
            block("def", "n"),
            "</details></details>".to_string(),
            block("def", "f"),
            "</details>".to_string(),
        ]
        .concat();
        assert_eq!(html, expected);
    }

    #[test]
    fn nested_function_and_inner_class_captions() {
        let entities = [
            entity(EntityKind::Routine, "outer", 0, 0),
            entity(EntityKind::Routine, "inner", 4, 0),
            entity(EntityKind::Aggregate, "Local", 8, 4),
        ];
        let html = render_tree(&entities, &docs(), 4);
        assert!(html.contains("<h3>Nested Functions</h3>"));
        assert!(html.contains("<h3>Inner Classes</h3>"));
        assert!(html.ends_with("</details></details></details>"));
    }

    #[test]
    fn caption_table() {
        use EntityKind::*;
        assert_eq!(caption(Routine, Routine), "Nested Functions");
        assert_eq!(caption(Routine, Aggregate), "Inner Classes");
        assert_eq!(caption(Aggregate, Routine), "Methods");
        assert_eq!(caption(Aggregate, Aggregate), "Inner Classes");
    }

    #[test]
    fn unit_of_one_nests_each_column() {
        let entities = [
            entity(EntityKind::Aggregate, "A", 0, 0),
            entity(EntityKind::Routine, "m", 1, 0),
        ];
        let html = render_tree(&entities, &docs(), 1);
        assert!(html.contains("<h3>Methods</h3>"));
        assert_eq!(html.matches("<details>").count(), 2);
        assert!(html.ends_with("</details></details>"));
    }

    #[test]
    fn deep_dedent_never_overcloses() {
        let entities = [
            entity(EntityKind::Routine, "a", 8, 0),
            entity(EntityKind::Routine, "b", 0, 12),
        ];
        let html = render_tree(&entities, &docs(), 4);
        assert_eq!(
            html.matches("<details>").count(),
            html.matches("</details>").count()
        );
    }

    #[test]
    fn signature_is_escaped() {
        let mut e = entity(EntityKind::Routine, "f", 0, 0);
        e.signature = "f(a: \"x<y\")".to_string();
        let html = entity_header(&e, &docs());
        assert!(html.contains("<span class=\"blue\">f</span>(a: &quot;x&lt;y&quot;)</summary>"));
    }

    #[test]
    fn signature_without_parens() {
        let mut e = entity(EntityKind::Aggregate, "Plain", 0, 0);
        e.signature = "Plain".to_string();
        let html = entity_header(&e, &docs());
        assert!(html.contains("<span class=\"blue\">Plain</span></summary>"));
    }

    #[test]
    fn documentation_rendered_inside_block() {
        let mut e = entity(EntityKind::Routine, "f", 0, 0);
        e.documentation = Some("Returns\n-------\nint".to_string());
        let html = render_tree(&[e], &docs(), 4);
        assert!(html.ends_with("</summary><h3>Returns</h3> int</details>"));
    }
}
