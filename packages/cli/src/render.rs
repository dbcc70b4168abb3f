use colored::{ColoredString, Colorize};
use schemabuilder_editor::ViewState;
use schemabuilder_model::{walk_field, FieldNode, FieldPath, FieldType, Schema, Visitor};

const INDENT: &str = "  ";

fn colored_type(field_type: FieldType) -> ColoredString {
    let name = field_type.as_str();
    match field_type {
        FieldType::String => name.blue(),
        FieldType::Number => name.green(),
        FieldType::Nested => name.yellow(),
        _ => name.normal(),
    }
}

/// Renders the schema as an indented outline, one field per line
///
/// Nested fields collapsed in the view state are shown with `▸` and their
/// children are skipped.
struct OutlineRenderer<'a> {
    view: &'a ViewState,
    show_ids: bool,
    lines: Vec<String>,
}

impl Visitor for OutlineRenderer<'_> {
    fn visit_field(&mut self, field: &FieldNode, path: &FieldPath) {
        let expanded = self.view.is_expanded(&field.id);
        let marker = match (field.is_nested(), expanded) {
            (true, true) => "▾",
            (true, false) => "▸",
            (false, _) => "•",
        };

        let mut line = format!(
            "{}{} {}: {}",
            INDENT.repeat(path.len()),
            marker,
            field.key.bold(),
            colored_type(field.field_type)
        );
        if field.is_nested() && !expanded {
            line.push_str(&format!(" ({} hidden)", field.children().len()).dimmed().to_string());
        }
        if self.show_ids {
            line.push_str(&format!("  [{}]", field.id).dimmed().to_string());
        }
        self.lines.push(line);

        if expanded {
            walk_field(self, field, path);
        }
    }
}

pub fn render_outline(schema: &Schema, view: &ViewState, show_ids: bool) -> String {
    if schema.is_empty() {
        return "(no fields)".dimmed().to_string();
    }

    let mut renderer = OutlineRenderer {
        view,
        show_ids,
        lines: Vec::new(),
    };
    renderer.visit_schema(schema);
    renderer.lines.join("\n")
}
