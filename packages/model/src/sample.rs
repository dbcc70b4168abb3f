//! Sample JSON generation from a schema tree.

use crate::field::{FieldNode, FieldType};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{json, Map, Value};

pub const SAMPLE_STRING: &str = "sample string";
pub const SAMPLE_BOOLEAN: &str = "true and false";
pub const SAMPLE_OBJECT_ID: &str = "ee24ad";

/// Placeholder value for a single field
fn sample_value(field: &FieldNode) -> Value {
    match field.field_type {
        FieldType::String => json!(SAMPLE_STRING),
        FieldType::Number => json!(0),
        FieldType::Float => json!(0.0),
        FieldType::Boolean => json!(SAMPLE_BOOLEAN),
        FieldType::ObjectId => json!(SAMPLE_OBJECT_ID),
        FieldType::Nested => generate_sample(field.children()),
    }
}

/// Generate a sample object keyed by field key
///
/// Sibling fields sharing a key collapse into one entry: the key keeps the
/// position of its first occurrence and the value of its last.
pub fn generate_sample(fields: &[FieldNode]) -> Value {
    let mut object = Map::new();
    for field in fields {
        object.insert(field.key.clone(), sample_value(field));
    }
    Value::Object(object)
}

/// Generate the sample and format it as indented JSON text
pub fn render_sample(fields: &[FieldNode], indent: usize) -> Result<String, serde_json::Error> {
    let value = generate_sample(fields);
    let indent = " ".repeat(indent);

    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}
