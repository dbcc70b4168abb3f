//! Integration tests for the editor crate

use schemabuilder_editor::{EditSession, EditorError, Mutation, SchemaDocument};
use schemabuilder_model::{FieldId, FieldPath, FieldType, FieldUpdate, IdGenerator};
use serde_json::json;

fn session() -> EditSession {
    EditSession::with_document("it", SchemaDocument::new(), IdGenerator::from_seed("it"))
}

#[test]
fn test_build_nested_schema_through_session() {
    let mut session = session();

    let address = session.add_field().unwrap();
    session.rename_field(&address, "address").unwrap();
    session.set_field_type(&address, FieldType::Nested).unwrap();

    let city = session.schema()[1].children()[0].id.clone();
    session.rename_field(&city, "city").unwrap();

    let zip = session.add_nested_field(&address).unwrap();
    session.rename_field(&zip, "zip").unwrap();
    session.set_field_type(&zip, FieldType::Number).unwrap();

    assert_eq!(
        session.document().sample(),
        json!({
            "name": "sample string",
            "address": { "city": "sample string", "zip": 0 }
        })
    );
    assert!(session.schema().check_invariants().is_ok());
}

#[test]
fn test_retyping_container_drops_children_and_their_view_state() {
    let mut session = session();
    let name = FieldId::from("1");

    session.set_field_type(&name, FieldType::Nested).unwrap();
    let child = session.schema()[0].children()[0].id.clone();
    session.toggle_expanded(&child).unwrap();
    session.begin_edit(&child).unwrap();

    session.set_field_type(&name, FieldType::Boolean).unwrap();

    assert!(session.schema()[0].children.is_none());
    assert!(session.view().is_empty());
    assert_eq!(session.document().sample(), json!({ "name": "true and false" }));
}

#[test]
fn test_nested_to_nested_does_not_seed_again() {
    let mut session = session();
    let name = FieldId::from("1");

    session.set_field_type(&name, FieldType::Nested).unwrap();
    session.set_field_type(&name, FieldType::Nested).unwrap();

    assert_eq!(session.schema()[0].children().len(), 1);
}

#[test]
fn test_raw_mutations_are_silent_noops_for_stale_ids() {
    let mut session = session();
    let before = session.schema().clone();

    let result = session.apply(Mutation::delete_field(FieldId::from("stale"), FieldPath::root()));
    assert!(!result.changed);

    let result = session.apply(Mutation::update_field(
        FieldId::from("stale"),
        FieldUpdate::key("x"),
        FieldPath::root(),
    ));
    assert!(!result.changed);

    let result = session.apply(Mutation::add_field(["stale"].into_iter().collect()));
    assert!(!result.changed);
    assert!(result.created.is_none());

    assert_eq!(session.schema(), &before);
    assert_eq!(session.document().version, 3);
}

#[test]
fn test_mutations_replayed_from_json() {
    let script = r#"[
        { "op": "addField" },
        { "op": "updateField", "fieldId": "it-1", "updates": { "key": "tags", "type": "Nested" } },
        { "op": "addField", "parentPath": ["it-1"] },
        { "op": "deleteField", "fieldId": "1" }
    ]"#;
    let mutations: Vec<Mutation> = serde_json::from_str(script).unwrap();

    let mut session = session();
    for mutation in mutations {
        session.apply(mutation);
    }

    assert_eq!(session.document().sample(), json!({ "tags": { "newField": "sample string" } }));
}

#[test]
fn test_blank_key_is_reported_not_applied() {
    let mut session = session();
    let err = session.rename_field(&FieldId::from("1"), "\t ").unwrap_err();

    assert!(matches!(err, EditorError::EmptyKey { .. }));
    assert_eq!(err.to_string(), "Field key cannot be empty (kept 'name')");
    assert_eq!(session.schema()[0].key, "name");
}
