//! # Schema Mutations
//!
//! Serializable commands a host sends to the document.
//!
//! ## Mutation Semantics
//!
//! ### AddField
//! - Appends a default field (`newField`, `String`) under `parent_path`
//! - Unresolvable paths leave the tree unchanged
//!
//! ### UpdateField
//! - Applies any subset of key and type
//! - Leaving `Nested` discards the children
//! - Root path searches the whole tree
//!
//! ### DeleteField
//! - Removes the field and all descendants
//! - Only looks at the siblings addressed by `parent_path`

use schemabuilder_model::{
    add_field_with_id, delete_field, update_field, FieldId, FieldPath, FieldUpdate, IdGenerator,
    Schema,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    #[serde(rename_all = "camelCase")]
    AddField {
        #[serde(default)]
        parent_path: FieldPath,
    },

    #[serde(rename_all = "camelCase")]
    UpdateField {
        field_id: FieldId,
        updates: FieldUpdate,
        #[serde(default)]
        parent_path: FieldPath,
    },

    #[serde(rename_all = "camelCase")]
    DeleteField {
        field_id: FieldId,
        #[serde(default)]
        parent_path: FieldPath,
    },
}

/// Outcome of applying a mutation to a schema snapshot
#[derive(Debug, Clone)]
pub struct Applied {
    pub schema: Schema,
    /// Id of the field created by `AddField`, if it was inserted
    pub created: Option<FieldId>,
}

impl Mutation {
    pub fn add_field(parent_path: FieldPath) -> Self {
        Mutation::AddField { parent_path }
    }

    pub fn update_field(field_id: FieldId, updates: FieldUpdate, parent_path: FieldPath) -> Self {
        Mutation::UpdateField {
            field_id,
            updates,
            parent_path,
        }
    }

    pub fn delete_field(field_id: FieldId, parent_path: FieldPath) -> Self {
        Mutation::DeleteField {
            field_id,
            parent_path,
        }
    }

    /// Apply to a snapshot, producing the next one
    pub fn apply(&self, schema: &Schema, ids: &mut IdGenerator) -> Applied {
        match self {
            Mutation::AddField { parent_path } => {
                let (schema, created) = add_field_with_id(schema, parent_path, ids);
                Applied { schema, created }
            }

            Mutation::UpdateField {
                field_id,
                updates,
                parent_path,
            } => Applied {
                schema: update_field(schema, field_id, updates, parent_path),
                created: None,
            },

            Mutation::DeleteField {
                field_id,
                parent_path,
            } => Applied {
                schema: delete_field(schema, field_id, parent_path),
                created: None,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddField { .. } => "AddField",
            Mutation::UpdateField { .. } => "UpdateField",
            Mutation::DeleteField { .. } => "DeleteField",
        }
    }
}
