//! # Schema Document
//!
//! The single state container of an editing session.
//!
//! A document holds the current schema snapshot and a version counter.
//! Each applied mutation replaces the snapshot with the one the model
//! returned; older snapshots are simply dropped.

use crate::{EditorError, Mutation};
use schemabuilder_model::{generate_sample, render_sample, FieldId, IdGenerator, Schema};
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct SchemaDocument {
    /// Current version number (increments on each mutation)
    pub version: u64,

    schema: Schema,
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// New version number
    pub version: u64,

    /// Whether the snapshot differs from the previous one
    pub changed: bool,

    /// Field created by an `AddField` mutation
    pub created: Option<FieldId>,
}

impl SchemaDocument {
    /// Document starting from the initial `name: String` field
    pub fn new() -> Self {
        Self::from_schema(Schema::initial())
    }

    pub fn from_schema(schema: Schema) -> Self {
        Self { version: 0, schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Apply a mutation and swap in the resulting snapshot
    pub fn apply(&mut self, mutation: &Mutation, ids: &mut IdGenerator) -> MutationResult {
        self.version += 1;

        let applied = mutation.apply(&self.schema, ids);
        let changed = applied.schema != self.schema;
        if !changed {
            debug!(op = mutation.name(), version = self.version, "mutation left schema unchanged");
        }

        if let Err(violation) = applied.schema.check_invariants() {
            warn!(op = mutation.name(), %violation, "schema invariant violated");
        }

        self.schema = applied.schema;

        MutationResult {
            version: self.version,
            changed,
            created: applied.created,
        }
    }

    /// Sample value for the current snapshot
    pub fn sample(&self) -> Value {
        generate_sample(&self.schema)
    }

    /// Sample rendered as indented JSON text
    pub fn preview(&self, indent: usize) -> Result<String, EditorError> {
        Ok(render_sample(&self.schema, indent)?)
    }
}

impl Default for SchemaDocument {
    fn default() -> Self {
        Self::new()
    }
}
