//! # Edit Session Management
//!
//! One user's editing session over a schema document.
//!
//! The session owns the document, the id generator and the view-state side
//! table, and implements the interaction rules that sit on top of the raw
//! tree operations: key edits are trimmed and an empty key reverts, switching
//! a field to `Nested` seeds it with a first child, deletes prune view state.

use crate::{EditorError, Mutation, MutationResult, SchemaDocument, ViewState};
use schemabuilder_model::{
    find_field, path_to, FieldId, FieldNode, FieldPath, FieldType, FieldUpdate, IdGenerator,
    Schema,
};
use tracing::{debug, info};

pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    document: SchemaDocument,
    view: ViewState,
    ids: IdGenerator,
}

impl EditSession {
    /// Session over the initial schema with a fresh id generator
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_document(id, SchemaDocument::new(), IdGenerator::new())
    }

    pub fn with_document(id: impl Into<String>, document: SchemaDocument, ids: IdGenerator) -> Self {
        Self {
            id: id.into(),
            document,
            view: ViewState::new(),
            ids,
        }
    }

    pub fn schema(&self) -> &Schema {
        self.document.schema()
    }

    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Apply a raw mutation
    pub fn apply(&mut self, mutation: Mutation) -> MutationResult {
        debug!(session = %self.id, op = mutation.name(), "applying mutation");
        let result = self.document.apply(&mutation, &mut self.ids);
        if matches!(mutation, Mutation::DeleteField { .. }) {
            self.view.retain(self.document.schema());
        }
        result
    }

    /// Append a default field at the root level
    pub fn add_field(&mut self) -> Option<FieldId> {
        let result = self.apply(Mutation::add_field(FieldPath::root()));
        if let Some(id) = &result.created {
            info!(session = %self.id, field = %id, "added root field");
        }
        result.created
    }

    /// Append a default child field to the nested field `parent_id`
    pub fn add_nested_field(&mut self, parent_id: &FieldId) -> Result<FieldId, EditorError> {
        let parent = self.field(parent_id)?;
        if !parent.is_nested() {
            return Err(EditorError::NotNested(parent_id.clone()));
        }

        let path = self.parent_path(parent_id)?.child(parent_id);
        let result = self.apply(Mutation::add_field(path));
        let created = result
            .created
            .ok_or_else(|| EditorError::FieldNotFound(parent_id.clone()))?;

        info!(session = %self.id, parent = %parent_id, field = %created, "added nested field");
        Ok(created)
    }

    /// Start an in-place key edit, seeding the draft with the current key
    pub fn begin_edit(&mut self, field_id: &FieldId) -> Result<(), EditorError> {
        let key = self.field(field_id)?.key.clone();
        self.view.set_draft(field_id, Some(key));
        Ok(())
    }

    pub fn update_draft(&mut self, field_id: &FieldId, draft: impl Into<String>) -> Result<(), EditorError> {
        if self.view.draft(field_id).is_none() {
            return Err(EditorError::NotEditing(field_id.clone()));
        }
        self.view.set_draft(field_id, Some(draft.into()));
        Ok(())
    }

    /// Abandon an edit; the key stays as it was
    pub fn cancel_edit(&mut self, field_id: &FieldId) {
        self.view.set_draft(field_id, None);
    }

    /// Finish an edit, renaming the field to the trimmed draft
    ///
    /// A blank draft leaves the field untouched and reports `EmptyKey`.
    pub fn commit_edit(&mut self, field_id: &FieldId) -> Result<MutationResult, EditorError> {
        let draft = self
            .view
            .take_draft(field_id)
            .ok_or_else(|| EditorError::NotEditing(field_id.clone()))?;
        let previous = self.field(field_id)?.key.clone();

        let key = draft.trim();
        if key.is_empty() {
            debug!(session = %self.id, field = %field_id, "blank key reverted");
            return Err(EditorError::EmptyKey { previous });
        }

        let path = self.parent_path(field_id)?;
        Ok(self.apply(Mutation::update_field(field_id.clone(), FieldUpdate::key(key), path)))
    }

    /// Rename in one step: begin, set draft, commit
    pub fn rename_field(&mut self, field_id: &FieldId, key: &str) -> Result<MutationResult, EditorError> {
        self.begin_edit(field_id)?;
        self.update_draft(field_id, key)?;
        self.commit_edit(field_id)
    }

    /// Change a field's type
    ///
    /// Turning a field without children into `Nested` also adds its first
    /// child, so the new container is never shown empty.
    pub fn set_field_type(&mut self, field_id: &FieldId, field_type: FieldType) -> Result<MutationResult, EditorError> {
        let had_children = self.field(field_id)?.children.is_some();
        let path = self.parent_path(field_id)?;

        let result = self.apply(Mutation::update_field(
            field_id.clone(),
            FieldUpdate::field_type(field_type),
            path,
        ));
        if field_type.is_nested() && !had_children {
            self.add_nested_field(field_id)?;
        }
        if !field_type.is_nested() {
            self.view.retain(self.document.schema());
        }

        Ok(MutationResult {
            version: self.document.version,
            ..result
        })
    }

    /// Delete a field together with its subtree
    pub fn delete_field(&mut self, field_id: &FieldId) -> Result<MutationResult, EditorError> {
        let path = self.parent_path(field_id)?;
        let result = self.apply(Mutation::delete_field(field_id.clone(), path));
        info!(session = %self.id, field = %field_id, "deleted field");
        Ok(result)
    }

    /// Expand or collapse a field, returning whether it is now expanded
    pub fn toggle_expanded(&mut self, field_id: &FieldId) -> Result<bool, EditorError> {
        self.field(field_id)?;
        Ok(self.view.toggle(field_id))
    }

    /// Current sample as indented JSON text
    pub fn preview(&self, indent: usize) -> Result<String, EditorError> {
        self.document.preview(indent)
    }

    fn field(&self, field_id: &FieldId) -> Result<&FieldNode, EditorError> {
        find_field(self.document.schema(), field_id)
            .ok_or_else(|| EditorError::FieldNotFound(field_id.clone()))
    }

    fn parent_path(&self, field_id: &FieldId) -> Result<FieldPath, EditorError> {
        path_to(self.document.schema(), field_id)
            .ok_or_else(|| EditorError::FieldNotFound(field_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditSession {
        EditSession::with_document("test", SchemaDocument::new(), IdGenerator::from_seed("s"))
    }

    #[test]
    fn test_session_creation() {
        let session = session();

        assert_eq!(session.id, "test");
        assert_eq!(session.schema().len(), 1);
        assert!(session.view().is_empty());
    }

    #[test]
    fn test_rename_trims_key() {
        let mut session = session();
        let name = FieldId::from("1");

        let result = session.rename_field(&name, "  title ").unwrap();
        assert!(result.changed);
        assert_eq!(session.schema()[0].key, "title");
        assert_eq!(session.view().draft(&name), None);
    }

    #[test]
    fn test_blank_rename_reverts() {
        let mut session = session();
        let name = FieldId::from("1");

        let err = session.rename_field(&name, "   ").unwrap_err();
        assert!(matches!(err, EditorError::EmptyKey { ref previous } if previous == "name"));
        assert_eq!(session.schema()[0].key, "name");
        assert_eq!(session.document().version, 0);
    }

    #[test]
    fn test_cancel_edit_keeps_key() {
        let mut session = session();
        let name = FieldId::from("1");

        session.begin_edit(&name).unwrap();
        assert_eq!(session.view().draft(&name), Some("name"));
        session.update_draft(&name, "other").unwrap();
        session.cancel_edit(&name);

        assert!(matches!(session.commit_edit(&name), Err(EditorError::NotEditing(_))));
        assert_eq!(session.schema()[0].key, "name");
    }

    #[test]
    fn test_switching_to_nested_seeds_a_child() {
        let mut session = session();
        let name = FieldId::from("1");

        session.set_field_type(&name, FieldType::Nested).unwrap();

        let field = &session.schema()[0];
        assert_eq!(field.field_type, FieldType::Nested);
        assert_eq!(field.children().len(), 1);
        assert_eq!(field.children()[0].key, "newField");
        assert_eq!(session.document().version, 2);
    }

    #[test]
    fn test_add_nested_field_rejects_primitive_parent() {
        let mut session = session();
        let err = session.add_nested_field(&FieldId::from("1")).unwrap_err();
        assert!(matches!(err, EditorError::NotNested(_)));
    }

    #[test]
    fn test_delete_prunes_view_state() {
        let mut session = session();
        let name = FieldId::from("1");
        session.set_field_type(&name, FieldType::Nested).unwrap();
        let child = session.schema()[0].children()[0].id.clone();

        session.toggle_expanded(&child).unwrap();
        assert_eq!(session.view().len(), 1);

        session.delete_field(&name).unwrap();
        assert!(session.schema().is_empty());
        assert!(session.view().is_empty());
    }

    #[test]
    fn test_unknown_field_errors() {
        let mut session = session();
        let missing = FieldId::from("missing");

        assert!(matches!(session.delete_field(&missing), Err(EditorError::FieldNotFound(_))));
        assert!(matches!(session.toggle_expanded(&missing), Err(EditorError::FieldNotFound(_))));
        assert!(matches!(session.begin_edit(&missing), Err(EditorError::FieldNotFound(_))));
    }
}
