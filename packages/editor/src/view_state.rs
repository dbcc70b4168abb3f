//! Per-field presentation state, kept beside the schema rather than in it.

use schemabuilder_model::{FieldId, Schema};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViewState {
    pub expanded: bool,
    /// In-place key edit in progress
    pub draft: Option<String>,
}

impl Default for FieldViewState {
    fn default() -> Self {
        Self {
            expanded: true,
            draft: None,
        }
    }
}

/// Side table of view state keyed by field id
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    fields: HashMap<FieldId, FieldViewState>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a field; unknown fields report the defaults
    pub fn get(&self, id: &FieldId) -> FieldViewState {
        self.fields.get(id).cloned().unwrap_or_default()
    }

    pub fn is_expanded(&self, id: &FieldId) -> bool {
        self.fields.get(id).map_or(true, |state| state.expanded)
    }

    pub fn set_expanded(&mut self, id: &FieldId, expanded: bool) {
        self.entry(id).expanded = expanded;
    }

    /// Flip the expanded flag, returning the new value
    pub fn toggle(&mut self, id: &FieldId) -> bool {
        let state = self.entry(id);
        state.expanded = !state.expanded;
        state.expanded
    }

    pub fn draft(&self, id: &FieldId) -> Option<&str> {
        self.fields.get(id).and_then(|state| state.draft.as_deref())
    }

    pub fn set_draft(&mut self, id: &FieldId, draft: Option<String>) {
        self.entry(id).draft = draft;
    }

    pub fn take_draft(&mut self, id: &FieldId) -> Option<String> {
        self.fields.get_mut(id).and_then(|state| state.draft.take())
    }

    /// Drop entries of fields that are no longer in the schema
    pub fn retain(&mut self, schema: &Schema) {
        let live: HashSet<FieldId> = schema.ids().into_iter().collect();
        self.fields.retain(|id, _| live.contains(id));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn entry(&mut self, id: &FieldId) -> &mut FieldViewState {
        self.fields.entry(id.clone()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemabuilder_model::{FieldNode, FieldType};

    #[test]
    fn test_fields_start_expanded() {
        let view = ViewState::new();
        assert!(view.is_expanded(&FieldId::from("any")));
        assert_eq!(view.get(&FieldId::from("any")), FieldViewState::default());
    }

    #[test]
    fn test_toggle_flips_expanded() {
        let mut view = ViewState::new();
        let id = FieldId::from("a");

        assert!(!view.toggle(&id));
        assert!(!view.is_expanded(&id));
        assert!(view.toggle(&id));
    }

    #[test]
    fn test_retain_prunes_deleted_fields() {
        let mut view = ViewState::new();
        view.set_expanded(&FieldId::from("1"), false);
        view.set_draft(&FieldId::from("gone"), Some("draft".to_string()));

        view.retain(&Schema::new(vec![FieldNode::new("1", "name", FieldType::String)]));

        assert_eq!(view.len(), 1);
        assert!(!view.is_expanded(&FieldId::from("1")));
        assert_eq!(view.draft(&FieldId::from("gone")), None);
    }
}
