//! # Schema Tree Operations
//!
//! Path-addressed mutations over the schema tree.
//!
//! ## Semantics
//!
//! - Every operation borrows the current tree and returns a new one.
//! - A path is the chain of ancestor ids from the root to a nesting
//!   location. The empty path is the root level.
//! - Each path segment must name a `Nested` field among the siblings at its
//!   level. If it does not, the operation returns the tree unchanged.
//! - Missing target ids are no-ops as well. Hosts only ever hand back ids
//!   they read from the latest snapshot, so nothing is signaled.

use crate::field::{FieldId, FieldNode, FieldPath, FieldUpdate, Schema};
use crate::id_generator::IdGenerator;
use crate::visitor::{walk_field, Visitor};
use std::collections::HashSet;
use thiserror::Error;

/// Rebuild `fields`, replacing the sibling list addressed by `path` with
/// `f(siblings)`. Returns `None` when the path does not resolve.
fn transform_at<F>(fields: &[FieldNode], path: &[FieldId], f: &mut F) -> Option<Vec<FieldNode>>
where
    F: FnMut(&[FieldNode]) -> Vec<FieldNode>,
{
    let Some((head, rest)) = path.split_first() else {
        return Some(f(fields));
    };

    let index = fields
        .iter()
        .position(|field| field.id == *head && field.is_nested())?;
    let target = &fields[index];
    let children = transform_at(target.children(), rest, f)?;

    let mut rebuilt = fields.to_vec();
    rebuilt[index] = FieldNode {
        children: Some(children),
        ..target.clone()
    };
    Some(rebuilt)
}

fn rebuild(schema: &Schema, path: &FieldPath, mut f: impl FnMut(&[FieldNode]) -> Vec<FieldNode>) -> Schema {
    match transform_at(schema.fields(), path.segments(), &mut f) {
        Some(fields) => Schema::new(fields),
        None => schema.clone(),
    }
}

/// Append a default field at the location addressed by `parent_path`
pub fn add_field(schema: &Schema, parent_path: &FieldPath, ids: &mut IdGenerator) -> Schema {
    add_field_with_id(schema, parent_path, ids).0
}

/// Like `add_field`, also returning the new field's id when it was inserted
pub fn add_field_with_id(
    schema: &Schema,
    parent_path: &FieldPath,
    ids: &mut IdGenerator,
) -> (Schema, Option<FieldId>) {
    let existing = schema.id_set();
    let mut id = ids.new_id();
    while existing.contains(&id) {
        id = ids.new_id();
    }

    let mut inserted = false;
    let updated = rebuild(schema, parent_path, |siblings| {
        inserted = true;
        let mut siblings = siblings.to_vec();
        siblings.push(FieldNode::with_default_key(id.clone()));
        siblings
    });

    (updated, inserted.then_some(id))
}

/// Apply `updates` to the field `field_id`
///
/// With the root path the whole tree is searched. Otherwise only the direct
/// children of the location addressed by `parent_path` are considered.
pub fn update_field(
    schema: &Schema,
    field_id: &FieldId,
    updates: &FieldUpdate,
    parent_path: &FieldPath,
) -> Schema {
    if parent_path.is_root() {
        return Schema::new(update_anywhere(schema.fields(), field_id, updates));
    }

    rebuild(schema, parent_path, |siblings| {
        siblings
            .iter()
            .map(|field| {
                let mut field = field.clone();
                if field.id == *field_id {
                    field.apply_update(updates);
                }
                field
            })
            .collect()
    })
}

fn update_anywhere(fields: &[FieldNode], field_id: &FieldId, updates: &FieldUpdate) -> Vec<FieldNode> {
    fields
        .iter()
        .map(|field| {
            if field.id == *field_id {
                let mut field = field.clone();
                field.apply_update(updates);
                return field;
            }
            match &field.children {
                Some(children) => FieldNode {
                    children: Some(update_anywhere(children, field_id, updates)),
                    ..field.clone()
                },
                None => field.clone(),
            }
        })
        .collect()
}

/// Remove the field `field_id` and its whole subtree from the sibling list
/// addressed by `parent_path`
pub fn delete_field(schema: &Schema, field_id: &FieldId, parent_path: &FieldPath) -> Schema {
    rebuild(schema, parent_path, |siblings| {
        siblings
            .iter()
            .filter(|field| field.id != *field_id)
            .cloned()
            .collect()
    })
}

/// Find a field by id at any depth
pub fn find_field<'a>(schema: &'a Schema, field_id: &FieldId) -> Option<&'a FieldNode> {
    fn find_in<'a>(fields: &'a [FieldNode], field_id: &FieldId) -> Option<&'a FieldNode> {
        fields.iter().find_map(|field| {
            if field.id == *field_id {
                Some(field)
            } else {
                find_in(field.children(), field_id)
            }
        })
    }

    find_in(schema.fields(), field_id)
}

/// Ancestor chain of `field_id`, suitable as the `parent_path` argument of
/// `update_field` and `delete_field`
pub fn path_to(schema: &Schema, field_id: &FieldId) -> Option<FieldPath> {
    struct PathFinder<'a> {
        target: &'a FieldId,
        found: Option<FieldPath>,
    }

    impl Visitor for PathFinder<'_> {
        fn visit_field(&mut self, field: &FieldNode, path: &FieldPath) {
            if self.found.is_some() {
                return;
            }
            if field.id == *self.target {
                self.found = Some(path.clone());
                return;
            }
            walk_field(self, field, path);
        }
    }

    let mut finder = PathFinder {
        target: field_id,
        found: None,
    };
    finder.visit_schema(schema);
    finder.found
}

/// Structural problems a schema tree can have
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Duplicate field id: {0}")]
    DuplicateId(FieldId),

    #[error("Nested field {0} has no children list")]
    NestedWithoutChildren(FieldId),

    #[error("Non-nested field {0} carries children")]
    ChildrenWithoutNested(FieldId),
}

#[derive(Default)]
struct IdCollector {
    ids: Vec<FieldId>,
}

impl Visitor for IdCollector {
    fn visit_field(&mut self, field: &FieldNode, path: &FieldPath) {
        self.ids.push(field.id.clone());
        walk_field(self, field, path);
    }
}

#[derive(Default)]
struct InvariantChecker {
    seen: HashSet<FieldId>,
    violation: Option<InvariantViolation>,
}

impl Visitor for InvariantChecker {
    fn visit_field(&mut self, field: &FieldNode, path: &FieldPath) {
        if self.violation.is_some() {
            return;
        }

        if !self.seen.insert(field.id.clone()) {
            self.violation = Some(InvariantViolation::DuplicateId(field.id.clone()));
            return;
        }

        match (field.is_nested(), field.children.is_some()) {
            (true, false) => {
                self.violation = Some(InvariantViolation::NestedWithoutChildren(field.id.clone()));
            }
            (false, true) => {
                self.violation = Some(InvariantViolation::ChildrenWithoutNested(field.id.clone()));
            }
            _ => walk_field(self, field, path),
        }
    }
}

impl Schema {
    /// Every field id, in pre-order
    pub fn ids(&self) -> Vec<FieldId> {
        let mut collector = IdCollector::default();
        collector.visit_schema(self);
        collector.ids
    }

    fn id_set(&self) -> HashSet<FieldId> {
        self.ids().into_iter().collect()
    }

    pub fn contains_id(&self, field_id: &FieldId) -> bool {
        find_field(self, field_id).is_some()
    }

    /// Number of fields at every depth
    pub fn field_count(&self) -> usize {
        self.ids().len()
    }

    /// Check id uniqueness and the type/children coupling
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut checker = InvariantChecker::default();
        checker.visit_schema(self);
        match checker.violation {
            Some(violation) => Err(violation),
            None => Ok(()),
        }
    }
}
