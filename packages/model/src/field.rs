//! Field nodes, field types and the schema tree container.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use thiserror::Error;

/// Key given to fields created by `add_field`
pub const DEFAULT_FIELD_KEY: &str = "newField";

/// Opaque, stable identifier of a field node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for FieldId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for FieldId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The closed set of field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    String,
    Number,
    Float,
    Boolean,
    ObjectId,
    Nested,
}

impl FieldType {
    /// Every type, in the order a type selector offers them
    pub const ALL: [FieldType; 6] = [
        FieldType::String,
        FieldType::ObjectId,
        FieldType::Float,
        FieldType::Boolean,
        FieldType::Number,
        FieldType::Nested,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Number => "Number",
            FieldType::Float => "Float",
            FieldType::Boolean => "Boolean",
            FieldType::ObjectId => "ObjectId",
            FieldType::Nested => "Nested",
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, FieldType::Nested)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown field type '{name}' (expected one of: String, ObjectId, Float, Boolean, Number, Nested)")]
pub struct ParseFieldTypeError {
    pub name: String,
}

impl FromStr for FieldType {
    type Err = ParseFieldTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        FieldType::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseFieldTypeError {
                name: name.to_string(),
            })
    }
}

/// A single named, typed entry of the schema
///
/// `children` is `Some` exactly when `field_type` is `Nested`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldNode {
    pub id: FieldId,
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FieldNode>>,
}

impl FieldNode {
    /// Create a node; nested nodes start with an empty child list
    pub fn new(id: impl Into<FieldId>, key: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            field_type,
            children: field_type.is_nested().then(Vec::new),
        }
    }

    /// Default node produced by `add_field`
    pub fn with_default_key(id: FieldId) -> Self {
        Self::new(id, DEFAULT_FIELD_KEY, FieldType::String)
    }

    /// Builder for nested nodes in tests and fixtures
    pub fn nested(
        id: impl Into<FieldId>,
        key: impl Into<String>,
        children: Vec<FieldNode>,
    ) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            field_type: FieldType::Nested,
            children: Some(children),
        }
    }

    pub fn is_nested(&self) -> bool {
        self.field_type.is_nested()
    }

    /// Child nodes, empty for non-nested fields
    pub fn children(&self) -> &[FieldNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Apply a partial update, keeping `children` coupled to the type
    pub fn apply_update(&mut self, update: &FieldUpdate) {
        if let Some(key) = &update.key {
            self.key = key.clone();
        }
        if let Some(field_type) = update.field_type {
            self.field_type = field_type;
        }

        if self.is_nested() {
            self.children.get_or_insert_with(Vec::new);
        } else {
            self.children = None;
        }
    }
}

/// Partial update of a field: any subset of key and type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
}

impl FieldUpdate {
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            field_type: None,
        }
    }

    pub fn field_type(field_type: FieldType) -> Self {
        Self {
            key: None,
            field_type: Some(field_type),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_none() && self.field_type.is_none()
    }
}

/// Ancestor identifiers from the root down to a nesting location
///
/// The empty path addresses the root level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(Vec<FieldId>);

impl FieldPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[FieldId] {
        &self.0
    }

    /// Path one level deeper, addressing the children of `id`
    pub fn child(&self, id: &FieldId) -> Self {
        let mut segments = self.0.clone();
        segments.push(id.clone());
        Self(segments)
    }

    pub fn push(&mut self, id: FieldId) {
        self.0.push(id);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<FieldId>> for FieldPath {
    fn from(segments: Vec<FieldId>) -> Self {
        Self(segments)
    }
}

impl<'a> FromIterator<&'a str> for FieldPath {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self(iter.into_iter().map(FieldId::from).collect())
    }
}

impl FromIterator<FieldId> for FieldPath {
    fn from_iter<T: IntoIterator<Item = FieldId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.0 {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// Ordered forest of root-level field nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(Vec<FieldNode>);

impl Schema {
    pub fn new(fields: Vec<FieldNode>) -> Self {
        Self(fields)
    }

    /// The tree a new editing session starts from
    pub fn initial() -> Self {
        Self(vec![FieldNode::new("1", "name", FieldType::String)])
    }

    pub fn fields(&self) -> &[FieldNode] {
        &self.0
    }

    pub fn into_fields(self) -> Vec<FieldNode> {
        self.0
    }
}

impl Deref for Schema {
    type Target = [FieldNode];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<FieldNode>> for Schema {
    fn from(fields: Vec<FieldNode>) -> Self {
        Self(fields)
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a FieldNode;
    type IntoIter = std::slice::Iter<'a, FieldNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
