//! # Schema Builder Model
//!
//! The schema tree and the pure operations over it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ host: UI events (add / update / delete)     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ tree: path-addressed mutations              │
//! │  - every call returns a new Schema          │
//! │  - unknown ids / paths are silent no-ops    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ sample: Schema → sample JSON value          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use schemabuilder_model::{add_field, generate_sample, FieldPath, IdGenerator, Schema};
//!
//! let mut ids = IdGenerator::from_seed("doc");
//! let schema = Schema::initial();
//! let schema = add_field(&schema, &FieldPath::root(), &mut ids);
//!
//! let sample = generate_sample(&schema);
//! assert_eq!(sample["name"], "sample string");
//! assert_eq!(sample["newField"], "sample string");
//! ```

pub mod field;
pub mod id_generator;
pub mod sample;
pub mod tree;
pub mod visitor;

pub use field::{
    FieldId, FieldNode, FieldPath, FieldType, FieldUpdate, ParseFieldTypeError, Schema,
    DEFAULT_FIELD_KEY,
};
pub use id_generator::IdGenerator;
pub use sample::{generate_sample, render_sample};
pub use tree::{
    add_field, add_field_with_id, delete_field, find_field, path_to, update_field,
    InvariantViolation,
};
pub use visitor::{walk_field, walk_fields, Visitor};
