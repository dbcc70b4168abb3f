//! # Schema Builder Editor
//!
//! Host-side state for editing a schema tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ presentation: renders outline + preview     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - SchemaDocument (current snapshot)        │
//! │  - ViewState (expanded / draft per field)   │
//! │  - Mutation commands                        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ model: pure tree operations + sample        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use schemabuilder_editor::EditSession;
//! use schemabuilder_model::FieldType;
//!
//! let mut session = EditSession::new("local");
//! let address = session.add_field().unwrap();
//! session.rename_field(&address, "address").unwrap();
//! session.set_field_type(&address, FieldType::Nested).unwrap();
//!
//! let preview = session.preview(2).unwrap();
//! assert!(preview.contains("\"address\": {"));
//! ```

mod document;
mod errors;
mod mutations;
mod session;
mod view_state;

pub use document::{MutationResult, SchemaDocument};
pub use errors::EditorError;
pub use mutations::{Applied, Mutation};
pub use session::EditSession;
pub use view_state::{FieldViewState, ViewState};
