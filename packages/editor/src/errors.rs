//! Error types for the editor

use schemabuilder_model::FieldId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Field not found: {0}")]
    FieldNotFound(FieldId),

    #[error("Field {0} is not nested")]
    NotNested(FieldId),

    #[error("Field key cannot be empty (kept '{previous}')")]
    EmptyKey { previous: String },

    #[error("Field {0} is not being edited")]
    NotEditing(FieldId),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
