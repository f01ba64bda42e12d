use crate::types::DbId;
use crate::validation::ValidationResult;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {}", .0.summary())]
    Validation(ValidationResult),
}
