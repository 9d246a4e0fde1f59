use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_keep_their_category() {
        let v: ServiceError = ModelError::Validation("name required".into()).into();
        assert!(matches!(v, ServiceError::Validation(ref m) if m == "name required"));
        let d: ServiceError = ModelError::Db("down".into()).into();
        assert!(matches!(d, ServiceError::Db(_)));
    }

    #[test]
    fn not_found_message_names_entity() {
        assert_eq!(ServiceError::not_found("contact query").to_string(), "not found: contact query not found");
    }
}
