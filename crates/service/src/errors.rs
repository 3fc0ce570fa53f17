use thiserror::Error;
use uuid::Uuid;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Category with id [{0}] not found")]
    CategoryNotFound(Uuid),
    #[error("Product with UUID [{0}] not found")]
    ProductNotFound(Uuid),
    /// All violated rules, one message per line when displayed.
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    /// Errors caused by the caller's input rather than by the backend.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ServiceError::Db(_))
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::CategoryNotFound(_) => 2001,
            ServiceError::ProductNotFound(_) => 2002,
            ServiceError::Validation(_) => 2003,
            ServiceError::Db(_) => 2100,
        }
    }

    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::CategoryNotFound(_) => "category_not_found",
            ServiceError::ProductNotFound(_) => "product_not_found",
            ServiceError::Validation(_) => "validation",
            ServiceError::Db(_) => "db",
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msgs) => ServiceError::Validation(msgs),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_client_facing_wording() {
        let id = Uuid::nil();
        assert_eq!(
            ServiceError::CategoryNotFound(id).to_string(),
            format!("Category with id [{id}] not found")
        );
        assert_eq!(
            ServiceError::ProductNotFound(id).to_string(),
            format!("Product with UUID [{id}] not found")
        );
    }

    #[test]
    fn validation_joins_every_message() {
        let e = ServiceError::Validation(vec!["a".into(), "b".into()]);
        assert_eq!(e.to_string(), "a\nb");
        assert!(e.is_client_error());
        assert!(!ServiceError::Db("boom".into()).is_client_error());
    }

    #[test]
    fn model_errors_keep_their_kind() {
        let e: ServiceError = ModelError::Validation(vec!["x".into()]).into();
        assert_eq!(e.kind(), "validation");
        let e: ServiceError = ModelError::Db("down".into()).into();
        assert_eq!(e.code(), 2100);
    }
}
