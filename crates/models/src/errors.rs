use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// Every violated rule, in rule-table order.
    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),
    #[error("database error: {0}")]
    Db(String),
}
