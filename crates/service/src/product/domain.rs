use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-supplied product fields, shared by add and edit (edit replaces all of them).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub category_id: Uuid,
    pub price: f64,
    pub amount: i32,
}
