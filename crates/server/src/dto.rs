//! JSON shapes returned by the HTTP API.

use chrono::Utc;
use models::{category, product};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// `dd-MM-yyyy`
pub const CREATION_DATE_FORMAT: &str = "%d-%m-%Y";
/// `dd-MM-yyyy HH:mm:ss`
pub const LAST_CHANGE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: Uuid,
    pub name: String,
}

impl From<category::Model> for CategoryDto {
    fn from(c: category::Model) -> Self {
        Self { id: c.id, name: c.name }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category_id: Uuid,
    pub price: f64,
    pub amount: i32,
    /// UTC date, `dd-MM-yyyy`
    #[schema(example = "18-10-2026")]
    pub date_creation: String,
    /// UTC date and time, `dd-MM-yyyy HH:mm:ss`
    #[schema(example = "18-10-2026 14:05:09")]
    pub date_last_change: String,
}

impl From<product::Model> for ProductDto {
    fn from(p: product::Model) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            category_id: p.category_id,
            price: p.price,
            amount: p.amount,
            date_creation: p.date_creation.with_timezone(&Utc).format(CREATION_DATE_FORMAT).to_string(),
            date_last_change: p.date_last_change.with_timezone(&Utc).format(LAST_CHANGE_FORMAT).to_string(),
        }
    }
}
