//! Service layer providing the warehouse's business rules on top of models.
//! - Separates business logic from data access via repository traits.
//! - Reuses validation and entity definitions in `models` crate.
//! - Every operation reports its outcome as a `ServiceError` value.

pub mod errors;
mod metrics;
pub mod category;
pub mod product;
pub mod storage;
#[cfg(test)]
pub mod test_support;
