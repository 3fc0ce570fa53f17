//! SeaORM entities for the warehouse schema plus the validation rules
//! every entity has to pass before it is written.

pub mod errors;
pub mod db;
pub mod validation;
pub mod category;
pub mod product;
