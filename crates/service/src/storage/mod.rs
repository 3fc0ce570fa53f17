//! Repository implementations for the service layer
//!
//! - `seaorm`: PostgreSQL through SeaORM, the production backend.
//! - `memory`: process-local store with the same referential rules, used for
//!   local runs without a database and for tests.

pub mod memory;
pub mod seaorm;
