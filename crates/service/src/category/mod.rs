//! Category lifecycle: repository abstraction and the service enforcing name rules.

pub mod repository;
pub mod service;

pub use service::CategoryService;
