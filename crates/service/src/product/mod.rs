//! Product lifecycle: category resolution, validation and the stock-change stamp.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::ProductInput;
pub use service::ProductService;
