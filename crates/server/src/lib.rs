pub mod routes;
pub mod startup;
pub mod state;
pub mod dto;
pub mod errors;
pub mod openapi;

pub use startup::run;
