pub mod models;
pub mod patch;
pub mod repo;
pub mod schema;
pub mod validation;
