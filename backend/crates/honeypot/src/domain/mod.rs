//! Domain Layer - Business logic
//!
//! This layer contains:
//! - Value objects (trap field naming, valid-from token cipher)
//! - Domain services (valid-from time window policy)
//! - The submitted field set abstraction

pub mod services;
pub mod submission;
pub mod value_objects;
