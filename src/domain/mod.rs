//! Domain layer - Pure business abstractions
//!
//! Trait definitions, DTOs, pagination and domain error types. Storage
//! implementations live in the infrastructure layer.

pub mod errors;
pub mod pagination;
pub mod repositories;

pub use errors::DomainError;
pub use pagination::{Page, PageRequest};
pub use repositories::*;
