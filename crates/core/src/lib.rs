//! `catalog-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives: identifiers, entity traits,
//! the domain error model, reusable validation rules and the persistence
//! contracts that adapters implement.

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod validation;

pub use entity::{AggregateRoot, Entity};
pub use error::{DomainError, DomainResult};
pub use id::AggregateId;
pub use repository::{Repository, RepositoryError, StorageError};
