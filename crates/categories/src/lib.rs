//! Categories domain module.
//!
//! This crate contains the Category aggregate and its invariants, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod repository;

pub use category::{
    Category, CategoryId, DESCRIPTION_FIELD, DESCRIPTION_MAX_LENGTH, NAME_FIELD, NAME_MAX_LENGTH,
    NAME_MIN_LENGTH,
};
pub use repository::CategoryRepository;
