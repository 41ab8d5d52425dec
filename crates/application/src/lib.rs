//! `catalog-application` — use-case orchestration.
//!
//! Handlers validate through the domain, write through a repository and close
//! the transaction through a [`UnitOfWork`]. They hold no state of their own
//! and contain no IO; both collaborators are injected.

pub mod category;
pub mod error;
pub mod unit_of_work;
pub mod use_case;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{ApplicationError, ApplicationResult};
pub use unit_of_work::UnitOfWork;
pub use use_case::UseCase;
