//! Category use cases.

pub mod common;
pub mod create;
pub mod delete;
pub mod get;
pub mod update;

pub use common::CategoryModelOutput;
pub use create::{CreateCategory, CreateCategoryInput};
pub use delete::{DeleteCategory, DeleteCategoryInput};
pub use get::{GetCategory, GetCategoryInput};
pub use update::{UpdateCategory, UpdateCategoryInput};
