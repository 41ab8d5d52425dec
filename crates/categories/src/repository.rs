use catalog_core::Repository;

use crate::category::Category;

/// Persistence contract for categories.
///
/// Blanket-implemented for every `Repository<Category>`, so adapters only
/// implement the generic trait.
pub trait CategoryRepository: Repository<Category> {}

impl<R> CategoryRepository for R where R: Repository<Category> + ?Sized {}
