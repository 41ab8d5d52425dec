//! In-memory persistence.
//!
//! An [`InMemoryDatabase`] holds committed categories. Each
//! [`InMemorySession`] is one transaction over it: repository writes are
//! staged in the session and only reach the database when the session's
//! unit of work commits. Intended for tests/dev. Not optimized for
//! performance.

pub mod database;
pub mod session;

pub use database::InMemoryDatabase;
pub use session::InMemorySession;
