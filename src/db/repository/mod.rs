//! Repository trait definitions.
//!
//! The engine reads four registries and writes only the override fields of
//! a cargo record and the rate selection of a v2 preview; these traits are
//! the entire storage contract.

pub mod error;
pub mod records;
pub mod registries;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use records::RecordRepository;
pub use registries::RegistryRepository;

/// Combined repository surface the application layers depend on.
pub trait FullRepository: RegistryRepository + RecordRepository {}

impl<T: RegistryRepository + RecordRepository> FullRepository for T {}
