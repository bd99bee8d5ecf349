//! In-process storage backend

mod memory;

pub use memory::InMemoryRepositoryProvider;

#[cfg(test)]
pub(crate) use memory::InMemoryCityRepository;
