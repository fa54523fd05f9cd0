mod file_repo;
mod memory;
mod records;

pub use file_repo::FileCatalogRepository;
pub use memory::InMemoryCatalogStore;
