mod file_repo;
mod memory;

pub use file_repo::FileUiStateRepository;
pub use memory::InMemoryUiStateRepository;
