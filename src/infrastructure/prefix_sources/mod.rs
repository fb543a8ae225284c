//! Prefix source implementations

mod local_file;
mod memory;

pub use local_file::LocalFile;
pub use memory::InMemoryFile;
