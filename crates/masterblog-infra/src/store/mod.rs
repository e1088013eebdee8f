//! Post store implementations.

mod json_file;
mod memory;

pub use json_file::JsonFilePostStore;
pub use memory::InMemoryPostStore;
