pub mod drop_store;
pub mod string_archive;
