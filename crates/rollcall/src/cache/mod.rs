mod file;

pub use file::FileCacheStore;
