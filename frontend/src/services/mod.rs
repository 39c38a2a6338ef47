pub mod download;
pub mod local_storage;
pub mod logging;
