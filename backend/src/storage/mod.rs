//! # Storage Module
//!
//! Persistence of cart state. The domain only sees [`CartRepository`]; the
//! backend underneath can be browser localStorage (in the frontend crate), a
//! directory of JSON files, or memory.
//!
//! ## Key Responsibilities
//!
//! - **Data Persistence**: writing the cart and discount after every mutation
//! - **Data Retrieval**: restoring them on start-up, tolerating bad records
//! - **Storage Abstraction**: one `KeyValueStore` trait for every backend
//!
//! Write failures surface as [`StorageError`]; callers log them and keep the
//! in-memory state as the source of truth.

pub mod cart_repository;
pub mod file_store;
pub mod memory;
pub mod traits;

pub use cart_repository::CartRepository;
pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use traits::{KeyValueStore, StorageError};
