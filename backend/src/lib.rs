//! # SkyWay Cart Backend
//!
//! Contains all non-UI logic for the SkyWay Travels shopping cart.
//!
//! This crate brings together:
//! - **Domain**: the cart store, totals, discounts, checkout and contact rules
//! - **Storage**: key-value persistence of the cart and the active discount
//! - **IO**: the session that sequences mutate → persist → render, the action
//!   dispatch table, and the projection contract used by user interfaces
//!
//! The backend is UI-agnostic: the Yew frontend, a terminal renderer or a test
//! harness all drive the same [`CartSession`] through the same [`Dispatcher`].
//!
//! ## Architecture
//! ```text
//! UI Layer (Yew frontend, TextRenderer)
//!     ↓
//! IO Layer (Dispatcher, CartSession, mappers)
//!     ↓
//! Domain Layer (CartStore, totals, discounts, contact)
//!     ↓
//! Storage Layer (CartRepository over a KeyValueStore)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

pub use config::CartConfig;
pub use io::{Action, ActionId, ActionOutcome, CartRenderer, CartSession, Dispatcher, TextRenderer};
pub use storage::{CartRepository, FileStore, KeyValueStore, MemoryStore};
