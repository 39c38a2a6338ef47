//! # IO Module
//!
//! The surface user interfaces talk to.
//!
//! - **session**: `CartSession`, which sequences mutate → persist → render
//! - **dispatcher**: the action identifier → handler table
//! - **render**: the `CartRenderer` projection contract and a text renderer
//! - **mappers**: domain state → `shared` view DTOs

pub mod dispatcher;
pub mod mappers;
pub mod render;
pub mod session;

pub use dispatcher::{Action, ActionId, DispatchError, Dispatcher, Handler, Payload};
pub use render::{CartRenderer, TextRenderer};
pub use session::{ActionOutcome, CartSession};
