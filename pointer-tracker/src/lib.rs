//! Displays the live pointer position and the last clicked element, rendered straight to the DOM.
//!
//! The interesting part is [`listener::EventListener`], which ties a native event subscription to
//! the lifetime of its owner whilst letting the handler be swapped out freely. Everything outside
//! of [`web`] is platform independent, and tested natively against an in-memory target.

pub mod config;
pub mod error;
pub mod listener;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

pub use config::DemoConfig;
pub use error::{Error, Result};
pub use listener::{EventListener, ListenerOptions, ListenerTarget};
pub use view::{PointerPosition, View, ViewEvents, ViewState};
