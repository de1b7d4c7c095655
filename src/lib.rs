//! Reactive Celsius → Fahrenheit converter screen.
//!
//! Exposes the pure-logic modules for integration testing and embedding.
//! The terminal binary in `main.rs` is one host; anything that can
//! implement [`app::ports::DisplayPort`] can be another.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod convert;
pub mod error;
pub mod reactive;

pub use convert::convert;
pub use error::{Error, Result};
