//! Application core: pure screen logic, zero I/O.
//!
//! The converter view model and the screen lifecycle live here.  All
//! interaction with widgets, logs and config files happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without a terminal.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
