//! Runtime orchestration for the tile-world dialogue engine.
//!
//! This crate owns the session loop: it builds the world and content into a
//! [`Session`], consumes per-frame input snapshots, and exposes the
//! read-only queries presentation draws from. Everything runs on the
//! caller's thread — the engine has no background work, so rendering is just
//! a read of the session between ticks.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session state and frame loop
//! - [`input`] defines the per-frame input snapshot and edge detection
//! - [`error`] carries the startup-fatal error type

pub mod error;
pub mod input;
pub mod session;

pub use error::SessionError;
pub use input::{Buttons, InputFrame, InputTracker};
pub use session::{Session, SessionOptions};
