//! The interactive operator console: command parsing, per-view session
//! state, dataset sources, and plain-text rendering over the engines in
//! `gavel-core`.
#![warn(unreachable_pub)]

pub mod command;
pub mod error;
pub mod render;
pub mod session;
pub mod source;
