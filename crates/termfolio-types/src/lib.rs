//! Foundation types for termfolio.
//!
//! This crate contains the pieces shared by every termfolio crate: the error
//! enum, platform-agnostic key events, the terminal configuration, and the
//! clock service used for timestamps.

pub mod clock;
pub mod config;
pub mod error;
pub mod input;
