//! # CUtil - Common Utilities Library
//!
//! Small helpers shared by the application crates.
//!
//! ## Features
//!
//! - `fs`: executable directory lookup
//! - `time`: local time formatting

#[cfg(feature = "fs")]
pub mod fs;

#[cfg(feature = "time")]
pub mod time;
