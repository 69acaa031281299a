//! Common utility functions.
//!
//! Pure helpers only - no side effects, no I/O.

pub mod string;

pub use string::{none_if_blank, StrExt};
