//! RSVP Validation Core
//!
//! Pure Rust validation functions compatible with both std and no_std
//! environments. Used by the WASM form controller and testable natively.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod email;
pub mod rules;
pub mod string;

// Re-export all validators
pub use email::*;
pub use rules::*;
pub use string::*;
