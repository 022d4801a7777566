//! Signup Validation Predicates
//!
//! Pure field predicates compatible with both std and no_std environments.
//! Every predicate is total: absent values arrive as empty strings and simply fail.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod collection;
pub mod email;
pub mod string;

// Re-export all predicates
pub use collection::*;
pub use email::*;
pub use string::*;
