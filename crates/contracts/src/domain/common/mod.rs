//! Shared building blocks for the setup entities.

pub mod validation;

pub use validation::{digits_only, require_digits, require_text};
