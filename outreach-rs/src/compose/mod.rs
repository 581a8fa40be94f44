//! Per-row message composition

pub mod composer;
pub mod types;

pub use composer::{compose, Composer};
pub use types::{dedupe_key, recipient_address, ComposedMessage};
