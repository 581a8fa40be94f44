//! The dispatch loop: compose, dedupe, preview, send, log

pub mod reviewer;
pub mod runner;

pub use reviewer::{ReviewDecision, Reviewer, StdinReviewer};
pub use runner::{DispatchLoop, RunReport};
