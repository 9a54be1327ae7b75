//! `blockwatch-core` -- domain types, the alert gate and the field
//! extractor.
//!
//! Everything in this crate is pure: no I/O, no external state, nothing
//! that can fail on malformed input.

pub mod alert;
pub mod extract;
pub mod types;
