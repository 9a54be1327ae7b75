//! Row models for the `alerts` table.

pub mod alert;

pub use alert::AlertRow;
