//! Shared helpers.

pub mod hash;
pub mod plural;
