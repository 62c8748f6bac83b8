//! Shared building blocks used by every stage.

pub(crate) mod error;
