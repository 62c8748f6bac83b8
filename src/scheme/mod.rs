//! The canonical scheme every conversion passes through.

pub(crate) mod model;
