//! Dataset loading layer.

pub mod reviews;
