//! Resource resolution layer
//!
//! Turns caller-supplied descriptors into resolved JSON definitions.
//!
//! # Architecture
//!
//! - [`source`] - classifies descriptors without touching the network
//! - [`loader`] - reads local files or fetches remote resources, one GET max

pub mod loader;
pub mod source;

pub use loader::load;
pub use source::{classify, Descriptor, Source};
