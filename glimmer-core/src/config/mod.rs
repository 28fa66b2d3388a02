//! Display configuration
//!
//! Board-agnostic settings for the animation driver. Configuration can be
//! persisted as postcard-serialized binary data (`serde` feature).

mod types;

pub use types::*;
