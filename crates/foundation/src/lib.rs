pub mod bounds;
pub mod color;
pub mod dms;
pub mod math;

// Foundation crate: small, well-tested primitives only.
pub use bounds::*;
pub use color::*;
pub use dms::{DecodeError, decode as decode_dms};
