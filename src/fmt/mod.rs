//! Rendering for registered targets: the line template and `{key}` interpolation.

pub mod interpolate;
mod line;

pub use interpolate::interpolate;
pub use line::{DEFAULT_FORMAT, DEFAULT_TIMESTAMP_FORMAT, LineFormatter, Placeholder, Segment};
