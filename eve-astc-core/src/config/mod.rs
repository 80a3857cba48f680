//! Configuration types
//!
//! Runtime settings for the gallery and the per-panel touch calibration
//! tables, selected when the viewer is created.

pub mod profile;
pub mod types;

pub use profile::*;
pub use types::*;
