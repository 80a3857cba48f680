//! Board-agnostic gallery logic for BT81x display engines
//!
//! This crate contains everything that decides *what* the engine does,
//! independent of how commands reach it:
//!
//! - Flash image catalog, generated from `flash.map` at build time
//! - Touch-debounced image selection and flash-to-RAM_G load requests
//! - Frame rendering as atomic display-list batches
//! - Display profiles with recorded touch calibration
//! - The `Viewer` tying these to one engine for a tick-driven scheduler

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod render;
pub mod selection;
pub mod viewer;

#[cfg(test)]
mod mock;

pub use catalog::{AstcBlock, Catalog, CatalogError, ImageDescriptor, CATALOG};
pub use config::{DisplayProfile, ViewerConfig};
pub use render::{Activation, FrameRenderer};
pub use selection::{LoadRequest, SelectionState};
pub use viewer::{Mode, Viewer, ViewerError};
